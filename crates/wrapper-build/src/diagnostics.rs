//! Diagnostic extraction from Rolldown errors.
//!
//! Rolldown reports failures as batches of build diagnostics whose concrete
//! types change between releases. We only rely on their `Debug` output and
//! classify each entry into a small, stable [`DiagnosticKind`].

use serde::Serialize;

/// A single bundler diagnostic, reduced to what the build reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDiagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Diagnostic kind (mirrors the Rolldown event kinds the wrapper build can hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    ParseError,
    UnresolvedEntry,
    UnresolvedImport,
    MissingExport,
    Other,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::ParseError => write!(f, "ParseError"),
            DiagnosticKind::UnresolvedEntry => write!(f, "UnresolvedEntry"),
            DiagnosticKind::UnresolvedImport => write!(f, "UnresolvedImport"),
            DiagnosticKind::MissingExport => write!(f, "MissingExport"),
            DiagnosticKind::Other => write!(f, "Error"),
        }
    }
}

/// Extract diagnostics from a Rolldown error value.
///
/// Batched errors are split into one diagnostic per `BuildDiagnostic` entry;
/// anything else becomes a single diagnostic.
pub fn extract_from_rolldown_error(error: &dyn std::fmt::Debug) -> Vec<ExtractedDiagnostic> {
    let error_str = format!("{error:?}");

    let parts: Vec<&str> = error_str
        .split("BuildDiagnostic {")
        .skip(1)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        return vec![extract_single(&error_str)];
    }

    parts.into_iter().map(extract_single).collect()
}

/// Classify one formatted diagnostic.
pub fn extract_single(error_str: &str) -> ExtractedDiagnostic {
    ExtractedDiagnostic {
        kind: classify(error_str),
        message: condense(error_str),
    }
}

/// Rolldown event kind names, checked before any free-text heuristics.
const KIND_NAMES: &[(&str, DiagnosticKind)] = &[
    ("UnresolvedEntry", DiagnosticKind::UnresolvedEntry),
    ("UnresolvedImport", DiagnosticKind::UnresolvedImport),
    ("MissingExport", DiagnosticKind::MissingExport),
    ("ParseError", DiagnosticKind::ParseError),
];

fn classify(error_str: &str) -> DiagnosticKind {
    if let Some((_, kind)) = KIND_NAMES
        .iter()
        .find(|(name, _)| error_str.contains(name))
    {
        return *kind;
    }

    if error_str.contains("Could not resolve") {
        DiagnosticKind::UnresolvedImport
    } else if error_str.contains("Unexpected token") || error_str.contains("Expected") {
        DiagnosticKind::ParseError
    } else {
        DiagnosticKind::Other
    }
}

/// Collapse runs of whitespace so multi-line debug output fits on one line.
fn condense(error_str: &str) -> String {
    error_str
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(['}', ',', ' ', ']'])
        .to_string()
}

/// Format a list of diagnostics for an error message.
pub fn format_diagnostics(diagnostics: &[ExtractedDiagnostic]) -> String {
    match diagnostics {
        [] => "Unknown bundler error".to_string(),
        [diag] => format!("{}: {}", diag.kind, diag.message),
        many => format!(
            "{} errors: {}",
            many.len(),
            many.iter()
                .map(|d| format!("{}: {}", d.kind, d.message))
                .collect::<Vec<_>>()
                .join("; ")
        ),
    }
}
