//! Minification toggles.
//!
//! The build exposes the same three independent switches esbuild does:
//! identifier mangling, syntax shortening and whitespace removal. The wrapper
//! bundle keeps all three off.

use serde::Serialize;

/// Independent minification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    /// Rename local identifiers to shorter names.
    pub identifiers: bool,
    /// Syntax-level rewrites (constant folding, shorter forms).
    pub syntax: bool,
    /// Whole-file minification: strip whitespace and comments.
    pub whitespace: bool,
}

impl MinifyOptions {
    /// All minification disabled.
    pub const fn disabled() -> Self {
        Self {
            identifiers: false,
            syntax: false,
            whitespace: false,
        }
    }

    /// Returns true if any minification is enabled.
    pub fn is_enabled(&self) -> bool {
        self.identifiers || self.syntax || self.whitespace
    }

    /// Convert to Rolldown's minification options.
    ///
    /// Note: Rolldown only exposes boolean minification, so any enabled
    /// toggle turns on full minification.
    pub(crate) fn to_rolldown_options(self) -> Option<rolldown::RawMinifyOptions> {
        if self.is_enabled() {
            Some(rolldown::RawMinifyOptions::from(true))
        } else {
            None
        }
    }
}

impl std::fmt::Display for MinifyOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_enabled() {
            return write!(f, "none");
        }
        let enabled: Vec<&str> = [
            (self.identifiers, "identifiers"),
            (self.syntax, "syntax"),
            (self.whitespace, "whitespace"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        write!(f, "{}", enabled.join("+"))
    }
}
