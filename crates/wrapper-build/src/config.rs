//! Build configuration.
//!
//! [`BuildConfig::wrapper`] is the only configuration the binary ever uses.
//! The record is still a plain typed value so tests can point it at fixture
//! trees and so it can be dumped as JSON at debug level.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::minify::MinifyOptions;

/// Entry point of the Playwright wrapper, relative to the repository root.
pub const WRAPPER_ENTRY: &str = "./node/playwright-wrapper/index.ts";

/// Where the bundled wrapper is written, relative to the repository root.
pub const WRAPPER_OUTFILE: &str = "./Browser/wrapper/index.js";

/// Modules provided by the host runtime that must never be inlined.
pub const WRAPPER_EXTERNALS: &[&str] = &["electron"];

/// Target platform environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Browser,
    Node,
    Neutral,
}

impl Platform {
    pub(crate) fn to_rolldown(self) -> rolldown::Platform {
        match self {
            Platform::Browser => rolldown::Platform::Browser,
            Platform::Node => rolldown::Platform::Node,
            Platform::Neutral => rolldown::Platform::Neutral,
        }
    }

    /// Export conditions used when resolving package `exports` maps.
    pub fn export_conditions(self) -> &'static [&'static str] {
        match self {
            Platform::Node => &["node", "require", "import", "module", "default"],
            Platform::Browser => &["browser", "import", "module", "default"],
            Platform::Neutral => &["import", "module", "default"],
        }
    }

    /// `package.json` fields consulted for a package's entry, in order.
    ///
    /// Node prefers `main` so packages shipping both a CommonJS `main` and
    /// an ESM `module` resolve to the file Node itself would load.
    pub fn main_fields(self) -> &'static [&'static str] {
        match self {
            Platform::Browser => &["browser", "module", "main"],
            Platform::Node => &["main", "module"],
            Platform::Neutral => &["module", "main"],
        }
    }
}

/// The single build step's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Entry point path, relative to the project root.
    pub entry: String,

    /// Inline imported modules into the output. Must be true: a single
    /// outfile cannot hold an unbundled module tree.
    pub bundle: bool,

    pub platform: Platform,

    /// Output file path, relative to the project root.
    pub outfile: String,

    /// Module names left as runtime `require` calls.
    pub external: Vec<String>,

    /// Preserve function and class `.name` values.
    pub keep_names: bool,

    pub minify: MinifyOptions,

    pub log_level: LogLevel,
}

impl BuildConfig {
    /// The fixed configuration for bundling the Playwright wrapper.
    pub fn wrapper() -> Self {
        Self {
            entry: WRAPPER_ENTRY.to_string(),
            bundle: true,
            platform: Platform::Node,
            outfile: WRAPPER_OUTFILE.to_string(),
            external: WRAPPER_EXTERNALS.iter().map(|s| s.to_string()).collect(),
            keep_names: true,
            minify: MinifyOptions::disabled(),
            log_level: LogLevel::Info,
        }
    }

    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if !self.bundle {
            return Err(Error::invalid_config(
                "bundle",
                "a single output file requires bundling to be enabled",
            ));
        }

        if self.entry.trim().is_empty() {
            return Err(Error::invalid_config("entry", "must not be empty"));
        }

        if self.outfile.trim().is_empty() {
            return Err(Error::invalid_config("outfile", "must not be empty"));
        }

        if self.outfile.ends_with('/') || self.outfile.ends_with('\\') {
            return Err(Error::invalid_config(
                "outfile",
                format!("'{}' names a directory, not a file", self.outfile),
            ));
        }

        for (i, name) in self.external.iter().enumerate() {
            validate_external(name)?;
            if self.external[..i].contains(name) {
                return Err(Error::invalid_config(
                    "external",
                    format!("'{}' is listed more than once", name),
                ));
            }
        }

        Ok(())
    }

    /// Absolute, cleaned entry path under `root`.
    pub fn resolve_entry(&self, root: &Path) -> PathBuf {
        resolve_path(Path::new(&self.entry), root)
    }

    /// Absolute, cleaned output path under `root`.
    pub fn resolve_outfile(&self, root: &Path) -> PathBuf {
        resolve_path(Path::new(&self.outfile), root)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::wrapper()
    }
}

/// Validate an external module name.
///
/// Accepts bare package names (`electron`, `@scope/pkg`) and subpaths
/// (`electron/main`). Relative paths and names with whitespace are rejected.
pub fn validate_external(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_config(
            "external",
            "module names must not be empty",
        ));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(Error::invalid_config(
            "external",
            format!("'{}' contains whitespace", name),
        ));
    }

    if name.starts_with('.') || name.starts_with('/') {
        return Err(Error::invalid_config(
            "external",
            format!("'{}' is a path, expected a module name", name),
        ));
    }

    if let Some(scoped) = name.strip_prefix('@') {
        let mut parts = scoped.splitn(2, '/');
        let scope = parts.next().unwrap_or_default();
        let package = parts.next().unwrap_or_default();
        if scope.is_empty() || package.is_empty() {
            return Err(Error::invalid_config(
                "external",
                format!("'{}' is not a valid scoped package name", name),
            ));
        }
    }

    Ok(())
}

fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf().clean()
    } else {
        root.join(path).clean()
    }
}
