//! Summary of a finished build.

use std::path::PathBuf;
use std::time::Duration;

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Absolute path of the written bundle.
    pub outfile: PathBuf,
    /// Size of the bundle in bytes.
    pub bytes: u64,
    /// Number of modules rendered into the bundle.
    pub modules: usize,
    /// Number of warnings the bundler reported.
    pub warnings: usize,
    pub duration: Duration,
}

impl std::fmt::Display for BuildReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} modules) in {}",
            self.outfile.display(),
            format_size(self.bytes),
            self.modules,
            format_duration(self.duration)
        )?;
        if self.warnings > 0 {
            write!(f, " with {} warning(s)", self.warnings)?;
        }
        Ok(())
    }
}

/// Format a bundle size: plain bytes below 1 KiB, otherwise KiB or MiB with
/// one decimal.
///
/// # Examples
///
/// ```
/// use wrapper_build::report::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * KIB;

    match bytes {
        0..KIB => format!("{bytes} B"),
        KIB..MIB => format!("{:.1} KB", bytes as f64 / KIB as f64),
        _ => format!("{:.1} MB", bytes as f64 / MIB as f64),
    }
}

/// Format duration as `ms` below a second, fractional seconds below a minute.
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_report_display() {
        let report = BuildReport {
            outfile: PathBuf::from("/repo/Browser/wrapper/index.js"),
            bytes: 2048,
            modules: 3,
            warnings: 0,
            duration: Duration::from_millis(12),
        };
        assert_eq!(
            report.to_string(),
            "/repo/Browser/wrapper/index.js (2.0 KB, 3 modules) in 12ms"
        );

        let warned = BuildReport {
            warnings: 2,
            ..report
        };
        assert!(warned.to_string().ends_with("with 2 warning(s)"));
    }
}
