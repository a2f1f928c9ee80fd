//! Wrapper build - bundles the Playwright wrapper for the Browser library.
//!
//! The whole build is one Rolldown pass over a fixed configuration:
//! `./node/playwright-wrapper/index.ts` is bundled for Node.js into
//! `./Browser/wrapper/index.js`, with `electron` left as a runtime `require`,
//! function and class names preserved, and no minification.
//!
//! # Architecture
//!
//! - [`config`] - The build configuration record and its fixed wrapper instance
//! - [`minify`] - Independent minification toggles
//! - [`invoker`] - Rolldown option mapping and the single build pass
//! - [`writer`] - Atomic output file writing
//! - [`diagnostics`] - Readable diagnostics from Rolldown errors
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - The crate error type
//!
//! # Example
//!
//! ```rust,no_run
//! use wrapper_build::{BuildConfig, run_build};
//!
//! # async fn example() -> wrapper_build::Result<()> {
//! let root = std::env::current_dir()?;
//! let report = run_build(&BuildConfig::wrapper(), &root).await?;
//! println!("wrote {}", report.outfile.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod minify;
pub mod report;
pub mod writer;

pub use config::{BuildConfig, Platform};
pub use error::{Error, Result};
pub use invoker::{run_build, to_bundler_options};
pub use logging::{LogLevel, init_logging};
pub use minify::MinifyOptions;
pub use report::BuildReport;
