//! The build invoker.
//!
//! Translates a [`BuildConfig`] into Rolldown options, runs exactly one
//! bundling pass in memory and writes the resulting entry chunk to the
//! configured output file. Any failure is returned as an [`Error`]; there is
//! no retry and no partial output.

use std::path::Path;
use std::time::Instant;

use rolldown::{
    BundlerBuilder, BundlerOptions, InputItem, IsExternal, OutputFormat, ResolveOptions,
};
use rolldown_common::{Output, OutputChunk};
use tracing::{debug, info, warn};

use crate::config::{BuildConfig, Platform};
use crate::diagnostics;
use crate::error::{Error, Result};
use crate::report::BuildReport;
use crate::writer;

/// Source extensions tried when an import omits one.
const RESOLVE_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".mts", ".cts", ".js", ".mjs", ".cjs", ".json",
];

/// Build Rolldown options for `config`, rooted at `root`.
///
/// The output is always a single CommonJS chunk: dynamic imports are inlined
/// and no source map is emitted.
pub fn to_bundler_options(config: &BuildConfig, root: &Path) -> BundlerOptions {
    BundlerOptions {
        input: Some(vec![InputItem {
            name: None,
            import: config.entry.clone(),
        }]),
        cwd: Some(root.to_path_buf()),
        platform: Some(config.platform.to_rolldown()),
        format: Some(output_format(config.platform)),
        external: Some(IsExternal::from(config.external.clone())),
        keep_names: Some(config.keep_names),
        minify: config.minify.to_rolldown_options(),
        inline_dynamic_imports: Some(true),
        resolve: Some(configure_resolution(root, config.platform)),
        ..Default::default()
    }
}

/// Node consumes CommonJS; the other platforms get ES modules.
fn output_format(platform: Platform) -> OutputFormat {
    match platform {
        Platform::Node => OutputFormat::Cjs,
        Platform::Browser | Platform::Neutral => OutputFormat::Esm,
    }
}

/// Configure module resolution options.
fn configure_resolution(root: &Path, platform: Platform) -> ResolveOptions {
    let mut modules: Vec<String> = root
        .ancestors()
        .map(|dir| dir.join("node_modules").to_string_lossy().into_owned())
        .collect();
    modules.push("node_modules".to_string());

    ResolveOptions {
        main_fields: Some(
            platform
                .main_fields()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        condition_names: Some(
            platform
                .export_conditions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        extensions: Some(RESOLVE_EXTENSIONS.iter().map(|s| s.to_string()).collect()),
        modules: Some(modules),
        symlinks: Some(true),
        ..Default::default()
    }
}

/// Run one build of `config` with relative paths resolved against `root`.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, the entry point is
/// missing, the bundler reports errors, or the output cannot be written. In
/// every case the previous output file is left untouched.
pub async fn run_build(config: &BuildConfig, root: &Path) -> Result<BuildReport> {
    let start = Instant::now();

    config.validate()?;
    let outfile = writer::validate_output_path(root, Path::new(&config.outfile))?;
    let entry = config.resolve_entry(root);
    if !entry.is_file() {
        return Err(Error::EntryNotFound(entry));
    }

    debug!(
        config = %serde_json::to_string(config).unwrap_or_default(),
        "Build configuration"
    );
    info!("Bundling {} -> {}", config.entry, config.outfile);
    info!(
        "Platform: {:?}, external: [{}], keep names: {}, minify: {}",
        config.platform,
        config.external.join(", "),
        config.keep_names,
        config.minify
    );

    let mut bundler = BundlerBuilder::default()
        .with_options(to_bundler_options(config, root))
        .build()
        .map_err(|e| Error::from_rolldown_batch(&e))?;

    let output = bundler
        .generate()
        .await
        .map_err(|e| Error::from_rolldown_batch(&e))?;

    for warning in &output.warnings {
        let diag = diagnostics::extract_single(&format!("{warning:?}"));
        warn!("{}: {}", diag.kind, diag.message);
    }

    let chunk = select_entry_chunk(&output.assets)?;
    writer::write_output(&outfile, chunk.code.as_bytes()).await?;

    let report = BuildReport {
        outfile,
        bytes: chunk.code.len() as u64,
        modules: chunk.module_ids.len(),
        warnings: output.warnings.len(),
        duration: start.elapsed(),
    };
    info!("Built {}", report);

    Ok(report)
}

/// Pick the single entry chunk out of the bundler output.
fn select_entry_chunk(assets: &[Output]) -> Result<&OutputChunk> {
    let chunks: Vec<&OutputChunk> = assets
        .iter()
        .filter_map(|item| match item {
            Output::Chunk(chunk) => Some(chunk.as_ref()),
            Output::Asset(_) => None,
        })
        .collect();

    match chunks.as_slice() {
        [chunk] if chunk.is_entry => Ok(*chunk),
        [chunk] => Err(Error::UnexpectedOutput(format!(
            "chunk '{}' is not an entry chunk",
            chunk.filename
        ))),
        [] => Err(Error::UnexpectedOutput("no chunk was emitted".to_string())),
        many => Err(Error::UnexpectedOutput(format!(
            "expected one chunk, got {}: {}",
            many.len(),
            many.iter()
                .map(|c| c.filename.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minify::MinifyOptions;

    #[test]
    fn test_wrapper_options() {
        let root = Path::new("/repo");
        let options = to_bundler_options(&BuildConfig::wrapper(), root);

        let input = options.input.expect("input");
        assert_eq!(input.len(), 1);
        assert_eq!(input[0].import, "./node/playwright-wrapper/index.ts");
        assert_eq!(options.cwd.as_deref(), Some(root));
        assert!(matches!(options.platform, Some(rolldown::Platform::Node)));
        assert!(matches!(options.format, Some(OutputFormat::Cjs)));
        assert_eq!(options.keep_names, Some(true));
        assert!(options.minify.is_none());
        assert_eq!(options.inline_dynamic_imports, Some(true));
        assert!(options.external.is_some());
    }

    #[test]
    fn test_minify_toggle_reaches_options() {
        let config = BuildConfig {
            minify: MinifyOptions {
                whitespace: true,
                ..MinifyOptions::disabled()
            },
            ..BuildConfig::wrapper()
        };
        let options = to_bundler_options(&config, Path::new("/repo"));
        assert!(options.minify.is_some());
    }

    #[test]
    fn test_browser_platform_uses_esm() {
        assert!(matches!(output_format(Platform::Browser), OutputFormat::Esm));
        assert!(matches!(output_format(Platform::Node), OutputFormat::Cjs));
    }

    #[test]
    fn test_resolution_walks_ancestors() {
        let resolve = configure_resolution(Path::new("/repo/sub"), Platform::Node);
        let modules = resolve.modules.expect("modules");
        assert_eq!(modules[0], "/repo/sub/node_modules");
        assert!(modules.contains(&"/repo/node_modules".to_string()));
        assert_eq!(modules.last().map(String::as_str), Some("node_modules"));

        let conditions = resolve.condition_names.expect("conditions");
        assert_eq!(conditions[0], "node");
        let extensions = resolve.extensions.expect("extensions");
        assert!(extensions.contains(&".ts".to_string()));
    }

    #[test]
    fn test_select_entry_chunk_empty() {
        let err = select_entry_chunk(&[]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedOutput(_)));
    }
}
