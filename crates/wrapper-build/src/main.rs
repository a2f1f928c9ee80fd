//! `build-wrapper` - bundles the Playwright wrapper.
//!
//! Takes no flags and reads no environment variables. Run it from the
//! repository root; it exits with status 1 if the build fails.

use miette::Result;
use wrapper_build::{BuildConfig, init_logging, run_build};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BuildConfig::wrapper();
    init_logging(config.log_level);

    let root = std::env::current_dir().map_err(wrapper_build::Error::from)?;
    run_build(&config, &root).await?;

    Ok(())
}
