//! cache-buster CLI entry point.
//!
//! This is the `bust-cache` executable: parse the command line, run the
//! invalidation sequence, and render any failure through the user-friendly
//! error path before exiting non-zero.

use anyhow::Result;
use cache_buster::cli::Cli;
use cache_buster::core::user_friendly_error;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG-controlled diagnostics; user-facing output goes through the CLI
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
