//! Command-line interface for cache-buster.
//!
//! A single command, no subcommands: given an application name, fetch the
//! remote frontend and release configuration, compile the ECCU invalidation
//! document, and submit it to Akamai.
//!
//! ```bash
//! # invalidate with credentials from ~/.edgerc
//! bust-cache insights
//!
//! # invalidate with an alternate credential file
//! bust-cache insights /etc/akamai/edgerc
//! ```
//!
//! An application that has no `frontend.paths` entry in the remote config is
//! not an error; the release-level asset and chrome-config paths are still
//! invalidated for it.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{info, warn};

use crate::client::AkamaiClient;
use crate::config::EdgeRc;
use crate::constants::{
    DEFAULT_EDGERC_PATH, ECCU_API_PATH, FRONTEND_CONFIG_URL, RELEASES_CONFIG_URL,
};
use crate::eccu::InvalidationRequest;
use crate::remote::{fetch_frontend_paths, fetch_releases};

/// Main CLI structure for cache-buster.
///
/// Both arguments are positional; deploy pipelines call this tool with a
/// bare application name and, occasionally, a credential file override.
#[derive(Parser)]
#[command(
    name = "bust-cache",
    about = "Invalidate Akamai-cached frontend assets after a deployment",
    version,
    long_about = "Compiles an application's deployed asset paths into an ECCU invalidation \
                  request and submits it to Akamai over an EdgeGrid-authenticated session."
)]
pub struct Cli {
    /// Application name as it appears in the frontend config document
    #[arg(value_name = "APP_NAME")]
    app_name: String,

    /// Path to the Akamai credential file
    #[arg(value_name = "EDGERC", default_value = DEFAULT_EDGERC_PATH)]
    edgerc: String,
}

impl Cli {
    /// Run the full invalidation sequence.
    ///
    /// Resolve credentials, build the shared session, fetch both remote
    /// documents, compile the request, submit. Everything except a missing
    /// application path list is fatal.
    pub async fn execute(self) -> Result<()> {
        let edgerc = EdgeRc::load(&self.edgerc)?;
        let client = AkamaiClient::new(&edgerc)?;
        info!(host = %edgerc.host, app = %self.app_name, "starting cache invalidation");

        let html_paths = match fetch_frontend_paths(&client, FRONTEND_CONFIG_URL, &self.app_name)
            .await?
        {
            Some(paths) => paths,
            None => {
                warn!(app = %self.app_name, "application has no frontend paths in the remote config");
                println!(
                    "{} app '{}' has no frontend paths; if that's expected, ignore this",
                    "⚠".yellow(),
                    self.app_name
                );
                Vec::new()
            }
        };

        let releases = fetch_releases(&client, RELEASES_CONFIG_URL).await?;
        let request = InvalidationRequest::new(&self.app_name, &html_paths, &releases);

        client.post_json(ECCU_API_PATH, &request).await?;
        info!("invalidation request delivered");
        println!("{} {}", "✓".green(), request.request_name());

        Ok(())
    }
}
