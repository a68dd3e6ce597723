//! `serve` command: run the contact API.

use clap::Args;
use tracing::info;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::web;

/// Run the HTTP API (health check and contact relay)
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Applies command-line overrides on top of the layered configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }

    /// Execute the serve command
    pub async fn execute(&self) -> CliResult<()> {
        let mut config = Config::from_environment()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config);

        info!(
            "Starting portfolio backend (mail relay {}, CORS origin {})",
            config.mail.smtp_host,
            config.server.frontend_url.as_deref().unwrap_or("*")
        );

        web::run_server(config)
            .await
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}
