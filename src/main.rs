//! Folio - portfolio renderer and contact backend
//!
//! # Usage
//!
//! ```bash
//! # Run the contact API (PORT, EMAIL_USER, EMAIL_PASS, ... from the environment or .env)
//! folio serve
//!
//! # Render the page for a phone-sized viewport in dark mode
//! folio render --width 390 --theme dark --output index.html
//!
//! # Flip the saved appearance mode
//! folio theme toggle
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::cli::{CliResult, RenderArgs, ServeArgs, ThemeArgs};

/// Folio - portfolio renderer and contact backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Render the portfolio page to HTML
    Render(RenderArgs),
    /// Show or toggle the saved appearance mode
    Theme(ThemeArgs),
}

async fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => args.execute().await,
        Command::Render(args) => args.execute().await,
        Command::Theme(args) => args.execute(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so `render` can stream HTML to stdout
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
