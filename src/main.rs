//! Institute Site - Application entry point
//!
//! Parses the CLI, sets up logging, loads settings and runs the command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use institute_site::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging comes first so settings warnings are visible
    init_tracing(cli.verbose || debug_requested());

    let settings = Settings::load(cli.env_file.as_deref());
    tracing::debug!(?settings, "Settings loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, settings).await,
        Commands::Config => commands::config::execute(settings).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

/// `DEBUG=true` in the process environment also raises the log level.
fn debug_requested() -> bool {
    std::env::var("DEBUG")
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(filter)
        .init();
}
