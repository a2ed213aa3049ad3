//! Interviewer - terminal client for interview practice
//!
#![doc = "Main entry point for the Interviewer application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interviewer::cli::{Cli, Commands};
use interviewer::commands;
use interviewer::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Practice { .. } => {
            tracing::info!(
                "Starting practice session against {}",
                config.api.resolved_base_url()
            );
            tracing::debug!(
                "Interview defaults: topic={}, difficulty={}, questions={}",
                config.interview.topic,
                config.interview.difficulty,
                config.interview.question_count
            );
            commands::practice::run_practice(config).await?;
            Ok(())
        }
        Commands::Info { json } => {
            tracing::info!("Querying service info");
            commands::info::show_info(config, json).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so they never mix with rendered screens.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "interviewer=debug"
    } else {
        "interviewer=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
