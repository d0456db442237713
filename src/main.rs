//! toolbox - Main entry point
//!
//! Parses flags, initializes logging and runs the installer pipeline.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use toolbox::cli::Cli;
use toolbox::command_runner::SystemShell;
use toolbox::config::RunConfig;
use toolbox::installer::{Installer, RunOutcome};
use toolbox::prompt::DialoguerPrompt;

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    info!("toolbox starting up");

    let config = RunConfig::from(&cli);
    debug!("Run configuration: {:?}", config);

    let outcome = Installer::new(config).run(&mut DialoguerPrompt, &mut SystemShell)?;

    match outcome {
        RunOutcome::NoCommands { selected } => {
            info!("No commands for {} selected package(s)", selected);
            std::process::exit(1);
        }
        RunOutcome::Completed {
            report: Some(report),
            ..
        } => {
            // Failed installs are reported per command but do not change the exit code
            info!(
                "Install finished: {} succeeded, {} failed",
                report.succeeded(),
                report.failed()
            );
        }
        RunOutcome::Completed { report: None, .. } | RunOutcome::Listed => {}
    }

    Ok(())
}
