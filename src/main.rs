//! Entry point: parse CLI, set up logging and run the export.

use std::process::ExitCode;

use clap::Parser;
use clublog_league::{
    cli::ClubLog,
    commands::league::{handle_league, LeagueParams},
    telemetry::{get_subscriber, init_subscriber},
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let app = ClubLog::parse();

    let subscriber = get_subscriber("info", std::io::stderr);
    if let Err(e) = init_subscriber(subscriber) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(?app, "parsed arguments");

    match handle_league(LeagueParams::from(app)).await {
        Ok(rows) => {
            tracing::info!(rows, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, remote = e.is_remote(), "league export failed");
            if e.is_remote() {
                eprintln!("Error: could not download the league: {}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
