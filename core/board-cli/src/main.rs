//! pulseboard: operator CLI for the Pulseboard presence board.
//!
//! Works entirely from the feed snapshots on disk; the service that fetches
//! them from the backend is a separate concern.
//!
//! ## Subcommands
//!
//! - `board`: render the live board once
//! - `check`: validate feed snapshots and the board configuration
//! - `watch`: follow the realtime feed file and re-render on change

mod board;
mod check;
mod logging;
mod watch;

use clap::{Parser, Subcommand};
use presence_core::DataPaths;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(about = "Pulseboard presence board tools")]
#[command(version)]
struct Cli {
    /// Data directory holding config and feed snapshots (default: ~/.pulseboard)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the live board from the snapshots on disk
    Board,

    /// Validate feed snapshots and board configuration
    Check {
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Follow the realtime feed file and re-render on change
    Watch {
        /// Flush interval in seconds (default: the configured interval)
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Presence(#[from] presence_core::PresenceError),

    #[error("feed watcher stopped unexpectedly")]
    WatcherStopped,
}

fn main() {
    let cli = Cli::parse();
    let paths = match &cli.data_dir {
        Some(dir) => DataPaths::with_root(dir.clone()),
        None => DataPaths::default(),
    };
    let _logging_guard = logging::init(&paths);

    match cli.command {
        Commands::Board => board::run(&paths),
        Commands::Check { json } => match check::run(&paths, json) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                tracing::error!(error = %e, "pulseboard check failed");
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Watch { interval } => {
            if let Err(e) = watch::run(&paths, interval) {
                tracing::error!(error = %e, "pulseboard watch failed");
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
