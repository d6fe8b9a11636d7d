//! Command-line interface for the RunMate matching engine.
//!
//! `runmate rank <request.json>` loads a reference runner, a candidate pool,
//! and the ids the reference already matched with, then prints the ranked
//! candidates as JSON. Ranking options layer defaults, configuration files,
//! `RUNMATE_` environment variables, and flags through `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_RANK_REQUEST: &str = "request";
pub(crate) const ARG_RANK_LIMIT: &str = "limit";
pub(crate) const ARG_RANK_MIN_SCORE: &str = "min-score";
pub(crate) const ARG_RANK_PACE_WEIGHT: &str = "pace-weight";
pub(crate) const ARG_RANK_SCHEDULE_WEIGHT: &str = "schedule-weight";
pub(crate) const ARG_RANK_LOCATION_WEIGHT: &str = "location-weight";
pub(crate) const ARG_RANK_GOAL_WEIGHT: &str = "goal-weight";
pub(crate) const ENV_RANK_REQUEST: &str = "RUNMATE_CMDS_RANK_REQUEST_PATH";

/// Run the RunMate CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, request
/// loading, ranking, or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "runmate",
    about = "Find compatible running partners with the RunMate engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate runners for a reference runner.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
