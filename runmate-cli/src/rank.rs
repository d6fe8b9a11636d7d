//! Rank command implementation for the RunMate CLI.

use std::{
    collections::HashSet,
    io::{BufReader, Write},
};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use runmate_core::{MatchCandidate, ProfileId, RunnerProfile};
use runmate_scorer::{CompatibilityScorer, MatchWeights, RankPolicy, Ranker};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RANK_GOAL_WEIGHT, ARG_RANK_LIMIT, ARG_RANK_LOCATION_WEIGHT, ARG_RANK_MIN_SCORE,
    ARG_RANK_PACE_WEIGHT, ARG_RANK_REQUEST, ARG_RANK_SCHEDULE_WEIGHT, CliError, ENV_RANK_REQUEST,
    fs::{file_is_file, open_utf8_file},
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the candidates in a JSON request file for its \
                 reference runner. The file holds `reference`, \
                 `candidates`, and `connected` (ids the reference already \
                 matched with). Weights not given keep their defaults and \
                 must still sum to 1.",
    about = "Rank compatible runners"
)]
#[ortho_config(prefix = "RUNMATE")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing a rank request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Maximum number of candidates to print.
    #[arg(long = ARG_RANK_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Drop candidates scoring below this value.
    #[arg(long = ARG_RANK_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<f64>,
    /// Weight of pace compatibility.
    #[arg(long = ARG_RANK_PACE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) pace_weight: Option<f64>,
    /// Weight of schedule compatibility.
    #[arg(long = ARG_RANK_SCHEDULE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) schedule_weight: Option<f64>,
    /// Weight of location compatibility.
    #[arg(long = ARG_RANK_LOCATION_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) location_weight: Option<f64>,
    /// Weight of goal compatibility.
    #[arg(long = ARG_RANK_GOAL_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) goal_weight: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Limits applied to the ranking.
    pub(crate) policy: RankPolicy,
    /// Signal weights for the compatibility scorer.
    pub(crate) weights: MatchWeights,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        let field = ARG_RANK_REQUEST;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;

        let defaults = RankPolicy::default();
        let policy = RankPolicy {
            limit: args.limit.unwrap_or(defaults.limit),
            min_score: args.min_score.unwrap_or(defaults.min_score),
        };

        let base = MatchWeights::default();
        let weights = MatchWeights {
            pace: args.pace_weight.unwrap_or(base.pace),
            schedule: args.schedule_weight.unwrap_or(base.schedule),
            location: args.location_weight.unwrap_or(base.location),
            goal: args.goal_weight.unwrap_or(base.goal),
        };

        Ok(Self {
            request_path,
            policy,
            weights,
        })
    }
}

/// Input document for the `rank` command.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct RankRequest {
    /// Runner asking for matches.
    pub(crate) reference: RunnerProfile,
    /// Pool to rank.
    #[serde(default)]
    pub(crate) candidates: Vec<RunnerProfile>,
    /// Candidate ids the reference already has a match record with.
    #[serde(default)]
    pub(crate) connected: HashSet<ProfileId>,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let ranked = execute_rank(args)?;
    write_ranking(writer, &ranked)
}

fn execute_rank(args: RankArgs) -> Result<Vec<MatchCandidate>, CliError> {
    let config = resolve_rank_config(args)?;
    let request = load_rank_request(&config.request_path)?;
    debug!(
        "ranking {} candidates from {}",
        request.candidates.len(),
        config.request_path
    );
    let scorer = CompatibilityScorer::new(config.weights)?;
    let ranker = Ranker::new(scorer, config.policy)?;
    let ranked = ranker.rank(&request.reference, &request.candidates, &request.connected)?;
    Ok(ranked)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`RankRequest`] from disk.
pub(super) fn load_rank_request(path: &Utf8Path) -> Result<RankRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRankRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRankRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranking(writer: &mut dyn Write, ranked: &[MatchCandidate]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseRanking)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRankOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteRankOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
