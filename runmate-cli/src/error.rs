//! Error types emitted by the RunMate CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use runmate_core::MatchError;
use thiserror::Error;

/// Errors emitted by the RunMate CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required positional path is missing after configuration merging.
    #[error("missing {field} path (pass the {field} path or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the rank request file failed.
    #[error("failed to open rank request at {path:?}: {source}")]
    OpenRankRequest {
        /// Requested file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Rank request JSON could not be decoded.
    #[error("failed to parse rank request JSON at {path:?}: {source}")]
    ParseRankRequest {
        /// Requested file.
        path: Utf8PathBuf,
        /// Decoding error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The scorer or ranker rejected the configuration or the profiles.
    #[error("ranking failed: {0}")]
    Match(#[from] MatchError),
    /// Serialising the ranking failed.
    #[error("failed to serialise ranking: {0}")]
    SerialiseRanking(#[source] serde_json::Error),
    /// Writing the ranking output failed.
    #[error("failed to write ranking output: {0}")]
    WriteRankOutput(#[source] std::io::Error),
}
