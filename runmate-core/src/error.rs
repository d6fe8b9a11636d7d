//! Error types raised while validating profiles and ranking matches.

use thiserror::Error;

use crate::ProfileId;

/// Reasons a runner profile cannot take part in scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The pace band's lower bound exceeds its upper bound.
    #[error("pace band minimum {min} exceeds maximum {max}")]
    InvertedPaceBand {
        /// Fastest comfortable pace in minutes per mile.
        min: f64,
        /// Slowest comfortable pace in minutes per mile.
        max: f64,
    },
    /// A pace bound was zero, negative, or not finite.
    #[error("pace bounds must be finite and positive, got {min}..={max}")]
    InvalidPace {
        /// Fastest comfortable pace in minutes per mile.
        min: f64,
        /// Slowest comfortable pace in minutes per mile.
        max: f64,
    },
    /// The search radius was zero, negative, or not finite.
    #[error("search radius must be a positive number of miles, got {radius}")]
    NonPositiveRadius {
        /// Radius supplied by the caller.
        radius: f64,
    },
    /// An identifier was empty or whitespace.
    #[error("{field} must not be blank")]
    BlankIdentifier {
        /// Name of the identifier field.
        field: &'static str,
    },
}

/// Errors returned by the compatibility scorer and the ranker.
///
/// Every variant is a deterministic caller error; none is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A profile failed validation before scoring.
    #[error("profile {profile} is invalid: {source}")]
    InvalidProfile {
        /// Identifier of the offending profile.
        profile: ProfileId,
        /// Validation failure.
        #[source]
        source: ProfileError,
    },
    /// The reference profile has not been completed yet.
    #[error("profile {profile} is not complete and cannot request matches")]
    ProfileIncomplete {
        /// Identifier of the incomplete reference profile.
        profile: ProfileId,
    },
    /// Signal weights were negative, non-finite, or did not sum to one.
    #[error("match weights must be finite, non-negative and sum to 1.0")]
    InvalidWeights,
    /// The ranking policy cannot produce results.
    #[error("invalid ranking policy: {reason}")]
    InvalidPolicy {
        /// Description of the violated constraint.
        reason: &'static str,
    },
}
