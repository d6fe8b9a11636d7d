//! Score how well a candidate runner suits a reference runner.
//!
//! The `Scorer` trait returns a per-signal [`ScoreBreakdown`] whose `total`
//! is the single compatibility score the ranker orders by.

use crate::{MatchError, RunnerProfile};

/// Per-signal sub-scores and their weighted total, all in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Pace band compatibility.
    pub pace: f64,
    /// Schedule compatibility.
    pub schedule: f64,
    /// Location compatibility.
    pub location: f64,
    /// Goal compatibility.
    pub goal: f64,
    /// Weighted combination of the signals above.
    pub total: f64,
}

/// Calculate the compatibility of a candidate with a reference profile.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single scorer
/// can serve concurrent ranking requests. Implementations must:
/// - Reject malformed profiles with [`MatchError::InvalidProfile`] before
///   doing any arithmetic.
/// - Treat missing optional data (coordinates, goal, schedule) as a fallback
///   case, never as an error.
/// - Produce finite totals within `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply the range guard.
///
/// # Examples
///
/// ```rust
/// use runmate_core::{MatchError, RunnerProfile, ScoreBreakdown, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(
///         &self,
///         _reference: &RunnerProfile,
///         _candidate: &RunnerProfile,
///     ) -> Result<ScoreBreakdown, MatchError> {
///         Ok(ScoreBreakdown { total: 0.5, ..ScoreBreakdown::default() })
///     }
/// }
///
/// assert_eq!(FlatScorer::sanitise(f64::NAN), 0.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `candidate` from the point of view of `reference`.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidProfile`] when either profile fails
    /// validation.
    fn score(
        &self,
        reference: &RunnerProfile,
        candidate: &RunnerProfile,
    ) -> Result<ScoreBreakdown, MatchError>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
