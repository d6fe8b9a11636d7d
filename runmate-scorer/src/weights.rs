//! Relative weighting of the compatibility signals.

use runmate_core::{MatchError, ScoreBreakdown};

/// Largest tolerated distance between the weight total and `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Multipliers applied to each signal when combining them into one score.
///
/// The defaults weight pace, schedule, and location and leave goal out of the
/// total. A positive `goal` weight folds goal compatibility in; the remaining
/// weights must then be reduced so the total stays at `1.0`.
///
/// # Examples
/// ```
/// use runmate_scorer::MatchWeights;
///
/// let weights = MatchWeights {
///     pace: 0.25,
///     schedule: 0.3,
///     location: 0.3,
///     goal: 0.15,
/// };
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MatchWeights {
    /// Weight of the pace band signal.
    pub pace: f64,
    /// Weight of the schedule signal.
    pub schedule: f64,
    /// Weight of the location signal.
    pub location: f64,
    /// Weight of the goal signal.
    pub goal: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            pace: 0.30,
            schedule: 0.35,
            location: 0.35,
            goal: 0.0,
        }
    }
}

impl MatchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidWeights`] when any weight is negative or
    /// not finite, or when the weights do not sum to `1.0`.
    pub fn validate(self) -> Result<Self, MatchError> {
        if self.has_usable_values() && self.sums_to_one() {
            Ok(self)
        } else {
            Err(MatchError::InvalidWeights)
        }
    }

    const fn values(self) -> [f64; 4] {
        [self.pace, self.schedule, self.location, self.goal]
    }

    fn has_usable_values(self) -> bool {
        self.values()
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation compares the weight total against one"
    )]
    fn sums_to_one(self) -> bool {
        let total: f64 = self.values().iter().sum();
        (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Weighted sum of the breakdown's signals, ignoring its `total`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "combining signals requires a weighted sum"
    )]
    pub fn combine(self, signals: &ScoreBreakdown) -> f64 {
        self.pace * signals.pace
            + self.schedule * signals.schedule
            + self.location * signals.location
            + self.goal * signals.goal
    }
}
