//! The weighted compatibility scorer.

use runmate_core::{MatchError, RunnerProfile, ScoreBreakdown, Scorer};

use crate::{
    MatchWeights,
    signals::{goal_score, location_score, pace_score, schedule_score},
};

/// Blend pace, schedule, location, and goal compatibility into one score.
///
/// Scoring is deterministic and side-effect free, so one scorer can be
/// shared across threads.
///
/// # Examples
/// ```
/// use runmate_core::test_support::complete_profile;
/// use runmate_scorer::CompatibilityScorer;
///
/// let scorer = CompatibilityScorer::default();
/// let score = scorer
///     .compatibility(&complete_profile("a"), &complete_profile("b"))
///     .expect("profiles are valid");
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    weights: MatchWeights,
}

impl CompatibilityScorer {
    /// Build a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidWeights`] when the weights fail
    /// [`MatchWeights::validate`].
    pub fn new(weights: MatchWeights) -> Result<Self, MatchError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in effect.
    #[must_use]
    pub const fn weights(&self) -> MatchWeights {
        self.weights
    }

    /// Compatibility of `candidate` with `reference` in `0.0..=1.0`.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidProfile`] when either profile fails
    /// validation.
    pub fn compatibility(
        &self,
        reference: &RunnerProfile,
        candidate: &RunnerProfile,
    ) -> Result<f64, MatchError> {
        self.score(reference, candidate)
            .map(|breakdown| breakdown.total)
    }
}

fn validated(profile: &RunnerProfile) -> Result<&RunnerProfile, MatchError> {
    profile
        .validate()
        .map_err(|source| MatchError::InvalidProfile {
            profile: profile.id.clone(),
            source,
        })?;
    Ok(profile)
}

impl Scorer for CompatibilityScorer {
    fn score(
        &self,
        reference: &RunnerProfile,
        candidate: &RunnerProfile,
    ) -> Result<ScoreBreakdown, MatchError> {
        let reference = validated(reference)?;
        let candidate = validated(candidate)?;

        let mut breakdown = ScoreBreakdown {
            pace: pace_score(&reference.pace, &candidate.pace),
            schedule: schedule_score(&reference.schedule, &candidate.schedule),
            location: location_score(
                &reference.location,
                reference.radius_miles,
                &candidate.location,
                candidate.radius_miles,
            ),
            goal: goal_score(reference.goal, candidate.goal),
            total: 0.0,
        };
        breakdown.total = Self::sanitise(self.weights.combine(&breakdown));
        Ok(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};
    use runmate_core::{
        Goal, Location, PaceBand, ProfileError, TimeSlot, Weekday, WeeklySchedule,
        test_support::complete_profile,
    };

    use crate::signals::{MIN_LOCATION_SCORE, NEUTRAL_SCHEDULE_SCORE, UNRELATED_GOAL_SCORE};

    const BOSTON: Coord<f64> = Coord {
        x: -71.0589,
        y: 42.3601,
    };
    const NEW_YORK: Coord<f64> = Coord {
        x: -74.0060,
        y: 40.7128,
    };

    #[fixture]
    fn scorer() -> CompatibilityScorer {
        CompatibilityScorer::default()
    }

    #[fixture]
    fn reference() -> RunnerProfile {
        let mut profile = complete_profile("p-sarah");
        profile.pace = PaceBand { min: 8.0, max: 9.0 };
        profile.radius_miles = 3.0;
        profile.location = Location::at(BOSTON);
        profile.schedule = WeeklySchedule::new()
            .with_slot(Weekday::Monday, TimeSlot::Morning)
            .with_slot(Weekday::Wednesday, TimeSlot::Morning);
        profile
    }

    #[rstest]
    fn identical_profiles_score_one(scorer: CompatibilityScorer, reference: RunnerProfile) {
        let mut twin = reference.clone();
        twin.id = runmate_core::test_support::profile_id("p-twin");
        let score = scorer
            .compatibility(&reference, &twin)
            .expect("valid profiles");
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn poor_match_keeps_floors(scorer: CompatibilityScorer, reference: RunnerProfile) {
        let mut candidate = complete_profile("p-far");
        candidate.pace = PaceBand {
            min: 11.0,
            max: 12.0,
        };
        candidate.location = Location::at(NEW_YORK);
        candidate.radius_miles = 3.0;
        candidate.schedule = WeeklySchedule::new().with_slot(Weekday::Friday, TimeSlot::Evening);

        let breakdown = scorer.score(&reference, &candidate).expect("valid profiles");
        assert!((breakdown.location - MIN_LOCATION_SCORE).abs() < 1e-9);
        assert!(breakdown.total > 0.0);
        assert!(breakdown.total < 0.1);
    }

    #[rstest]
    fn empty_schedule_is_neutral(scorer: CompatibilityScorer, reference: RunnerProfile) {
        let mut candidate = reference.clone();
        candidate.id = runmate_core::test_support::profile_id("p-free");
        candidate.schedule = WeeklySchedule::new();
        let breakdown = scorer.score(&reference, &candidate).expect("valid profiles");
        assert!((breakdown.schedule - NEUTRAL_SCHEDULE_SCORE).abs() < 1e-9);
    }

    #[rstest]
    fn goal_is_reported_but_unweighted_by_default(
        scorer: CompatibilityScorer,
        reference: RunnerProfile,
    ) {
        let candidate = reference.clone().with_goal(Goal::Trail);
        let reference = reference.with_goal(Goal::FiveK);
        let breakdown = scorer.score(&reference, &candidate).expect("valid profiles");
        assert!((breakdown.goal - UNRELATED_GOAL_SCORE).abs() < 1e-9);
        assert!((breakdown.total - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn goal_weight_folds_goal_in(reference: RunnerProfile) {
        let weighted = CompatibilityScorer::new(MatchWeights {
            pace: 0.25,
            schedule: 0.25,
            location: 0.25,
            goal: 0.25,
        })
        .expect("valid weights");
        let candidate = reference.clone().with_goal(Goal::Trail);
        let reference = reference.with_goal(Goal::FiveK);
        let score = weighted
            .compatibility(&reference, &candidate)
            .expect("valid profiles");
        assert!((score - 0.825).abs() < 1e-9);
    }

    #[rstest]
    fn rejects_invalid_weights() {
        let weights = MatchWeights {
            goal: 0.5,
            ..MatchWeights::default()
        };
        assert!(matches!(
            CompatibilityScorer::new(weights),
            Err(MatchError::InvalidWeights)
        ));
    }

    #[rstest]
    fn rejects_inverted_pace_band(scorer: CompatibilityScorer, reference: RunnerProfile) {
        let mut candidate = complete_profile("p-bad");
        candidate.pace = PaceBand { min: 9.5, max: 8.0 };
        let err = scorer
            .score(&reference, &candidate)
            .expect_err("inverted band must fail");
        assert_eq!(
            err,
            MatchError::InvalidProfile {
                profile: candidate.id.clone(),
                source: ProfileError::InvertedPaceBand { min: 9.5, max: 8.0 },
            }
        );
    }

    #[rstest]
    fn rejects_zero_radius_reference(scorer: CompatibilityScorer, reference: RunnerProfile) {
        let broken = RunnerProfile {
            radius_miles: 0.0,
            ..reference
        };
        let candidate = complete_profile("p-ok");
        assert!(matches!(
            scorer.score(&broken, &candidate),
            Err(MatchError::InvalidProfile { .. })
        ));
    }
}
