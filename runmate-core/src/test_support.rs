//! Test-only profile factories and a scripted `Scorer` used by unit,
//! behaviour, and property tests across the workspace.

use std::collections::HashMap;

use geo::Coord;

use crate::{
    Goal, Location, MatchError, PaceBand, ProfileId, RunnerProfile, ScoreBreakdown, Scorer,
    TimeSlot, UserId, Weekday, WeeklySchedule,
};

/// Boston Common, the default home base of generated profiles.
pub const BOSTON_COMMON: Coord<f64> = Coord {
    x: -71.0640,
    y: 42.3555,
};

/// Build a complete profile owned by `u-<id>`.
///
/// The profile runs 8:00-9:00 per mile, is based at [`BOSTON_COMMON`],
/// travels up to five miles, runs Monday and Wednesday mornings, and trains
/// for a 10K. Blank ids are replaced with `"anonymous"`.
#[must_use]
pub fn complete_profile(id: &str) -> RunnerProfile {
    let name = if id.trim().is_empty() { "anonymous" } else { id };
    RunnerProfile {
        id: ProfileId::from_trusted(name.to_owned()),
        owner_id: UserId::from_trusted(format!("u-{name}")),
        display_name: Some(name.to_owned()),
        pace: PaceBand { min: 8.0, max: 9.0 },
        location: Location::at(BOSTON_COMMON).with_city("Boston, MA"),
        radius_miles: 5.0,
        schedule: WeeklySchedule::new()
            .with_slot(Weekday::Monday, TimeSlot::Morning)
            .with_slot(Weekday::Wednesday, TimeSlot::Morning),
        goal: Some(Goal::TenK),
        is_complete: true,
    }
}

/// Generate `count` complete profiles with ids `c-000`, `c-001`, ...
///
/// Pace bands drift slower by six seconds per mile per profile, so the
/// first ten candidates score in falling order against [`complete_profile`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "fixture pace offsets are small multiples of the index"
)]
pub fn candidate_pool(count: usize) -> Vec<RunnerProfile> {
    (0..count)
        .map(|index| {
            let mut profile = complete_profile(&format!("c-{index:03}"));
            let offset = index as f64 * 0.1;
            profile.pace = PaceBand {
                min: 8.0 + offset,
                max: 9.0 + offset,
            };
            profile
        })
        .collect()
}

/// Wrap a string as a [`ProfileId`], replacing blanks with `"anonymous"`.
#[must_use]
pub fn profile_id(raw: &str) -> ProfileId {
    let value = if raw.trim().is_empty() { "anonymous" } else { raw };
    ProfileId::from_trusted(value.to_owned())
}

/// `Scorer` returning scripted totals keyed by candidate id.
///
/// Candidates without a scripted total score `default_total`. Profiles are
/// still validated so error paths can be exercised.
#[derive(Debug, Clone, Default)]
pub struct ScriptedScorer {
    totals: HashMap<ProfileId, f64>,
    default_total: f64,
}

impl ScriptedScorer {
    /// Construct a scorer that returns `default_total` for everyone.
    #[must_use]
    pub fn new(default_total: f64) -> Self {
        Self {
            totals: HashMap::new(),
            default_total,
        }
    }

    /// Script the total for one candidate while returning `self`.
    #[must_use]
    pub fn with_total(mut self, candidate: &str, total: f64) -> Self {
        self.totals.insert(profile_id(candidate), total);
        self
    }
}

impl Scorer for ScriptedScorer {
    fn score(
        &self,
        reference: &RunnerProfile,
        candidate: &RunnerProfile,
    ) -> Result<ScoreBreakdown, MatchError> {
        for profile in [reference, candidate] {
            profile
                .validate()
                .map_err(|source| MatchError::InvalidProfile {
                    profile: profile.id.clone(),
                    source,
                })?;
        }
        let total = self
            .totals
            .get(&candidate.id)
            .copied()
            .unwrap_or(self.default_total);
        Ok(ScoreBreakdown {
            total: Self::sanitise(total),
            ..ScoreBreakdown::default()
        })
    }
}
