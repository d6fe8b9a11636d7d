//! Facade crate for the RunMate matching engine.
//!
//! This crate re-exports the runner profile model, the compatibility scorer,
//! and the ranker so callers depend on a single crate. Test fixtures are
//! available behind the `test-support` feature.

#![forbid(unsafe_code)]

pub use runmate_core::{
    EARTH_RADIUS_MILES, Goal, Location, MatchCandidate, MatchError, MatchQuality, PaceBand,
    ProfileError, ProfileId, RequiredField, RunnerProfile, ScoreBreakdown, Scorer, TimeSlot,
    UserId, Weekday, WeeklySchedule, haversine_miles, interval_overlap, jaccard, miles_from_km,
};
pub use runmate_scorer::{
    CompatibilityScorer, DEFAULT_RANK_LIMIT, MatchWeights, RankPolicy, Ranker, signals,
};

#[cfg(feature = "test-support")]
pub use runmate_core::test_support;
