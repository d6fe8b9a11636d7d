//! Core domain types for the RunMate matching engine.
//!
//! Runner profiles, their pace bands, weekly schedules and goals live here,
//! together with the geometric and set helpers the compatibility scorer is
//! built from. Constructors and `validate` methods return `Result` so
//! malformed profiles surface before any scoring arithmetic runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod error;
pub mod geometry;
pub mod goal;
pub mod location;
pub mod pace;
pub mod profile;
pub mod schedule;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{MatchCandidate, MatchQuality};
pub use error::{MatchError, ProfileError};
pub use geometry::{EARTH_RADIUS_MILES, haversine_miles, interval_overlap, jaccard, miles_from_km};
pub use goal::Goal;
pub use location::Location;
pub use pace::PaceBand;
pub use profile::{ProfileId, RequiredField, RunnerProfile, UserId};
pub use schedule::{TimeSlot, Weekday, WeeklySchedule};
pub use scorer::{ScoreBreakdown, Scorer};
