//! Compatibility scoring and ranking for RunMate runner profiles.
//!
//! The crate provides two layers:
//! - **Signals** compare one aspect of two profiles (pace, schedule,
//!   location, goal) and return a sub-score in `0.0..=1.0`. Floors and
//!   fallbacks are public constants so callers can explain a result.
//! - **[`CompatibilityScorer`]** blends the signals with [`MatchWeights`]
//!   and implements the [`Scorer`](runmate_core::Scorer) trait.
//!   **[`Ranker`]** uses any scorer to filter, order, and truncate a
//!   candidate pool according to a [`RankPolicy`].
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//!
//! use runmate_core::test_support::{candidate_pool, complete_profile};
//! use runmate_scorer::{CompatibilityScorer, RankPolicy, Ranker};
//!
//! let policy = RankPolicy { limit: 2, min_score: 0.5 };
//! let ranker = Ranker::new(CompatibilityScorer::default(), policy).expect("valid policy");
//! let ranked = ranker
//!     .rank(&complete_profile("me"), &candidate_pool(5), &HashSet::new())
//!     .expect("ranking succeeds");
//! assert_eq!(ranked.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compatibility;
mod rank;
pub mod signals;
mod weights;

pub use compatibility::CompatibilityScorer;
pub use rank::{DEFAULT_RANK_LIMIT, RankPolicy, Ranker};
pub use signals::{goal_score, location_score, pace_score, schedule_score};
pub use weights::{MatchWeights, WEIGHT_SUM_TOLERANCE};
