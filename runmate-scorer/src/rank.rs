//! Rank candidate runners for a reference runner.
//!
//! Ranking partitions candidates into not-yet-connected and already-connected
//! groups so fresh suggestions always come first. Within each group the
//! highest score wins and ties fall back to the profile id, which makes the
//! output fully deterministic.

use std::{cmp::Ordering, collections::HashSet, hash::BuildHasher};

use log::{debug, warn};
use runmate_core::{MatchCandidate, MatchError, MatchQuality, ProfileId, RunnerProfile, Scorer};

use crate::CompatibilityScorer;

/// Default number of candidates returned by a ranking.
pub const DEFAULT_RANK_LIMIT: usize = 10;

/// Limits applied after scoring.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RankPolicy {
    /// Maximum number of candidates returned.
    pub limit: usize,
    /// Candidates scoring below this are dropped. `0.0` keeps everyone.
    pub min_score: f64,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RANK_LIMIT,
            min_score: 0.0,
        }
    }
}

impl RankPolicy {
    /// Validate the policy and return a copy.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidPolicy`] when `limit` is zero or
    /// `min_score` lies outside `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, MatchError> {
        if self.limit == 0 {
            return Err(MatchError::InvalidPolicy {
                reason: "limit must be at least 1",
            });
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(MatchError::InvalidPolicy {
                reason: "min_score must lie within 0.0..=1.0",
            });
        }
        Ok(self)
    }
}

/// Order candidates for one reference runner.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
///
/// use runmate_core::test_support::{candidate_pool, complete_profile};
/// use runmate_scorer::Ranker;
///
/// let ranker = Ranker::default();
/// let reference = complete_profile("me");
/// let ranked = ranker
///     .rank(&reference, &candidate_pool(3), &HashSet::new())
///     .expect("ranking succeeds");
/// assert_eq!(ranked.len(), 3);
/// assert_eq!(ranked[0].profile_id.as_str(), "c-000");
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = CompatibilityScorer> {
    scorer: S,
    policy: RankPolicy,
}

impl Default for Ranker<CompatibilityScorer> {
    fn default() -> Self {
        Self {
            scorer: CompatibilityScorer::default(),
            policy: RankPolicy::default(),
        }
    }
}

impl<S: Scorer> Ranker<S> {
    /// Pair a scorer with a ranking policy.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidPolicy`] when the policy fails
    /// [`RankPolicy::validate`].
    pub fn new(scorer: S, policy: RankPolicy) -> Result<Self, MatchError> {
        Ok(Self {
            scorer,
            policy: policy.validate()?,
        })
    }

    /// Policy in effect.
    #[must_use]
    pub const fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Score, filter, and order `candidates` for `reference`.
    ///
    /// Candidates that are incomplete, belong to the reference's owner, or
    /// are the reference itself are skipped. `connected` holds the ids the
    /// reference's owner already has a match record with; those candidates
    /// are kept but sorted after everyone else.
    ///
    /// # Errors
    /// Returns [`MatchError::ProfileIncomplete`] when the reference is not
    /// complete and [`MatchError::InvalidProfile`] when the reference or any
    /// eligible candidate fails validation. No partial result is returned.
    pub fn rank<H: BuildHasher>(
        &self,
        reference: &RunnerProfile,
        candidates: &[RunnerProfile],
        connected: &HashSet<ProfileId, H>,
    ) -> Result<Vec<MatchCandidate>, MatchError> {
        if !reference.is_complete {
            return Err(MatchError::ProfileIncomplete {
                profile: reference.id.clone(),
            });
        }
        reference
            .validate()
            .map_err(|source| MatchError::InvalidProfile {
                profile: reference.id.clone(),
                source,
            })?;

        let mut ranked = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if let Some(reason) = skip_reason(reference, candidate) {
                debug!("skipping candidate {}: {reason}", candidate.id);
                continue;
            }
            let breakdown = self.scorer.score(reference, candidate).inspect_err(|err| {
                warn!(
                    "aborting ranking for {}: candidate {} rejected: {err}",
                    reference.id, candidate.id
                );
            })?;
            if breakdown.total < self.policy.min_score {
                continue;
            }
            ranked.push(MatchCandidate {
                profile_id: candidate.id.clone(),
                owner_id: candidate.owner_id.clone(),
                score: breakdown.total,
                breakdown,
                already_connected: connected.contains(&candidate.id),
                quality: MatchQuality::from_score(breakdown.total),
            });
        }

        ranked.sort_by(compare_candidates);
        ranked.truncate(self.policy.limit);
        debug!(
            "ranked {} of {} candidates for {}",
            ranked.len(),
            candidates.len(),
            reference.id
        );
        Ok(ranked)
    }
}

fn skip_reason(reference: &RunnerProfile, candidate: &RunnerProfile) -> Option<&'static str> {
    if candidate.id == reference.id {
        Some("candidate is the reference profile")
    } else if candidate.owner_id == reference.owner_id {
        Some("candidate belongs to the reference owner")
    } else if !candidate.is_complete {
        Some("candidate profile is incomplete")
    } else {
        None
    }
}

fn compare_candidates(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    a.already_connected
        .cmp(&b.already_connected)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.profile_id.cmp(&b.profile_id))
}
