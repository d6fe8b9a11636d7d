//! Ranked match results handed back to the caller.

use crate::{ProfileId, ScoreBreakdown, UserId};

/// Score threshold for [`MatchQuality::Strong`].
pub const STRONG_MATCH_THRESHOLD: f64 = 0.8;
/// Score threshold for [`MatchQuality::Good`].
pub const GOOD_MATCH_THRESHOLD: f64 = 0.6;

/// Coarse label for how promising a match is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MatchQuality {
    /// Score of at least [`STRONG_MATCH_THRESHOLD`].
    Strong,
    /// Score of at least [`GOOD_MATCH_THRESHOLD`].
    Good,
    /// Anything lower.
    Fair,
}

impl MatchQuality {
    /// Classify a compatibility score.
    ///
    /// # Examples
    /// ```
    /// use runmate_core::MatchQuality;
    ///
    /// assert_eq!(MatchQuality::from_score(0.85), MatchQuality::Strong);
    /// assert_eq!(MatchQuality::from_score(0.6), MatchQuality::Good);
    /// assert_eq!(MatchQuality::from_score(0.2), MatchQuality::Fair);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_MATCH_THRESHOLD {
            Self::Strong
        } else if score >= GOOD_MATCH_THRESHOLD {
            Self::Good
        } else {
            Self::Fair
        }
    }
}

/// One ranked candidate.
///
/// Position in the ranking is the position in the returned sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MatchCandidate {
    /// Candidate profile.
    pub profile_id: ProfileId,
    /// User owning the candidate profile.
    pub owner_id: UserId,
    /// Compatibility score in `0.0..=1.0`.
    pub score: f64,
    /// Per-signal sub-scores behind `score`.
    pub breakdown: ScoreBreakdown,
    /// Whether the reference's owner already has a match record with this
    /// candidate.
    pub already_connected: bool,
    /// Label derived from `score`.
    pub quality: MatchQuality,
}

impl MatchCandidate {
    /// Score as a whole percentage, rounded to nearest.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "score is clamped to 0..=1 so the percentage fits in u8"
    )]
    pub fn percent(&self) -> u8 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
