//! Running goals and the table of goals considered related.
//!
//! A profile carries at most one goal. Goals next to each other on the
//! race-distance ladder, or that share a motivation, are "related" and
//! score a partial match.
//!
//! # Examples
//! ```
//! use runmate_core::Goal;
//!
//! assert_eq!(Goal::HalfMarathon.as_str(), "half_marathon");
//! assert!(Goal::FiveK.is_related_to(Goal::TenK));
//! assert!(!Goal::FiveK.is_related_to(Goal::Marathon));
//! ```

/// A runner's primary training goal.
///
/// Serialises as snake case and also accepts the upper-case names older
/// profile stores use, such as `FIVE_K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Goal {
    /// Racing or improving a 5K.
    #[cfg_attr(feature = "serde", serde(alias = "FIVE_K"))]
    FiveK,
    /// Training for a 10K.
    #[cfg_attr(feature = "serde", serde(alias = "TEN_K"))]
    TenK,
    /// Training for a half marathon.
    #[cfg_attr(feature = "serde", serde(alias = "HALF_MARATHON"))]
    HalfMarathon,
    /// Training for a marathon.
    #[cfg_attr(feature = "serde", serde(alias = "MARATHON"))]
    Marathon,
    /// Trail running.
    #[cfg_attr(feature = "serde", serde(alias = "TRAIL"))]
    Trail,
    /// Staying fit and healthy.
    #[cfg_attr(feature = "serde", serde(alias = "GENERAL_FITNESS"))]
    GeneralFitness,
    /// Running to lose weight.
    #[cfg_attr(feature = "serde", serde(alias = "WEIGHT_LOSS"))]
    WeightLoss,
    /// Running for company.
    #[cfg_attr(feature = "serde", serde(alias = "SOCIAL"))]
    Social,
}

/// Symmetric pairs of goals that count as related.
const RELATED_GOALS: [(Goal, Goal); 6] = [
    (Goal::FiveK, Goal::TenK),
    (Goal::TenK, Goal::HalfMarathon),
    (Goal::HalfMarathon, Goal::Marathon),
    (Goal::Marathon, Goal::Trail),
    (Goal::GeneralFitness, Goal::WeightLoss),
    (Goal::GeneralFitness, Goal::Social),
];

impl Goal {
    /// Every goal, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::FiveK,
        Self::TenK,
        Self::HalfMarathon,
        Self::Marathon,
        Self::Trail,
        Self::GeneralFitness,
        Self::WeightLoss,
        Self::Social,
    ];

    /// Return the goal as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveK => "five_k",
            Self::TenK => "ten_k",
            Self::HalfMarathon => "half_marathon",
            Self::Marathon => "marathon",
            Self::Trail => "trail",
            Self::GeneralFitness => "general_fitness",
            Self::WeightLoss => "weight_loss",
            Self::Social => "social",
        }
    }

    /// Whether `other` appears next to `self` in the related-goal table.
    ///
    /// A goal is not related to itself; equality is checked separately.
    #[must_use]
    pub fn is_related_to(self, other: Self) -> bool {
        RELATED_GOALS
            .iter()
            .any(|&(a, b)| (a == self && b == other) || (a == other && b == self))
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalised.as_str() {
            "five_k" | "5k" => Ok(Self::FiveK),
            "ten_k" | "10k" => Ok(Self::TenK),
            "half_marathon" | "half" => Ok(Self::HalfMarathon),
            "marathon" => Ok(Self::Marathon),
            "trail" => Ok(Self::Trail),
            "general_fitness" | "fitness" => Ok(Self::GeneralFitness),
            "weight_loss" => Ok(Self::WeightLoss),
            "social" => Ok(Self::Social),
            _ => Err(format!("unknown goal '{s}'")),
        }
    }
}
