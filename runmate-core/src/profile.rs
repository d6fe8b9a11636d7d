//! Runner profiles: the unit the engine matches.
//!
//! A profile belongs to exactly one user and bundles everything the
//! compatibility scorer looks at. Profiles are snapshots supplied by the
//! caller; the engine never mutates them.

use crate::{Goal, Location, PaceBand, ProfileError, WeeklySchedule};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap an identifier.
            ///
            /// # Errors
            /// Returns [`ProfileError::BlankIdentifier`] when `raw` is empty
            /// or whitespace.
            pub fn new(raw: impl Into<String>) -> Result<Self, ProfileError> {
                let value = raw.into();
                if value.trim().is_empty() {
                    return Err(ProfileError::BlankIdentifier { field: $field });
                }
                Ok(Self(value))
            }

            /// Wrap an identifier known to be non-blank.
            #[cfg(any(test, feature = "test-support"))]
            pub(crate) const fn from_trusted(value: String) -> Self {
                Self(value)
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ProfileError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

identifier!(
    /// Opaque identifier of a runner profile. Orders lexicographically.
    ProfileId,
    "profile id"
);

identifier!(
    /// Opaque identifier of the user owning a profile.
    UserId,
    "user id"
);

/// Profile fields that must be filled before a profile can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// The name other runners see.
    DisplayName,
    /// The runner's primary goal.
    Goal,
    /// Coordinates or a city name.
    Location,
}

/// Everything the matching engine knows about one runner.
///
/// # Examples
/// ```
/// use runmate_core::{Goal, Location, PaceBand, ProfileId, RunnerProfile, UserId};
///
/// # fn main() -> Result<(), runmate_core::ProfileError> {
/// let mut profile = RunnerProfile::new(
///     ProfileId::new("p-1")?,
///     UserId::new("u-1")?,
///     PaceBand::new(8.5, 10.0)?,
///     3.0,
/// )?
/// .with_display_name("Emma")
/// .with_goal(Goal::FiveK)
/// .with_location(Location::city("Boston, MA"));
/// assert!(!profile.is_complete);
/// profile.mark_complete_if_ready();
/// assert!(profile.is_complete);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RunnerProfile {
    /// Profile identifier.
    pub id: ProfileId,
    /// Owning user.
    pub owner_id: UserId,
    /// Name shown to other runners.
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    /// Comfortable pace range.
    pub pace: PaceBand,
    /// Home base.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Location,
    /// How far the runner is willing to travel, in miles.
    pub radius_miles: f64,
    /// Weekly availability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub schedule: WeeklySchedule,
    /// Primary training goal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Option<Goal>,
    /// Set once every required field has been filled.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_complete: bool,
}

impl RunnerProfile {
    /// Validate and construct an incomplete profile with no optional data.
    ///
    /// # Errors
    /// Returns [`ProfileError`] when the pace band or radius is unusable.
    pub fn new(
        id: ProfileId,
        owner_id: UserId,
        pace: PaceBand,
        radius_miles: f64,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            id,
            owner_id,
            display_name: None,
            pace,
            location: Location::default(),
            radius_miles,
            schedule: WeeklySchedule::new(),
            goal: None,
            is_complete: false,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Set the display name while returning `self` for chaining.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Set the schedule while returning `self` for chaining.
    #[must_use]
    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the goal while returning `self` for chaining.
    #[must_use]
    pub const fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Check the pace band and search radius.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidPace`] or
    /// [`ProfileError::InvertedPaceBand`] for a malformed pace band and
    /// [`ProfileError::NonPositiveRadius`] when the radius is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<(), ProfileError> {
        self.pace.validate()?;
        if !self.radius_miles.is_finite() || self.radius_miles <= 0.0 {
            return Err(ProfileError::NonPositiveRadius {
                radius: self.radius_miles,
            });
        }
        Ok(())
    }

    /// Required fields that are still unset.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let has_name = self
            .display_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        [
            (has_name, RequiredField::DisplayName),
            (self.goal.is_some(), RequiredField::Goal),
            (self.location.is_known(), RequiredField::Location),
        ]
        .into_iter()
        .filter_map(|(present, field)| (!present).then_some(field))
        .collect()
    }

    /// Flag the profile complete once nothing required is missing.
    ///
    /// The flag is sticky: a complete profile stays complete even if a field
    /// is later cleared. Returns the resulting flag.
    pub fn mark_complete_if_ready(&mut self) -> bool {
        if !self.is_complete && self.missing_fields().is_empty() {
            self.is_complete = true;
        }
        self.is_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn bare_profile() -> RunnerProfile {
        RunnerProfile::new(
            ProfileId::new("p-1").expect("valid id"),
            UserId::new("u-1").expect("valid id"),
            PaceBand::new(8.0, 9.0).expect("valid band"),
            5.0,
        )
        .expect("valid profile")
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn identifiers_reject_blank(#[case] raw: &str) {
        assert_eq!(
            ProfileId::new(raw),
            Err(ProfileError::BlankIdentifier {
                field: "profile id"
            })
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    fn rejects_non_positive_radius(bare_profile: RunnerProfile, #[case] radius: f64) {
        let profile = RunnerProfile {
            radius_miles: radius,
            ..bare_profile
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::NonPositiveRadius { .. })
        ));
    }

    #[rstest]
    fn rejects_inverted_pace(bare_profile: RunnerProfile) {
        let profile = RunnerProfile {
            pace: PaceBand { min: 9.5, max: 8.0 },
            ..bare_profile
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::InvertedPaceBand { min: 9.5, max: 8.0 })
        );
    }

    #[rstest]
    fn lists_missing_fields(bare_profile: RunnerProfile) {
        assert_eq!(
            bare_profile.missing_fields(),
            vec![
                RequiredField::DisplayName,
                RequiredField::Goal,
                RequiredField::Location
            ]
        );
        let named = bare_profile
            .with_display_name("Marcus")
            .with_location(Location::city("Cambridge, MA"));
        assert_eq!(named.missing_fields(), vec![RequiredField::Goal]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_rejects_blank_identifiers() {
        let parsed: Result<ProfileId, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
        let id: ProfileId = serde_json::from_str("\"p-7\"").expect("valid id");
        assert_eq!(id.as_str(), "p-7");
    }

    #[rstest]
    fn incomplete_profile_stays_incomplete(mut bare_profile: RunnerProfile) {
        assert!(!bare_profile.mark_complete_if_ready());
        assert!(!bare_profile.is_complete);
    }

    #[rstest]
    fn completeness_is_sticky(bare_profile: RunnerProfile) {
        let mut profile = bare_profile
            .with_display_name("Sarah")
            .with_goal(Goal::HalfMarathon)
            .with_location(Location::city("Cambridge, MA"));
        assert!(profile.mark_complete_if_ready());
        profile.goal = None;
        assert!(profile.mark_complete_if_ready());
    }
}
