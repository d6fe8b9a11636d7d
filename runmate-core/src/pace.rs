//! Pace bands: a runner's comfortable range in minutes per mile.

use crate::{ProfileError, interval_overlap};

/// Comfortable pace range in minutes per mile.
///
/// `min` is the fastest pace (fewest minutes per mile) and `max` the
/// slowest. Fields are public so storage layers can hydrate bands directly;
/// [`PaceBand::validate`] re-checks the invariant before scoring.
///
/// # Examples
/// ```
/// use runmate_core::PaceBand;
///
/// # fn main() -> Result<(), runmate_core::ProfileError> {
/// let band = PaceBand::new(8.0, 9.0)?;
/// assert_eq!(band.midpoint(), 8.5);
/// assert!(PaceBand::new(9.5, 8.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaceBand {
    /// Fastest comfortable pace.
    pub min: f64,
    /// Slowest comfortable pace.
    pub max: f64,
}

impl PaceBand {
    /// Validate and construct a [`PaceBand`].
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidPace`] for non-finite or non-positive
    /// bounds and [`ProfileError::InvertedPaceBand`] when `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ProfileError> {
        let band = Self { min, max };
        band.validate()?;
        Ok(band)
    }

    /// Check the band invariants.
    ///
    /// # Errors
    /// See [`PaceBand::new`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        let Self { min, max } = *self;
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || max <= 0.0 {
            return Err(ProfileError::InvalidPace { min, max });
        }
        if min > max {
            return Err(ProfileError::InvertedPaceBand { min, max });
        }
        Ok(())
    }

    /// Centre of the band.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "midpoint of two floats")]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Shared length of the two bands relative to their average width.
    ///
    /// Bands that only touch, or that have no width, share nothing and
    /// return `0.0`.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> f64 {
        interval_overlap(self.min, self.max, other.min, other.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(8.0, 8.0)]
    #[case(6.5, 11.0)]
    fn accepts_ordered_bounds(#[case] min: f64, #[case] max: f64) {
        assert!(PaceBand::new(min, max).is_ok());
    }

    #[rstest]
    fn rejects_inverted_bounds() {
        let err = PaceBand::new(10.0, 9.0).expect_err("inverted band");
        assert_eq!(err, ProfileError::InvertedPaceBand { min: 10.0, max: 9.0 });
    }

    #[rstest]
    #[case(0.0, 9.0)]
    #[case(-1.0, 9.0)]
    #[case(8.0, f64::INFINITY)]
    #[case(f64::NAN, 9.0)]
    fn rejects_unusable_bounds(#[case] min: f64, #[case] max: f64) {
        assert!(matches!(
            PaceBand::new(min, max),
            Err(ProfileError::InvalidPace { .. })
        ));
    }

    #[rstest]
    #[case(PaceBand { min: 8.0, max: 9.0 }, PaceBand { min: 8.5, max: 9.5 }, 0.5)]
    #[case(PaceBand { min: 8.0, max: 9.0 }, PaceBand { min: 9.0, max: 10.0 }, 0.0)]
    #[case(PaceBand { min: 8.0, max: 8.0 }, PaceBand { min: 8.0, max: 8.0 }, 0.0)]
    #[case(PaceBand { min: 8.0, max: 9.0 }, PaceBand { min: 9.1, max: 10.0 }, 0.0)]
    fn overlap_ignores_zero_length_contact(
        #[case] a: PaceBand,
        #[case] b: PaceBand,
        #[case] expected: f64,
    ) {
        assert!((a.overlap(&b) - expected).abs() < 1e-9);
    }
}
