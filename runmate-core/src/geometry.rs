//! Distance, interval and set helpers used by compatibility scoring.
//!
//! All distances are expressed in statute miles. Callers holding kilometres
//! should convert with [`miles_from_km`] before building profiles.

use std::collections::BTreeSet;

use geo::Coord;

/// Mean Earth radius in miles used by [`haversine_miles`].
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

const KM_PER_MILE: f64 = 1.609_344;

/// Great-circle distance in miles between two WGS84 coordinates.
///
/// Coordinates follow `geo` conventions: `x` is longitude and `y` is
/// latitude, both in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use runmate_core::haversine_miles;
///
/// let common = Coord { x: -71.0640, y: 42.3555 };
/// assert_eq!(haversine_miles(common, common), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let half_dlat = (b.y - a.y).to_radians() * 0.5;
    let half_dlon = (b.x - a.x).to_radians() * 0.5;
    let h = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_MILES * central_angle
}

/// Convert kilometres to miles.
///
/// # Examples
/// ```
/// use runmate_core::miles_from_km;
///
/// assert!((miles_from_km(1.609_344) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "unit conversion")]
pub fn miles_from_km(km: f64) -> f64 {
    km / KM_PER_MILE
}

/// Normalised overlap between the closed intervals `[a_min, a_max]` and
/// `[b_min, b_max]`.
///
/// The intersection length is divided by the average of the two interval
/// lengths and clamped to `0.0..=1.0`. Intervals with non-positive or
/// non-finite length yield `0.0`.
///
/// # Examples
/// ```
/// use runmate_core::interval_overlap;
///
/// assert_eq!(interval_overlap(8.0, 9.0, 8.5, 9.5), 0.5);
/// assert_eq!(interval_overlap(8.0, 9.0, 9.5, 10.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "overlap is a ratio of interval lengths"
)]
pub fn interval_overlap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    let len_a = a_max - a_min;
    let len_b = b_max - b_min;
    if !(len_a.is_finite() && len_b.is_finite()) || len_a <= 0.0 || len_b <= 0.0 {
        return 0.0;
    }
    let intersection = (a_max.min(b_max) - a_min.max(b_min)).max(0.0);
    let average = (len_a + len_b) * 0.5;
    (intersection / average).clamp(0.0, 1.0)
}

/// Jaccard index of two sets: intersection size over union size.
///
/// Two empty sets are treated as fully dissimilar and yield `0.0`; callers
/// wanting a neutral value for missing data must check emptiness first.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use runmate_core::jaccard;
///
/// let a = BTreeSet::from(["mon-am", "wed-am"]);
/// let b = BTreeSet::from(["mon-am", "fri-pm"]);
/// assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "set sizes are tiny, so the ratio is exact enough"
)]
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
