//! Individual compatibility signals.
//!
//! Each function compares one aspect of two profiles and returns a value in
//! `0.0..=1.0`. Missing optional data falls back to a neutral score rather
//! than failing. The floors keep partial matches visible: a runner whose pace
//! band misses the reference's still shows up, just lower in the list.

use runmate_core::{Goal, Location, PaceBand, WeeklySchedule, haversine_miles};

/// Lowest pace score ever returned.
pub const MIN_PACE_SCORE: f64 = 0.01;
/// Highest pace score for bands that do not intersect.
pub const DISJOINT_PACE_CEILING: f64 = 0.2;
/// Midpoint gap, in minutes per mile, at which a disjoint pace score reaches
/// its floor.
pub const PACE_GAP_HORIZON: f64 = 2.0;

/// Schedule score when either side has no availability.
pub const NEUTRAL_SCHEDULE_SCORE: f64 = 0.5;
/// Schedule score when both sides have availability but share no slot.
pub const NO_SHARED_SLOT_SCORE: f64 = 0.1;

/// Smallest reach, in miles, used when comparing coordinates.
pub const MIN_REACH_MILES: f64 = 10.0;
/// Lowest location score for a candidate within reach.
pub const IN_REACH_FLOOR: f64 = 0.1;
/// Highest location score for a candidate beyond reach but within twice it.
pub const EXTENDED_REACH_CEILING: f64 = 0.3;
/// Lowest location score ever returned for known coordinates.
pub const MIN_LOCATION_SCORE: f64 = 0.05;
/// Location score when neither coordinates nor city names can be compared.
pub const NEUTRAL_LOCATION_SCORE: f64 = 0.5;
/// Location score for matching city names.
pub const SAME_CITY_SCORE: f64 = 0.8;
/// Location score for differing city names.
pub const OTHER_CITY_SCORE: f64 = 0.3;

/// Goal score for adjacent goals.
pub const RELATED_GOAL_SCORE: f64 = 0.7;
/// Goal score for unrelated goals.
pub const UNRELATED_GOAL_SCORE: f64 = 0.3;
/// Goal score when either side has no goal.
pub const NEUTRAL_GOAL_SCORE: f64 = 0.5;

/// Compare two pace bands.
///
/// Overlapping bands score their relative overlap. Bands with no shared
/// length, including ones that only touch, score up to
/// [`DISJOINT_PACE_CEILING`], fading as their midpoints drift apart. The
/// result never drops below [`MIN_PACE_SCORE`].
///
/// # Examples
/// ```
/// use runmate_core::PaceBand;
/// use runmate_scorer::pace_score;
///
/// let a = PaceBand { min: 8.0, max: 9.0 };
/// assert_eq!(pace_score(&a, &a), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "disjoint pace scores fade linearly with the midpoint gap"
)]
pub fn pace_score(reference: &PaceBand, candidate: &PaceBand) -> f64 {
    let overlap = reference.overlap(candidate);
    let raw = if overlap > 0.0 {
        overlap
    } else {
        let gap = (reference.midpoint() - candidate.midpoint()).abs();
        DISJOINT_PACE_CEILING * (1.0 - gap / PACE_GAP_HORIZON)
    };
    raw.max(MIN_PACE_SCORE)
}

/// Share of the reference's weekly slots the candidate also has free.
///
/// The score is relative to the reference: a candidate free every day fully
/// covers a reference who runs on Mondays only.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "slot counts are bounded by the 21 weekly slots"
)]
pub fn schedule_score(reference: &WeeklySchedule, candidate: &WeeklySchedule) -> f64 {
    if reference.is_empty() || candidate.is_empty() {
        return NEUTRAL_SCHEDULE_SCORE;
    }
    let shared = reference.shared_slot_count(candidate);
    if shared == 0 {
        return NO_SHARED_SLOT_SCORE;
    }
    (shared as f64 / reference.slot_count() as f64).clamp(0.0, 1.0)
}

/// Compare two home bases given each runner's search radius.
///
/// Coordinates win over city names. The reach is the larger of both radii,
/// but never below [`MIN_REACH_MILES`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "location scores fall off linearly with distance"
)]
pub fn location_score(
    reference: &Location,
    reference_radius: f64,
    candidate: &Location,
    candidate_radius: f64,
) -> f64 {
    if let (Some(from), Some(to)) = (reference.coordinates, candidate.coordinates) {
        let distance = haversine_miles(from, to);
        let reach = reference_radius.max(candidate_radius).max(MIN_REACH_MILES);
        return if distance <= reach {
            (1.0 - distance / reach).max(IN_REACH_FLOOR)
        } else if distance <= 2.0 * reach {
            (EXTENDED_REACH_CEILING * (1.0 - (distance - reach) / reach)).max(MIN_LOCATION_SCORE)
        } else {
            MIN_LOCATION_SCORE
        };
    }
    match reference.same_city(candidate) {
        Some(true) => SAME_CITY_SCORE,
        Some(false) => OTHER_CITY_SCORE,
        None => NEUTRAL_LOCATION_SCORE,
    }
}

/// Compare two training goals.
#[must_use]
pub fn goal_score(reference: Option<Goal>, candidate: Option<Goal>) -> f64 {
    match (reference, candidate) {
        (Some(mine), Some(theirs)) if mine == theirs => 1.0,
        (Some(mine), Some(theirs)) if mine.is_related_to(theirs) => RELATED_GOAL_SCORE,
        (Some(_), Some(_)) => UNRELATED_GOAL_SCORE,
        _ => NEUTRAL_GOAL_SCORE,
    }
}
