//! Where a runner is based: coordinates when known, a city name otherwise.

use geo::Coord;

/// A runner's home base.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The free
/// text `city` is only consulted when either side of a comparison lacks
/// coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use runmate_core::Location;
///
/// let here = Location::at(Coord { x: -71.0640, y: 42.3555 }).with_city("Boston, MA");
/// assert!(here.coordinates.is_some());
/// assert!(here.same_city(&Location::city("boston, ma ")).unwrap_or(false));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Precise position, if the runner shared one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Option<Coord<f64>>,
    /// City or neighbourhood name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<String>,
}

impl Location {
    /// A location known only by coordinates.
    #[must_use]
    pub const fn at(coordinates: Coord<f64>) -> Self {
        Self {
            coordinates: Some(coordinates),
            city: None,
        }
    }

    /// A location known only by city name.
    #[must_use]
    pub fn city(name: impl Into<String>) -> Self {
        Self {
            coordinates: None,
            city: Some(name.into()),
        }
    }

    /// Attach a city name while returning `self` for chaining.
    #[must_use]
    pub fn with_city(mut self, name: impl Into<String>) -> Self {
        self.city = Some(name.into());
        self
    }

    /// City name with surrounding whitespace removed, if not blank.
    #[must_use]
    pub fn city_name(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Whether the location carries anything usable for matching.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.coordinates.is_some() || self.city_name().is_some()
    }

    /// Case-insensitive city comparison.
    ///
    /// Returns `None` when either side has no usable city name.
    #[must_use]
    pub fn same_city(&self, other: &Self) -> Option<bool> {
        let mine = self.city_name()?;
        let theirs = other.city_name()?;
        Some(mine.to_lowercase() == theirs.to_lowercase())
    }
}
