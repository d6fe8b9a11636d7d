//! Weekly availability: which time slots a runner is free on each day.
//!
//! Insertion order is irrelevant; only slot membership matters.

use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::jaccard;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Return the day as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == lowered || day.as_str().get(..3) == Some(lowered.as_str()))
            .ok_or_else(|| format!("unknown weekday '{s}'"))
    }
}

/// Coarse time-of-day availability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TimeSlot {
    /// Before work.
    #[cfg_attr(feature = "serde", serde(alias = "am", alias = "AM"))]
    Morning,
    /// Around lunch.
    #[cfg_attr(feature = "serde", serde(alias = "lunch", alias = "Lunch"))]
    Midday,
    /// After work.
    #[cfg_attr(feature = "serde", serde(alias = "pm", alias = "PM"))]
    Evening,
}

impl TimeSlot {
    /// Return the slot as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "am" => Ok(Self::Morning),
            "midday" | "lunch" => Ok(Self::Midday),
            "evening" | "pm" => Ok(Self::Evening),
            _ => Err(format!("unknown time slot '{s}'")),
        }
    }
}

/// Mapping from weekday to the set of slots a runner is available in.
///
/// # Examples
/// ```
/// use runmate_core::{TimeSlot, Weekday, WeeklySchedule};
///
/// let schedule = WeeklySchedule::new()
///     .with_slot(Weekday::Monday, TimeSlot::Morning)
///     .with_slot(Weekday::Monday, TimeSlot::Morning)
///     .with_slot(Weekday::Friday, TimeSlot::Evening);
/// assert_eq!(schedule.slot_count(), 2);
/// assert!(schedule.contains(Weekday::Friday, TimeSlot::Evening));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct WeeklySchedule {
    days: BTreeMap<Weekday, BTreeSet<TimeSlot>>,
}

impl WeeklySchedule {
    /// Construct an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a slot as available.
    pub fn insert(&mut self, day: Weekday, slot: TimeSlot) {
        self.days.entry(day).or_default().insert(slot);
    }

    /// Add a slot while returning `self` for chaining.
    #[must_use]
    pub fn with_slot(mut self, day: Weekday, slot: TimeSlot) -> Self {
        self.insert(day, slot);
        self
    }

    /// Whether the runner is available on `day` during `slot`.
    #[must_use]
    pub fn contains(&self, day: Weekday, slot: TimeSlot) -> bool {
        self.days.get(&day).is_some_and(|slots| slots.contains(&slot))
    }

    /// Iterate over every `(day, slot)` selection in week order.
    pub fn slots(&self) -> impl Iterator<Item = (Weekday, TimeSlot)> + '_ {
        self.days
            .iter()
            .flat_map(|(&day, slots)| slots.iter().map(move |&slot| (day, slot)))
    }

    /// Number of `(day, slot)` selections.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.days.values().map(BTreeSet::len).sum()
    }

    /// Whether no slot is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.values().all(BTreeSet::is_empty)
    }

    /// Number of selections present in both schedules.
    #[must_use]
    pub fn shared_slot_count(&self, other: &Self) -> usize {
        self.slots()
            .filter(|&(day, slot)| other.contains(day, slot))
            .count()
    }

    /// Symmetric Jaccard similarity of the two schedules' selections.
    ///
    /// Two empty schedules yield `0.0`.
    #[must_use]
    pub fn similarity(&self, other: &Self) -> f64 {
        let mine: BTreeSet<_> = self.slots().collect();
        let theirs: BTreeSet<_> = other.slots().collect();
        jaccard(&mine, &theirs)
    }
}

impl FromIterator<(Weekday, TimeSlot)> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, TimeSlot)>>(iter: I) -> Self {
        let mut schedule = Self::new();
        for (day, slot) in iter {
            schedule.insert(day, slot);
        }
        schedule
    }
}
