//! Day and availability models.
//!
//! Defines the day-of-month unit events are scheduled on, the window of
//! valid days, and per-volunteer availability flags.
//!
//! # Day Model
//! A day is an integer within a [`DayWindow`] (default 1..=30, inclusive).
//! Availability maps each listed day to a "still available" flag:
//! - `true`: the volunteer listed the day and no match consumes it.
//! - `false`: a match currently consumes the day.
//! - absent: the volunteer never listed the day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Day of the scheduling month.
pub type Day = u8;

/// Inclusive range of valid days `[first, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// First valid day (inclusive).
    pub first: Day,
    /// Last valid day (inclusive).
    pub last: Day,
}

impl DayWindow {
    /// Creates a new day window.
    pub fn new(first: Day, last: Day) -> Self {
        Self { first, last }
    }

    /// Whether a raw integer falls within this window.
    #[inline]
    pub fn contains(&self, day: i64) -> bool {
        day >= i64::from(self.first) && day <= i64::from(self.last)
    }

    /// Converts a raw integer into a [`Day`] if it falls within this window.
    pub fn day(&self, raw: i64) -> Option<Day> {
        if self.contains(raw) {
            Day::try_from(raw).ok()
        } else {
            None
        }
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            usize::from(self.last - self.first) + 1
        }
    }

    /// Whether the window holds no days.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self { first: 1, last: 30 }
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

/// Per-volunteer day availability.
///
/// Days are kept in ascending order so that serialization and display
/// never need to sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    days: BTreeMap<Day, bool>,
}

impl Availability {
    /// Creates an empty availability (no days listed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an availability with every given day marked available.
    pub fn from_days(days: impl IntoIterator<Item = Day>) -> Self {
        Self {
            days: days.into_iter().map(|d| (d, true)).collect(),
        }
    }

    /// Whether the day was listed and is not consumed by a match.
    #[inline]
    pub fn is_available(&self, day: Day) -> bool {
        self.days.get(&day).copied().unwrap_or(false)
    }

    /// Whether the day was listed at all (available or consumed).
    pub fn is_listed(&self, day: Day) -> bool {
        self.days.contains_key(&day)
    }

    /// Consumes an available day. Returns `false` if the day was not available.
    pub fn consume(&mut self, day: Day) -> bool {
        match self.days.get_mut(&day) {
            Some(flag) if *flag => {
                *flag = false;
                true
            }
            _ => false,
        }
    }

    /// Marks a listed day available again. Returns `false` if the day was never listed.
    pub fn restore(&mut self, day: Day) -> bool {
        match self.days.get_mut(&day) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Days still available, ascending.
    pub fn available_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days
            .iter()
            .filter(|(_, available)| **available)
            .map(|(&d, _)| d)
    }

    /// Days currently consumed by matches, ascending.
    pub fn consumed_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days
            .iter()
            .filter(|(_, available)| !**available)
            .map(|(&d, _)| d)
    }

    /// Number of listed days.
    pub fn listed_count(&self) -> usize {
        self.days.len()
    }
}
