//! Volunteer model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Availability, Day};

/// Stable arena identifier of a volunteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VolunteerId(pub u32);

impl fmt::Display for VolunteerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// A volunteer with a set of days they can work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    /// Arena identifier.
    pub id: VolunteerId,
    /// Unique, case-sensitive volunteer name.
    pub name: String,
    /// Listed days and whether each is still free.
    pub availability: Availability,
}

impl Volunteer {
    /// Creates a volunteer available on every given day.
    pub fn new(
        id: VolunteerId,
        name: impl Into<String>,
        days: impl IntoIterator<Item = Day>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            availability: Availability::from_days(days),
        }
    }

    /// Whether the volunteer can still be matched on `day`.
    #[inline]
    pub fn is_available(&self, day: Day) -> bool {
        self.availability.is_available(day)
    }

    /// Days still available, ascending.
    pub fn available_days(&self) -> Vec<Day> {
        self.availability.available_days().collect()
    }
}
