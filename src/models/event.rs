//! Event model.
//!
//! An event happens on a single day and accepts up to `limit`
//! volunteers. Matched volunteers are not stored on the event itself;
//! they live in the roster's [`MatchGraph`](super::MatchGraph), keyed by [`EventId`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Day;

/// Stable arena identifier of an event.
///
/// Identifiers are never reused within one roster, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// An event volunteers can be matched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Arena identifier.
    pub id: EventId,
    /// Unique, case-sensitive event name.
    pub name: String,
    /// Day the event takes place on.
    pub date: Day,
    /// Maximum number of simultaneously matched volunteers (>= 1).
    pub limit: u32,
}

impl Event {
    /// Creates a new event.
    pub fn new(id: EventId, name: impl Into<String>, date: Day, limit: u32) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            limit,
        }
    }

    /// Whether `matched` volunteers leave room for one more.
    #[inline]
    pub fn has_room(&self, matched: usize) -> bool {
        (matched as u64) < u64::from(self.limit)
    }

    /// Open slots given the number of matched volunteers.
    pub fn open_slots(&self, matched: usize) -> u32 {
        let matched = u32::try_from(matched).unwrap_or(u32::MAX);
        self.limit.saturating_sub(matched)
    }
}
