//! Bipartite match graph between events and volunteers.
//!
//! Stores every match twice, once per side, as ID-keyed adjacency:
//!
//! | Side | Key | Value |
//! |------|-----|-------|
//! | event | `EventId` | volunteers in match order |
//! | volunteer | `VolunteerId` | events, ordered by id |
//!
//! Both sides are updated together by [`MatchGraph::link`] and
//! [`MatchGraph::unlink`], so an edge is present on one side iff it is
//! present on the other. Capacity and day availability are not checked
//! here; the roster manager owns those rules.

use std::collections::{BTreeSet, HashMap};

use super::{EventId, VolunteerId};

/// Symmetric event ↔ volunteer adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchGraph {
    by_event: HashMap<EventId, Vec<VolunteerId>>,
    by_volunteer: HashMap<VolunteerId, BTreeSet<EventId>>,
}

impl MatchGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pair is matched.
    pub fn contains(&self, event: EventId, volunteer: VolunteerId) -> bool {
        self.by_volunteer
            .get(&volunteer)
            .is_some_and(|events| events.contains(&event))
    }

    /// Adds an edge. Returns `false` (no change) if the pair is already matched.
    pub fn link(&mut self, event: EventId, volunteer: VolunteerId) -> bool {
        if self.contains(event, volunteer) {
            return false;
        }
        self.by_event.entry(event).or_default().push(volunteer);
        self.by_volunteer.entry(volunteer).or_default().insert(event);
        true
    }

    /// Removes an edge. Returns `false` (no change) if the pair is not matched.
    pub fn unlink(&mut self, event: EventId, volunteer: VolunteerId) -> bool {
        if !self.contains(event, volunteer) {
            return false;
        }
        if let Some(volunteers) = self.by_event.get_mut(&event) {
            volunteers.retain(|&v| v != volunteer);
            if volunteers.is_empty() {
                self.by_event.remove(&event);
            }
        }
        if let Some(events) = self.by_volunteer.get_mut(&volunteer) {
            events.remove(&event);
            if events.is_empty() {
                self.by_volunteer.remove(&volunteer);
            }
        }
        true
    }

    /// Volunteers matched to an event, in match order.
    pub fn volunteers_of(&self, event: EventId) -> &[VolunteerId] {
        self.by_event.get(&event).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events matched to a volunteer, ordered by id.
    pub fn events_of(&self, volunteer: VolunteerId) -> impl Iterator<Item = EventId> + '_ {
        self.by_volunteer
            .get(&volunteer)
            .into_iter()
            .flat_map(|events| events.iter().copied())
    }

    /// Number of volunteers matched to an event.
    #[inline]
    pub fn matched_count(&self, event: EventId) -> usize {
        self.volunteers_of(event).len()
    }

    /// Total number of matches.
    pub fn match_count(&self) -> usize {
        self.by_event.values().map(Vec::len).sum()
    }

    /// Every matched pair, event side first.
    pub fn pairs(&self) -> impl Iterator<Item = (EventId, VolunteerId)> + '_ {
        self.by_event
            .iter()
            .flat_map(|(&e, volunteers)| volunteers.iter().map(move |&v| (e, v)))
    }

    /// Events that have at least one edge on the event side.
    pub(crate) fn event_keys(&self) -> impl Iterator<Item = EventId> + '_ {
        self.by_event.keys().copied()
    }

    /// Volunteers that have at least one edge on the volunteer side.
    pub(crate) fn volunteer_keys(&self) -> impl Iterator<Item = VolunteerId> + '_ {
        self.by_volunteer.keys().copied()
    }

    /// Whether the volunteer side records `event` for `volunteer`.
    ///
    /// Unlike [`contains`](Self::contains) this does not assume symmetry;
    /// used by the invariant audit.
    pub(crate) fn volunteer_side_has(&self, volunteer: VolunteerId, event: EventId) -> bool {
        self.by_volunteer
            .get(&volunteer)
            .is_some_and(|events| events.contains(&event))
    }

    /// Whether the event side records `volunteer` for `event`.
    pub(crate) fn event_side_has(&self, event: EventId, volunteer: VolunteerId) -> bool {
        self.volunteers_of(event).contains(&volunteer)
    }
}
