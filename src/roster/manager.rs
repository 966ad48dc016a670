//! Event manager: owner of the roster.
//!
//! # Storage
//!
//! Entities live in id-keyed arenas. Ordered name indexes give the
//! ascending-by-name iteration order without re-sorting on insert, and
//! matches are kept in a [`MatchGraph`] rather than on the entities.
//!
//! # Invariants
//!
//! After every call, whether it succeeds or not:
//! 1. Names are unique per collection (case-sensitive).
//! 2. No event has more matched volunteers than its limit.
//! 3. A volunteer's day is consumed iff they are matched to an event on that day.
//! 4. Every match is recorded on both sides of the graph.
//!
//! Every operation checks all of its preconditions before touching state,
//! so a rejected call leaves the roster exactly as it was.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::models::{Day, Event, EventId, MatchGraph, Volunteer, VolunteerId};

/// Owns every event, volunteer, and match of one roster.
///
/// # Example
///
/// ```
/// use u_roster::roster::EventManager;
///
/// let mut roster = EventManager::new();
/// assert!(roster.add_event("Field Trip", "7", "10"));
/// assert!(roster.add_volunteer("Sonu", &["1", "2", "7"]));
///
/// assert!(roster.create_match("Field Trip", "Sonu"));
/// assert!(!roster.create_match("Field Trip", "Sonu")); // already matched
///
/// assert_eq!(roster.serialize_events(), "e;Field Trip;7;10;Sonu");
/// assert_eq!(roster.serialize_volunteers(), "v;Sonu;1,2");
/// ```
#[derive(Debug, Clone)]
pub struct EventManager {
    config: RosterConfig,
    events: HashMap<EventId, Event>,
    volunteers: HashMap<VolunteerId, Volunteer>,
    event_index: BTreeMap<String, EventId>,
    volunteer_index: BTreeMap<String, VolunteerId>,
    matches: MatchGraph,
    next_event_id: u32,
    next_volunteer_id: u32,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::empty(RosterConfig::default())
    }
}

impl EventManager {
    /// Creates an empty roster with the default 1..=30 day window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster with a custom configuration.
    pub fn with_config(config: RosterConfig) -> Result<Self, RosterError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: RosterConfig) -> Self {
        Self {
            config,
            events: HashMap::new(),
            volunteers: HashMap::new(),
            event_index: BTreeMap::new(),
            volunteer_index: BTreeMap::new(),
            matches: MatchGraph::new(),
            next_event_id: 0,
            next_volunteer_id: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    // ---- Collection management ----

    /// Adds an event from raw date and limit strings.
    ///
    /// Returns `false` (no change) on an empty name, a non-integer or
    /// out-of-window date, a non-integer or non-positive limit, or a
    /// duplicate name.
    pub fn add_event(&mut self, name: &str, date_raw: &str, limit_raw: &str) -> bool {
        self.try_add_event(name, date_raw, limit_raw).is_ok()
    }

    /// Like [`add_event`](Self::add_event), reporting why it was rejected.
    pub fn try_add_event(
        &mut self,
        name: &str,
        date_raw: &str,
        limit_raw: &str,
    ) -> Result<EventId, RosterError> {
        self.insert_event(name, date_raw, limit_raw)
            .inspect_err(|err| debug!(op = "add_event", name, %err, "rejected"))
    }

    fn insert_event(
        &mut self,
        name: &str,
        date_raw: &str,
        limit_raw: &str,
    ) -> Result<EventId, RosterError> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let date = parse_int("date", date_raw)?;
        let limit = parse_int("limit", limit_raw)?;

        let window = self.config.days;
        let date = window
            .day(date)
            .ok_or(RosterError::DayOutOfRange { day: date, window })?;
        let limit = u32::try_from(limit)
            .ok()
            .filter(|&l| l >= 1)
            .ok_or(RosterError::InvalidLimit(limit))?;
        if self.event_index.contains_key(name) {
            return Err(RosterError::DuplicateEvent(name.to_string()));
        }

        let id = EventId(self.next_event_id);
        self.next_event_id += 1;
        self.event_index.insert(name.to_string(), id);
        self.events.insert(id, Event::new(id, name, date, limit));
        trace!(%id, name, date, limit, "event added");
        Ok(id)
    }

    /// Adds a volunteer available on every raw day string given.
    ///
    /// Returns `false` (no change) on an empty or duplicate name, or if any
    /// day fails to parse as an integer. Days that parse but fall outside
    /// the configured window are ignored: no event can ever use them.
    pub fn add_volunteer<S: AsRef<str>>(&mut self, name: &str, days_raw: &[S]) -> bool {
        self.try_add_volunteer(name, days_raw).is_ok()
    }

    /// Like [`add_volunteer`](Self::add_volunteer), reporting why it was rejected.
    pub fn try_add_volunteer<S: AsRef<str>>(
        &mut self,
        name: &str,
        days_raw: &[S],
    ) -> Result<VolunteerId, RosterError> {
        self.insert_volunteer(name, days_raw)
            .inspect_err(|err| debug!(op = "add_volunteer", name, %err, "rejected"))
    }

    fn insert_volunteer<S: AsRef<str>>(
        &mut self,
        name: &str,
        days_raw: &[S],
    ) -> Result<VolunteerId, RosterError> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.volunteer_index.contains_key(name) {
            return Err(RosterError::DuplicateVolunteer(name.to_string()));
        }
        let parsed = days_raw
            .iter()
            .map(|raw| parse_int("availability day", raw.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let window = self.config.days;
        let days: Vec<Day> = parsed.into_iter().filter_map(|d| window.day(d)).collect();

        let id = VolunteerId(self.next_volunteer_id);
        self.next_volunteer_id += 1;
        self.volunteer_index.insert(name.to_string(), id);
        self.volunteers.insert(id, Volunteer::new(id, name, days));
        trace!(%id, name, "volunteer added");
        Ok(id)
    }

    /// Removes an event, tearing down each of its matches first.
    pub fn remove_event(&mut self, name: &str) -> bool {
        self.try_remove_event(name).is_ok()
    }

    /// Like [`remove_event`](Self::remove_event), returning the removed event.
    pub fn try_remove_event(&mut self, name: &str) -> Result<Event, RosterError> {
        let event = self
            .event_index
            .get(name)
            .and_then(|id| self.events.remove(id))
            .ok_or_else(|| RosterError::EventNotFound(name.to_string()))
            .inspect_err(|err| debug!(op = "remove_event", name, %err, "rejected"))?;
        self.event_index.remove(name);

        for volunteer in self.matches.volunteers_of(event.id).to_vec() {
            self.matches.unlink(event.id, volunteer);
            if let Some(v) = self.volunteers.get_mut(&volunteer) {
                v.availability.restore(event.date);
            }
        }
        trace!(id = %event.id, name, "event removed");
        Ok(event)
    }

    /// Removes a volunteer, tearing down each of their matches first.
    pub fn remove_volunteer(&mut self, name: &str) -> bool {
        self.try_remove_volunteer(name).is_ok()
    }

    /// Like [`remove_volunteer`](Self::remove_volunteer), returning the removed volunteer.
    pub fn try_remove_volunteer(&mut self, name: &str) -> Result<Volunteer, RosterError> {
        let mut volunteer = self
            .volunteer_index
            .get(name)
            .and_then(|id| self.volunteers.remove(id))
            .ok_or_else(|| RosterError::VolunteerNotFound(name.to_string()))
            .inspect_err(|err| debug!(op = "remove_volunteer", name, %err, "rejected"))?;
        self.volunteer_index.remove(name);

        let events: Vec<EventId> = self.matches.events_of(volunteer.id).collect();
        for event in events {
            self.matches.unlink(event, volunteer.id);
            if let Some(e) = self.events.get(&event) {
                volunteer.availability.restore(e.date);
            }
        }
        trace!(id = %volunteer.id, name, "volunteer removed");
        Ok(volunteer)
    }

    /// Looks up an event by exact name.
    pub fn find_event(&self, name: &str) -> Option<&Event> {
        self.event_id(name).and_then(|id| self.events.get(&id))
    }

    /// Looks up a volunteer by exact name.
    pub fn find_volunteer(&self, name: &str) -> Option<&Volunteer> {
        self.volunteer_id(name).and_then(|id| self.volunteers.get(&id))
    }

    /// Resolves an event name to its id.
    pub fn event_id(&self, name: &str) -> Option<EventId> {
        self.event_index.get(name).copied()
    }

    /// Resolves a volunteer name to its id.
    pub fn volunteer_id(&self, name: &str) -> Option<VolunteerId> {
        self.volunteer_index.get(name).copied()
    }

    /// Event by id.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Volunteer by id.
    pub fn volunteer(&self, id: VolunteerId) -> Option<&Volunteer> {
        self.volunteers.get(&id)
    }

    /// All events, ascending by name.
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.event_index
            .values()
            .filter_map(move |id| self.events.get(id))
    }

    /// All volunteers, ascending by name.
    pub fn volunteers(&self) -> impl Iterator<Item = &Volunteer> + '_ {
        self.volunteer_index
            .values()
            .filter_map(move |id| self.volunteers.get(id))
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of volunteers.
    pub fn volunteer_count(&self) -> usize {
        self.volunteers.len()
    }

    /// Number of active matches.
    pub fn match_count(&self) -> usize {
        self.matches.match_count()
    }

    // ---- Matching ----

    /// Matches a volunteer to an event.
    ///
    /// Returns `false` (no change) if either name is unknown, the pair is
    /// already matched, the event is full, or the volunteer is not
    /// available on the event's date.
    pub fn create_match(&mut self, event_name: &str, volunteer_name: &str) -> bool {
        self.try_create_match(event_name, volunteer_name).is_ok()
    }

    /// Like [`create_match`](Self::create_match), reporting why it was rejected.
    pub fn try_create_match(
        &mut self,
        event_name: &str,
        volunteer_name: &str,
    ) -> Result<(), RosterError> {
        self.link_by_name(event_name, volunteer_name)
            .inspect_err(|err| {
                debug!(
                    op = "create_match",
                    event = event_name,
                    volunteer = volunteer_name,
                    %err,
                    "rejected"
                )
            })
    }

    fn link_by_name(
        &mut self,
        event_name: &str,
        volunteer_name: &str,
    ) -> Result<(), RosterError> {
        let (event_id, volunteer_id) = self.resolve_pair(event_name, volunteer_name)?;

        let (date, limit) = match self.events.get(&event_id) {
            Some(e) => (e.date, e.limit),
            None => return Err(RosterError::EventNotFound(event_name.to_string())),
        };
        if self.matches.contains(event_id, volunteer_id) {
            return Err(RosterError::AlreadyMatched {
                event: event_name.to_string(),
                volunteer: volunteer_name.to_string(),
            });
        }
        if self.matches.matched_count(event_id) >= limit as usize {
            return Err(RosterError::CapacityReached {
                event: event_name.to_string(),
                limit,
            });
        }
        let volunteer = self
            .volunteers
            .get_mut(&volunteer_id)
            .ok_or_else(|| RosterError::VolunteerNotFound(volunteer_name.to_string()))?;
        if !volunteer.availability.consume(date) {
            return Err(RosterError::Unavailable {
                volunteer: volunteer_name.to_string(),
                day: date,
            });
        }

        self.matches.link(event_id, volunteer_id);
        trace!(event = event_name, volunteer = volunteer_name, day = date, "matched");
        Ok(())
    }

    /// Removes the match between an event and a volunteer.
    ///
    /// Returns `false` (no change) if either name is unknown or the pair is
    /// not matched.
    pub fn remove_match(&mut self, event_name: &str, volunteer_name: &str) -> bool {
        self.try_remove_match(event_name, volunteer_name).is_ok()
    }

    /// Like [`remove_match`](Self::remove_match), reporting why it was rejected.
    pub fn try_remove_match(
        &mut self,
        event_name: &str,
        volunteer_name: &str,
    ) -> Result<(), RosterError> {
        self.unlink_by_name(event_name, volunteer_name)
            .inspect_err(|err| {
                debug!(
                    op = "remove_match",
                    event = event_name,
                    volunteer = volunteer_name,
                    %err,
                    "rejected"
                )
            })
    }

    fn unlink_by_name(
        &mut self,
        event_name: &str,
        volunteer_name: &str,
    ) -> Result<(), RosterError> {
        let (event_id, volunteer_id) = self.resolve_pair(event_name, volunteer_name)?;
        if !self.matches.contains(event_id, volunteer_id) {
            return Err(RosterError::NotMatched {
                event: event_name.to_string(),
                volunteer: volunteer_name.to_string(),
            });
        }
        self.unlink(event_id, volunteer_id);
        trace!(event = event_name, volunteer = volunteer_name, "unmatched");
        Ok(())
    }

    fn resolve_pair(
        &self,
        event_name: &str,
        volunteer_name: &str,
    ) -> Result<(EventId, VolunteerId), RosterError> {
        let event = self
            .event_id(event_name)
            .ok_or_else(|| RosterError::EventNotFound(event_name.to_string()))?;
        let volunteer = self
            .volunteer_id(volunteer_name)
            .ok_or_else(|| RosterError::VolunteerNotFound(volunteer_name.to_string()))?;
        Ok((event, volunteer))
    }

    /// Drops one edge and gives the event's day back to the volunteer.
    fn unlink(&mut self, event: EventId, volunteer: VolunteerId) {
        if !self.matches.unlink(event, volunteer) {
            return;
        }
        let date = self.events.get(&event).map(|e| e.date);
        if let (Some(date), Some(v)) = (date, self.volunteers.get_mut(&volunteer)) {
            v.availability.restore(date);
        }
    }

    /// Whether the named event and volunteer are matched.
    pub fn is_matched(&self, event_name: &str, volunteer_name: &str) -> bool {
        self.resolve_pair(event_name, volunteer_name)
            .is_ok_and(|(e, v)| self.matches.contains(e, v))
    }

    /// Volunteers matched to an event, in the order they were matched.
    pub fn matched_volunteers(&self, event: EventId) -> impl Iterator<Item = &Volunteer> + '_ {
        self.matches
            .volunteers_of(event)
            .iter()
            .filter_map(move |id| self.volunteers.get(id))
    }

    /// Events a volunteer is matched to, ascending by name.
    pub fn matched_events(&self, volunteer: VolunteerId) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .matches
            .events_of(volunteer)
            .filter_map(|id| self.events.get(&id))
            .collect();
        events.sort_by(|a, b| a.name.cmp(&b.name));
        events
    }

    /// Open slots left on the named event.
    pub fn remaining_capacity(&self, event_name: &str) -> Option<u32> {
        let event = self.find_event(event_name)?;
        Some(event.open_slots(self.matches.matched_count(event.id)))
    }

    pub(crate) fn graph(&self) -> &MatchGraph {
        &self.matches
    }

    pub(crate) fn event_index(&self) -> &BTreeMap<String, EventId> {
        &self.event_index
    }

    pub(crate) fn volunteer_index(&self) -> &BTreeMap<String, VolunteerId> {
        &self.volunteer_index
    }

    #[cfg(test)]
    pub(crate) fn graph_mut(&mut self) -> &mut MatchGraph {
        &mut self.matches
    }
}

/// Parses a raw numeric field as a 32-bit signed integer.
pub(crate) fn parse_int(field: &'static str, raw: &str) -> Result<i64, RosterError> {
    raw.parse::<i32>()
        .map(i64::from)
        .map_err(|_| RosterError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterErrorKind;
    use crate::validation::validate_roster;

    fn event_names(m: &EventManager) -> Vec<&str> {
        m.events().map(|e| e.name.as_str()).collect()
    }

    fn volunteer_names(m: &EventManager) -> Vec<&str> {
        m.volunteers().map(|v| v.name.as_str()).collect()
    }

    fn names(m: &EventManager, event: &str) -> Vec<String> {
        let id = m.event_id(event).unwrap();
        m.matched_volunteers(id).map(|v| v.name.clone()).collect()
    }

    #[test]
    fn test_add_event_validation() {
        let mut m = EventManager::new();
        assert!(!m.add_event("", "7", "10"));
        assert!(!m.add_event("Trip", "seven", "10"));
        assert!(!m.add_event("Trip", "7", "ten"));
        assert!(!m.add_event("Trip", "0", "10"));
        assert!(!m.add_event("Trip", "31", "10"));
        assert!(!m.add_event("Trip", "7", "0"));
        assert!(!m.add_event("Trip", "7", "-3"));
        assert!(!m.add_event("Trip", " 7", "10"));
        assert!(!m.add_event("Trip", "7", "99999999999"));
        assert_eq!(m.event_count(), 0);

        assert!(m.add_event("Trip", "1", "1"));
        assert!(m.add_event("Fair", "30", "2147483647"));
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_add_event_error_kinds() {
        let mut m = EventManager::new();
        assert_eq!(
            m.try_add_event("", "7", "1").unwrap_err().kind(),
            RosterErrorKind::Validation
        );
        assert_eq!(
            m.try_add_event("Trip", "31", "1").unwrap_err(),
            RosterError::DayOutOfRange {
                day: 31,
                window: m.config().days
            }
        );
        assert_eq!(
            m.try_add_event("Trip", "7", "0").unwrap_err(),
            RosterError::InvalidLimit(0)
        );
        m.try_add_event("Trip", "7", "1").unwrap();
        assert_eq!(
            m.try_add_event("Trip", "8", "2").unwrap_err(),
            RosterError::DuplicateEvent("Trip".into())
        );
    }

    #[test]
    fn test_duplicate_event_rejected() {
        let mut m = EventManager::new();
        assert!(m.add_event("Field Trip", "7", "10"));
        assert!(!m.add_event("Field Trip", "8", "3"));
        assert_eq!(m.event_count(), 1);
        assert_eq!(m.find_event("Field Trip").unwrap().date, 7);

        // case-sensitive keys
        assert!(m.add_event("field trip", "8", "3"));
        assert_eq!(m.event_count(), 2);
    }

    #[test]
    fn test_events_sorted_by_name() {
        let mut m = EventManager::new();
        for name in ["Picnic", "Bake Sale", "Zoo", "Auction", "Marathon"] {
            assert!(m.add_event(name, "5", "2"));
            let listed = event_names(&m);
            let mut sorted = listed.clone();
            sorted.sort();
            assert_eq!(listed, sorted);
        }
        assert_eq!(
            event_names(&m),
            vec!["Auction", "Bake Sale", "Marathon", "Picnic", "Zoo"]
        );
    }

    #[test]
    fn test_volunteers_sorted_by_name() {
        let mut m = EventManager::new();
        assert!(m.add_volunteer("Sonu", &["1"]));
        assert!(m.add_volunteer("Mingi", &["2"]));
        assert!(m.add_volunteer("Ana", &["3"]));
        assert_eq!(volunteer_names(&m), vec!["Ana", "Mingi", "Sonu"]);
    }

    #[test]
    fn test_add_volunteer_validation() {
        let mut m = EventManager::new();
        assert!(!m.add_volunteer("", &["1"]));
        assert!(!m.add_volunteer("Mingi", &["5", "x", "30"]));
        assert_eq!(m.volunteer_count(), 0); // partial parse discarded

        assert!(m.add_volunteer("Mingi", &["5", "23", "30"]));
        assert!(!m.add_volunteer("Mingi", &["1"]));
        assert_eq!(
            m.try_add_volunteer("Mingi", &["1"]).unwrap_err().kind(),
            RosterErrorKind::Duplicate
        );

        let empty: [&str; 0] = [];
        assert!(m.add_volunteer("Idle", &empty));
        assert_eq!(m.volunteer_count(), 2);
    }

    #[test]
    fn test_out_of_window_days_ignored() {
        let mut m = EventManager::new();
        assert!(m.add_volunteer("Mingi", &["0", "5", "31", "-2"]));
        assert_eq!(m.find_volunteer("Mingi").unwrap().available_days(), vec![5]);
    }

    #[test]
    fn test_find_not_found() {
        let m = EventManager::new();
        assert!(m.find_event("Nope").is_none());
        assert!(m.find_volunteer("Nope").is_none());
    }

    #[test]
    fn test_scenario_field_trip() {
        let mut m = EventManager::new();
        assert!(m.add_event("Field Trip", "7", "10"));
        assert!(m.add_volunteer("Mingi", &["5", "23", "30"]));
        assert!(!m.create_match("Field Trip", "Mingi")); // day 7 never listed

        assert!(m.add_volunteer("Sonu", &["1", "2", "3", "4", "5", "6", "7"]));
        assert!(m.create_match("Field Trip", "Sonu"));
        assert_eq!(
            m.try_create_match("Field Trip", "Sonu").unwrap_err(),
            RosterError::AlreadyMatched {
                event: "Field Trip".into(),
                volunteer: "Sonu".into()
            }
        );
        assert_eq!(names(&m, "Field Trip"), vec!["Sonu"]);
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_create_match_effects() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "3");
        m.add_volunteer("Ana", &["12", "13"]);
        assert!(m.create_match("Fair", "Ana"));

        let fair = m.event_id("Fair").unwrap();
        let ana = m.volunteer_id("Ana").unwrap();
        assert_eq!(m.graph().volunteers_of(fair), &[ana]);
        assert_eq!(m.graph().events_of(ana).collect::<Vec<_>>(), vec![fair]);
        assert!(!m.find_volunteer("Ana").unwrap().is_available(12));
        assert!(m.find_volunteer("Ana").unwrap().is_available(13));
        assert!(m.is_matched("Fair", "Ana"));
        assert_eq!(m.remaining_capacity("Fair"), Some(2));
    }

    #[test]
    fn test_capacity_limit() {
        let mut m = EventManager::new();
        m.add_event("Solo", "9", "1");
        m.add_volunteer("Ana", &["9"]);
        m.add_volunteer("Ben", &["9"]);

        assert!(m.create_match("Solo", "Ana"));
        assert_eq!(
            m.try_create_match("Solo", "Ben").unwrap_err(),
            RosterError::CapacityReached {
                event: "Solo".into(),
                limit: 1
            }
        );
        assert!(m.find_volunteer("Ben").unwrap().is_available(9));
        assert_eq!(names(&m, "Solo"), vec!["Ana"]);
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_same_day_conflict() {
        let mut m = EventManager::new();
        m.add_event("Morning", "4", "5");
        m.add_event("Evening", "4", "5");
        m.add_volunteer("Ana", &["4"]);

        assert!(m.create_match("Morning", "Ana"));
        assert_eq!(
            m.try_create_match("Evening", "Ana").unwrap_err(),
            RosterError::Unavailable {
                volunteer: "Ana".into(),
                day: 4
            }
        );
        assert_eq!(m.match_count(), 1);
    }

    #[test]
    fn test_match_not_found() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "3");
        m.add_volunteer("Ana", &["12"]);
        assert_eq!(
            m.try_create_match("Nope", "Ana").unwrap_err().kind(),
            RosterErrorKind::NotFound
        );
        assert!(!m.create_match("Fair", "Nope"));
        assert!(!m.remove_match("Fair", "Nope"));
        assert_eq!(m.match_count(), 0);
    }

    #[test]
    fn test_match_order_preserved() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "3");
        for name in ["Zed", "Ana", "Moe"] {
            m.add_volunteer(name, &["12"]);
            assert!(m.create_match("Fair", name));
        }
        assert_eq!(names(&m, "Fair"), vec!["Zed", "Ana", "Moe"]);
    }

    #[test]
    fn test_remove_match() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "3");
        m.add_volunteer("Ana", &["12"]);
        m.create_match("Fair", "Ana");

        assert!(m.remove_match("Fair", "Ana"));
        assert!(!m.is_matched("Fair", "Ana"));
        assert!(m.find_volunteer("Ana").unwrap().is_available(12));
        assert_eq!(m.remaining_capacity("Fair"), Some(3));
        assert_eq!(
            m.try_remove_match("Fair", "Ana").unwrap_err(),
            RosterError::NotMatched {
                event: "Fair".into(),
                volunteer: "Ana".into()
            }
        );

        // the freed day can be matched again
        assert!(m.create_match("Fair", "Ana"));
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_remove_event_cascades() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "5");
        m.add_event("Gala", "13", "5");
        m.add_volunteer("Ana", &["12", "13"]);
        m.add_volunteer("Ben", &["12"]);
        m.create_match("Fair", "Ana");
        m.create_match("Fair", "Ben");
        m.create_match("Gala", "Ana");

        assert!(m.remove_event("Fair"));
        assert!(m.find_event("Fair").is_none());
        assert!(m.find_volunteer("Ana").unwrap().is_available(12));
        assert!(m.find_volunteer("Ben").unwrap().is_available(12));
        assert!(m.is_matched("Gala", "Ana"));
        assert_eq!(m.match_count(), 1);
        assert!(!m.serialize_events().contains("Fair"));
        assert!(!m.remove_event("Fair"));
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_remove_volunteer_cascades() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "1");
        m.add_event("Gala", "13", "5");
        m.add_volunteer("Ana", &["12", "13"]);
        m.add_volunteer("Ben", &["12"]);
        m.create_match("Fair", "Ana");
        m.create_match("Gala", "Ana");

        let removed = m.try_remove_volunteer("Ana").unwrap();
        assert_eq!(removed.name, "Ana");
        assert!(m.find_volunteer("Ana").is_none());
        assert_eq!(m.match_count(), 0);
        assert_eq!(m.remaining_capacity("Fair"), Some(1));

        // capacity was released
        assert!(m.create_match("Fair", "Ben"));
        assert!(!m.remove_volunteer("Ana"));
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_remove_unknown_leaves_roster_untouched() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "2");
        m.add_volunteer("Ana", &["12"]);
        m.create_match("Fair", "Ana");
        let before = m.to_text();

        assert_eq!(
            m.try_remove_event("Gala").unwrap_err(),
            RosterError::EventNotFound("Gala".into())
        );
        assert_eq!(
            m.try_remove_volunteer("Ben").unwrap_err(),
            RosterError::VolunteerNotFound("Ben".into())
        );
        assert_eq!(m.to_text(), before);
        assert!(m.is_matched("Fair", "Ana"));
    }

    #[test]
    fn test_removed_volunteer_has_days_restored() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "2");
        m.add_volunteer("Ana", &["12", "13"]);
        m.create_match("Fair", "Ana");

        let removed = m.try_remove_volunteer("Ana").unwrap();
        assert_eq!(removed.available_days(), vec![12, 13]);
        assert_eq!(m.remaining_capacity("Fair"), Some(2));
        assert!(validate_roster(&m).is_ok());
    }

    #[test]
    fn test_readd_after_remove() {
        let mut m = EventManager::new();
        m.add_event("Fair", "12", "1");
        let first = m.event_id("Fair").unwrap();
        m.remove_event("Fair");
        m.add_event("Fair", "14", "1");
        let second = m.event_id("Fair").unwrap();
        assert_ne!(first, second); // ids are not reused
        assert_eq!(m.find_event("Fair").unwrap().date, 14);
    }

    #[test]
    fn test_matched_events_sorted() {
        let mut m = EventManager::new();
        m.add_event("Zoo", "1", "1");
        m.add_event("Art", "2", "1");
        m.add_volunteer("Ana", &["1", "2"]);
        m.create_match("Zoo", "Ana");
        m.create_match("Art", "Ana");

        let ana = m.volunteer_id("Ana").unwrap();
        let events: Vec<&str> = m
            .matched_events(ana)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(events, vec!["Art", "Zoo"]);
    }

    #[test]
    fn test_custom_window() {
        let config = RosterConfig::new().with_days(1, 31);
        let mut m = EventManager::with_config(config).unwrap();
        assert!(m.add_event("New Year's Eve", "31", "4"));
        assert!(EventManager::with_config(RosterConfig::new().with_days(0, 5)).is_err());
    }

    #[test]
    fn test_capacity_holds_under_mixed_operations() {
        let mut m = EventManager::new();
        m.add_event("A", "3", "2");
        m.add_event("B", "3", "1");
        for (i, name) in ["p", "q", "r", "s"].iter().enumerate() {
            let own_day = (i + 4).to_string();
            m.add_volunteer(name, &["3", own_day.as_str()]);
        }
        let ops: [(&str, &str, bool); 8] = [
            ("A", "p", true),
            ("A", "q", true),
            ("A", "r", true),
            ("B", "r", true),
            ("B", "s", true),
            ("A", "q", false),
            ("A", "s", true),
            ("B", "p", true),
        ];
        for (event, volunteer, create) in ops {
            if create {
                m.create_match(event, volunteer);
            } else {
                m.remove_match(event, volunteer);
            }
            assert!(validate_roster(&m).is_ok());
            for e in m.events() {
                assert!(m.graph().matched_count(e.id) <= e.limit as usize);
            }
        }
        assert_eq!(names(&m, "A"), vec!["p", "s"]);
        assert_eq!(names(&m, "B"), vec!["r"]);
    }
}
