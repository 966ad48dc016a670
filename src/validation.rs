//! Invariant audit for rosters.
//!
//! [`EventManager`] keeps its invariants by construction; this module
//! re-derives them from scratch so tests and callers can verify a roster
//! in one call. Detects:
//! - Name indexes out of step with the entity arenas
//! - Matches referencing removed entities
//! - Matches recorded on only one side
//! - Events over their volunteer limit
//! - Volunteers matched twice on the same day
//! - Consumed days that do not correspond to a match (or vice versa)

use std::collections::{BTreeSet, HashMap};

use crate::models::{Day, EventId};
use crate::roster::EventManager;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A violated roster invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A name index entry disagrees with the arena.
    IndexMismatch,
    /// A match references an entity that does not exist.
    DanglingReference,
    /// A match is present on one side of the graph only.
    AsymmetricMatch,
    /// An event holds more volunteers than its limit.
    CapacityExceeded,
    /// A volunteer is matched twice on one day, or twice to one event.
    DoubleBooked,
    /// Availability flags disagree with the volunteer's matches.
    AvailabilityMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits every roster invariant.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &EventManager) -> ValidationResult {
    let mut errors = Vec::new();

    check_indexes(roster, &mut errors);
    check_graph(roster, &mut errors);
    check_availability(roster, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_indexes(roster: &EventManager, errors: &mut Vec<ValidationError>) {
    if roster.event_index().len() != roster.event_count() {
        errors.push(ValidationError::new(
            ValidationErrorKind::IndexMismatch,
            format!(
                "{} indexed event names for {} events",
                roster.event_index().len(),
                roster.event_count()
            ),
        ));
    }
    for (name, &id) in roster.event_index() {
        match roster.event(id) {
            Some(e) if e.name == *name => {}
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::IndexMismatch,
                format!("Event name '{name}' does not resolve to {id}"),
            )),
        }
    }

    if roster.volunteer_index().len() != roster.volunteer_count() {
        errors.push(ValidationError::new(
            ValidationErrorKind::IndexMismatch,
            format!(
                "{} indexed volunteer names for {} volunteers",
                roster.volunteer_index().len(),
                roster.volunteer_count()
            ),
        ));
    }
    for (name, &id) in roster.volunteer_index() {
        match roster.volunteer(id) {
            Some(v) if v.name == *name => {}
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::IndexMismatch,
                format!("Volunteer name '{name}' does not resolve to {id}"),
            )),
        }
    }
}

fn check_graph(roster: &EventManager, errors: &mut Vec<ValidationError>) {
    let graph = roster.graph();

    for event_id in graph.event_keys() {
        let Some(event) = roster.event(event_id) else {
            errors.push(ValidationError::new(
                ValidationErrorKind::DanglingReference,
                format!("Match graph references removed event {event_id}"),
            ));
            continue;
        };

        let volunteers = graph.volunteers_of(event_id);
        if volunteers.len() > event.limit as usize {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapacityExceeded,
                format!(
                    "Event '{}' has {} volunteers (limit {})",
                    event.name,
                    volunteers.len(),
                    event.limit
                ),
            ));
        }

        let mut seen = BTreeSet::new();
        for &volunteer_id in volunteers {
            if !seen.insert(volunteer_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DoubleBooked,
                    format!("Event '{}' lists {volunteer_id} twice", event.name),
                ));
            }
            if roster.volunteer(volunteer_id).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingReference,
                    format!("Event '{}' references removed {volunteer_id}", event.name),
                ));
            }
            if !graph.volunteer_side_has(volunteer_id, event_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AsymmetricMatch,
                    format!(
                        "Event '{}' lists {volunteer_id}, which does not list it back",
                        event.name
                    ),
                ));
            }
        }
    }

    for volunteer_id in graph.volunteer_keys() {
        if roster.volunteer(volunteer_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DanglingReference,
                format!("Match graph references removed volunteer {volunteer_id}"),
            ));
        }
        for event_id in graph.events_of(volunteer_id) {
            if !graph.event_side_has(event_id, volunteer_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AsymmetricMatch,
                    format!("{volunteer_id} lists {event_id}, which does not list it back"),
                ));
            }
        }
    }
}

fn check_availability(roster: &EventManager, errors: &mut Vec<ValidationError>) {
    for volunteer in roster.volunteers() {
        // day → events matched on that day
        let mut matched_days: HashMap<Day, Vec<EventId>> = HashMap::new();
        for event_id in roster.graph().events_of(volunteer.id) {
            if let Some(event) = roster.event(event_id) {
                matched_days.entry(event.date).or_default().push(event_id);
            }
        }

        for (&day, events) in &matched_days {
            if events.len() > 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DoubleBooked,
                    format!(
                        "Volunteer '{}' is matched to {} events on day {day}",
                        volunteer.name,
                        events.len()
                    ),
                ));
            }
            if volunteer.availability.is_available(day) || !volunteer.availability.is_listed(day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AvailabilityMismatch,
                    format!(
                        "Volunteer '{}' is matched on day {day} but the day is not consumed",
                        volunteer.name
                    ),
                ));
            }
        }

        for day in volunteer.availability.consumed_days() {
            if !matched_days.contains_key(&day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AvailabilityMismatch,
                    format!(
                        "Volunteer '{}' has day {day} consumed without a match",
                        volunteer.name
                    ),
                ));
            }
        }
    }
}
