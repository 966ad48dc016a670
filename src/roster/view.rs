//! Read-only views for report rendering.
//!
//! Display code never touches entities or the match graph directly; it
//! gets these owned snapshots, with cross-references already resolved
//! to names.

use serde::Serialize;

use crate::models::Day;

use super::EventManager;

/// Snapshot of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    /// Event name.
    pub name: String,
    /// Day of the event.
    pub date: Day,
    /// Volunteer limit.
    pub limit: u32,
    /// Matched volunteer names, in match order.
    pub volunteers: Vec<String>,
}

/// Snapshot of one volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteerView {
    /// Volunteer name.
    pub name: String,
    /// Days still available, ascending.
    pub available_days: Vec<Day>,
    /// Matched event names, ascending.
    pub events: Vec<String>,
}

impl EventManager {
    /// Views of all events, ascending by name.
    pub fn event_views(&self) -> Vec<EventView> {
        self.events()
            .map(|e| EventView {
                name: e.name.clone(),
                date: e.date,
                limit: e.limit,
                volunteers: self
                    .matched_volunteers(e.id)
                    .map(|v| v.name.clone())
                    .collect(),
            })
            .collect()
    }

    /// Views of all volunteers, ascending by name.
    pub fn volunteer_views(&self) -> Vec<VolunteerView> {
        self.volunteers()
            .map(|v| VolunteerView {
                name: v.name.clone(),
                available_days: v.available_days(),
                events: self
                    .matched_events(v.id)
                    .into_iter()
                    .map(|e| e.name.clone())
                    .collect(),
            })
            .collect()
    }
}
