//! Staffing indicators.
//!
//! | Indicator | Definition |
//! |-----------|-----------|
//! | Total Slots | Sum of event limits |
//! | Open Slots | Total slots minus matches |
//! | Fill Rate | Matches / total slots |
//! | Fully Staffed | Events with no open slot |
//! | Unstaffed | Events with no match |
//! | Idle | Volunteers with no match |

use super::EventManager;

/// Roster staffing summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    /// Number of events.
    pub event_count: usize,
    /// Number of volunteers.
    pub volunteer_count: usize,
    /// Number of active matches.
    pub match_count: usize,
    /// Sum of all event limits.
    pub total_slots: u64,
    /// Slots not yet filled.
    pub open_slots: u64,
    /// Fraction of slots filled (0.0..1.0). 0.0 for a roster without events.
    pub fill_rate: f64,
    /// Events at their limit, ascending by name.
    pub fully_staffed: Vec<String>,
    /// Events with no volunteers, ascending by name.
    pub unstaffed: Vec<String>,
    /// Volunteers with no matches, ascending by name.
    pub idle_volunteers: Vec<String>,
}

impl RosterSummary {
    /// Computes the summary of a roster.
    pub fn calculate(roster: &EventManager) -> Self {
        let mut total_slots: u64 = 0;
        let mut fully_staffed = Vec::new();
        let mut unstaffed = Vec::new();

        for event in roster.events() {
            total_slots += u64::from(event.limit);
            let matched = roster.graph().matched_count(event.id);
            if matched == 0 {
                unstaffed.push(event.name.clone());
            }
            if !event.has_room(matched) {
                fully_staffed.push(event.name.clone());
            }
        }

        let idle_volunteers = roster
            .volunteers()
            .filter(|v| roster.graph().events_of(v.id).next().is_none())
            .map(|v| v.name.clone())
            .collect();

        let match_count = roster.match_count();
        let open_slots = total_slots.saturating_sub(match_count as u64);
        let fill_rate = if total_slots == 0 {
            0.0
        } else {
            match_count as f64 / total_slots as f64
        };

        Self {
            event_count: roster.event_count(),
            volunteer_count: roster.volunteer_count(),
            match_count,
            total_slots,
            open_slots,
            fill_rate,
            fully_staffed,
            unstaffed,
            idle_volunteers,
        }
    }

    /// Whether every event has reached its limit.
    pub fn is_fully_staffed(&self) -> bool {
        self.open_slots == 0
    }
}
