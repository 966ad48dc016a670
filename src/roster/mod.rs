//! Roster management.
//!
//! [`EventManager`] owns the events, the volunteers, and every match
//! between them. All mutation goes through it.
//!
//! # Usage
//!
//! ```
//! use u_roster::roster::{EventManager, RosterSummary};
//!
//! let mut roster = EventManager::new();
//! roster.add_event("Bake Sale", "12", "2");
//! roster.add_volunteer("Ana", &["12", "13"]);
//! roster.create_match("Bake Sale", "Ana");
//!
//! let summary = RosterSummary::calculate(&roster);
//! assert_eq!(summary.open_slots, 1);
//!
//! let reloaded = EventManager::from_text(&roster.to_text()).unwrap();
//! assert!(reloaded.is_matched("Bake Sale", "Ana"));
//! ```

mod manager;
mod summary;
mod text;
mod view;

pub use manager::EventManager;
pub use summary::RosterSummary;
pub use text::{parse_records, RosterRecord};
pub use view::{EventView, VolunteerView};
