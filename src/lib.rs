//! Volunteer rostering for the U-Engine ecosystem.
//!
//! Matches capacity-limited events to volunteers who are available on
//! specific days, keeping the event ↔ volunteer match graph consistent
//! through every add, remove, match, and unmatch.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Event`, `Volunteer`, `Availability`,
//!   `DayWindow`, `MatchGraph`
//! - **`roster`**: `EventManager` operations, text serialization,
//!   display views, staffing summary
//! - **`validation`**: Invariant audit of a roster (capacity, symmetry,
//!   availability consistency)
//! - **`config`**, **`error`**: Roster settings and error types
//!
//! # Invariants
//!
//! - Event and volunteer names are unique within their collection.
//! - No event holds more volunteers than its limit.
//! - A volunteer's day is consumed iff they are matched to an event on that day.
//! - Every match is visible from both the event and the volunteer.

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod validation;

pub use config::RosterConfig;
pub use error::{LoadError, RosterError, RosterErrorKind};
pub use roster::EventManager;
