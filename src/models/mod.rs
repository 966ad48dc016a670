//! Roster domain models.
//!
//! Plain data types for events, volunteers, day availability, and the
//! match graph linking them. The models enforce nothing across entities;
//! cross-entity invariants are maintained by [`crate::roster::EventManager`].
//!
//! # Domain Mappings
//!
//! | u-roster | Community | Healthcare | Retail |
//! |----------|-----------|------------|--------|
//! | Event | Field Trip | Clinic Session | Store Shift |
//! | Volunteer | Helper | Nurse | Associate |
//! | Day | Day of month | Rota day | Business day |
//! | Match | Sign-up | Booking | Assignment |

mod calendar;
mod event;
mod matching;
mod volunteer;

pub use calendar::{Availability, Day, DayWindow};
pub use event::{Event, EventId};
pub use matching::MatchGraph;
pub use volunteer::{Volunteer, VolunteerId};
