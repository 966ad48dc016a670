//! Roster configuration.
//!
//! Every field has a default, so an empty document deserializes to the
//! standard 30-day roster.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::DayWindow;

/// Settings a roster is created with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Days events may be scheduled on (default: 1..=30).
    pub days: DayWindow,
}

impl RosterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the valid day window.
    pub fn with_days(mut self, first: u8, last: u8) -> Self {
        self.days = DayWindow::new(first, last);
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.days.first == 0 {
            return Err(RosterError::InvalidConfig(
                "first day must be at least 1".into(),
            ));
        }
        if self.days.first > self.days.last {
            return Err(RosterError::InvalidConfig(format!(
                "first day {} is after last day {}",
                self.days.first, self.days.last
            )));
        }
        Ok(())
    }
}
