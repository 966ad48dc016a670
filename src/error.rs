//! Error types for roster operations and text loading.

use thiserror::Error;

use crate::models::{Day, DayWindow};

/// Coarse failure categories of roster operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterErrorKind {
    /// Malformed input: empty name, bad number, out-of-range value.
    Validation,
    /// Name collision on add.
    Duplicate,
    /// Referenced event or volunteer does not exist.
    NotFound,
    /// Capacity or availability rule would be broken.
    Constraint,
}

/// Why a roster operation was rejected.
///
/// A rejected operation never mutates the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} is not an integer: {raw:?}")]
    InvalidNumber { field: &'static str, raw: String },

    #[error("day {day} is outside {window}")]
    DayOutOfRange { day: i64, window: DayWindow },

    #[error("volunteer limit must be at least 1, got {0}")]
    InvalidLimit(i64),

    #[error("event already exists: {0}")]
    DuplicateEvent(String),

    #[error("volunteer already exists: {0}")]
    DuplicateVolunteer(String),

    #[error("no such event: {0}")]
    EventNotFound(String),

    #[error("no such volunteer: {0}")]
    VolunteerNotFound(String),

    #[error("event '{event}' is full ({limit} volunteers)")]
    CapacityReached { event: String, limit: u32 },

    #[error("volunteer '{volunteer}' is not available on day {day}")]
    Unavailable { volunteer: String, day: Day },

    #[error("'{volunteer}' is already matched to '{event}'")]
    AlreadyMatched { event: String, volunteer: String },

    #[error("'{volunteer}' is not matched to '{event}'")]
    NotMatched { event: String, volunteer: String },

    #[error("invalid roster config: {0}")]
    InvalidConfig(String),
}

impl RosterError {
    /// Failure category of this error.
    pub fn kind(&self) -> RosterErrorKind {
        match self {
            Self::EmptyName
            | Self::InvalidNumber { .. }
            | Self::DayOutOfRange { .. }
            | Self::InvalidLimit(_)
            | Self::InvalidConfig(_) => RosterErrorKind::Validation,
            Self::DuplicateEvent(_) | Self::DuplicateVolunteer(_) => RosterErrorKind::Duplicate,
            Self::EventNotFound(_) | Self::VolunteerNotFound(_) => RosterErrorKind::NotFound,
            Self::CapacityReached { .. }
            | Self::Unavailable { .. }
            | Self::AlreadyMatched { .. }
            | Self::NotMatched { .. } => RosterErrorKind::Constraint,
        }
    }
}

/// Why serialized roster text could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(RosterError),

    #[error("line {line}: unknown record type {tag:?}")]
    UnknownRecord { line: usize, tag: String },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: RosterError,
    },
}
