//! Line-oriented text form of a roster.
//!
//! # Format
//!
//! One record per line, fields separated by `;`:
//!
//! | Record | Layout |
//! |--------|--------|
//! | Volunteer | `v;<name>;<d1>,<d2>,...` (still-available days, ascending) |
//! | Event | `e;<name>;<date>;<limit>;<vol1>;<vol2>;...` (volunteers in match order) |
//!
//! A volunteer without available days keeps the trailing `;`. An event
//! without matches ends at its limit.
//!
//! Days consumed by a match are not listed on the volunteer line; the
//! loader gives them back before replaying the event lines, so a
//! serialized roster loads into an equal roster. Reading and writing
//! files is left to the caller.
//!
//! Names containing `;`, `,` or line breaks are not escaped and do not
//! survive a round trip.

use std::collections::HashMap;
use std::fmt;

use crate::config::RosterConfig;
use crate::error::LoadError;
use crate::models::{Event, Volunteer};

use super::manager::parse_int;
use super::EventManager;

const FIELD_SEP: char = ';';
const DAY_SEP: char = ',';

/// A single parsed (or to-be-written) line of roster text.
///
/// Numeric fields stay raw; the roster validates them when the record
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterRecord {
    /// `v;` line.
    Volunteer { name: String, days: Vec<String> },
    /// `e;` line.
    Event {
        name: String,
        date: String,
        limit: String,
        volunteers: Vec<String>,
    },
}

impl RosterRecord {
    /// Parses one non-blank line. `line` is the 1-based line number used in errors.
    pub fn parse_line(line: usize, text: &str) -> Result<Self, LoadError> {
        let mut fields = text.split(FIELD_SEP);
        let tag = fields.next().unwrap_or_default();
        let mut required = |field: &'static str| {
            fields
                .next()
                .map(str::to_string)
                .ok_or(LoadError::MissingField { line, field })
        };

        match tag {
            "v" => {
                let name = required("name")?;
                let days = fields
                    .next()
                    .map(|days| {
                        days.split(DAY_SEP)
                            .filter(|d| !d.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Ok(Self::Volunteer { name, days })
            }
            "e" => {
                let name = required("name")?;
                let date = required("date")?;
                let limit = required("limit")?;
                let volunteers = fields
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(Self::Event {
                    name,
                    date,
                    limit,
                    volunteers,
                })
            }
            other => Err(LoadError::UnknownRecord {
                line,
                tag: other.to_string(),
            }),
        }
    }

    fn from_volunteer(volunteer: &Volunteer) -> Self {
        Self::Volunteer {
            name: volunteer.name.clone(),
            days: volunteer
                .availability
                .available_days()
                .map(|d| d.to_string())
                .collect(),
        }
    }

    fn from_event(manager: &EventManager, event: &Event) -> Self {
        Self::Event {
            name: event.name.clone(),
            date: event.date.to_string(),
            limit: event.limit.to_string(),
            volunteers: manager
                .matched_volunteers(event.id)
                .map(|v| v.name.clone())
                .collect(),
        }
    }
}

impl fmt::Display for RosterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volunteer { name, days } => {
                write!(f, "v{FIELD_SEP}{name}{FIELD_SEP}")?;
                for (i, day) in days.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{DAY_SEP}")?;
                    }
                    write!(f, "{day}")?;
                }
                Ok(())
            }
            Self::Event {
                name,
                date,
                limit,
                volunteers,
            } => {
                write!(f, "e{FIELD_SEP}{name}{FIELD_SEP}{date}{FIELD_SEP}{limit}")?;
                for volunteer in volunteers {
                    write!(f, "{FIELD_SEP}{volunteer}")?;
                }
                Ok(())
            }
        }
    }
}

/// Parses roster text into records, skipping blank lines.
pub fn parse_records(text: &str) -> Result<Vec<(usize, RosterRecord)>, LoadError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let line_no = i + 1;
            RosterRecord::parse_line(line_no, line.trim_end_matches('\r'))
                .map(|record| (line_no, record))
        })
        .collect()
}

impl EventManager {
    /// Volunteer lines, ascending by name, joined by `\n`.
    pub fn serialize_volunteers(&self) -> String {
        join_lines(self.volunteers().map(RosterRecord::from_volunteer))
    }

    /// Event lines, ascending by name, joined by `\n`.
    pub fn serialize_events(&self) -> String {
        join_lines(self.events().map(|e| RosterRecord::from_event(self, e)))
    }

    /// Volunteer lines followed by event lines.
    pub fn to_text(&self) -> String {
        let volunteers = self.serialize_volunteers();
        let events = self.serialize_events();
        match (volunteers.is_empty(), events.is_empty()) {
            (true, _) => events,
            (_, true) => volunteers,
            _ => format!("{volunteers}\n{events}"),
        }
    }

    /// Rebuilds a default-configured roster from its text form.
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        Self::from_text_with_config(text, RosterConfig::default())
    }

    /// Rebuilds a roster from its text form.
    ///
    /// Entities are added in line order, then every event line's matches
    /// are replayed in match order. The first rejected record aborts the
    /// load.
    pub fn from_text_with_config(text: &str, config: RosterConfig) -> Result<Self, LoadError> {
        let records = parse_records(text)?;
        let mut roster = Self::with_config(config).map_err(LoadError::Config)?;

        // Days consumed by matches are missing from the volunteer lines.
        // Invalid dates are left for the event line itself to reject.
        let window = roster.config().days;
        let mut consumed: HashMap<&str, Vec<&str>> = HashMap::new();
        for (_, record) in &records {
            if let RosterRecord::Event {
                date, volunteers, ..
            } = record
            {
                let valid = parse_int("date", date)
                    .ok()
                    .and_then(|d| window.day(d))
                    .is_some();
                if !valid {
                    continue;
                }
                for volunteer in volunteers {
                    consumed
                        .entry(volunteer.as_str())
                        .or_default()
                        .push(date.as_str());
                }
            }
        }

        for (line, record) in &records {
            let applied = match record {
                RosterRecord::Volunteer { name, days } => {
                    let mut all: Vec<&str> = days.iter().map(String::as_str).collect();
                    if let Some(extra) = consumed.get(name.as_str()) {
                        all.extend(extra.iter().copied());
                    }
                    roster.try_add_volunteer(name, all.as_slice()).map(|_| ())
                }
                RosterRecord::Event {
                    name, date, limit, ..
                } => roster.try_add_event(name, date, limit).map(|_| ()),
            };
            applied.map_err(|source| LoadError::Rejected {
                line: *line,
                source,
            })?;
        }

        for (line, record) in &records {
            if let RosterRecord::Event {
                name, volunteers, ..
            } = record
            {
                for volunteer in volunteers {
                    roster
                        .try_create_match(name, volunteer)
                        .map_err(|source| LoadError::Rejected {
                            line: *line,
                            source,
                        })?;
                }
            }
        }

        Ok(roster)
    }
}

fn join_lines(records: impl Iterator<Item = RosterRecord>) -> String {
    records
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
