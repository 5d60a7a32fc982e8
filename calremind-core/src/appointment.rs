//! The appointment record persisted by the store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::datetime::parse_datetime;
use crate::error::CalremindResult;

/// A single appointment, as stored in the data file.
///
/// Dates and times are kept as the strings the caller supplied. They are only
/// parsed when a reminder window is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub reminder_set: bool,
    /// YYYY-MM-DD HH:MM, empty when no reminder is set
    #[serde(default)]
    pub reminder_time: String,
}

/// Fields supplied by the caller when creating an appointment.
#[derive(Debug, Clone, Default)]
pub struct NewAppointment {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub location: String,
}

impl NewAppointment {
    pub fn new(title: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        NewAppointment {
            title: title.into(),
            date: date.into(),
            time: time.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl Appointment {
    /// Build a new record with a fresh id and no reminder.
    pub fn create(new: NewAppointment) -> Self {
        Appointment {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            date: new.date,
            time: new.time,
            description: new.description,
            location: new.location,
            reminder_set: false,
            reminder_time: String::new(),
        }
    }

    /// The appointment's own scheduled moment (`date` + `time`).
    pub fn scheduled_at(&self) -> CalremindResult<NaiveDateTime> {
        parse_datetime(&format!("{} {}", self.date, self.time))
    }

    /// The parsed reminder time, if one is set.
    pub fn reminder_at(&self) -> Option<CalremindResult<NaiveDateTime>> {
        if !self.reminder_set || self.reminder_time.is_empty() {
            return None;
        }
        Some(parse_datetime(&self.reminder_time))
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} {})", self.title, self.date, self.time)
    }
}
