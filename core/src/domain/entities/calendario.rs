//! School calendar events ("calendario").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar entry such as a holiday or a school event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarioEvento {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub all_day: bool,

    /// Free-form recurrence rule for repeating events
    pub recurrence: Option<String>,
}

/// Fields supplied when creating an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalendarioEvento {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub recurrence: Option<String>,
}

impl NewCalendarioEvento {
    /// An event may not end before it starts
    pub fn has_valid_range(&self) -> bool {
        self.end_date.map_or(true, |end| end >= self.start_date)
    }
}

/// Date window for listing events; both bounds are inclusive on `start_date`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarioFilter {
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

impl CalendarioFilter {
    pub fn matches(&self, event: &CalendarioEvento) -> bool {
        self.from.map_or(true, |from| event.start_date >= from)
            && self.to.map_or(true, |to| event.start_date <= to)
    }
}
