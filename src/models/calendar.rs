use super::decode::{Record, optional_text};
use super::timestamp::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A scheduled economic release as served by `GET /api/calendar`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarEvent {
    pub time: String,
    pub pair: String,
    /// Raw impact string; classified at display time.
    #[serde(default)]
    pub impact: String,
    pub title: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub forecast: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub previous: Option<String>,
}

impl CalendarEvent {
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.time)
    }
}

impl Record for CalendarEvent {}

/// Envelope of `GET /api/calendar`.
#[derive(Debug, Deserialize)]
pub(crate) struct CalendarResponse {
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}
