//! Calendar ordering and impact classification

use crate::models::CalendarEvent;
use crate::models::timestamp::parse_timestamp;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const EMPTY_CALENDAR_MESSAGE: &str = "No upcoming events";

/// Expected market effect of a calendar event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ImpactTier {
    High,
    Medium,
    Low,
    /// Anything the backend sends that is not one of the three tiers.
    Unclassified,
}

impl ImpactTier {
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => ImpactTier::High,
            "medium" => ImpactTier::Medium,
            "low" => ImpactTier::Low,
            _ => ImpactTier::Unclassified,
        }
    }
}

/// One calendar entry, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
    pub pair: String,
    pub title: String,
    pub when: String,
    pub tier: ImpactTier,
    /// `"HIGH Impact"`; built from the raw value so unknown tiers still read.
    pub badge: String,
    pub forecast: Option<String>,
    pub previous: Option<String>,
}

/// Sorts events ascending by scheduled time. The sort is stable; events
/// whose time does not parse keep their relative order after all others.
pub fn sort_events(events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by_cached_key(|event| match event.scheduled_at() {
        Some(ts) => (false, Some(ts)),
        None => (true, None),
    });
    sorted
}

/// `Today 14:30`, `Tomorrow 09:00`, otherwise `Nov 08, 13:30`, relative to
/// `now` and rendered in `now`'s time zone. Unparseable input is returned
/// unchanged.
pub fn format_event_time<Tz>(raw: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let local = ts.with_timezone(&now.timezone());
    let today = now.date_naive();

    if local.date_naive() == today {
        format!("Today {}", local.format("%H:%M"))
    } else if today.succ_opt() == Some(local.date_naive()) {
        format!("Tomorrow {}", local.format("%H:%M"))
    } else {
        local.format("%b %d, %H:%M").to_string()
    }
}

/// Sorts and formats `events` for display at `now`.
pub fn calendar_rows<Tz>(events: &[CalendarEvent], now: &DateTime<Tz>) -> Vec<CalendarRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    sort_events(events)
        .into_iter()
        .map(|event| CalendarRow {
            pair: event.pair.clone(),
            title: event.title.clone(),
            when: format_event_time(&event.time, now),
            tier: ImpactTier::classify(&event.impact),
            badge: format!("{} Impact", event.impact.trim().to_uppercase()),
            forecast: event.forecast.clone(),
            previous: event.previous.clone(),
        })
        .collect()
}
