//! Event System
//!
//! Types and implementations for operator-visible events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The poll loop fetching dashboard data from the backend.
    Refresher,
    /// The chart widget mount.
    Chart,
    /// The dashboard view itself (selection changes, key commands).
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    /// Something went wrong but the operation still completed.
    Warning,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Refresher, msg, event_type, log_level)
    }

    pub fn chart_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Chart, msg, event_type, log_level)
    }

    pub fn dashboard(msg: String) -> Self {
        Self::new(Source::Dashboard, msg, EventType::Success, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Common event sending utilities for background tasks
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_refresh_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        let _ = self
            .sender
            .send(Event::refresher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_chart_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        let _ = self
            .sender
            .send(Event::chart_with_level(message, event_type, log_level))
            .await;
    }
}
