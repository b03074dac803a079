use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{CalendarEvent, Decoded, Signal, Stats};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The backend endpoints the dashboard reads from.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SignalApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Most recent signals, newest first, at most `limit` of them.
    async fn get_signals(&self, limit: u32) -> Result<Decoded<Signal>, ApiError>;

    /// Aggregate counters.
    async fn get_stats(&self) -> Result<Stats, ApiError>;

    /// The ordered list of symbols the backend analyzes.
    async fn get_symbols(&self) -> Result<Decoded<String>, ApiError>;

    /// Upcoming economic calendar events, in backend order.
    async fn get_calendar(&self) -> Result<Decoded<CalendarEvent>, ApiError>;
}
