use super::decode::null_as_zero;
use serde::Deserialize;

/// Aggregate counters served by `GET /api/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "null_as_zero")]
    pub total_signals: u64,
    #[serde(deserialize_with = "null_as_zero")]
    pub buy_signals: u64,
    #[serde(deserialize_with = "null_as_zero")]
    pub sell_signals: u64,
    #[serde(deserialize_with = "null_as_zero")]
    pub symbols_analyzed: u64,
}
