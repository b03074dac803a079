//! Stat cards

use super::format::format_count;
use crate::models::Stats;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StatKind {
    Total,
    Buy,
    Sell,
    Symbols,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub title: &'static str,
    pub value: String,
}

/// The four summary cards. Before the first snapshot every card reads 0.
pub fn stat_cards(stats: Option<&Stats>) -> [StatCard; 4] {
    let stats = stats.copied().unwrap_or_default();
    [
        (StatKind::Total, "Total Signals", stats.total_signals),
        (StatKind::Buy, "Buy Signals", stats.buy_signals),
        (StatKind::Sell, "Sell Signals", stats.sell_signals),
        (StatKind::Symbols, "Symbols Analyzed", stats.symbols_analyzed),
    ]
    .map(|(kind, title, value)| StatCard {
        kind,
        title,
        value: format_count(value),
    })
}
