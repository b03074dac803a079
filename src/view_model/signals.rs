//! Signal grouping
//!
//! Signals are grouped under the symbol list: one group per symbol that has
//! at least one signal, in symbol-list order. Groups are truncated to a
//! fixed number of cards with an overflow line for the rest.

use super::format::{format_price, format_signal_time, pluralize};
use crate::models::{Side, Signal};
use chrono::TimeZone;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

pub const EMPTY_SIGNALS_MESSAGE: &str = "No signals generated yet";
pub const EMPTY_SIGNALS_HINT: &str = "Signals will appear here as they are generated";

/// One signal card, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalRow {
    pub id: i64,
    pub side: Side,
    pub reason: String,
    pub time: String,
    pub stop_loss: String,
    pub take_profit: String,
}

impl SignalRow {
    fn from_signal<Tz>(signal: &Signal, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: signal.id,
            side: signal.side,
            reason: signal.reason().to_string(),
            time: format_signal_time(&signal.time_utc, tz),
            stop_loss: format_price(signal.sl),
            take_profit: format_price(signal.tp),
        }
    }
}

/// The signals of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalGroup {
    pub symbol: String,
    /// Number of signals for the symbol, including those not shown.
    pub total: usize,
    /// The first `max_per_group` signals, in input order.
    pub rows: Vec<SignalRow>,
}

impl SignalGroup {
    /// `"EURUSD (3 signals)"`
    pub fn header(&self) -> String {
        format!("{} ({})", self.symbol, pluralize(self.total, "signal"))
    }

    pub fn hidden(&self) -> usize {
        self.total - self.rows.len()
    }

    /// `"+ 2 more signals"` when part of the group is not shown.
    pub fn overflow_label(&self) -> Option<String> {
        match self.hidden() {
            0 => None,
            n => Some(format!("+ {} more {}", n, if n == 1 { "signal" } else { "signals" })),
        }
    }
}

/// Groups `signals` by pair under `symbols`.
///
/// Symbols without signals produce no group, repeated symbols produce one,
/// and signals for pairs outside `symbols` are not shown.
pub fn group_signals<Tz>(
    signals: &[Signal],
    symbols: &[String],
    max_per_group: usize,
    tz: &Tz,
) -> Vec<SignalGroup>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut by_pair: HashMap<&str, Vec<&Signal>> = HashMap::new();
    for signal in signals {
        by_pair.entry(signal.pair.as_str()).or_default().push(signal);
    }

    let mut seen = HashSet::new();
    symbols
        .iter()
        .filter(|&symbol| seen.insert(symbol.as_str()))
        .filter_map(|symbol| {
            let pair_signals = by_pair.get(symbol.as_str())?;
            Some(SignalGroup {
                symbol: symbol.clone(),
                total: pair_signals.len(),
                rows: pair_signals
                    .iter()
                    .take(max_per_group)
                    .map(|signal| SignalRow::from_signal(signal, tz))
                    .collect(),
            })
        })
        .collect()
}
