//! Dashboard view model
//!
//! Turns a fetched snapshot into the display structures each panel renders.
//! Everything here is pure: no I/O, and the clock is passed in.

pub mod calendar;
pub mod format;
pub mod selection;
pub mod signals;
pub mod stats;

pub use calendar::{CalendarRow, EMPTY_CALENDAR_MESSAGE, ImpactTier, calendar_rows};
pub use selection::SymbolSelection;
pub use signals::{EMPTY_SIGNALS_HINT, EMPTY_SIGNALS_MESSAGE, SignalGroup, group_signals};
pub use stats::{StatCard, StatKind, stat_cards};

use crate::consts::dashboard_consts::MAX_SIGNALS_PER_GROUP;
use crate::refresh::DashboardSnapshot;
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Display};

/// Everything the dashboard shows for one snapshot at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub stats: [StatCard; 4],
    pub symbols: Vec<String>,
    pub selected_symbol: String,
    /// Number of signals received, before grouping.
    pub signal_count: usize,
    pub signal_groups: Vec<SignalGroup>,
    pub calendar: Vec<CalendarRow>,
}

impl DashboardView {
    /// Builds the view for `snapshot`, or the pre-data view when there is none.
    pub fn build<Tz>(
        snapshot: Option<&DashboardSnapshot>,
        selection: &SymbolSelection,
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let tz = now.timezone();
        match snapshot {
            Some(snapshot) => Self {
                stats: stat_cards(Some(&snapshot.stats)),
                symbols: snapshot.symbols.clone(),
                selected_symbol: selection.selected().to_string(),
                signal_count: snapshot.signals.len(),
                signal_groups: group_signals(
                    &snapshot.signals,
                    &snapshot.symbols,
                    MAX_SIGNALS_PER_GROUP,
                    &tz,
                ),
                calendar: calendar_rows(&snapshot.calendar, now),
            },
            None => Self {
                stats: stat_cards(None),
                symbols: Vec::new(),
                selected_symbol: selection.selected().to_string(),
                signal_count: 0,
                signal_groups: Vec::new(),
                calendar: Vec::new(),
            },
        }
    }
}

/// Plain-text rendering used by headless mode and the `snapshot` command.
impl Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self
            .stats
            .iter()
            .map(|card| format!("{}: {}", card.title, card.value))
            .collect();
        writeln!(f, "{}", cards.join(" | "))?;
        writeln!(
            f,
            "Chart: {} [{}]",
            self.selected_symbol,
            self.symbols.join(", ")
        )?;

        writeln!(f)?;
        writeln!(f, "Economic Calendar")?;
        if self.calendar.is_empty() {
            writeln!(f, "  {}", EMPTY_CALENDAR_MESSAGE)?;
        }
        for row in &self.calendar {
            writeln!(f, "  {:<16} {:<7} {}  ({})", row.when, row.pair, row.title, row.badge)?;
            if let Some(forecast) = &row.forecast {
                writeln!(f, "      forecast: {}", forecast)?;
            }
            if let Some(previous) = &row.previous {
                writeln!(f, "      previous: {}", previous)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Trading Signals")?;
        if self.signal_count == 0 {
            writeln!(f, "  {}", EMPTY_SIGNALS_MESSAGE)?;
        }
        for group in &self.signal_groups {
            writeln!(f, "  {}", group.header())?;
            for row in &group.rows {
                writeln!(
                    f,
                    "    #{} {:<4} {}  SL {}  TP {}  {}",
                    row.id, row.side, row.time, row.stop_loss, row.take_profit, row.reason
                )?;
            }
            if let Some(overflow) = group.overflow_label() {
                writeln!(f, "    {}", overflow)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarEvent, Side, Signal, Stats};
    use chrono::Utc;

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            cycle: 1,
            signals: vec![Signal {
                id: 1,
                pair: "EURUSD".to_string(),
                side: Side::Buy,
                reason: Some("EMA cross".to_string()),
                time_utc: "2025-11-06T12:30:00Z".to_string(),
                sl: Some(1.1),
                tp: Some(1.12),
                raw: None,
            }],
            stats: Stats {
                total_signals: 1,
                buy_signals: 1,
                sell_signals: 0,
                symbols_analyzed: 2,
            },
            symbols: vec!["EURUSD".to_string(), "GBPUSD".to_string()],
            calendar: vec![CalendarEvent {
                time: "2025-11-06T14:30:00Z".to_string(),
                pair: "USD".to_string(),
                impact: "high".to_string(),
                title: "Non-Farm Payrolls".to_string(),
                forecast: Some("180K".to_string()),
                previous: None,
            }],
            fetched_at: Utc::now(),
            rejected: Vec::new(),
        }
    }

    #[test]
    fn test_builds_every_panel_from_snapshot() {
        let now = "2025-11-06T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let snapshot = snapshot();
        let view = DashboardView::build(Some(&snapshot), &SymbolSelection::new("EURUSD"), &now);

        assert_eq!(view.stats[3].value, "2");
        assert_eq!(view.signal_groups.len(), 1);
        assert_eq!(view.signal_groups[0].header(), "EURUSD (1 signal)");
        assert_eq!(view.signal_groups[0].rows[0].stop_loss, "1.10000");
        assert_eq!(view.signal_groups[0].rows[0].take_profit, "1.12000");
        assert_eq!(view.calendar[0].when, "Today 14:30");
        assert_eq!(view.calendar[0].tier, ImpactTier::High);
    }

    #[test]
    fn test_pre_data_view_shows_empty_states() {
        let now = Utc::now();
        let view = DashboardView::build(None, &SymbolSelection::new("EURUSD"), &now);
        assert_eq!(view.selected_symbol, "EURUSD");

        let text = view.to_string();
        assert!(text.contains("Total Signals: 0"));
        assert!(text.contains(EMPTY_CALENDAR_MESSAGE));
        assert!(text.contains(EMPTY_SIGNALS_MESSAGE));
    }

    #[test]
    fn test_text_rendering_lists_groups_and_events() {
        let now = "2025-11-06T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let snapshot = snapshot();
        let text = DashboardView::build(Some(&snapshot), &SymbolSelection::new("EURUSD"), &now)
            .to_string();

        assert!(text.contains("EURUSD (1 signal)"));
        assert!(text.contains("SL 1.10000  TP 1.12000"));
        assert!(text.contains("Non-Farm Payrolls  (HIGH Impact)"));
        assert!(text.contains("forecast: 180K"));
        assert!(!text.contains(EMPTY_SIGNALS_MESSAGE));
    }
}
