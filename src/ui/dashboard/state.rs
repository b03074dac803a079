//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::chart::{ChartMount, ChartWidgetConfig, ReadySignal};
use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as DashboardEvent;
use crate::refresh::DashboardSnapshot;
use crate::ui::app::UIConfig;
use crate::view_model::{DashboardView, SymbolSelection};

use chrono::{Local, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Outcome of the most recent poll cycle, as reported on the event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshStatus {
    /// No cycle has finished yet.
    Pending,
    Ok,
    Failed { consecutive: u32 },
}

/// Dashboard state: the last applied snapshot plus everything the view
/// tracks between snapshots.
#[derive(Debug)]
pub struct DashboardState {
    /// The backend the dashboard reads from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Interval between poll cycles, for the countdown gauge.
    pub refresh_interval: Duration,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<DashboardEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<DashboardEvent>,
    /// Animation tick counter
    pub tick: usize,
    /// When the most recent poll cycle started.
    pub last_cycle_started: Option<Instant>,

    snapshot: Option<DashboardSnapshot>,
    selection: SymbolSelection,
    chart: ChartMount,
    refresh_status: RefreshStatus,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        let selection = SymbolSelection::new(ui_config.default_symbol);
        let chart = ChartMount::new(ChartWidgetConfig::for_symbol(selection.selected(), Utc::now()));
        Self {
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            refresh_interval: ui_config.refresh_interval,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            last_cycle_started: None,
            snapshot: None,
            selection,
            chart,
            refresh_status: RefreshStatus::Pending,
        }
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn selection(&self) -> &SymbolSelection {
        &self.selection
    }

    pub fn chart(&self) -> &ChartMount {
        &self.chart
    }

    pub fn refresh_status(&self) -> &RefreshStatus {
        &self.refresh_status
    }

    pub fn set_refresh_status(&mut self, status: RefreshStatus) {
        self.refresh_status = status;
    }

    /// Symbols offered by the chart selector.
    pub fn symbols(&self) -> &[String] {
        self.snapshot
            .as_ref()
            .map(|s| s.symbols.as_slice())
            .unwrap_or_default()
    }

    /// Display structures for the current snapshot, in local time.
    pub fn view(&self) -> DashboardView {
        DashboardView::build(self.snapshot.as_ref(), &self.selection, &Local::now())
    }

    /// Replaces all fetched data with `snapshot` in one step.
    ///
    /// Returns a readiness signal when the selected symbol changed and the
    /// chart widget was rebuilt.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) -> Option<ReadySignal> {
        if let Some(previous) = &self.snapshot {
            if snapshot.cycle < previous.cycle {
                self.add_event(DashboardEvent::dashboard(format!(
                    "Applied refresh #{} after newer refresh #{}",
                    snapshot.cycle, previous.cycle
                )));
            }
        }

        let changed = self.selection.on_symbols(&snapshot.symbols);
        self.snapshot = Some(snapshot);
        changed.then(|| self.remount_chart())
    }

    /// Selects `symbol` on behalf of the user.
    pub fn select_symbol(&mut self, symbol: &str) -> Option<ReadySignal> {
        let changed = self.selection.select(symbol);
        changed.then(|| self.remount_chart())
    }

    /// Moves the selection through the symbol list.
    pub fn cycle_symbol(&mut self, step: isize) -> Option<ReadySignal> {
        let symbols = self.symbols().to_vec();
        let changed = self.selection.cycle(&symbols, step);
        changed.then(|| self.remount_chart())
    }

    /// Selects the symbol at `index` in the selector.
    pub fn select_symbol_index(&mut self, index: usize) -> Option<ReadySignal> {
        let symbols = self.symbols().to_vec();
        let changed = self.selection.select_index(&symbols, index);
        changed.then(|| self.remount_chart())
    }

    fn remount_chart(&mut self) -> ReadySignal {
        self.chart = ChartMount::new(ChartWidgetConfig::for_symbol(
            self.selection.selected(),
            Utc::now(),
        ));
        self.chart.readiness()
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: DashboardEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: DashboardEvent) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Side, Signal, Stats};

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(30), "EURUSD".to_string()),
        )
    }

    fn snapshot(cycle: u64, symbols: &[&str]) -> DashboardSnapshot {
        DashboardSnapshot {
            cycle,
            signals: vec![Signal {
                id: cycle as i64,
                pair: "EURUSD".to_string(),
                side: Side::Sell,
                reason: None,
                time_utc: "2025-11-06T12:30:00Z".to_string(),
                sl: None,
                tp: None,
                raw: None,
            }],
            stats: Stats {
                total_signals: cycle,
                ..Stats::default()
            },
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            calendar: Vec::new(),
            fetched_at: Utc::now(),
            rejected: Vec::new(),
        }
    }

    #[test]
    fn test_snapshot_replaces_all_data() {
        let mut state = state();
        assert!(state.snapshot().is_none());

        state.apply_snapshot(snapshot(1, &["EURUSD"]));
        let first = state.snapshot().cloned();
        state.apply_snapshot(snapshot(2, &["EURUSD", "GBPUSD"]));

        let current = state.snapshot().unwrap();
        assert_ne!(Some(current), first.as_ref());
        assert_eq!(current.stats.total_signals, 2);
        assert_eq!(current.signals[0].id, 2);
        assert_eq!(state.symbols(), ["EURUSD", "GBPUSD"]);
    }

    #[test]
    fn test_selection_follows_first_symbol_and_remounts_chart() {
        let mut state = state();
        assert_eq!(state.chart().config.symbol, "FX:EURUSD");

        assert!(state.apply_snapshot(snapshot(1, &["GBPUSD", "EURUSD"])).is_some());
        assert_eq!(state.selection().selected(), "GBPUSD");
        assert_eq!(state.chart().config.symbol, "FX:GBPUSD");

        // Same head symbol: no rebuild.
        assert!(state.apply_snapshot(snapshot(2, &["GBPUSD"])).is_none());
    }

    #[test]
    fn test_user_selection_survives_refresh() {
        let mut state = state();
        state.apply_snapshot(snapshot(1, &["EURUSD", "GBPUSD", "USDJPY"]));
        assert!(state.select_symbol_index(2).is_some());
        assert_eq!(state.selection().selected(), "USDJPY");

        assert!(state.apply_snapshot(snapshot(2, &["GBPUSD", "EURUSD"])).is_none());
        assert_eq!(state.selection().selected(), "USDJPY");
        assert_eq!(state.chart().config.symbol, "FX:USDJPY");
    }

    #[test]
    fn test_cycle_symbol_wraps() {
        let mut state = state();
        state.apply_snapshot(snapshot(1, &["EURUSD", "GBPUSD"]));
        state.cycle_symbol(-1);
        assert_eq!(state.selection().selected(), "GBPUSD");
        state.cycle_symbol(1);
        assert_eq!(state.selection().selected(), "EURUSD");
    }

    #[test]
    fn test_out_of_order_snapshot_is_reported() {
        let mut state = state();
        state.apply_snapshot(snapshot(2, &["EURUSD"]));
        state.apply_snapshot(snapshot(1, &["EURUSD"]));

        assert_eq!(state.snapshot().unwrap().cycle, 1);
        let event = state.pending_events.back().unwrap();
        assert!(event.msg.contains("refresh #1 after newer refresh #2"));
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(DashboardEvent::dashboard(format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
