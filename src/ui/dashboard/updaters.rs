//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, RefreshStatus};

use crate::events::{Event as DashboardEvent, EventType, Source};

use std::time::Instant;

impl DashboardState {
    /// Advance the animation tick and drain queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &DashboardEvent) {
        if event.source == Source::Refresher {
            self.handle_refresher_event(event);
        }
    }

    /// Track cycle starts and outcomes. Fetched data itself only ever
    /// arrives through `apply_snapshot`.
    fn handle_refresher_event(&mut self, event: &DashboardEvent) {
        match event.event_type {
            EventType::Refresh => self.last_cycle_started = Some(Instant::now()),
            EventType::Success => self.set_refresh_status(RefreshStatus::Ok),
            EventType::Error => {
                let consecutive = match self.refresh_status() {
                    RefreshStatus::Failed { consecutive } => consecutive + 1,
                    _ => 1,
                };
                self.set_refresh_status(RefreshStatus::Failed { consecutive });
            }
            _ => {}
        }
    }

    /// Seconds until the next scheduled cycle, if one has started.
    pub fn seconds_until_refresh(&self) -> Option<u64> {
        let started = self.last_cycle_started?;
        Some(
            self.refresh_interval
                .as_secs()
                .saturating_sub(started.elapsed().as_secs()),
        )
    }

    /// Fraction of the refresh interval that has elapsed, 0-100.
    pub fn refresh_progress_percent(&self) -> u16 {
        let Some(started) = self.last_cycle_started else {
            return 0;
        };
        let interval = self.refresh_interval.as_secs_f64();
        if interval <= 0.0 {
            return 100;
        }
        ((started.elapsed().as_secs_f64() / interval) * 100.0).min(100.0) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use crate::models::Stats;
    use crate::refresh::DashboardSnapshot;
    use crate::ui::app::UIConfig;
    use chrono::Utc;
    use std::time::Duration;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(30), "EURUSD".to_string()),
        )
    }

    fn refresher(msg: &str, event_type: EventType) -> DashboardEvent {
        DashboardEvent::refresher_with_level(msg.to_string(), event_type, LogLevel::Info)
    }

    #[test]
    fn test_update_moves_events_to_activity_log() {
        let mut state = state();
        state.add_event(DashboardEvent::dashboard("hello".to_string()));
        state.update();
        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_failed_cycle_leaves_snapshot_untouched() {
        let mut state = state();
        let first = DashboardSnapshot {
            cycle: 1,
            signals: Vec::new(),
            stats: Stats {
                total_signals: 4,
                ..Stats::default()
            },
            symbols: vec!["EURUSD".to_string(), "GBPUSD".to_string()],
            calendar: Vec::new(),
            fetched_at: Utc::now(),
            rejected: Vec::new(),
        };
        state.apply_snapshot(first.clone());
        state.add_event(refresher("Refresh #1: 0 signals", EventType::Success));
        state.update();

        state.add_event(refresher("Refresh #2: fetching dashboard data...", EventType::Refresh));
        state.add_event(refresher(
            "Refresh #2 failed: HTTP error with status 502: Bad Gateway",
            EventType::Error,
        ));
        state.update();

        assert_eq!(state.snapshot(), Some(&first));
        assert_eq!(state.selection().selected(), "EURUSD");
        assert_eq!(
            state.refresh_status(),
            &RefreshStatus::Failed { consecutive: 1 }
        );
        assert!(state.last_cycle_started.is_some());
    }

    #[test]
    fn test_consecutive_failures_reset_on_success() {
        let mut state = state();
        for _ in 0..3 {
            state.add_event(refresher("Refresh #1 failed: timeout", EventType::Error));
        }
        state.update();
        assert_eq!(
            state.refresh_status(),
            &RefreshStatus::Failed { consecutive: 3 }
        );

        state.add_event(refresher("Refresh #2: 1 signals", EventType::Success));
        state.update();
        assert_eq!(state.refresh_status(), &RefreshStatus::Ok);
    }

    #[test]
    fn test_warnings_do_not_count_as_failures() {
        let mut state = state();
        state.add_event(refresher("Refresh #1: 1 signals", EventType::Success));
        // Wording alone must not mark the cycle as failed
        state.add_event(refresher(
            "Refresh #1 failed: to decode 2 malformed record(s)",
            EventType::Warning,
        ));
        state.update();
        assert_eq!(state.refresh_status(), &RefreshStatus::Ok);
    }

    #[test]
    fn test_countdown_before_first_cycle() {
        let state = state();
        assert_eq!(state.seconds_until_refresh(), None);
        assert_eq!(state.refresh_progress_percent(), 0);
    }
}
