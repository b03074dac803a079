//! One poll cycle's worth of dashboard data

use crate::api::SignalApi;
use crate::api::error::ApiError;
use crate::models::{CalendarEvent, Signal, Stats};
use chrono::{DateTime, Utc};

/// Everything one successful poll cycle fetched. The view replaces all of
/// its data with a snapshot at once.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// Sequence number of the poll cycle that produced this snapshot.
    pub cycle: u64,
    pub signals: Vec<Signal>,
    pub stats: Stats,
    pub symbols: Vec<String>,
    pub calendar: Vec<CalendarEvent>,
    pub fetched_at: DateTime<Utc>,
    /// Reasons for entries dropped while decoding, across all data sets.
    pub rejected: Vec<String>,
}

/// Issues the four requests together and waits for all of them. Any single
/// failure fails the whole fetch; no partial snapshot is produced.
pub async fn fetch_snapshot(
    api: &dyn SignalApi,
    signal_limit: u32,
    cycle: u64,
) -> Result<DashboardSnapshot, ApiError> {
    let (signals, stats, symbols, calendar) = tokio::try_join!(
        api.get_signals(signal_limit),
        api.get_stats(),
        api.get_symbols(),
        api.get_calendar(),
    )?;

    let rejected = [
        ("signals", signals.rejected),
        ("symbols", symbols.rejected),
        ("calendar", calendar.rejected),
    ]
    .into_iter()
    .flat_map(|(set, reasons)| {
        reasons
            .into_iter()
            .map(move |reason| format!("{}: {}", set, reason))
    })
    .collect();

    Ok(DashboardSnapshot {
        cycle,
        signals: signals.items,
        stats,
        symbols: symbols.items,
        calendar: calendar.items,
        fetched_at: Utc::now(),
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSignalApi;
    use crate::models::{Decoded, Side};

    fn sample_signal(id: i64, pair: &str) -> Signal {
        Signal {
            id,
            pair: pair.to_string(),
            side: Side::Buy,
            reason: None,
            time_utc: "2025-11-06T12:30:00Z".to_string(),
            sl: Some(1.1),
            tp: Some(1.12),
            raw: None,
        }
    }

    #[tokio::test]
    async fn test_combines_all_four_data_sets() {
        let mut api = MockSignalApi::new();
        api.expect_get_signals()
            .withf(|limit| *limit == 100)
            .returning(|_| {
                Ok(Decoded {
                    items: vec![sample_signal(1, "EURUSD")],
                    rejected: vec!["entry 1: missing field `pair`".to_string()],
                })
            });
        api.expect_get_stats().returning(|| {
            Ok(Stats {
                total_signals: 1,
                buy_signals: 1,
                ..Stats::default()
            })
        });
        api.expect_get_symbols()
            .returning(|| Ok(Decoded::new(vec!["EURUSD".to_string()])));
        api.expect_get_calendar().returning(|| Ok(Decoded::default()));

        let snapshot = fetch_snapshot(&api, 100, 4).await.unwrap();
        assert_eq!(snapshot.cycle, 4);
        assert_eq!(snapshot.signals.len(), 1);
        assert_eq!(snapshot.stats.total_signals, 1);
        assert_eq!(snapshot.symbols, vec!["EURUSD"]);
        assert!(snapshot.calendar.is_empty());
        assert_eq!(snapshot.rejected, vec!["signals: entry 1: missing field `pair`"]);
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_fetch() {
        let mut api = MockSignalApi::new();
        api.expect_get_signals()
            .returning(|_| Ok(Decoded::new(vec![sample_signal(1, "EURUSD")])));
        api.expect_get_stats().returning(|| Ok(Stats::default()));
        api.expect_get_symbols().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        api.expect_get_calendar().returning(|| Ok(Decoded::default()));

        let result = fetch_snapshot(&api, 100, 1).await;
        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
    }
}
