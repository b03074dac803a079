//! One-shot commands: print a single snapshot, or check backend health.

use crate::api::error::ApiError;
use crate::api::{ApiClient, SignalApi};
use crate::refresh::fetch_snapshot;
use crate::view_model::{DashboardView, SymbolSelection};
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use chrono::{DateTime, TimeZone};
use std::error::Error;
use std::fmt::Display;

/// Fetches one snapshot and formats the whole dashboard as text.
pub async fn render_snapshot<Tz>(
    api: &dyn SignalApi,
    signal_limit: u32,
    default_symbol: &str,
    now: &DateTime<Tz>,
) -> Result<String, ApiError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let snapshot = fetch_snapshot(api, signal_limit, 1).await?;
    for reason in &snapshot.rejected {
        log::warn!("Dropped malformed record ({})", reason);
    }
    let mut selection = SymbolSelection::new(default_symbol);
    selection.on_symbols(&snapshot.symbols);
    Ok(DashboardView::build(Some(&snapshot), &selection, now).to_string())
}

/// Prints one snapshot to stdout.
pub async fn print_snapshot(
    api: &dyn SignalApi,
    signal_limit: u32,
    default_symbol: &str,
) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Fetching dashboard data", "{}", api.environment().api_url());
    match render_snapshot(api, signal_limit, default_symbol, &chrono::Local::now()).await {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Failed to fetch dashboard data", &e.to_string());
            Err(e.into())
        }
    }
}

/// Queries `/health` and reports the result.
pub async fn check_backend(client: &ApiClient) -> Result<(), Box<dyn Error>> {
    let url = client.environment().api_url();
    match client.health().await {
        Ok(health) if health.status.eq_ignore_ascii_case("healthy") => {
            print_cmd_success!("Backend is healthy", "{} ({})", health.service, url);
            Ok(())
        }
        Ok(health) => {
            print_cmd_warn!(
                "Backend responded but is not healthy",
                "status: {}, service: {}",
                health.status,
                health.service
            );
            Err(Box::from(format!("backend status {:?}", health.status)))
        }
        Err(e) => {
            print_cmd_error!("Backend unreachable", &format!("{}: {}", url, e));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSignalApi;
    use crate::models::{Decoded, Stats};
    use chrono::Utc;

    #[tokio::test]
    async fn test_render_snapshot_uses_first_symbol() {
        let mut api = MockSignalApi::new();
        api.expect_get_signals().returning(|_| Ok(Decoded::default()));
        api.expect_get_stats().returning(|| {
            Ok(Stats {
                total_signals: 12,
                ..Stats::default()
            })
        });
        api.expect_get_symbols()
            .returning(|| Ok(Decoded::new(vec!["USDJPY".to_string(), "EURUSD".to_string()])));
        api.expect_get_calendar().returning(|| Ok(Decoded::default()));

        let text = render_snapshot(&api, 100, "EURUSD", &Utc::now()).await.unwrap();
        assert!(text.contains("Total Signals: 12"));
        assert!(text.contains("Chart: USDJPY [USDJPY, EURUSD]"));
        assert!(text.contains("No signals generated yet"));
        assert!(text.contains("No upcoming events"));
    }

    #[tokio::test]
    async fn test_render_snapshot_propagates_failure() {
        let mut api = MockSignalApi::new();
        api.expect_get_signals().returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: "Not Found".to_string(),
            })
        });
        api.expect_get_stats().returning(|| Ok(Stats::default()));
        api.expect_get_symbols().returning(|| Ok(Decoded::default()));
        api.expect_get_calendar().returning(|| Ok(Decoded::default()));

        let result = render_snapshot(&api, 100, "EURUSD", &Utc::now()).await;
        assert!(matches!(result, Err(ApiError::Http { status: 404, .. })));
    }
}
