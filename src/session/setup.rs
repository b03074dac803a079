//! Session setup and initialization

use crate::api::{ApiClient, SignalApi};
use crate::config::Config;
use crate::consts::dashboard_consts::{EVENT_QUEUE_SIZE, SNAPSHOT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::{Event, EventSender};
use crate::refresh::{DashboardSnapshot, OverlapPolicy, RefreshConfig, RefreshController, RefreshHandle};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Command-line overrides for a dashboard session. Anything left unset
/// falls back to the config file, then to the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub api_url: Option<String>,
    pub refresh_secs: Option<u64>,
    pub signal_limit: Option<u32>,
    pub skip_overlapping: bool,
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for refresh and chart events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sender side of the event channel, for events raised by the view
    pub event_sender: EventSender,
    /// Completed snapshots from the refresh task
    pub snapshot_receiver: mpsc::Receiver<DashboardSnapshot>,
    /// The running poll loop
    pub refresh: RefreshHandle,
    /// Backend the session reads from
    pub environment: Environment,
    /// Interval between poll cycles
    pub refresh_interval: Duration,
    /// Symbol selected before the first symbol list arrives
    pub default_symbol: String,
}

/// Resolves the effective refresh settings from flags and config.
pub fn refresh_config(config: &Config, options: &SessionOptions) -> RefreshConfig {
    let interval = options
        .refresh_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.refresh_interval());
    let overlap = if options.skip_overlapping {
        OverlapPolicy::Skip
    } else {
        OverlapPolicy::Allow
    };
    RefreshConfig {
        interval,
        signal_limit: options
            .signal_limit
            .filter(|limit| *limit > 0)
            .unwrap_or_else(|| config.signal_limit()),
        overlap,
    }
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Resolves the backend and builds the API client
/// 2. Creates the event and snapshot channels
/// 3. Starts the refresh task
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub async fn setup_session(
    config: Config,
    options: SessionOptions,
) -> Result<SessionData, Box<dyn Error>> {
    let environment = Environment::resolve(options.api_url.as_deref(), config.api_url.as_deref());
    let api: Arc<dyn SignalApi> = Arc::new(ApiClient::new(environment.clone())?);
    let refresh_config = refresh_config(&config, &options);
    let refresh_interval = refresh_config.interval;

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (snapshot_sender, snapshot_receiver) = mpsc::channel(SNAPSHOT_QUEUE_SIZE);
    let event_sender = EventSender::new(event_sender);

    let refresh = RefreshController::new(
        api,
        refresh_config,
        event_sender.clone(),
        snapshot_sender,
    )
    .spawn();

    Ok(SessionData {
        event_receiver,
        event_sender,
        snapshot_receiver,
        refresh,
        environment,
        refresh_interval,
        default_symbol: config.default_symbol(),
    })
}
