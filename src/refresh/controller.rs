//! Poll loop that refreshes the dashboard on a fixed interval

use super::snapshot::{DashboardSnapshot, fetch_snapshot};
use crate::api::SignalApi;
use crate::events::{EventSender, EventType};
use crate::logging::LogLevel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

/// What to do when a tick fires while an earlier cycle is still running.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OverlapPolicy {
    /// Start the new cycle anyway. A slow cycle may then complete after a
    /// newer one and overwrite fresher data.
    #[default]
    Allow,
    /// Skip the tick; the next tick tries again.
    Skip,
}

#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub interval: Duration,
    pub signal_limit: u32,
    pub overlap: OverlapPolicy,
}

/// Fetches a snapshot on every tick and forwards it to the view.
///
/// Failed cycles are reported on the event channel and otherwise dropped;
/// there is no retry before the next tick.
pub struct RefreshController {
    api: Arc<dyn SignalApi>,
    config: RefreshConfig,
    event_sender: EventSender,
    snapshot_sender: mpsc::Sender<DashboardSnapshot>,
}

impl RefreshController {
    pub fn new(
        api: Arc<dyn SignalApi>,
        config: RefreshConfig,
        event_sender: EventSender,
        snapshot_sender: mpsc::Sender<DashboardSnapshot>,
    ) -> Self {
        Self {
            api,
            config,
            event_sender,
            snapshot_sender,
        }
    }

    /// Starts polling. The first cycle runs immediately. Polling stops when
    /// the returned handle is shut down or dropped.
    pub fn spawn(self) -> RefreshHandle {
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let (force_sender, force_receiver) = mpsc::channel(1);
        let task = tokio::spawn(self.run(shutdown_receiver, force_receiver));
        RefreshHandle {
            shutdown_sender,
            force_sender,
            task: Some(task),
        }
    }

    async fn run(
        self,
        mut shutdown: broadcast::Receiver<()>,
        mut force: mpsc::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut in_flight = JoinSet::new();
        let mut cycle = 0u64;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                Some(result) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = result {
                        log::error!("Refresh cycle task failed: {}", e);
                    }
                }
                Some(()) = force.recv() => {
                    self.start_cycle(&mut in_flight, &mut cycle).await;
                    ticker.reset();
                }
                _ = ticker.tick() => {
                    self.start_cycle(&mut in_flight, &mut cycle).await;
                }
            }
        }

        in_flight.abort_all();
    }

    async fn start_cycle(&self, in_flight: &mut JoinSet<()>, cycle: &mut u64) {
        if self.config.overlap == OverlapPolicy::Skip && !in_flight.is_empty() {
            self.event_sender
                .send_refresh_event(
                    format!("Skipping refresh: cycle #{} still running", cycle),
                    EventType::Waiting,
                    LogLevel::Debug,
                )
                .await;
            return;
        }

        *cycle += 1;
        in_flight.spawn(run_cycle(
            self.api.clone(),
            self.config.signal_limit,
            *cycle,
            self.event_sender.clone(),
            self.snapshot_sender.clone(),
        ));
    }
}

async fn run_cycle(
    api: Arc<dyn SignalApi>,
    signal_limit: u32,
    cycle: u64,
    events: EventSender,
    snapshots: mpsc::Sender<DashboardSnapshot>,
) {
    events
        .send_refresh_event(
            format!("Refresh #{}: fetching dashboard data...", cycle),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;

    match fetch_snapshot(api.as_ref(), signal_limit, cycle).await {
        Ok(snapshot) => {
            if !snapshot.rejected.is_empty() {
                for reason in &snapshot.rejected {
                    log::warn!("Refresh #{}: dropped malformed record ({})", cycle, reason);
                }
                events
                    .send_refresh_event(
                        format!(
                            "Refresh #{}: dropped {} malformed record(s)",
                            cycle,
                            snapshot.rejected.len()
                        ),
                        EventType::Warning,
                        LogLevel::Warn,
                    )
                    .await;
            }
            events
                .send_refresh_event(
                    format!(
                        "Refresh #{}: {} signals, {} symbols, {} calendar events",
                        cycle,
                        snapshot.signals.len(),
                        snapshot.symbols.len(),
                        snapshot.calendar.len()
                    ),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
            let _ = snapshots.send(snapshot).await;
        }
        Err(e) => {
            let log_level = e.log_level();
            log::log!(log_level.into(), "Refresh #{} failed: {}", cycle, e);
            events
                .send_refresh_event(
                    format!("Refresh #{} failed: {}", cycle, e),
                    EventType::Error,
                    log_level,
                )
                .await;
        }
    }
}

/// Owns the running poll loop. Dropping the handle stops polling and
/// aborts any cycle still in flight.
#[derive(Debug)]
pub struct RefreshHandle {
    shutdown_sender: broadcast::Sender<()>,
    force_sender: mpsc::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Runs a cycle now and restarts the interval from this point. A request
    /// made while another is pending is merged into it.
    pub fn refresh_now(&self) {
        let _ = self.force_sender.try_send(());
    }

    /// Stops polling and waits for the loop to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_sender.send(());
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_sender.send(());
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
