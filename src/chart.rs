//! Chart widget mount
//!
//! The chart itself is drawn by an external charting widget. This module
//! builds the options the widget is created with and tracks whether the
//! mounted widget has reported itself ready.

use crate::consts::dashboard_consts::chart::{HEIGHT_PX, SYMBOL_PREFIX};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Chart widget not ready after {0:?}")]
    Timeout(Duration),

    /// The mount was replaced or torn down before it became ready.
    #[error("Chart widget was unmounted before becoming ready")]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyInputs {
    pub length: u32,
}

/// An indicator drawn on top of the price series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Study {
    pub id: &'static str,
    pub inputs: StudyInputs,
}

impl Study {
    fn new(id: &'static str, length: u32) -> Self {
        Self {
            id,
            inputs: StudyInputs { length },
        }
    }
}

/// Options the chart widget is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartWidgetConfig {
    pub symbol: String,
    pub interval: &'static str,
    pub timezone: &'static str,
    pub theme: &'static str,
    pub height: u32,
    pub container_id: String,
    pub studies: Vec<Study>,
}

impl ChartWidgetConfig {
    /// Widget options for `symbol`. `mounted_at` makes the container id
    /// unique per mount, so every symbol change creates a fresh widget.
    pub fn for_symbol(symbol: &str, mounted_at: DateTime<Utc>) -> Self {
        Self {
            symbol: format!("{}:{}", SYMBOL_PREFIX, symbol),
            interval: "1",
            timezone: "Etc/UTC",
            theme: "dark",
            height: HEIGHT_PX,
            container_id: format!("tradingview_{}_{}", symbol, mounted_at.timestamp_millis()),
            studies: vec![
                Study::new("MASimple@tv-basicstudies", 8),
                Study::new("MASimple@tv-basicstudies", 21),
                Study::new("RSI@tv-basicstudies", 14),
            ],
        }
    }

    /// Short form of the studies, e.g. `MA(8) MA(21) RSI(14)`.
    pub fn studies_summary(&self) -> String {
        self.studies
            .iter()
            .map(|study| {
                let name = study.id.split('@').next().unwrap_or(study.id);
                let name = name.strip_prefix("MASimple").map_or(name, |_| "MA");
                format!("{}({})", name, study.inputs.length)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One mounted chart widget and its readiness signal.
#[derive(Debug)]
pub struct ChartMount {
    pub config: ChartWidgetConfig,
    ready: watch::Sender<bool>,
}

impl ChartMount {
    pub fn new(config: ChartWidgetConfig) -> Self {
        let (ready, _) = watch::channel(false);
        Self { config, ready }
    }

    /// Called by the host once the widget has been drawn.
    pub fn mark_ready(&self) {
        self.ready.send_if_modified(|ready| {
            let changed = !*ready;
            *ready = true;
            changed
        });
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// A waiter that resolves once this mount is ready.
    pub fn readiness(&self) -> ReadySignal {
        ReadySignal {
            receiver: self.ready.subscribe(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReadySignal {
    receiver: watch::Receiver<bool>,
}

impl ReadySignal {
    /// Waits for the widget to become ready, giving up after `timeout`.
    pub async fn wait(mut self, timeout: Duration) -> Result<(), ChartError> {
        match tokio::time::timeout(timeout, self.receiver.wait_for(|ready| *ready)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(_)) => Err(ChartError::Closed),
            Err(_) => Err(ChartError::Timeout(timeout)),
        }
    }
}
