//! Periodic refresh of dashboard data

mod controller;
mod snapshot;

pub use controller::{OverlapPolicy, RefreshConfig, RefreshController, RefreshHandle};
pub use snapshot::{DashboardSnapshot, fetch_snapshot};
