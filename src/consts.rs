pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying events from the refresh task
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size of the channel carrying completed snapshots to the view
    pub const SNAPSHOT_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // VIEW CONFIGURATION
    // =============================================================================

    /// Symbol selected before the first symbol list arrives.
    pub const DEFAULT_SYMBOL: &str = "EURUSD";

    /// Maximum number of signal cards shown per symbol group.
    pub const MAX_SIGNALS_PER_GROUP: usize = 6;

    /// Placeholder shown for a missing stop-loss or take-profit.
    pub const MISSING_PRICE: &str = "N/A";

    /// Redraw cadence of the terminal UI (milliseconds)
    pub const UI_TICK_MS: u64 = 250;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Polling configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between poll cycles (seconds)
        pub const INTERVAL_SECS: u64 = 30;

        /// Number of signals requested per poll cycle
        pub const SIGNAL_FETCH_LIMIT: u32 = 100;

        /// Helper function to get the poll interval
        pub const fn interval() -> Duration {
            Duration::from_secs(INTERVAL_SECS)
        }
    }

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Base URL used when nothing else is configured
        pub const DEFAULT_API_URL: &str = "http://localhost:8000";

        /// Environment variable overriding the base URL
        pub const API_URL_ENV: &str = "SIGNAL_API_URL";

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // CHART WIDGET CONFIGURATION
    // =============================================================================

    pub mod chart {
        use std::time::Duration;

        /// How long to wait for the chart widget host to report readiness
        pub const READY_TIMEOUT_SECS: u64 = 10;

        /// Exchange prefix for forex symbols
        pub const SYMBOL_PREFIX: &str = "FX";

        /// Chart height in pixels requested from the widget
        pub const HEIGHT_PX: u32 = 600;

        pub const fn ready_timeout() -> Duration {
            Duration::from_secs(READY_TIMEOUT_SECS)
        }
    }
}
