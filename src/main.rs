mod api;
mod chart;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod models;
mod probe;
mod refresh;
mod session;
mod ui;
mod view_model;

use crate::api::ApiClient;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{SessionOptions, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about = "Terminal dashboard for forex trading signals", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Backend base URL (overrides SIGNAL_API_URL and the config file)
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between refreshes
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,

        /// Number of signals requested per refresh
        #[arg(long, value_name = "N")]
        signal_limit: Option<u32>,

        /// Print events and snapshots to the console instead of drawing the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Enable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,

        /// Skip a refresh while the previous one is still running
        #[arg(long, action = clap::ArgAction::SetTrue)]
        skip_overlapping: bool,
    },
    /// Fetch the dashboard data once and print it
    Snapshot {
        /// Backend base URL (overrides SIGNAL_API_URL and the config file)
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Number of signals requested
        #[arg(long, value_name = "N")]
        signal_limit: Option<u32>,
    },
    /// Check that the backend is reachable and healthy
    Check {
        /// Backend base URL (overrides SIGNAL_API_URL and the config file)
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;

    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            refresh_secs,
            signal_limit,
            headless,
            with_background,
            skip_overlapping,
        } => {
            if headless {
                logging::init_console_logger();
            }
            let options = SessionOptions {
                api_url,
                refresh_secs,
                signal_limit,
                skip_overlapping,
            };
            let session = setup_session(config, options).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Snapshot {
            api_url,
            signal_limit,
        } => {
            logging::init_console_logger();
            let environment = Environment::resolve(api_url.as_deref(), config.api_url.as_deref());
            let client = ApiClient::new(environment)?;
            let limit = signal_limit
                .filter(|limit| *limit > 0)
                .unwrap_or_else(|| config.signal_limit());
            probe::print_snapshot(&client, limit, &config.default_symbol()).await
        }
        Command::Check { api_url } => {
            logging::init_console_logger();
            let environment = Environment::resolve(api_url.as_deref(), config.api_url.as_deref());
            let client = ApiClient::new(environment)?;
            probe::check_backend(&client).await
        }
    }
}
