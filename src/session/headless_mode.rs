//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::view_model::{DashboardView, SymbolSelection};
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Printing each snapshot as it arrives
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    let mut selection = SymbolSelection::new(session.default_symbol.clone());

    // Event loop: log events and snapshots to console until Ctrl+C
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            Some(snapshot) = session.snapshot_receiver.recv() => {
                selection.on_symbols(&snapshot.symbols);
                let view = DashboardView::build(Some(&snapshot), &selection, &chrono::Local::now());
                println!("{}", view);
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.refresh.shutdown().await;
    print_session_exit_success();

    Ok(())
}
