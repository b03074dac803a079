//! Dashboard header component
//!
//! Renders the title, live indicator and the refresh countdown gauge

use super::super::state::{DashboardState, RefreshStatus};
use super::super::utils::format_uptime;

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title, status and countdown to the next refresh.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let (status_text, status_color) = match state.refresh_status() {
        RefreshStatus::Pending => ("CONNECTING".to_string(), Color::LightBlue),
        RefreshStatus::Ok => ("LIVE".to_string(), Color::LightGreen),
        RefreshStatus::Failed { consecutive } => {
            (format!("STALE ({} failed)", consecutive), Color::LightRed)
        }
    };
    let updated = state
        .snapshot()
        .map(|snapshot| {
            format!(
                "  updated {}",
                snapshot.fetched_at.with_timezone(&Local).format("%H:%M:%S")
            )
        })
        .unwrap_or_default();
    // Blink the live dot every other second
    let dot = if (state.tick / 4) % 2 == 0 { "●" } else { "○" };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("FOREX SIGNAL DASHBOARD v{}  ", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} {}", dot, status_text),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {}  up {}{}",
                Local::now().format("%H:%M:%S"),
                format_uptime(state.start_time.elapsed()),
                updated
            ),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let label = match state.seconds_until_refresh() {
        Some(0) => "REFRESHING".to_string(),
        Some(secs) => format!("NEXT REFRESH IN {}s  |  {}", secs, state.environment.api_url()),
        None => format!("WAITING FOR FIRST REFRESH  |  {}", state.environment.api_url()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .percent(state.refresh_progress_percent())
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}
