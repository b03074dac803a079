//! Splash screen rendering module.
//!
//! Shown until the first snapshot arrives, with the latest activity line so
//! a backend that is down does not look like a hang.

use super::dashboard::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
  ███████╗  ██╗   ██████╗   ███╗   ██╗   █████╗   ██╗
  ██╔════╝  ██║  ██╔════╝   ████╗  ██║  ██╔══██╗  ██║
  ███████╗  ██║  ██║  ███╗  ██╔██╗ ██║  ███████║  ██║
  ╚════██║  ██║  ██║   ██║  ██║╚██╗██║  ██╔══██║  ██║
  ███████║  ██║  ╚██████╔╝  ██║ ╚████║  ██║  ██║  ███████╗
  ╚══════╝  ╚═╝   ╚═════╝   ╚═╝  ╚═══╝  ╚═╝  ╚═╝  ╚══════╝
"#;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_splash(f: &mut Frame, state: &DashboardState) {
    // Convert LOGO_NAME into styled Lines
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));

    lines.push(
        Span::styled(
            format!("Forex Signal Dashboard {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    lines.push(Line::from(Span::raw(" ")));

    let status = state
        .activity_logs
        .back()
        .map(|event| event.msg.clone())
        .unwrap_or_else(|| format!("Connecting to {}", state.environment.api_url()));
    lines.push(
        Span::styled(
            format!("{} {}", SPINNER[state.tick % SPINNER.len()], status),
            Style::default().fg(Color::Gray),
        )
        .into(),
    );

    // Determine the logo height
    let logo_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}
