//! Dashboard chart panel
//!
//! Renders the symbol selector and the mounted chart widget's settings

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs, Wrap};

pub fn render_chart_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("LIVE CHART")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(inner);

    let symbols = state.symbols();
    let selected = state.selection().selected();
    if symbols.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("[{}]", selected),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            chunks[0],
        );
    } else {
        let titles: Vec<Line> = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| match i {
                0..=8 => Line::from(format!("{} {}", i + 1, symbol)),
                _ => Line::from(symbol.as_str()),
            })
            .collect();
        let tabs = Tabs::new(titles)
            .select(symbols.iter().position(|s| s == selected))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        f.render_widget(tabs, chunks[0]);
    }

    let chart = state.chart();
    let config = &chart.config;
    let (status, status_color) = if chart.is_ready() {
        ("ready", Color::LightGreen)
    } else {
        ("loading", Color::LightYellow)
    };
    let detail = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                config.symbol.clone(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled(
                if state.selection().is_user_chosen() { "  pinned" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        detail(
            "Interval",
            format!("{}m  {}  {} theme", config.interval, config.timezone, config.theme),
        ),
        detail("Studies", config.studies_summary()),
        detail("Widget", config.container_id.clone()),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}
