//! Dashboard calendar panel
//!
//! Renders upcoming economic events, soonest first

use super::super::utils::impact_style;
use crate::view_model::{CalendarRow, EMPTY_CALENDAR_MESSAGE};

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_calendar_panel(f: &mut Frame, area: ratatui::layout::Rect, rows: &[CalendarRow]) {
    let block = Block::default()
        .title("ECONOMIC CALENDAR")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    if rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_CALENDAR_MESSAGE,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for row in rows {
        let (color, icon) = impact_style(row.tier);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(
                row.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(row.when.clone(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(row.pair.clone(), Style::default().fg(Color::LightCyan)),
            Span::raw("  "),
            Span::styled(row.badge.clone(), Style::default().fg(color)),
        ]));

        let mut figures = Vec::new();
        if let Some(forecast) = &row.forecast {
            figures.push(format!("Forecast {}", forecast));
        }
        if let Some(previous) = &row.previous {
            figures.push(format!("Previous {}", previous));
        }
        if !figures.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", figures.join("  ")),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let calendar = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(calendar, area);
}
