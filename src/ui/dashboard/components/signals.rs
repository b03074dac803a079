//! Dashboard signals panel
//!
//! Renders the latest signals grouped by symbol

use super::super::utils::side_color;
use crate::view_model::{EMPTY_SIGNALS_HINT, EMPTY_SIGNALS_MESSAGE, SignalGroup};

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_signals_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    signal_count: usize,
    groups: &[SignalGroup],
) {
    let block = Block::default()
        .title("TRADING SIGNALS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if signal_count == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_SIGNALS_MESSAGE,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                EMPTY_SIGNALS_HINT,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for group in groups {
        lines.push(Line::from(Span::styled(
            group.header(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )));
        for row in &group.rows {
            let color = side_color(row.side);
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<4} ", row.side.to_string()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}  ", row.time), Style::default().fg(Color::Gray)),
                Span::styled("SL ", Style::default().fg(Color::DarkGray)),
                Span::styled(row.stop_loss.clone(), Style::default().fg(Color::LightRed)),
                Span::styled("  TP ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    row.take_profit.clone(),
                    Style::default().fg(Color::LightGreen),
                ),
                Span::styled(format!("  {}", row.reason), Style::default().fg(Color::White)),
            ]));
        }
        if let Some(overflow) = group.overflow_label() {
            lines.push(Line::from(Span::styled(
                format!(" {}", overflow),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }

    let signals = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(signals, area);
}
