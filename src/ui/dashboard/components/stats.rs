//! Dashboard stats cards
//!
//! Renders the four aggregate counters side by side

use super::super::utils::stat_color;
use crate::view_model::StatCard;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats(f: &mut Frame, area: ratatui::layout::Rect, cards: &[StatCard; 4]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let color = stat_color(card.kind);
        let body = Paragraph::new(Line::from(Span::styled(
            card.value.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(card.title, Style::default().fg(Color::Gray)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(body, *chunk);
    }
}
