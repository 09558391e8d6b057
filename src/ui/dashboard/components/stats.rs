//! Summary stat cards.

use super::super::state::Dashboard;
use super::super::utils::ACCENT;
use crate::stats::StatCard;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let cells: Vec<Rect> = if dashboard.state.is_mobile {
        // 2x2 grid
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(area)
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                    .split(*row)
                    .to_vec()
            })
            .collect()
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area)
            .to_vec()
    };

    for (card, cell) in dashboard.stats.iter().zip(cells) {
        render_card(f, cell, card);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &StatCard) {
    let change_color = if card.is_positive() {
        ACCENT
    } else {
        Color::Rgb(239, 68, 68)
    };
    let arrow = if card.is_positive() { "▲" } else { "▼" };

    let lines = vec![
        Line::from(Span::styled(
            card.display_value(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", arrow, card.display_change()),
            Style::default().fg(change_color),
        )),
    ];

    let block = Block::default()
        .title(card.kind.label())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
