//! Dashboard header component
//!
//! Renders the menu button, page title, tier badge and search input

use super::super::state::Dashboard;
use super::super::utils::ACCENT;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with page title and status badges.
pub fn render_header(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(1)])
        .split(inner);

    // The menu button only exists on mobile; larger screens get the sidebar toggle.
    let button = if dashboard.state.is_mobile { "☰ " } else { "≡ " };
    let title = Line::from(vec![
        Span::styled(button, Style::default().fg(ACCENT)),
        Span::styled(
            dashboard.document.page_title().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let right = match &dashboard.interaction.search_input {
        Some(query) => Line::from(vec![
            Span::styled("Buscar: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}▏", query), Style::default().fg(Color::White)),
        ]),
        None => {
            let version = env!("CARGO_PKG_VERSION");
            let mut spans = vec![Span::styled(
                format!("STOREFRONT ADMIN v{} ", version),
                Style::default().fg(Color::Gray),
            )];
            if let Some(tier) = dashboard.document.tier_marker() {
                spans.push(Span::styled(
                    format!(" {} ", tier.as_ref().to_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        }
    };
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}
