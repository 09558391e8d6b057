//! Sidebar navigation. One line per section so clicks map to rows.

use super::super::state::{Dashboard, Focus};
use super::super::utils::{ACCENT, MUTED};
use crate::navigation::Section;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

pub fn render_sidebar(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let collapsed = !dashboard.state.is_mobile && dashboard.document.is_sidebar_collapsed();
    let focused = dashboard.interaction.focus == Focus::Sidebar;

    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let active = dashboard.document.is_nav_active(*section);
            let under_cursor = focused && dashboard.interaction.nav_cursor == index;

            let mut style = if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            if under_cursor {
                style = style.bg(Color::Rgb(38, 38, 38));
            }

            let text = if collapsed {
                format!(" {}", section.icon())
            } else {
                format!(" {} {}", section.icon(), section.title())
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let title = if collapsed { "SA" } else { "STOREFRONT" };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { ACCENT } else { Color::DarkGray }));

    if dashboard.state.is_mobile {
        // Drawn over the content while the mobile menu is open.
        f.render_widget(Clear, area);
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}
