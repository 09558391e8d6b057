//! Toast stack (top right) and the confirmation modal.

use super::super::state::{Dashboard, Modal};
use super::super::utils::ACCENT;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

pub fn render_toasts(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    // Newest on top
    for toast in dashboard.notifications.toasts().iter().rev() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = toast.kind.color();
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", toast.kind.glyph()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(toast.message.clone()),
        ]);

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(line)
                .style(Style::default().fg(Color::White).bg(color))
                .block(
                    Block::default()
                        .title_top(Line::from("× ").alignment(Alignment::Right))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
        y += TOAST_HEIGHT;
    }
}

pub fn render_modal(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let Some(Modal::ConfirmDelete { question, .. }) = &dashboard.interaction.modal else {
        return;
    };

    let width = 50.min(area.width);
    let height = 6.min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let lines = vec![
        Line::from(question.clone()),
        Line::default(),
        Line::from(vec![
            Span::styled("[S] Sim", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("[N] Não", Style::default().fg(Color::Gray)),
        ]),
    ];

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Confirmar")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::Rgb(239, 68, 68))),
            ),
        rect,
    );
}
