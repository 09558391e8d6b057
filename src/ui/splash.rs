//! Loading screen shown while the dashboard is prepared.

use crate::navigation::Section;
use crate::ui::dashboard::utils::{ACCENT, MUTED};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Margin};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

const CARD_WIDTH: u16 = 44;

/// Sections whose label is ticked off once `progress` (0.0..=1.0) passes them.
fn section_lines(progress: f64) -> Vec<Line<'static>> {
    let total = Section::ALL.len() as f64;
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let ready = progress * total >= (i + 1) as f64;
            let (mark, style) = if ready {
                ("✓", Style::default().fg(ACCENT))
            } else {
                ("·", Style::default().fg(MUTED))
            };
            Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::styled(section.title(), style),
            ])
        })
        .collect()
}

pub fn render_splash(f: &mut Frame, progress: f64) {
    let progress = progress.clamp(0.0, 1.0);
    let sections = section_lines(progress);
    let card_height = sections.len() as u16 + 7;

    let [card] = Layout::vertical([Constraint::Length(card_height)])
        .flex(Flex::Center)
        .areas(f.area());
    let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(Line::from(" 🛍 Loja Admin ").alignment(Alignment::Center));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let [subtitle, list, gauge] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(sections.len() as u16 + 1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let version = Paragraph::new(Line::from(Span::styled(
        format!("Painel Administrativo · v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center);
    f.render_widget(version, subtitle);

    f.render_widget(Paragraph::new(sections), list.inner(Margin::new(2, 0)));

    let gauge_widget = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(progress)
        .label("Carregando painel...");
    f.render_widget(gauge_widget, gauge);
}
