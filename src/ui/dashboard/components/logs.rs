//! Dashboard logs panel component
//!
//! Renders the activity log fed by the `log` records of every component

use super::super::state::Dashboard;
use super::super::utils::{format_compact_timestamp, get_source_color};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity panel, newest entries first.
pub fn render_logs_panel(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    // Borders and horizontal padding only
    let log_count = area.height.saturating_sub(2).max(1) as usize;

    let log_lines: Vec<Line> = dashboard
        .activity_logs
        .iter()
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.log_level {
                LogLevel::Error => "✖",
                LogLevel::Warn => "!",
                LogLevel::Info => "•",
                LogLevel::Debug | LogLevel::Trace => "·",
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<10} ", event.source),
                    Style::default().fg(get_source_color(&event.source)),
                ),
                Span::raw(event.msg.clone()),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Aguardando atividade...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ATIVIDADE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    f.render_widget(
        log_paragraph.block(logs_block).wrap(Wrap { trim: true }),
        area,
    );
}
