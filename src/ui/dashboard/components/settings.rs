//! Settings page: toggle switches.

use super::super::state::{Dashboard, Focus};
use super::super::utils::{ACCENT, MUTED};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_settings(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let focused = dashboard.interaction.focus == Focus::Content;

    let mut lines: Vec<Line> = dashboard
        .settings
        .iter()
        .enumerate()
        .map(|(index, setting)| {
            let (switch, switch_style) = if setting.enabled {
                ("[● ]", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                ("[ ○]", Style::default().fg(MUTED))
            };
            let mut label_style = Style::default().fg(Color::White);
            if focused && dashboard.interaction.row_cursor == index {
                label_style = label_style.bg(Color::Rgb(38, 38, 38));
            }
            Line::from(vec![
                Span::styled(switch, switch_style),
                Span::raw(" "),
                Span::styled(setting.label.clone(), label_style),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[S] Salvar alterações",
        Style::default().fg(ACCENT),
    )));

    let block = Block::default()
        .title("Configurações")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::uniform(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
