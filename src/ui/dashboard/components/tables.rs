//! Data tables
//!
//! Wide screens get a regular table; mobile shows each row as a card of
//! label/value pairs.

use super::super::state::{Dashboard, Focus};
use super::super::utils::{ACCENT, MUTED, status_color, truncate};
use crate::navigation::Section;
use crate::tables::{Cell, DataTable, RowAction};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{self, Block, BorderType, Borders, Paragraph, Row, Table};

/// A table section: filter bar above the table.
pub fn render_table_section(f: &mut Frame, area: Rect, dashboard: &Dashboard, section: Section) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let filter = dashboard
        .tables
        .get(&section)
        .map(|table| table.filter.as_str())
        .unwrap_or_default();
    let line = match &dashboard.interaction.filter_input {
        Some(input) => Line::from(vec![
            Span::styled(" Filtrar: ", Style::default().fg(ACCENT)),
            Span::styled(format!("{}▏", input), Style::default().fg(Color::White)),
        ]),
        None if !filter.is_empty() => Line::from(vec![
            Span::styled(" Filtro: ", Style::default().fg(MUTED)),
            Span::styled(filter.to_string(), Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled(" [/] Filtrar", Style::default().fg(MUTED))),
    };
    f.render_widget(Paragraph::new(line), chunks[0]);

    render_table(f, chunks[1], dashboard, section);
}

fn cell_span(cell: &Cell, width: usize) -> Span<'static> {
    match cell {
        Cell::Text(text) => Span::raw(truncate(text, width)),
        Cell::Status(status) => Span::styled(
            status.label(),
            Style::default()
                .fg(status_color(*status))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn row_style(dashboard: &Dashboard, nth_visible: usize, row: usize) -> Style {
    let mut style = Style::default();
    if dashboard.interaction.focus == Focus::Content && dashboard.interaction.row_cursor == nth_visible
    {
        style = style.bg(Color::Rgb(38, 38, 38));
    }
    if let Some((touched, action)) = dashboard.interaction.touching {
        if touched == row {
            let color = match action {
                RowAction::Delete => Color::Rgb(239, 68, 68),
                RowAction::View | RowAction::Edit => ACCENT,
            };
            style = style.fg(Color::Black).bg(color);
        }
    }
    style
}

pub fn render_table(f: &mut Frame, area: Rect, dashboard: &Dashboard, section: Section) {
    let Some(table) = dashboard.tables.get(&section) else {
        return;
    };

    let block = Block::default()
        .title(format!("{} ({})", table.title, table.visible_len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if dashboard.state.is_mobile {
        render_cards(f, area, dashboard, table, block);
        return;
    }

    let columns = table.headers.len().max(1);
    let column_width = (area.width.saturating_sub(2) as usize / columns).max(4);

    let header = Row::new(
        table
            .headers
            .iter()
            .map(|h| widgets::Cell::from(h.clone()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = table
        .visible_rows()
        .enumerate()
        .map(|(nth, (index, row))| {
            Row::new(
                row.cells
                    .iter()
                    .map(|cell| widgets::Cell::from(cell_span(cell, column_width)))
                    .collect::<Vec<_>>(),
            )
            .style(row_style(dashboard, nth, index))
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, columns as u32); columns];
    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_cards(f: &mut Frame, area: Rect, dashboard: &Dashboard, table: &DataTable, block: Block) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;

    for (nth, (index, row)) in table.visible_rows().enumerate() {
        if dashboard.interaction.row_cursor == nth {
            selected_line = lines.len();
        }
        let style = row_style(dashboard, nth, index);
        for (label, cell) in table.labeled_cells(row) {
            let value_width = inner_width.saturating_sub(label.chars().count() + 2);
            lines.push(
                Line::from(vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(MUTED)),
                    cell_span(cell, value_width),
                ])
                .style(style),
            );
        }
        lines.push(Line::default());
    }

    // Keep the selected card on screen.
    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll = selected_line.saturating_sub(visible_height / 2);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
