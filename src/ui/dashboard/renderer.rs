//! Dashboard main renderer

use super::components::{charts, footer, header, logs, settings, sidebar, stats, tables, toasts};
use super::state::Dashboard;
use crate::charts::CanvasId;
use crate::consts::cli_consts::layout::{SIDEBAR_COLLAPSED_COLS, SIDEBAR_EXPANDED_COLS};
use crate::navigation::Section;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Screen regions of one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    pub header: Rect,
    /// Absent on mobile while the menu is closed.
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub activity: Option<Rect>,
    pub footer: Rect,
}

/// Splits the terminal area for the current layout state. Shared by the
/// renderer and mouse hit testing.
pub fn frame_layout(area: Rect, dashboard: &Dashboard) -> FrameLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .split(area);
    let body = main_chunks[1];

    let (sidebar, main) = if dashboard.state.is_mobile {
        let sidebar = dashboard.document.is_sidebar_open().then(|| Rect {
            width: SIDEBAR_EXPANDED_COLS.min(body.width),
            ..body
        });
        (sidebar, body)
    } else {
        let width = if dashboard.document.is_sidebar_collapsed() {
            SIDEBAR_COLLAPSED_COLS
        } else {
            SIDEBAR_EXPANDED_COLS
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Fill(1)])
            .split(body);
        (Some(chunks[0]), chunks[1])
    };

    let (content, activity) = if !dashboard.state.is_mobile && main.height > 24 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(8)])
            .split(main);
        (chunks[0], Some(chunks[1]))
    } else {
        (main, None)
    };

    FrameLayout {
        header: main_chunks[0],
        sidebar,
        content,
        activity,
        footer: main_chunks[2],
    }
}

pub fn render_dashboard(f: &mut Frame, dashboard: &Dashboard) {
    if dashboard.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(17, 17, 17))),
            f.area(),
        );
    }

    let layout = frame_layout(f.area(), dashboard);

    header::render_header(f, layout.header, dashboard);
    render_section(f, layout.content, dashboard);
    if let Some(area) = layout.activity {
        logs::render_logs_panel(f, area, dashboard);
    }
    if let Some(area) = layout.sidebar {
        sidebar::render_sidebar(f, area, dashboard);
    }
    footer::render_footer(f, layout.footer, dashboard);

    toasts::render_toasts(f, f.area(), dashboard);
    toasts::render_modal(f, f.area(), dashboard);
}

fn render_section(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    match dashboard.state.active_section {
        Section::Dashboard => render_overview(f, area, dashboard),
        Section::Analytics => {
            render_chart_pair(f, area, dashboard, [CanvasId::Revenue, CanvasId::Category])
        }
        Section::Settings => settings::render_settings(f, area, dashboard),
        section => tables::render_table_section(f, area, dashboard, section),
    }
}

fn render_overview(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let mobile = dashboard.state.is_mobile;
    let stats_height = if mobile { 8 } else { 4 };
    let charts_height = if mobile {
        dashboard.chart_rows() * 2
    } else {
        dashboard.chart_rows()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stats_height),
            Constraint::Length(charts_height),
            Constraint::Min(5),
        ])
        .split(area);

    stats::render_stats(f, chunks[0], dashboard);
    render_chart_pair(f, chunks[1], dashboard, [CanvasId::Sales, CanvasId::Products]);
    tables::render_table(f, chunks[2], dashboard, Section::Dashboard);
}

/// Two charts side by side, stacked on mobile.
fn render_chart_pair(f: &mut Frame, area: Rect, dashboard: &Dashboard, canvases: [CanvasId; 2]) {
    let rows = dashboard.chart_rows();
    let chunks = if dashboard.state.is_mobile {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(rows), Constraint::Length(rows)])
            .split(area)
    } else {
        let row = Rect {
            height: rows.min(area.height),
            ..area
        };
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(row)
    };

    for (canvas, chunk) in canvases.into_iter().zip(chunks.iter()) {
        charts::render_chart(f, *chunk, dashboard, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, MemoryPreferenceStore};
    use crate::live_data::MockLiveDataFeed;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn dashboard(cols: u16, rows: u16) -> Dashboard {
        let mut feed = MockLiveDataFeed::new();
        feed.expect_next_status().returning(|_| None);
        let mut dashboard = Dashboard::new(
            &Config::default(),
            Box::new(MemoryPreferenceStore::default()),
            Box::new(feed),
            Rect::new(0, 0, cols, rows),
            Instant::now(),
        );
        dashboard.initialize();
        dashboard
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn desktop_layout_has_sidebar_and_activity_panel() {
        let dashboard = dashboard(150, 50);
        let layout = frame_layout(Rect::new(0, 0, 150, 50), &dashboard);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(SIDEBAR_EXPANDED_COLS));
        assert!(layout.activity.is_some());
    }

    #[test]
    fn mobile_layout_hides_closed_sidebar() {
        let dashboard = dashboard(62, 50);
        let layout = frame_layout(Rect::new(0, 0, 62, 50), &dashboard);
        assert!(layout.sidebar.is_none());
        assert!(layout.activity.is_none());
    }

    #[test]
    fn renders_every_section_without_panicking() {
        for (cols, rows) in [(150, 50), (112, 40), (62, 60), (20, 8)] {
            let mut dashboard = dashboard(cols, rows);
            let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
            for section in Section::ALL {
                dashboard.navigate(section);
                terminal.draw(|f| render_dashboard(f, &dashboard)).unwrap();
            }
        }
    }

    #[test]
    fn overview_shows_page_title_and_stats() {
        let mut dashboard = dashboard(150, 50);
        for _ in 0..30 {
            dashboard.update(Instant::now());
        }
        let mut terminal = Terminal::new(TestBackend::new(150, 50)).unwrap();
        terminal.draw(|f| render_dashboard(f, &dashboard)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Dashboard"));
        assert!(text.contains("R$ 45.670"));
        assert!(text.contains("Pedidos Recentes"));
    }
}
