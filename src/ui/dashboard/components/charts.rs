//! Chart panels
//!
//! Draws whatever configuration the live instance on a canvas carries.
//! Canvases without an instance (mobile charts not yet scrolled into view)
//! show a placeholder.

use super::super::state::Dashboard;
use super::super::utils::{MUTED, parse_css_color};
use crate::charts::{CanvasId, ChartConfig, ChartKind, TickFormat};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset as SeriesData,
    GraphType, Paragraph,
};

const FALLBACK_COLOR: Color = Color::Gray;

fn title(canvas: CanvasId) -> &'static str {
    match canvas {
        CanvasId::Sales => "Vendas Mensais",
        CanvasId::Products => "Produtos Mais Vendidos",
        CanvasId::Revenue => "Receita Semanal",
        CanvasId::Category => "Vendas por Categoria",
    }
}

fn color(value: Option<&str>) -> Color {
    value.and_then(parse_css_color).unwrap_or(FALLBACK_COLOR)
}

fn y_format(config: &ChartConfig) -> TickFormat {
    config
        .options
        .scales
        .get("y")
        .map(|scale| scale.ticks.format)
        .unwrap_or(TickFormat::Plain)
}

pub fn render_chart(f: &mut Frame, area: Rect, dashboard: &Dashboard, canvas: CanvasId) {
    let block = Block::default()
        .title(title(canvas))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(instance) = dashboard.charts.instance(canvas) else {
        f.render_widget(
            Paragraph::new("Carregando gráfico…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(MUTED))
                .block(block),
            area,
        );
        return;
    };

    let config = instance.config();
    match config.kind {
        ChartKind::Line => render_line(f, area, config, block),
        ChartKind::Bar => render_bars(f, area, config, block),
        ChartKind::Doughnut | ChartKind::PolarArea => render_shares(f, area, config, block),
    }
}

fn render_line(f: &mut Frame, area: Rect, config: &ChartConfig, block: Block) {
    let labels = &config.data.labels;
    let format = y_format(config);

    let series: Vec<Vec<(f64, f64)>> = config
        .data
        .datasets
        .iter()
        .map(|dataset| {
            dataset
                .data
                .iter()
                .enumerate()
                .map(|(x, y)| (x as f64, *y))
                .collect()
        })
        .collect();

    let max = series
        .iter()
        .flatten()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max);
    let upper = (max * 1.1).max(1.0);

    let datasets: Vec<SeriesData> = config
        .data
        .datasets
        .iter()
        .zip(series.iter())
        .map(|(dataset, points)| {
            let mut data = SeriesData::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color(dataset.border_color.first().map(String::as_str))))
                .data(points);
            if config.options.plugins.legend.display {
                if let Some(label) = &dataset.label {
                    data = data.name(label.clone());
                }
            }
            data
        })
        .collect();

    let x_labels: Vec<Line> = match (labels.first(), labels.last()) {
        (Some(first), Some(last)) => vec![Line::from(first.clone()), Line::from(last.clone())],
        _ => Vec::new(),
    };
    let y_labels = vec![
        Line::from(format.format(0.0)),
        Line::from(format.format(upper / 2.0)),
        Line::from(format.format(upper)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, labels.len().saturating_sub(1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, upper])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn render_bars(f: &mut Frame, area: Rect, config: &ChartConfig, block: Block) {
    let format = y_format(config);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(inner);

    let datasets = &config.data.datasets;
    let series = datasets.len().max(1) as u16;
    let groups = config.data.labels.len().max(1) as u16;
    let bar_width = (chunks[0].width / groups)
        .saturating_sub(1)
        .checked_div(series)
        .unwrap_or(1)
        .max(1);

    let mut chart = BarChart::default().bar_width(bar_width).bar_gap(0).group_gap(1);
    for (index, label) in config.data.labels.iter().enumerate() {
        let bars: Vec<Bar> = datasets
            .iter()
            .filter_map(|dataset| {
                let value = *dataset.data.get(index)?;
                Some(
                    Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .text_value(format.format(value))
                        .style(Style::default().fg(color(dataset.color_at(0)))),
                )
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }
    f.render_widget(chart, chunks[0]);

    if config.options.plugins.legend.display {
        let legend: Vec<Span> = datasets
            .iter()
            .filter_map(|dataset| {
                let label = dataset.label.as_ref()?;
                Some(Span::styled(
                    format!("■ {}  ", label),
                    Style::default().fg(color(dataset.color_at(0))),
                ))
            })
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

/// Doughnut and polar area charts become one proportional bar per slice.
fn render_shares(f: &mut Frame, area: Rect, config: &ChartConfig, block: Block) {
    let Some(dataset) = config.data.datasets.first() else {
        f.render_widget(block, area);
        return;
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let label_width = config
        .data
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .min(inner_width / 3);
    let max = dataset.data.iter().copied().fold(0.0_f64, f64::max);
    let total: f64 = dataset.data.iter().sum();
    let bar_space = inner_width.saturating_sub(label_width + 8);

    let lines: Vec<Line> = config
        .data
        .labels
        .iter()
        .zip(dataset.data.iter())
        .enumerate()
        .map(|(index, (label, value))| {
            let filled = if max > 0.0 {
                ((value / max) * bar_space as f64).round() as usize
            } else {
                0
            };
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", label, width = label_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(color(dataset.color_at(index))),
                ),
                Span::styled(
                    format!(" {:.0}%", share),
                    Style::default().fg(MUTED).add_modifier(Modifier::DIM),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
