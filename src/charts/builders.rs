//! The four dashboard charts, each a pure function of the device tier.

use super::{
    CanvasId, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Interaction, Legend,
    LegendPosition, Plugins, Scale, TickFormat, Ticks,
};
use crate::device::DeviceTier;
use std::collections::BTreeMap;

const GREEN: &str = "#10b981";
const AMBER: &str = "#f59e0b";
const RED: &str = "#ef4444";
const INK: &str = "#111111";
const GRAY: &str = "#9ca3af";
const GRID: &str = "#e5e7eb";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn pick<T>(mobile: bool, on_mobile: T, otherwise: T) -> T {
    if mobile { on_mobile } else { otherwise }
}

/// Builds the configuration for the chart drawn on `canvas`.
pub fn build(canvas: CanvasId, tier: DeviceTier) -> ChartConfig {
    match canvas {
        CanvasId::Sales => sales_chart(tier),
        CanvasId::Products => products_chart(tier),
        CanvasId::Revenue => revenue_chart(tier),
        CanvasId::Category => category_chart(tier),
    }
}

/// Monthly sales, line chart.
pub fn sales_chart(tier: DeviceTier) -> ChartConfig {
    let mobile = tier == DeviceTier::Mobile;
    let font_size = pick(mobile, 10, 12);

    let mut scales = BTreeMap::new();
    scales.insert(
        "y".to_string(),
        Scale {
            begin_at_zero: true,
            grid_color: Some(GRID.to_string()),
            ticks: Ticks {
                display: true,
                font_size,
                max_rotation: None,
                format: TickFormat::Plain,
            },
        },
    );
    scales.insert(
        "x".to_string(),
        Scale {
            begin_at_zero: false,
            grid_color: Some(GRID.to_string()),
            ticks: Ticks {
                display: true,
                font_size,
                max_rotation: Some(pick(mobile, 45, 0)),
                format: TickFormat::Plain,
            },
        },
    );

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: strings(&["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set"]),
            datasets: vec![Dataset {
                label: Some("Vendas".to_string()),
                data: vec![120.0, 190.0, 300.0, 500.0, 200.0, 300.0, 450.0, 680.0, 920.0],
                background_color: strings(&["rgba(16, 185, 129, 0.15)"]),
                border_color: strings(&[GREEN]),
                border_width: pick(mobile, 2, 3),
                fill: true,
                tension: 0.4,
                point_radius: Some(pick(mobile, 3, 4)),
                point_hover_radius: Some(pick(mobile, 5, 6)),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    display: !mobile,
                    position: None,
                    font_size,
                    padding: None,
                    use_point_style: false,
                },
            },
            scales,
            interaction: Some(Interaction {
                intersect: false,
                mode: "index".to_string(),
            }),
        },
    }
}

/// Sales share per product line, doughnut chart.
pub fn products_chart(tier: DeviceTier) -> ChartConfig {
    let mobile = tier == DeviceTier::Mobile;

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: strings(&["Camisetas", "Moletons", "Calças", "Tênis", "Acessórios"]),
            datasets: vec![Dataset {
                data: vec![30.0, 25.0, 20.0, 15.0, 10.0],
                background_color: strings(&[GREEN, AMBER, RED, INK, GRAY]),
                border_width: 0,
                cutout: Some(pick(mobile, "60%", "50%").to_string()),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: Some(LegendPosition::Bottom),
                    font_size: pick(mobile, 10, 12),
                    padding: Some(pick(mobile, 10, 20)),
                    use_point_style: true,
                },
            },
            scales: BTreeMap::new(),
            interaction: None,
        },
    }
}

/// Weekly revenue against target, bar chart with two series.
pub fn revenue_chart(tier: DeviceTier) -> ChartConfig {
    let mobile = tier == DeviceTier::Mobile;
    let font_size = pick(mobile, 9, 11);
    let border_radius = Some(pick(mobile, 4, 8));

    let labels = if mobile {
        strings(&["S1", "S2", "S3", "S4"])
    } else {
        strings(&["Semana 1", "Semana 2", "Semana 3", "Semana 4"])
    };

    let mut scales = BTreeMap::new();
    scales.insert(
        "y".to_string(),
        Scale {
            begin_at_zero: true,
            grid_color: None,
            ticks: Ticks {
                display: true,
                font_size,
                max_rotation: None,
                format: pick(mobile, TickFormat::CurrencyThousands, TickFormat::CurrencyFull),
            },
        },
    );
    scales.insert(
        "x".to_string(),
        Scale {
            begin_at_zero: false,
            grid_color: None,
            ticks: Ticks {
                display: true,
                font_size,
                max_rotation: None,
                format: TickFormat::Plain,
            },
        },
    );

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![
                Dataset {
                    label: Some("Receita".to_string()),
                    data: vec![12000.0, 15000.0, 18000.0, 14500.0],
                    background_color: strings(&[GREEN]),
                    border_radius,
                    ..Dataset::default()
                },
                Dataset {
                    label: Some("Meta".to_string()),
                    data: vec![15000.0; 4],
                    background_color: strings(&[GRID]),
                    border_radius,
                    ..Dataset::default()
                },
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: Some(LegendPosition::Top),
                    font_size: pick(mobile, 10, 12),
                    padding: None,
                    use_point_style: false,
                },
            },
            scales,
            interaction: None,
        },
    }
}

/// Sales per collection, polar-area chart.
pub fn category_chart(tier: DeviceTier) -> ChartConfig {
    let mobile = tier == DeviceTier::Mobile;

    let labels = if mobile {
        strings(&["Camisas", "Bonés", "Bermudas", "Chronic", "Blessed"])
    } else {
        strings(&["Camisas de Time", "Bonés", "Bermudas", "Chronic", "Blessed Choice"])
    };

    let mut scales = BTreeMap::new();
    scales.insert(
        "r".to_string(),
        Scale {
            begin_at_zero: false,
            grid_color: Some("rgba(0, 0, 0, 0.1)".to_string()),
            ticks: Ticks {
                display: !mobile,
                font_size: pick(mobile, 8, 10),
                max_rotation: None,
                format: TickFormat::Plain,
            },
        },
    );

    ChartConfig {
        kind: ChartKind::PolarArea,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                data: vec![40.0, 25.0, 20.0, 30.0, 15.0],
                background_color: strings(&[
                    "rgba(16, 185, 129, 0.7)",
                    "rgba(245, 158, 11, 0.7)",
                    "rgba(239, 68, 68, 0.7)",
                    "rgba(17, 17, 17, 0.7)",
                    "rgba(156, 163, 175, 0.7)",
                ]),
                border_color: strings(&[GREEN, AMBER, RED, INK, GRAY]),
                border_width: pick(mobile, 1, 2),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: Some(LegendPosition::Bottom),
                    font_size: pick(mobile, 9, 11),
                    padding: Some(pick(mobile, 8, 15)),
                    use_point_style: false,
                },
            },
            scales,
            interaction: None,
        },
    }
}
