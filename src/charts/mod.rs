//! Charts
//!
//! Declarative chart configurations, the instance registry adapter over the
//! rendering backend, and the provisioner deciding when charts are created.

pub mod builders;
pub mod provisioner;
pub mod registry;
pub mod terminal;

use serde::Serialize;
use std::collections::BTreeMap;

pub use provisioner::{CanvasHost, ChartProvisioner};
pub use registry::{ChartBackend, ChartError, ChartInstance, InstanceRegistry};

/// Canvas identifiers of the four dashboard charts.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, strum::Display, strum::AsRefStr,
)]
pub enum CanvasId {
    #[strum(serialize = "salesChart")]
    #[serde(rename = "salesChart")]
    Sales,
    #[strum(serialize = "productsChart")]
    #[serde(rename = "productsChart")]
    Products,
    #[strum(serialize = "revenueChart")]
    #[serde(rename = "revenueChart")]
    Revenue,
    #[strum(serialize = "categoryChart")]
    #[serde(rename = "categoryChart")]
    Category,
}

impl CanvasId {
    pub const ALL: [CanvasId; 4] = [
        CanvasId::Sales,
        CanvasId::Products,
        CanvasId::Revenue,
        CanvasId::Category,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
    PolarArea,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    /// One colour for the whole series, or one per data point.
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_color: Vec<String>,
    pub border_width: u16,
    pub fill: bool,
    pub tension: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u16>,
}

impl Dataset {
    /// Colour of the data point at `index`, cycling through the palette.
    pub fn color_at(&self, index: usize) -> Option<&str> {
        if self.background_color.is_empty() {
            return None;
        }
        self.background_color
            .get(index % self.background_color.len())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scales: BTreeMap<String, Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    pub font_size: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
    pub use_point_style: bool,
}

/// How axis tick values are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickFormat {
    Plain,
    /// `R$12k`
    CurrencyThousands,
    /// `R$12.000`
    CurrencyFull,
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => crate::stats::format_pt_br(value.round() as i64),
            TickFormat::CurrencyThousands => {
                let thousands = value / 1000.0;
                if thousands.fract() == 0.0 {
                    format!("R${}k", thousands as i64)
                } else {
                    format!("R${:.1}k", thousands)
                }
            }
            TickFormat::CurrencyFull => {
                format!("R${}", crate::stats::format_pt_br(value.round() as i64))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub display: bool,
    pub font_size: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u16>,
    pub format: TickFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_ids_match_page_identifiers() {
        let ids: Vec<String> = CanvasId::ALL.iter().map(|id| id.to_string()).collect();
        assert_eq!(
            ids,
            vec!["salesChart", "productsChart", "revenueChart", "categoryChart"]
        );
        assert_eq!(CanvasId::Revenue.as_ref(), "revenueChart");
    }

    #[test]
    fn tick_formats() {
        assert_eq!(TickFormat::CurrencyThousands.format(12000.0), "R$12k");
        assert_eq!(TickFormat::CurrencyThousands.format(14500.0), "R$14.5k");
        assert_eq!(TickFormat::CurrencyFull.format(15000.0), "R$15.000");
        assert_eq!(TickFormat::Plain.format(920.0), "920");
    }

    #[test]
    fn color_at_cycles_palette() {
        let dataset = Dataset {
            background_color: vec!["#10b981".into(), "#f59e0b".into()],
            ..Dataset::default()
        };
        assert_eq!(dataset.color_at(0), Some("#10b981"));
        assert_eq!(dataset.color_at(3), Some("#f59e0b"));
        assert_eq!(Dataset::default().color_at(0), None);
    }
}
