//! Render instructions: pure descriptions of what to draw.
//!
//! The builder produces these once per render pass; a rendering backend
//! (the SVG serializer) consumes them without touching the dataset.

use heatmap_common::{Color, Layout, Observation};
use serde::Serialize;

use crate::format;

/// Everything needed to draw one heat map, in plot-area coordinates
/// (the backend applies the margin translation).
#[derive(Debug, Clone, Serialize)]
pub struct RenderInstructions {
    pub layout: Layout,
    pub title: TextNode,
    pub description: TextNode,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub cells: Vec<Cell>,
    pub legend: Legend,
}

/// A positioned, centered text label.
#[derive(Debug, Clone, Serialize)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Bottom,
    Left,
}

/// An axis: a set of labeled tick positions along one edge of the plot.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub orientation: Orientation,
    /// Translation of the axis group relative to the plot area.
    pub offset: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// One tick: position along the axis and its label.
#[derive(Debug, Clone, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// One colored rectangle of the heat map, with the exact observation
/// values attached for external inspection.
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    /// Zero-based month index, 0-11. Exact, unrounded.
    pub month_index: u32,
    pub year: i32,
    /// Absolute temperature (base + variance). Exact, unrounded.
    pub temperature: f64,
    pub tooltip: Tooltip,
}

/// Hover text for one cell, computed at build time from the record and
/// the base temperature rather than captured from surrounding state.
#[derive(Debug, Clone, Serialize)]
pub struct Tooltip {
    /// "<Year> - <FullMonthName>"
    pub date_label: String,
    /// Rounded absolute temperature, e.g. "9.3℃".
    pub temperature_label: String,
    /// Rounded signed variance, e.g. "+0.6℃".
    pub variance_label: String,
    pub year: i32,
}

impl Tooltip {
    pub fn for_observation(obs: &Observation, base_temperature: f64) -> Self {
        Self {
            date_label: format!("{} - {}", obs.year, format::month_name(obs.month_index())),
            temperature_label: format::format_temperature(obs.temperature(base_temperature)),
            variance_label: format::format_variance(obs.variance),
            year: obs.year,
        }
    }
}

/// The legend: a row of fixed-size color blocks with its own tick axis.
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    /// Translation of the legend group relative to the plot area.
    pub offset: (f64, f64),
    pub block_size: f64,
    pub blocks: Vec<LegendBlock>,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendBlock {
    pub x: f64,
    pub fill: Color,
}
