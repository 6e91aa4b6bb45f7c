//! Chart builder for the monthly land-surface temperature heat map.
//!
//! Turns a dataset of monthly variance records into pure render
//! instructions:
//! - Band scales for year columns and month rows
//! - Threshold scale mapping temperature to a diverging palette
//! - Axis ticks, per-cell geometry, tooltip text, legend blocks

pub mod builder;
pub mod format;
pub mod instructions;
pub mod palette;
pub mod scale;

pub use builder::build;
pub use instructions::{
    Axis, Cell, Legend, LegendBlock, Orientation, RenderInstructions, TextNode, Tick, Tooltip,
};
pub use scale::{BandScale, LinearScale, ThresholdScale};
