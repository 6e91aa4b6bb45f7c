//! Common types shared across the temperature-heatmap crates.

pub mod color;
pub mod dataset;
pub mod error;
pub mod layout;

pub use color::Color;
pub use dataset::{Dataset, Observation};
pub use error::{ChartError, ChartResult};
pub use layout::{Layout, Margins, LEGEND_BLOCK_SIZE, NUM_COLORS};
