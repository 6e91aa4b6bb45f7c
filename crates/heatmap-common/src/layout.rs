//! Fixed layout configuration for the heat map.
//!
//! These are configuration constants, not values derived from the data:
//! the chart is always drawn at the same size.

use serde::{Deserialize, Serialize};

/// Number of color buckets in the threshold scale.
pub const NUM_COLORS: usize = 10;

/// Side length of a legend color block, in pixels.
pub const LEGEND_BLOCK_SIZE: f64 = 30.0;

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Overall drawing surface geometry.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Layout {
    /// Total SVG width including margins.
    pub outer_width: f64,
    /// Total SVG height including margins.
    pub outer_height: f64,
    pub margins: Margins,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            outer_width: 1420.0,
            outer_height: 630.0,
            margins: Margins {
                top: 100.0,
                right: 20.0,
                bottom: 60.0,
                left: 60.0,
            },
        }
    }
}

impl Layout {
    /// Plot-area width (outer width minus horizontal margins).
    pub fn inner_width(&self) -> f64 {
        self.outer_width - self.margins.left - self.margins.right
    }

    /// Plot-area height (outer height minus vertical margins).
    pub fn inner_height(&self) -> f64 {
        self.outer_height - self.margins.top - self.margins.bottom
    }

    /// Bottom edge of the cell grid: the x-axis sits here, and the bottom
    /// margin is reserved below it for the legend.
    pub fn grid_bottom(&self) -> f64 {
        self.inner_height() - self.margins.bottom
    }
}
