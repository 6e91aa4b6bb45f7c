//! Scale types: pure mappings from domain values to pixel coordinates
//! or colors. Built once per render pass, stateless afterwards.

use heatmap_common::Color;

/// Band scale: maps a discrete domain to contiguous, equal-width ranges
/// in output coordinate space.
///
/// The domain is taken in insertion order; callers are responsible for
/// de-duplicating it (e.g. distinct years in first-seen order).
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range_start: f64,
    bandwidth: f64,
}

impl<T: PartialEq + Copy> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        let bandwidth = if domain.is_empty() {
            0.0
        } else {
            (range.1 - range.0) / domain.len() as f64
        };
        Self {
            domain,
            range_start: range.0,
            bandwidth,
        }
    }

    /// Left/top edge of the band for `value`, or None if the value is not
    /// in the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        let index = self.domain.iter().position(|v| *v == value)?;
        Some(self.range_start + index as f64 * self.bandwidth)
    }

    /// Width of each band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }
}

/// Linear scale: maps [domain_min, domain_max] onto [range_min, range_max].
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        // Guard degenerate domains the same way as a zero-range gradient
        let span = if span.abs() < f64::EPSILON { 1.0 } else { span };
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Threshold scale: a step function from a continuous input range to a
/// discrete set of colors via ordered breakpoints.
///
/// Breakpoints are `min + i * (max - min) / buckets` for i in 0..=buckets,
/// i.e. both endpoints plus `buckets - 1` interior values. Lookup returns
/// `colors[i]` for the first breakpoint the value is below; values at or
/// above the last breakpoint get the last color. With one more color than
/// buckets, the first color is only reachable below `min` and the hottest
/// color is doubled at the top.
#[derive(Debug, Clone)]
pub struct ThresholdScale {
    breakpoints: Vec<f64>,
    colors: Vec<Color>,
}

impl ThresholdScale {
    pub fn from_extent(min: f64, max: f64, buckets: usize, colors: Vec<Color>) -> Self {
        let span = max - min;
        let span = if span.abs() < f64::EPSILON { 1.0 } else { span };
        let step = span / buckets as f64;
        let breakpoints = (0..=buckets).map(|i| min + i as f64 * step).collect();
        Self {
            breakpoints,
            colors,
        }
    }

    /// Step-function lookup: first breakpoint the value is strictly below
    /// selects the color of the same index.
    pub fn color_for(&self, value: f64) -> Color {
        for (i, breakpoint) in self.breakpoints.iter().enumerate() {
            if value < *breakpoint {
                return self.colors[i.min(self.colors.len() - 1)];
            }
        }
        self.colors[self.colors.len() - 1]
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
