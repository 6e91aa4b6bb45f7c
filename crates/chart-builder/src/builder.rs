//! The chart builder: dataset in, render instructions out.

use heatmap_common::{ChartError, ChartResult, Dataset, Layout, LEGEND_BLOCK_SIZE, NUM_COLORS};
use tracing::debug;

use crate::format;
use crate::instructions::{
    Axis, Cell, Legend, LegendBlock, Orientation, RenderInstructions, TextNode, Tick, Tooltip,
};
use crate::palette;
use crate::scale::{BandScale, LinearScale, ThresholdScale};

const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Build render instructions for one heat map.
///
/// Pure and deterministic: the same dataset and layout always produce the
/// same instructions, and the dataset is not modified. Invalid datasets
/// (empty, or months outside 1-12) are rejected up front.
pub fn build(dataset: &Dataset, layout: &Layout) -> ChartResult<RenderInstructions> {
    dataset.validate()?;

    let (min, max) = dataset
        .temperature_extent()
        .ok_or(ChartError::EmptyDataset)?;
    let (first_year, last_year) = dataset.year_extent().ok_or(ChartError::EmptyDataset)?;

    let x_scale = BandScale::new(dataset.distinct_years(), (1.0, layout.inner_width()));
    let y_scale = BandScale::new((0u32..12).collect(), (0.0, layout.grid_bottom()));
    let thresholds = ThresholdScale::from_extent(min, max, NUM_COLORS, palette::cool_to_warm());

    // Decade-only tick labels, centered on their year band
    let x_ticks = x_scale
        .domain()
        .iter()
        .copied()
        .filter(|year| year % 10 == 0)
        .filter_map(|year| {
            x_scale.position(year).map(|p| Tick {
                position: p + x_scale.bandwidth() / 2.0,
                label: year.to_string(),
            })
        })
        .collect();

    let y_ticks = y_scale
        .domain()
        .iter()
        .copied()
        .filter_map(|month_index| {
            y_scale.position(month_index).map(|p| Tick {
                position: p + y_scale.bandwidth() / 2.0,
                label: format::month_name(month_index).to_string(),
            })
        })
        .collect();

    let mut cells = Vec::with_capacity(dataset.monthly_variance.len());
    for obs in &dataset.monthly_variance {
        let x = x_scale.position(obs.year).ok_or_else(|| {
            ChartError::RenderError(format!("year {} missing from x scale", obs.year))
        })?;
        let y = y_scale.position(obs.month_index()).ok_or_else(|| {
            ChartError::RenderError(format!("month {} missing from y scale", obs.month))
        })?;

        let temperature = obs.temperature(dataset.base_temperature);
        cells.push(Cell {
            x,
            y,
            width: x_scale.bandwidth(),
            height: y_scale.bandwidth(),
            fill: thresholds.color_for(temperature),
            month_index: obs.month_index(),
            year: obs.year,
            temperature,
            tooltip: Tooltip::for_observation(obs, dataset.base_temperature),
        });
    }

    let legend = build_legend(&thresholds, min, max, layout);

    debug!(
        cells = cells.len(),
        years = x_scale.domain().len(),
        min,
        max,
        "Built render instructions"
    );

    Ok(RenderInstructions {
        layout: *layout,
        title: TextNode {
            x: layout.inner_width() / 2.0,
            y: -layout.margins.top / 2.0,
            font_size: 30.0,
            text: TITLE.to_string(),
        },
        description: TextNode {
            x: layout.inner_width() / 2.0,
            y: 35.0 - layout.margins.top / 2.0,
            font_size: 20.0,
            text: format!(
                "{} - {}: base temperature {}",
                first_year, last_year, dataset.base_temperature
            ),
        },
        x_axis: Axis {
            orientation: Orientation::Bottom,
            offset: (0.0, layout.grid_bottom()),
            ticks: x_ticks,
        },
        y_axis: Axis {
            orientation: Orientation::Left,
            offset: (0.0, 0.0),
            ticks: y_ticks,
        },
        cells,
        legend,
    })
}

/// One 30x30 block per threshold breakpoint, left to right in breakpoint
/// order, with tick labels for every breakpoint except the first (which
/// coincides with the legend scale's own start).
fn build_legend(thresholds: &ThresholdScale, min: f64, max: f64, layout: &Layout) -> Legend {
    let scale = LinearScale::new((min, max), (0.0, NUM_COLORS as f64 * LEGEND_BLOCK_SIZE));

    let blocks = thresholds
        .breakpoints()
        .iter()
        .enumerate()
        .map(|(i, breakpoint)| LegendBlock {
            x: i as f64 * LEGEND_BLOCK_SIZE,
            fill: thresholds.color_for(*breakpoint),
        })
        .collect();

    let ticks = thresholds
        .breakpoints()
        .iter()
        .skip(1)
        .map(|breakpoint| Tick {
            position: scale.scale(*breakpoint),
            label: format::format_breakpoint(*breakpoint),
        })
        .collect();

    Legend {
        offset: (0.0, layout.inner_height()),
        block_size: LEGEND_BLOCK_SIZE,
        blocks,
        ticks,
    }
}
