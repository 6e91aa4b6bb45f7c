//! Tests for the chart builder: scales, ticks, cells, tooltips, legend.

use chart_builder::build;
use heatmap_common::{ChartError, Dataset, Layout, Observation};

fn obs(year: i32, month: u32, variance: f64) -> Observation {
    Observation {
        year,
        month,
        variance,
    }
}

/// Small dataset spanning two decade boundaries, including the record the
/// tooltip formatting is specified against.
fn sample() -> Dataset {
    Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            obs(1949, 1, -0.5),
            obs(1949, 12, 0.1),
            obs(1950, 7, 0.642),
            obs(1951, 3, -1.2),
            obs(1960, 6, 0.3),
            obs(1961, 11, 0.9),
        ],
    }
}

#[test]
fn test_cell_data_attributes_are_exact() {
    let dataset = sample();
    let instructions = build(&dataset, &Layout::default()).unwrap();

    assert_eq!(instructions.cells.len(), dataset.monthly_variance.len());
    for (cell, obs) in instructions.cells.iter().zip(&dataset.monthly_variance) {
        // Exact, unrounded values; no formatting applied
        assert_eq!(cell.temperature, dataset.base_temperature + obs.variance);
        assert_eq!(cell.month_index, obs.month - 1);
        assert!(cell.month_index <= 11);
        assert_eq!(cell.year, obs.year);
    }
}

#[test]
fn test_cell_geometry_follows_band_scales() {
    let layout = Layout::default();
    let instructions = build(&sample(), &layout).unwrap();

    // 6 observations across 5 distinct years (1949 appears twice)
    let expected_width = (layout.inner_width() - 1.0) / 5.0;
    let expected_height = layout.grid_bottom() / 12.0;

    for cell in &instructions.cells {
        assert!((cell.width - expected_width).abs() < 1e-9);
        assert!((cell.height - expected_height).abs() < 1e-9);
    }

    // First year's band starts at the range origin x=1
    assert_eq!(instructions.cells[0].x, 1.0);
    // January sits in the top row
    assert_eq!(instructions.cells[0].y, 0.0);
}

#[test]
fn test_x_axis_ticks_decades_only() {
    let instructions = build(&sample(), &Layout::default()).unwrap();

    let labels: Vec<&str> = instructions
        .x_axis
        .ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(labels, vec!["1950", "1960"]);
}

#[test]
fn test_y_axis_ticks_full_month_names() {
    let instructions = build(&sample(), &Layout::default()).unwrap();

    let labels: Vec<&str> = instructions
        .y_axis
        .ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(labels[0], "January");
    assert_eq!(labels[6], "July");
    assert_eq!(labels[11], "December");
}

#[test]
fn test_tooltip_formatting() {
    let instructions = build(&sample(), &Layout::default()).unwrap();

    // year=1950, month=7, variance=0.642 against base 8.66
    let cell = instructions
        .cells
        .iter()
        .find(|c| c.year == 1950 && c.month_index == 6)
        .unwrap();

    assert_eq!(cell.tooltip.date_label, "1950 - July");
    assert_eq!(cell.tooltip.temperature_label, "9.3℃");
    assert_eq!(cell.tooltip.variance_label, "+0.6℃");
    assert_eq!(cell.tooltip.year, 1950);
}

#[test]
fn test_legend_blocks_and_ticks() {
    // base 0 with variances -5..5 gives the extent the legend spec
    // is written against
    let dataset = Dataset {
        base_temperature: 0.0,
        monthly_variance: vec![obs(2000, 1, -5.0), obs(2000, 2, 5.0), obs(2001, 1, 0.0)],
    };
    let instructions = build(&dataset, &Layout::default()).unwrap();
    let legend = &instructions.legend;

    assert_eq!(legend.block_size, 30.0);
    assert_eq!(legend.blocks.len(), 11);
    for (i, block) in legend.blocks.iter().enumerate() {
        assert!((block.x - i as f64 * 30.0).abs() < 1e-9);
    }

    // Ticks skip the first breakpoint, which coincides with the scale start
    assert_eq!(legend.ticks.len(), 10);
    assert_eq!(legend.ticks[0].label, "-4.0");
    assert_eq!(legend.ticks[9].label, "5.0");
    assert!((legend.ticks[0].position - 30.0).abs() < 1e-9);
    assert!((legend.ticks[9].position - 300.0).abs() < 1e-9);
}

#[test]
fn test_description_contains_base_temperature_and_year_range() {
    let instructions = build(&sample(), &Layout::default()).unwrap();

    assert!(instructions.description.text.contains("8.66"));
    assert!(instructions.description.text.contains("1949"));
    assert!(instructions.description.text.contains("1961"));
    assert_eq!(
        instructions.title.text,
        "Monthly Global Land-Surface Temperature"
    );
}

#[test]
fn test_build_is_deterministic() {
    let dataset = sample();
    let layout = Layout::default();

    let a = serde_json::to_string(&build(&dataset, &layout).unwrap()).unwrap();
    let b = serde_json::to_string(&build(&dataset, &layout).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_build_rejects_invalid_dataset() {
    let empty = Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![],
    };
    assert!(matches!(
        build(&empty, &Layout::default()),
        Err(ChartError::EmptyDataset)
    ));

    let bad_month = Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![obs(1950, 0, 0.1)],
    };
    assert!(matches!(
        build(&bad_month, &Layout::default()),
        Err(ChartError::InvalidMonth { .. })
    ));
}
