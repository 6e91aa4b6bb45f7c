//! SVG document assembly via string building.

use chart_builder::{Axis, Cell, Legend, Orientation, RenderInstructions, TextNode, Tick};
use tracing::debug;

const TICK_SIZE: f64 = 10.0;

/// Serialize render instructions into one SVG document.
pub fn render_svg(instructions: &RenderInstructions) -> String {
    let layout = &instructions.layout;
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" class="graph" font-family="sans-serif">
"#,
        layout.outer_width, layout.outer_height
    ));
    svg.push_str(&format!(
        "  <g transform=\"translate({},{})\">\n",
        layout.margins.left, layout.margins.top
    ));

    write_text(&mut svg, "title", &instructions.title);
    write_text(&mut svg, "description", &instructions.description);
    write_axis(&mut svg, "x-axis", &instructions.x_axis);
    write_axis(&mut svg, "y-axis", &instructions.y_axis);
    write_cells(&mut svg, &instructions.cells);
    write_legend(&mut svg, &instructions.legend);

    // Placeholder for hover text; cells embed their own <title> payloads
    svg.push_str("    <g id=\"tooltip\" style=\"display: none\"></g>\n");

    svg.push_str("  </g>\n</svg>\n");

    debug!(bytes = svg.len(), "Serialized SVG document");
    svg
}

fn write_text(svg: &mut String, id: &str, node: &TextNode) {
    svg.push_str(&format!(
        "    <text id=\"{}\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}px\">{}</text>\n",
        id,
        node.x,
        node.y,
        node.font_size,
        escape(&node.text)
    ));
}

fn write_axis(svg: &mut String, id: &str, axis: &Axis) {
    svg.push_str(&format!(
        "    <g id=\"{}\" transform=\"translate({},{})\">\n",
        id, axis.offset.0, axis.offset.1
    ));

    for tick in &axis.ticks {
        write_tick(svg, axis.orientation, tick);
    }

    svg.push_str("    </g>\n");
}

fn write_tick(svg: &mut String, orientation: Orientation, tick: &Tick) {
    match orientation {
        Orientation::Bottom => {
            svg.push_str(&format!(
                "      <g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{}\"/><text y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\">{}</text></g>\n",
                tick.position,
                TICK_SIZE,
                TICK_SIZE + 3.0,
                escape(&tick.label)
            ));
        }
        Orientation::Left => {
            svg.push_str(&format!(
                "      <g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"-{}\"/><text x=\"-{}\" dy=\"0.32em\" text-anchor=\"end\">{}</text></g>\n",
                tick.position,
                TICK_SIZE * 0.6,
                TICK_SIZE * 0.6 + 3.0,
                escape(&tick.label)
            ));
        }
    }
}

fn write_cells(svg: &mut String, cells: &[Cell]) {
    svg.push_str("    <g class=\"map\">\n");

    for cell in cells {
        // data-temp carries the exact unrounded value; the tooltip text
        // is the rounded presentation form
        svg.push_str(&format!(
            "      <rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\">",
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.fill.to_hex(),
            cell.month_index,
            cell.year,
            cell.temperature
        ));
        svg.push_str(&format!(
            "<title>{}\n{}\n{}</title></rect>\n",
            escape(&cell.tooltip.date_label),
            escape(&cell.tooltip.temperature_label),
            escape(&cell.tooltip.variance_label)
        ));
    }

    svg.push_str("    </g>\n");
}

fn write_legend(svg: &mut String, legend: &Legend) {
    svg.push_str(&format!(
        "    <g id=\"legend\" transform=\"translate({},{})\">\n",
        legend.offset.0, legend.offset.1
    ));

    for block in &legend.blocks {
        svg.push_str(&format!(
            "      <rect x=\"{}\" y=\"-{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            block.x,
            legend.block_size,
            legend.block_size,
            legend.block_size,
            block.fill.to_hex()
        ));
    }

    for tick in &legend.ticks {
        svg.push_str(&format!(
            "      <g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{}\"/><text y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\">{}</text></g>\n",
            tick.position,
            TICK_SIZE,
            TICK_SIZE + 3.0,
            escape(&tick.label)
        ));
    }

    svg.push_str("    </g>\n");
}

/// Escape text content and attribute values for XML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("plain"), "plain");
    }
}
