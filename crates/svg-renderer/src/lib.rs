//! SVG serialization for chart render instructions.
//!
//! Emits a single self-contained document with stable identifiers
//! (#title, #description, #x-axis, #y-axis, .cell, #legend, #tooltip)
//! so the output can be verified externally.

mod svg;

pub use svg::render_svg;
