//! Diverging color palette for the temperature threshold scale.

use heatmap_common::Color;

/// ColorBrewer RdYlBu with 11 classes, reversed so the lowest temperature
/// bucket gets the coolest color.
const COOL_TO_WARM: [Color; 11] = [
    Color { r: 0x31, g: 0x36, b: 0x95 },
    Color { r: 0x45, g: 0x75, b: 0xb4 },
    Color { r: 0x74, g: 0xad, b: 0xd1 },
    Color { r: 0xab, g: 0xd9, b: 0xe9 },
    Color { r: 0xe0, g: 0xf3, b: 0xf8 },
    Color { r: 0xff, g: 0xff, b: 0xbf },
    Color { r: 0xfe, g: 0xe0, b: 0x90 },
    Color { r: 0xfd, g: 0xae, b: 0x61 },
    Color { r: 0xf4, g: 0x6d, b: 0x43 },
    Color { r: 0xd7, g: 0x30, b: 0x27 },
    Color { r: 0xa5, g: 0x00, b: 0x26 },
];

/// Palette for the threshold scale, coolest to warmest.
pub fn cool_to_warm() -> Vec<Color> {
    COOL_TO_WARM.to_vec()
}
