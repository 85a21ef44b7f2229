//! Fixed colors of the icon.
//!
//! Color choice goes through two lookup tables: cell shade by dominance
//! count, and label color by the dominant flag.

use image::Rgba;

/// Very dark purple canvas background.
pub const BACKGROUND: Rgba<u8> = Rgba([22, 12, 42, 255]);

/// Mendel's pea flower purple (#A74AC7), used for dominant alleles.
pub const ACCENT: Rgba<u8> = Rgba([167, 74, 199, 255]);

/// Recessive alleles are drawn in plain white.
pub const NEUTRAL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Cell fill indexed by dominance count.
pub const CELL_SHADES: [Rgba<u8>; 3] = [
    Rgba([30, 15, 55, 255]),
    Rgba([45, 22, 72, 255]),
    Rgba([70, 35, 110, 255]),
];

/// Label color indexed by `dominant as usize`.
pub const LABEL_COLORS: [Rgba<u8>; 2] = [NEUTRAL, ACCENT];

pub const GRID_LINE: Rgba<u8> = Rgba([255, 255, 255, 100]);
pub const HEADER_SEPARATOR: Rgba<u8> = Rgba([255, 255, 255, 40]);

/// Panics on counts above 2, which a two-allele pair cannot produce.
pub fn cell_shade(dominance_count: usize) -> Rgba<u8> {
    CELL_SHADES[dominance_count]
}

pub fn label_color(dominant: bool) -> Rgba<u8> {
    LABEL_COLORS[usize::from(dominant)]
}
