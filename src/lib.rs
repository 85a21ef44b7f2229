//! Renders the Punnett-square application icon.
//!
//! A 2x2 grid of alleles (`M`/`m` rows, `D`/`d` columns) is drawn on a
//! 1024x1024 canvas, cells shaded by how many dominant alleles they carry,
//! and written out as an RGBA PNG.

pub mod draw;
pub mod fonts;
pub mod icon;
pub mod layout;
pub mod palette;
pub mod punnett;

pub use icon::{generate_icon, render_icon, save_icon, IconSummary, RenderConfig};
