use crate::draw::{draw_text_centered, fill_rect, StrokeMask};
use crate::fonts::Fonts;
use crate::layout::Layout;
use crate::palette::{self, BACKGROUND, GRID_LINE, HEADER_SEPARATOR};
use crate::punnett::PunnettSquare;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Stroke width of the grid border and the quadrant cross.
pub const GRID_STROKE: u32 = 3;

/// Stroke width of the lines between the header band and the grid.
pub const SEPARATOR_STROKE: u32 = 2;

/// Distance of the header separators from the grid edge.
pub const SEPARATOR_OFFSET: u32 = 8;

/// Horizontal offset of each cell glyph from the cell center.
pub const GLYPH_GAP: u32 = 55;

/// Where to read fonts from and where to write the icon.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub cell_font: PathBuf,
    pub header_font: PathBuf,
    pub output: PathBuf,
}

/// What was written by [`generate_icon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSummary {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

/// Load fonts, render the icon and write it to `config.output`.
///
/// Fonts are loaded before any drawing, so a missing font fails without
/// touching the output path.
pub fn generate_icon(config: &RenderConfig) -> Result<IconSummary> {
    let fonts = Fonts::load(&config.cell_font, &config.header_font)?;

    let canvas = render_icon(&fonts);
    save_icon(&canvas, &config.output)?;

    println!("Saved {}x{} icon", canvas.width(), canvas.height());
    Ok(IconSummary {
        width: canvas.width(),
        height: canvas.height(),
        path: config.output.clone(),
    })
}

/// Render the full icon in memory.
pub fn render_icon(fonts: &Fonts) -> RgbaImage {
    let layout = Layout::default();
    let square = PunnettSquare::default();
    debug!("Layout: {layout:?}");

    let mut canvas = RgbaImage::from_pixel(layout.size, layout.size, BACKGROUND);

    paint_cells(&mut canvas, &layout, &square);
    paint_grid_lines(&mut canvas, &layout);
    paint_header_separators(&mut canvas, &layout);
    paint_axis_labels(&mut canvas, &layout, &square, fonts);
    paint_cell_glyphs(&mut canvas, &layout, &square, fonts);

    canvas
}

/// Fill every cell with the shade for its dominance count.
pub fn paint_cells(canvas: &mut RgbaImage, layout: &Layout, square: &PunnettSquare) {
    for cell in square.cells() {
        let count = cell.dominance_count();
        debug!(
            "Cell {}{} at ({}, {}) has dominance count {count}",
            cell.row_allele.letter, cell.col_allele.letter, cell.row, cell.col
        );

        let (x0, y0) = layout.cell_origin(cell.row, cell.col);
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let edge = i64::from(layout.cell);
        fill_rect(canvas, x0, y0, x0 + edge, y0 + edge, palette::cell_shade(count));
    }
}

/// Outer border plus the quadrant cross.
pub fn paint_grid_lines(canvas: &mut RgbaImage, layout: &Layout) {
    let (x0, y0) = (i64::from(layout.grid_x0), i64::from(layout.grid_y0));
    let (x1, y1) = (i64::from(layout.grid_x1), i64::from(layout.grid_y1));
    let cell = i64::from(layout.cell);

    let mut mask = StrokeMask::new(canvas.width(), canvas.height());
    mask.outline(x0, y0, x1, y1, GRID_STROKE);
    mask.vline(x0 + cell, y0, y1, GRID_STROKE);
    mask.hline(y0 + cell, x0, x1, GRID_STROKE);
    mask.paint(canvas, GRID_LINE);
}

/// Faint lines setting the header band apart from the grid.
pub fn paint_header_separators(canvas: &mut RgbaImage, layout: &Layout) {
    let (x0, y0) = (i64::from(layout.grid_x0), i64::from(layout.grid_y0));
    let (x1, y1) = (i64::from(layout.grid_x1), i64::from(layout.grid_y1));
    let offset = i64::from(SEPARATOR_OFFSET);

    let mut mask = StrokeMask::new(canvas.width(), canvas.height());
    mask.hline(y0 - offset, x0, x1, SEPARATOR_STROKE);
    mask.vline(x0 - offset, y0, y1, SEPARATOR_STROKE);
    mask.paint(canvas, HEADER_SEPARATOR);
}

fn to_point((x, y): (u32, u32)) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn paint_axis_labels(
    canvas: &mut RgbaImage,
    layout: &Layout,
    square: &PunnettSquare,
    fonts: &Fonts,
) {
    for (col, allele) in square.cols.iter().enumerate() {
        draw_text_centered(
            canvas,
            &fonts.header,
            &allele.as_text(),
            to_point(layout.column_label_center(col)),
            palette::label_color(allele.dominant),
        );
    }

    for (row, allele) in square.rows.iter().enumerate() {
        draw_text_centered(
            canvas,
            &fonts.header,
            &allele.as_text(),
            to_point(layout.row_label_center(row)),
            palette::label_color(allele.dominant),
        );
    }
}

/// Row letter left of center, column letter right of center, each colored
/// by its own allele rather than by the cell.
pub fn paint_cell_glyphs(
    canvas: &mut RgbaImage,
    layout: &Layout,
    square: &PunnettSquare,
    fonts: &Fonts,
) {
    let gap = GLYPH_GAP as f32;
    for cell in square.cells() {
        let (cx, cy) = to_point(layout.cell_center(cell.row, cell.col));
        draw_text_centered(
            canvas,
            &fonts.cell,
            &cell.row_allele.as_text(),
            (cx - gap, cy),
            palette::label_color(cell.row_allele.dominant),
        );
        draw_text_centered(
            canvas,
            &fonts.cell,
            &cell.col_allele.as_text(),
            (cx + gap, cy),
            palette::label_color(cell.col_allele.dominant),
        );
    }
}

/// Encode `canvas` as an RGBA PNG at `path`, replacing any existing file.
pub fn save_icon(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas.as_raw(), &mut out_file, canvas.width(), canvas.height())
        .context("Failed to encode PNG")?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}
