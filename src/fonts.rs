//! Font loading.
//!
//! Sizes are given in pixels per em, the way most imaging tools size
//! TrueType text. rusttype scales by the ascent-to-descent height instead,
//! so [`FontFace::scale`] converts between the two.

use anyhow::{Context, Result};
use log::info;
use rusttype::{Font, Scale};
use std::path::Path;

/// Glyph size inside the grid cells.
pub const CELL_FONT_SIZE: f32 = 130.0;

/// Glyph size of the axis labels in the header band.
pub const HEADER_FONT_SIZE: f32 = 100.0;

/// A parsed font bound to one pixel-per-em size.
pub struct FontFace {
    font: Font<'static>,
    size: f32,
}

impl FontFace {
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        let font = Font::try_from_vec(data).context("Not a valid TrueType/OpenType font")?;
        if font.units_per_em() == 0 {
            anyhow::bail!("Font reports zero units per em");
        }
        Ok(Self { font, size })
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// rusttype scale that renders one em at `size` pixels.
    pub fn scale(&self) -> Scale {
        let metrics = self.font.v_metrics_unscaled();
        let units_per_em = f32::from(self.font.units_per_em());
        Scale::uniform(self.size * (metrics.ascent - metrics.descent) / units_per_em)
    }
}

/// Load a font file, failing on unreadable or unparsable files.
pub fn load_font(path: &Path, size: f32) -> Result<FontFace> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;
    let face = FontFace::from_bytes(data, size)
        .with_context(|| format!("Failed to parse font file {}", path.display()))?;
    info!("Loaded font {} at {}px", path.display(), size);
    Ok(face)
}

/// The two faces used by the icon.
pub struct Fonts {
    pub cell: FontFace,
    pub header: FontFace,
}

impl Fonts {
    pub fn load(cell_font: &Path, header_font: &Path) -> Result<Self> {
        Ok(Self {
            cell: load_font(cell_font, CELL_FONT_SIZE)?,
            header: load_font(header_font, HEADER_FONT_SIZE)?,
        })
    }
}

/// Font discovery shared with the integration tests.
#[cfg(test)]
#[path = "../tests/common/system_fonts.rs"]
pub(crate) mod system_fonts;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_font_names_path() {
        let err = load_font(Path::new("/nonexistent/font.ttf"), CELL_FONT_SIZE)
            .err()
            .expect("missing font must fail");
        assert!(format!("{err:#}").contains("/nonexistent/font.ttf"));
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let err = load_font(file.path(), HEADER_FONT_SIZE)
            .err()
            .expect("garbage must fail");
        assert!(format!("{err:#}").contains("Failed to parse font file"));
    }

    #[test]
    fn test_scale_matches_em_size() {
        let Some(path) = system_fonts::find_system_font() else {
            println!("No system font found; skipping");
            return;
        };
        let face = load_font(&path, CELL_FONT_SIZE).unwrap();
        let scale = face.scale();

        // ascent - descent at this scale spans at least one em for any sane font
        let metrics = face.font().v_metrics(scale);
        assert!(scale.y >= CELL_FONT_SIZE * 0.9);
        assert!((metrics.ascent - metrics.descent - scale.y).abs() < 0.5);
        assert_eq!(face.size(), CELL_FONT_SIZE);
    }
}
