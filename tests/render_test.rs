mod common;

use common::find_system_font;
use punnett_icon::fonts::Fonts;
use punnett_icon::layout::Layout;
use punnett_icon::palette::cell_shade;
use punnett_icon::punnett::PunnettSquare;
use punnett_icon::{generate_icon, render_icon, RenderConfig};
use tempfile::TempDir;

#[test]
fn test_generate_icon_reports_summary() {
    let Some(font) = find_system_font() else {
        println!("No system font found; skipping");
        return;
    };

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("icon.png");
    let config = RenderConfig {
        cell_font: font.clone(),
        header_font: font,
        output: output.clone(),
    };

    let summary = generate_icon(&config).expect("icon generation should succeed");
    assert_eq!((summary.width, summary.height), (1024, 1024));
    assert_eq!(summary.path, output);
    assert!(output.exists());
}

#[test]
fn test_every_cell_uses_shade_for_its_dominance_count() {
    let Some(font) = find_system_font() else {
        println!("No system font found; skipping");
        return;
    };

    let fonts = Fonts::load(&font, &font).unwrap();
    let canvas = render_icon(&fonts);
    let layout = Layout::default();

    let mut seen = [0usize; 3];
    for cell in PunnettSquare::default().cells() {
        let count = cell.dominance_count();
        seen[count] += 1;

        let (x0, y0) = layout.cell_origin(cell.row, cell.col);
        assert_eq!(*canvas.get_pixel(x0 + 20, y0 + 20), cell_shade(count));
    }
    assert_eq!(seen, [1, 2, 1]);
}

#[test]
fn test_generate_icon_with_missing_font_leaves_no_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("icon.png");
    let config = RenderConfig {
        cell_font: temp_dir.path().join("missing-cell.ttf"),
        header_font: temp_dir.path().join("missing-header.ttf"),
        output: output.clone(),
    };

    let err = generate_icon(&config).unwrap_err();
    assert!(format!("{err:#}").contains("missing-cell.ttf"));
    assert!(!output.exists());
}
