use std::path::PathBuf;

/// Bold TrueType fonts commonly present on Linux, macOS and Windows.
pub const SYSTEM_BOLD_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Locates a bold system font, since the icon has no bundled fonts.
pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_BOLD_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
