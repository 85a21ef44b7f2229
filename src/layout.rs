//! Geometry of the grid and header band.

/// Edge length of the square canvas.
pub const CANVAS_SIZE: u32 = 1024;

/// Margin around the whole composition.
pub const PADDING: u32 = 100;

/// Width of the axis label band on the top and left of the grid.
pub const HEADER_BAND: u32 = 110;

/// Derived layout values, all in canvas pixels.
///
/// The header band sits on the top and left only, so the grid origin is
/// `pad + header_w` on both axes and the right and bottom margins are `pad`
/// (plus at most one pixel lost to integer division of the cell size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: u32,
    pub pad: u32,
    pub header_w: u32,
    pub cell: u32,
    pub grid_x0: u32,
    pub grid_y0: u32,
    pub grid_x1: u32,
    pub grid_y1: u32,
    /// Center of the header band, shared by both axes.
    pub header_center: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(CANVAS_SIZE, PADDING, HEADER_BAND)
    }
}

impl Layout {
    pub fn new(size: u32, pad: u32, header_w: u32) -> Self {
        let grid_size = size.saturating_sub(2 * pad + header_w);
        let cell = grid_size / 2;
        let grid_x0 = pad + header_w;
        let grid_y0 = pad + header_w;

        Self {
            size,
            pad,
            header_w,
            cell,
            grid_x0,
            grid_y0,
            grid_x1: grid_x0 + 2 * cell,
            grid_y1: grid_y0 + 2 * cell,
            header_center: pad + header_w / 2,
        }
    }

    /// Space available to the grid before halving into cells.
    pub fn available_span(&self) -> u32 {
        self.size.saturating_sub(2 * self.pad + self.header_w)
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_x1 - self.grid_x0
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_y1 - self.grid_y0
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (
            self.grid_x0 + col as u32 * self.cell,
            self.grid_y0 + row as u32 * self.cell,
        )
    }

    pub fn cell_center(&self, row: usize, col: usize) -> (u32, u32) {
        let (x0, y0) = self.cell_origin(row, col);
        (x0 + self.cell / 2, y0 + self.cell / 2)
    }

    /// Anchor of a column label inside the top header band.
    pub fn column_label_center(&self, col: usize) -> (u32, u32) {
        let (cx, _) = self.cell_center(0, col);
        (cx, self.header_center)
    }

    /// Anchor of a row label inside the left header band.
    pub fn row_label_center(&self, row: usize) -> (u32, u32) {
        let (_, cy) = self.cell_center(row, 0);
        (self.header_center, cy)
    }
}
