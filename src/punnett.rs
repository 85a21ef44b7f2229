//! Axis entries and the cells of the 2x2 Punnett square drawn on the icon.

/// One row or column heading: the allele letter and whether it is dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allele {
    pub letter: char,
    pub dominant: bool,
}

impl Allele {
    pub const fn dominant(letter: char) -> Self {
        Self {
            letter,
            dominant: true,
        }
    }

    pub const fn recessive(letter: char) -> Self {
        Self {
            letter,
            dominant: false,
        }
    }

    /// The letter as an owned string for text layout.
    pub fn as_text(&self) -> String {
        self.letter.to_string()
    }
}

/// Each axis has exactly two entries.
pub type Axis = [Allele; 2];

pub const ROWS: Axis = [Allele::dominant('M'), Allele::recessive('m')];
pub const COLUMNS: Axis = [Allele::dominant('D'), Allele::recessive('d')];

/// A single grid cell, addressed by row and column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub row_allele: Allele,
    pub col_allele: Allele,
}

impl Cell {
    /// Number of dominant alleles in the pair, always 0, 1 or 2.
    pub fn dominance_count(&self) -> usize {
        usize::from(self.row_allele.dominant) + usize::from(self.col_allele.dominant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunnettSquare {
    pub rows: Axis,
    pub cols: Axis,
}

impl Default for PunnettSquare {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLUMNS,
        }
    }
}

impl PunnettSquare {
    pub fn new(rows: Axis, cols: Axis) -> Self {
        Self { rows, cols }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, &row_allele)| {
            self.cols
                .iter()
                .enumerate()
                .map(move |(col, &col_allele)| Cell {
                    row,
                    col,
                    row_allele,
                    col_allele,
                })
        })
    }
}
