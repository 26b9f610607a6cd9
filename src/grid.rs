//! # Toroidal Game of Life Grids
//!
//! A [`Grid`] is a fixed-size rectangle of binary cells whose edges wrap around: the row
//! above the first row is the last row, and the column left of the first column is the
//! last column. Grids are immutable; every generation produces a new one.
//!
//! [`CountGrid`] holds the per-cell live-neighbor counts computed from a grid.

use std::fmt;

use burn::{
    prelude::Backend,
    tensor::{Float, Tensor},
};

use crate::error::{Error, Result};

/// Glyph used when rendering a live cell.
pub const ALIVE_GLYPH: char = '■';

/// Glyph used when rendering a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// A binary cell grid with toroidal topology.
///
/// Invariants, checked by every constructor:
/// - at least one row and one column
/// - exactly `rows * cols` cells, stored row-major
/// - every cell is `0` or `1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Builds a grid from row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero, the cell count
    /// does not equal `rows * cols`, or any value lies outside {0, 1}.
    pub fn new(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self> {
        check_dimensions(rows, cols)?;
        if cells.len() != rows * cols {
            return Err(Error::InvalidDimensions(format!(
                "expected {} cells for a {rows}x{cols} grid, got {}",
                rows * cols,
                cells.len()
            )));
        }
        if let Some(idx) = cells.iter().position(|&v| v > 1) {
            return Err(Error::InvalidDimensions(format!(
                "cell ({}, {}) has value {}, expected 0 or 1",
                idx / cols,
                idx % cols,
                cells[idx]
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// An all-dead grid.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    /// An all-dead grid with the given `(row, col)` cells set alive.
    ///
    /// Coordinates outside the grid are rejected rather than wrapped.
    pub fn from_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::zeros(rows, cols)?;
        for &(row, col) in live {
            if row >= rows || col >= cols {
                return Err(Error::InvalidDimensions(format!(
                    "live cell ({row}, {col}) lies outside a {rows}x{cols} grid"
                )));
            }
            grid.cells[row * cols + col] = 1;
        }
        Ok(grid)
    }

    /// Builds a grid from nested rows; all rows must share one length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidDimensions(format!(
                "row {i} has length {}, expected {width}",
                row.len()
            )));
        }
        Self::new(height, width, rows.concat())
    }

    /// The starting pattern of the reference demo: an 8x8 board with live cells at
    /// (1,1), (1,2), (1,3), (2,1) and (3,2).
    pub fn reference_pattern() -> Self {
        let mut cells = vec![0; 64];
        for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 1), (3, 2)] {
            cells[row * 8 + col] = 1;
        }
        Self {
            rows: 8,
            cols: 8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Value at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Converts the grid into a `[1, 1, rows, cols]` float tensor of 0.0/1.0 values,
    /// the batch/channel layout expected by the convolution in [`crate::model`].
    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 4, Float> {
        let data: Vec<f32> = self.cells.iter().map(|&v| f32::from(v)).collect();
        Tensor::<B, 1>::from_floats(data.as_slice(), device)
            .reshape([self.rows, self.cols])
            .unsqueeze::<3>() // Add batch dimension
            .unsqueeze_dim(1) // Add channel dimension
    }
}

impl fmt::Display for Grid {
    /// Renders live cells as [`ALIVE_GLYPH`] and dead cells as [`DEAD_GLYPH`], one line
    /// per row with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(
                row.iter()
                    .map(|&v| if v == 1 { ALIVE_GLYPH } else { DEAD_GLYPH }),
            );
        }
        f.write_str(&out)
    }
}

/// Live-neighbor counts for each cell of a [`Grid`], in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountGrid {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl CountGrid {
    pub(crate) fn new(rows: usize, cols: usize, counts: Vec<u8>) -> Self {
        debug_assert_eq!(counts.len(), rows * cols);
        Self { rows, cols, counts }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn counts(&self) -> &[u8] {
        &self.counts
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.rows && col < self.cols).then(|| self.counts[row * self.cols + col])
    }

    /// Counts split into one vector per row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.counts.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions(format!(
            "grid must have at least one row and one column, got {rows}x{cols}"
        )));
    }
    Ok(())
}
