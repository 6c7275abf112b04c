//! WorldGrid: cell-indexed occupancy, stored column-major.

use tankwar_core::types::{Cell, WorldBounds};

/// Fixed-size grid of optional handles addressed `[col][row]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid<T> {
    cols: usize,
    rows: usize,
    /// One `Vec` per column, each `rows` long.
    cells: Vec<Vec<Option<T>>>,
}

impl<T: Copy + PartialEq> WorldGrid<T> {
    /// Empty grid of `cols` x `rows` cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![None; rows]; cols],
        }
    }

    /// Build from rows read top-to-bottom, transposing into column-major order.
    /// Short rows are padded with empty cells.
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(cols, rows.len());
        for (row, line) in rows.into_iter().enumerate() {
            for (col, item) in line.into_iter().enumerate() {
                grid.cells[col][row] = item;
            }
        }
        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Pixel extent of the grid.
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::from_cells(self.cols, self.rows)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.cols
            && (cell.row as usize) < self.rows
    }

    /// Occupant of a cell; `None` for empty or off-grid cells.
    pub fn get(&self, cell: Cell) -> Option<T> {
        if !self.contains(cell) {
            return None;
        }
        self.cells[cell.col as usize][cell.row as usize]
    }

    /// Overwrite a cell. Off-grid writes are ignored.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        if self.contains(cell) {
            self.cells[cell.col as usize][cell.row as usize] = value;
        }
    }

    /// Empty a cell only if it still holds `value`.
    pub fn release(&mut self, cell: Cell, value: T) {
        if self.get(cell) == Some(value) {
            self.set(cell, None);
        }
    }

    /// Every occupied cell, column by column.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(col, column)| {
            column.iter().enumerate().filter_map(move |(row, item)| {
                item.map(|value| (Cell::new(col as i32, row as i32), value))
            })
        })
    }
}
