//! Wall/free cell storage for one level.

use crate::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Free,
    Wall,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![CellState::Free; rows * cols] }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Out-of-bounds cells read as `Wall`.
    pub fn cell(&self, row: i32, col: i32) -> CellState {
        if !self.in_bounds(row, col) {
            return CellState::Wall;
        }
        self.cells[self.index(row, col)]
    }

    pub fn is_wall(&self, row: i32, col: i32) -> bool {
        self.cell(row, col) == CellState::Wall
    }

    pub fn is_wall_at(&self, cell: Cell) -> bool {
        self.is_wall(cell.row, cell.col)
    }

    pub fn set_wall(&mut self, row: i32, col: i32) {
        self.set(row, col, CellState::Wall);
    }

    pub fn clear_wall(&mut self, row: i32, col: i32) {
        self.set(row, col, CellState::Free);
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == CellState::Wall).count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.rows as u32).to_le_bytes());
        bytes.extend((self.cols as u32).to_le_bytes());
        bytes.extend(self.cells.iter().map(|cell| match cell {
            CellState::Free => 0_u8,
            CellState::Wall => 1_u8,
        }));
        bytes
    }

    fn set(&mut self, row: i32, col: i32, state: CellState) {
        if !self.in_bounds(row, col) {
            return;
        }
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row as usize) * self.cols + (col as usize)
    }
}
