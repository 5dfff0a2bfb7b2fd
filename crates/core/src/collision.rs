//! Box-vs-grid and box-vs-box collision predicates.

use crate::grid::Grid;
use crate::types::{Aabb, Cell};

/// Inclusive cell bounds covered by a box. Yields no cells when `max < min` on either axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl CellSpan {
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |row| (self.min_col..=self.max_col).map(move |col| Cell { row, col }))
    }
}

/// Right and bottom edges are exclusive: a box ending exactly on a cell boundary does not
/// cover the next cell.
pub fn covered_cells(bounds: &Aabb, tile_size: f32) -> CellSpan {
    CellSpan {
        min_row: (bounds.y / tile_size).floor() as i32,
        max_row: (bounds.bottom() / tile_size).ceil() as i32 - 1,
        min_col: (bounds.x / tile_size).floor() as i32,
        max_col: (bounds.right() / tile_size).ceil() as i32 - 1,
    }
}

/// True when any covered cell is a wall or lies outside the grid.
pub fn entity_vs_grid(bounds: &Aabb, grid: &Grid, tile_size: f32) -> bool {
    covered_cells(bounds, tile_size).cells().any(|cell| grid.is_wall_at(cell))
}

/// Strict overlap; boxes that only touch along an edge do not overlap.
pub fn boxes_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
