//! Public data models for generated levels: room rectangles, openings, and the finished layout.

use crate::grid::Grid;
use crate::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomRect {
    pub start_row: usize,
    pub start_col: usize,
    pub height: usize,
    pub width: usize,
}

impl RoomRect {
    /// Last row of the rectangle, inclusive.
    pub fn bottom(self) -> usize {
        self.start_row + self.height - 1
    }

    /// Last column of the rectangle, inclusive.
    pub fn right(self) -> usize {
        self.start_col + self.width - 1
    }

    /// Half-open interval overlap on both axes. Rectangles that only share an edge line do not
    /// intersect.
    pub fn intersects(self, other: &Self) -> bool {
        self.start_row < other.start_row + other.height
            && self.start_row + self.height > other.start_row
            && self.start_col < other.start_col + other.width
            && self.start_col + self.width > other.start_col
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= self.start_row as i32
            && cell.row <= self.bottom() as i32
            && cell.col >= self.start_col as i32
            && cell.col <= self.right() as i32
    }

    pub fn is_border(self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.row == self.start_row as i32
                || cell.row == self.bottom() as i32
                || cell.col == self.start_col as i32
                || cell.col == self.right() as i32)
    }

    pub fn is_corner(self, cell: Cell) -> bool {
        let on_row_edge = cell.row == self.start_row as i32 || cell.row == self.bottom() as i32;
        let on_col_edge = cell.col == self.start_col as i32 || cell.col == self.right() as i32;
        on_row_edge && on_col_edge
    }

    pub fn border_cells(self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(2 * (self.width + self.height));
        for row in self.start_row..=self.bottom() {
            for col in self.start_col..=self.right() {
                let cell = Cell { row: row as i32, col: col as i32 };
                if self.is_border(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Cells strictly inside the border, as `(rows, cols)` inclusive bounds.
    /// `None` when the rectangle has no interior.
    pub fn interior(self) -> Option<(RangeBounds, RangeBounds)> {
        if self.height < 3 || self.width < 3 {
            return None;
        }
        Some((
            RangeBounds { min: self.start_row + 1, max: self.bottom() - 1 },
            RangeBounds { min: self.start_col + 1, max: self.right() - 1 },
        ))
    }

    /// Number of cells along `side`, corners included.
    pub fn side_span(self, side: Side) -> usize {
        match side {
            Side::Top | Side::Bottom => self.width,
            Side::Left | Side::Right => self.height,
        }
    }
}

/// Inclusive `min..=max` bounds on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeBounds {
    pub min: usize,
    pub max: usize,
}

impl RangeBounds {
    pub fn len(self) -> usize {
        self.max - self.min + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// A run of `len` free cells on one side of a room, `offset` cells from that side's first corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Opening {
    pub side: Side,
    pub offset: usize,
    pub len: usize,
}

impl Opening {
    pub fn cells(self, rect: RoomRect) -> Vec<Cell> {
        (self.offset..self.offset + self.len)
            .map(|step| match self.side {
                Side::Top => Cell { row: rect.start_row as i32, col: (rect.start_col + step) as i32 },
                Side::Bottom => Cell { row: rect.bottom() as i32, col: (rect.start_col + step) as i32 },
                Side::Left => Cell { row: (rect.start_row + step) as i32, col: rect.start_col as i32 },
                Side::Right => Cell { row: (rect.start_row + step) as i32, col: rect.right() as i32 },
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub rect: RoomRect,
    pub openings: Vec<Opening>,
}

impl Room {
    pub fn is_opening_cell(&self, cell: Cell) -> bool {
        self.openings.iter().any(|opening| opening.cells(self.rect).contains(&cell))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub grid: Grid,
    pub rooms: Vec<Room>,
}

impl GeneratedLevel {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.grid.canonical_bytes();
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            for value in [room.rect.start_row, room.rect.start_col, room.rect.height, room.rect.width]
            {
                bytes.extend((value as u32).to_le_bytes());
            }
            bytes.push(room.openings.len() as u8);
        }
        bytes
    }
}
