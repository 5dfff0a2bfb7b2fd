//! Door openings carved into room borders.

use crate::config::LayoutConfig;
use crate::grid::Grid;
use crate::random::GameRng;

use super::model::{Opening, RoomRect, Side};

/// Picks a side, a run length and an offset that keeps the run off both corners of that side.
pub(super) fn sample_opening(rng: &mut GameRng, room: RoomRect, config: &LayoutConfig) -> Opening {
    let side = Side::ALL[rng.range_usize(0, Side::ALL.len() - 1)];
    let interior_span = room.side_span(side) - 2;
    let len = rng.range_usize(config.opening_len_min, config.opening_len_max).min(interior_span);
    let offset = rng.range_usize(1, interior_span + 1 - len);
    Opening { side, offset, len }
}

pub(super) fn carve_openings(
    rng: &mut GameRng,
    grid: &mut Grid,
    room: RoomRect,
    config: &LayoutConfig,
) -> Vec<Opening> {
    let opening_count = rng.range_usize(config.openings_min, config.openings_max);
    let mut openings = Vec::with_capacity(opening_count);
    for _ in 0..opening_count {
        let opening = sample_opening(rng, room, config);
        for cell in opening.cells(room) {
            grid.clear_wall(cell.row, cell.col);
        }
        openings.push(opening);
    }
    openings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openings_never_touch_corners_even_in_minimum_rooms() {
        let config = LayoutConfig::default();
        let room = RoomRect { start_row: 4, start_col: 4, height: 3, width: 3 };
        let mut rng = GameRng::seed_from_u64(21);
        for _ in 0..200 {
            let opening = sample_opening(&mut rng, room, &config);
            assert_eq!(opening.len, 1, "a 3-cell side only has one interior cell");
            for cell in opening.cells(room) {
                assert!(room.is_border(cell));
                assert!(!room.is_corner(cell));
            }
        }
    }

    #[test]
    fn opening_length_stays_in_configured_range_for_large_rooms() {
        let config = LayoutConfig::default();
        let room = RoomRect { start_row: 0, start_col: 0, height: 12, width: 12 };
        let mut rng = GameRng::seed_from_u64(8);
        for _ in 0..200 {
            let opening = sample_opening(&mut rng, room, &config);
            assert!((2..=4).contains(&opening.len));
            assert!(opening.offset >= 1);
            assert!(opening.offset + opening.len <= 11);
        }
    }

    #[test]
    fn carved_cells_become_free() {
        let config = LayoutConfig::default();
        let room = RoomRect { start_row: 1, start_col: 1, height: 6, width: 6 };
        let mut grid = Grid::new(8, 8);
        for cell in room.border_cells() {
            grid.set_wall(cell.row, cell.col);
        }
        let mut rng = GameRng::seed_from_u64(2);
        let openings = carve_openings(&mut rng, &mut grid, room, &config);
        assert!((1..=3).contains(&openings.len()));
        for opening in openings {
            for cell in opening.cells(room) {
                assert!(!grid.is_wall_at(cell));
            }
        }
    }
}
