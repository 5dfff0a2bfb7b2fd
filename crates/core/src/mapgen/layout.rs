//! Room placement with bounded retries and border-wall carving.

use log::warn;

use crate::config::LayoutConfig;
use crate::grid::Grid;
use crate::random::GameRng;

use super::model::RoomRect;

/// Samples up to `room_count` rooms. Each room gets `placement_attempts` tries; a room whose
/// tries all collide is skipped, so the result may hold fewer rooms than requested.
pub(super) fn place_rooms(
    rng: &mut GameRng,
    rows: usize,
    cols: usize,
    config: &LayoutConfig,
) -> Vec<RoomRect> {
    let target_room_count = rng.range_inclusive(&config.room_count());
    let mut rooms: Vec<RoomRect> = Vec::with_capacity(target_room_count);

    for room_index in 0..target_room_count {
        match place_one_room(rng, rows, cols, config, &rooms) {
            Some(candidate) => rooms.push(candidate),
            None => warn!(
                "room {room_index} skipped: no free spot after {} attempts ({rows}x{cols} grid)",
                config.placement_attempts
            ),
        }
    }
    rooms
}

fn place_one_room(
    rng: &mut GameRng,
    rows: usize,
    cols: usize,
    config: &LayoutConfig,
    accepted: &[RoomRect],
) -> Option<RoomRect> {
    let usable_rows = rows.saturating_sub(config.margin.saturating_mul(2));
    let usable_cols = cols.saturating_sub(config.margin.saturating_mul(2));
    let max_height = config.room_size_max.min(usable_rows);
    let max_width = config.room_size_max.min(usable_cols);
    if max_height < config.room_size_min || max_width < config.room_size_min {
        return None;
    }

    for _ in 0..config.placement_attempts {
        let height = rng.range_usize(config.room_size_min, max_height);
        let width = rng.range_usize(config.room_size_min, max_width);
        let start_row = rng.range_usize(config.margin, rows - config.margin - height);
        let start_col = rng.range_usize(config.margin, cols - config.margin - width);

        let candidate = RoomRect { start_row, start_col, height, width };
        if !accepted.iter().any(|existing| existing.intersects(&candidate)) {
            return Some(candidate);
        }
    }
    None
}

pub(super) fn wall_room_border(grid: &mut Grid, room: RoomRect) {
    for cell in room.border_cells() {
        grid.set_wall(cell.row, cell.col);
    }
}
