//! Level generation orchestration: place rooms, wall their borders, carve openings.

use crate::config::{ConfigError, LayoutConfig};
use crate::grid::Grid;
use crate::random::GameRng;

use super::layout::{place_rooms, wall_room_border};
use super::model::{GeneratedLevel, Room};
use super::openings::carve_openings;

#[derive(Clone, Debug)]
pub struct RoomLayoutGenerator {
    rows: usize,
    cols: usize,
    config: LayoutConfig,
}

impl RoomLayoutGenerator {
    /// Rejects layouts that could not produce walled rooms with free interiors.
    pub fn new(rows: usize, cols: usize, config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rows, cols, config })
    }

    pub fn generate(&self, rng: &mut GameRng) -> GeneratedLevel {
        let mut grid = Grid::new(self.rows, self.cols);
        let rects = place_rooms(rng, self.rows, self.cols, &self.config);

        let mut rooms = Vec::with_capacity(rects.len());
        for rect in rects {
            wall_room_border(&mut grid, rect);
            let openings = carve_openings(rng, &mut grid, rect, &self.config);
            rooms.push(Room { rect, openings });
        }

        GeneratedLevel { grid, rooms }
    }
}
