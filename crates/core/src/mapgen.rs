//! Procedural level generation split into placement, opening and orchestration submodules.

pub mod model;

mod generator;
mod layout;
mod openings;

use crate::config::{ConfigError, LayoutConfig};
use crate::random::GameRng;

pub use generator::RoomLayoutGenerator;
pub use model::{GeneratedLevel, Opening, RangeBounds, Room, RoomRect, Side};

pub fn generate_level(
    rows: usize,
    cols: usize,
    config: &LayoutConfig,
    seed: u64,
) -> Result<GeneratedLevel, ConfigError> {
    let generator = RoomLayoutGenerator::new(rows, cols, config.clone())?;
    Ok(generator.generate(&mut GameRng::seed_from_u64(seed)))
}
