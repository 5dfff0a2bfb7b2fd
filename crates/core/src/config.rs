//! Tunable game constants. Defaults reproduce the classic 800x600 canvas with 20-unit tiles.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub tile_size: f32,
    /// Window after a level-up during which a second level-up cannot fire.
    pub level_up_grace_ms: u64,
    pub layout: LayoutConfig,
    pub player: PlayerConfig,
    pub enemies: EnemyConfig,
    pub collectibles: CollectibleConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub room_count_min: usize,
    pub room_count_max: usize,
    pub room_size_min: usize,
    pub room_size_max: usize,
    /// Candidates sampled per room before the room is skipped.
    pub placement_attempts: usize,
    /// Cells kept free between a room and the grid edge.
    pub margin: usize,
    pub openings_min: usize,
    pub openings_max: usize,
    pub opening_len_min: usize,
    pub opening_len_max: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: f32,
    pub speed: f32,
    pub health: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: f32,
    pub speed: f32,
    pub health: i32,
    pub pursuit_radius: f32,
    pub contact_damage: i32,
    pub base_count: usize,
    pub count_growth_per_level: usize,
    pub max_count: usize,
    pub spawn_attempts: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleConfig {
    pub size: f32,
    pub per_room_min: usize,
    pub per_room_max: usize,
    pub placement_attempts: usize,
    pub health_restore: i32,
    pub speed_bonus: f32,
    pub speed_boost_ms: u64,
    pub score_value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str },
    InvertedRange { field: &'static str, min: usize, max: usize },
    RoomTooSmall { room_size_min: usize },
    ZeroAttempts { field: &'static str },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            tile_size: 20.0,
            level_up_grace_ms: 1_000,
            layout: LayoutConfig::default(),
            player: PlayerConfig::default(),
            enemies: EnemyConfig::default(),
            collectibles: CollectibleConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room_count_min: 5,
            room_count_max: 12,
            room_size_min: 5,
            room_size_max: 10,
            placement_attempts: 10,
            margin: 1,
            openings_min: 1,
            openings_max: 3,
            opening_len_min: 2,
            opening_len_max: 4,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { size: 20.0, speed: 5.0, health: 3 }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: 20.0,
            speed: 2.0,
            health: 50,
            pursuit_radius: 200.0,
            contact_damage: 1,
            base_count: 2,
            count_growth_per_level: 1,
            max_count: 8,
            spawn_attempts: 10,
        }
    }
}

impl Default for CollectibleConfig {
    fn default() -> Self {
        Self {
            size: 20.0,
            per_room_min: 1,
            per_room_max: 3,
            placement_attempts: 10,
            health_restore: 20,
            speed_bonus: 3.0,
            speed_boost_ms: 5_000,
            score_value: 10,
        }
    }
}

impl GameConfig {
    /// Grid dimensions `(rows, cols)` covering the whole canvas.
    pub fn grid_dims(&self) -> (usize, usize) {
        let rows = (self.canvas_height / self.tile_size).ceil() as usize;
        let cols = (self.canvas_width / self.tile_size).ceil() as usize;
        (rows, cols)
    }

    pub fn level_up_grace(&self) -> Duration {
        Duration::from_millis(self.level_up_grace_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("tile_size", self.tile_size),
            ("player.size", self.player.size),
            ("player.speed", self.player.speed),
            ("enemies.size", self.enemies.size),
            ("collectibles.size", self.collectibles.size),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.player.health <= 0 {
            return Err(ConfigError::NonPositive { field: "player.health" });
        }

        self.layout.validate()?;

        check_range("enemies.count", self.enemies.base_count, self.enemies.max_count)?;
        check_range(
            "collectibles.per_room",
            self.collectibles.per_room_min,
            self.collectibles.per_room_max,
        )?;
        if self.enemies.spawn_attempts == 0 {
            return Err(ConfigError::ZeroAttempts { field: "enemies.spawn_attempts" });
        }
        if self.collectibles.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts { field: "collectibles.placement_attempts" });
        }
        Ok(())
    }
}

impl LayoutConfig {
    pub fn room_count(&self) -> RangeInclusive<usize> {
        self.room_count_min..=self.room_count_max
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("layout.room_count", self.room_count_min, self.room_count_max)?;
        check_range("layout.room_size", self.room_size_min, self.room_size_max)?;
        check_range("layout.openings", self.openings_min, self.openings_max)?;
        check_range("layout.opening_len", self.opening_len_min, self.opening_len_max)?;
        // A room needs a free interior once its border is walled.
        if self.room_size_min < 3 {
            return Err(ConfigError::RoomTooSmall { room_size_min: self.room_size_min });
        }
        if self.opening_len_min == 0 {
            return Err(ConfigError::NonPositive { field: "layout.opening_len_min" });
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts { field: "layout.placement_attempts" });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}
