//! Spawn placement for the player, enemies and collectibles of a freshly generated level.
//! Every placement has a bounded number of attempts; a placement that runs out is skipped.
//! It does not own level installation or the tick loop.

use log::warn;

use crate::collision::{boxes_overlap, entity_vs_grid};
use crate::config::GameConfig;
use crate::entity::{Collectible, Enemy};
use crate::grid::Grid;
use crate::mapgen::Room;
use crate::random::GameRng;
use crate::types::{Aabb, CollectibleKind, EnemyKind, Vec2};

/// Enemies never spawn closer than this many tiles to the player.
const SAFE_SPAWN_TILES: f32 = 3.0;

#[derive(Clone, Copy)]
pub(super) struct SpawnArea<'a> {
    pub grid: &'a Grid,
    pub rooms: &'a [Room],
    pub config: &'a GameConfig,
}

impl SpawnArea<'_> {
    fn fits(&self, pos: Vec2, size: f32) -> bool {
        let bounds = Aabb::square(pos, size);
        bounds.right() <= self.config.canvas_width
            && bounds.bottom() <= self.config.canvas_height
            && !entity_vs_grid(&bounds, self.grid, self.config.tile_size)
    }

    fn cell_origin(&self, row: usize, col: usize) -> Vec2 {
        let tile = self.config.tile_size;
        Vec2::new(col as f32 * tile, row as f32 * tile)
    }

    /// A random interior cell of `room`, as the world position of its top-left corner.
    fn interior_pos(&self, rng: &mut GameRng, room: &Room) -> Option<Vec2> {
        let (rows, cols) = room.rect.interior()?;
        let row = rng.range_usize(rows.min, rows.max);
        let col = rng.range_usize(cols.min, cols.max);
        Some(self.cell_origin(row, col))
    }

    fn random_room_pos(&self, rng: &mut GameRng) -> Option<Vec2> {
        let room = rng.choose(self.rooms)?;
        self.interior_pos(rng, room)
    }

    /// Player start: a random room interior, falling back to the first free cell in row-major
    /// order when no room yields one.
    pub fn player_position(&self, rng: &mut GameRng) -> Vec2 {
        let size = self.config.player.size;
        for _ in 0..self.config.layout.placement_attempts {
            if let Some(pos) = self.random_room_pos(rng)
                && self.fits(pos, size)
            {
                return pos;
            }
        }
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let pos = self.cell_origin(row, col);
                if self.fits(pos, size) {
                    return pos;
                }
            }
        }
        warn!("no free cell for the player on a {}x{} grid", self.grid.rows(), self.grid.cols());
        Vec2::default()
    }

    /// A free interior position at least a few tiles away from `player`.
    pub fn enemy_position(&self, rng: &mut GameRng, player: &Aabb) -> Option<Vec2> {
        let size = self.config.enemies.size;
        let min_distance = SAFE_SPAWN_TILES * self.config.tile_size;
        let player_pos = Vec2::new(player.x, player.y);
        for _ in 0..self.config.enemies.spawn_attempts {
            let pos = self.random_room_pos(rng)?;
            if self.fits(pos, size)
                && !boxes_overlap(&Aabb::square(pos, size), player)
                && pos.distance(player_pos) >= min_distance
            {
                return Some(pos);
            }
        }
        None
    }

    pub fn enemies(&self, rng: &mut GameRng, level: u32, player: &Aabb) -> Vec<Enemy> {
        let count = enemy_count(self.config, level);
        let mut enemies = Vec::with_capacity(count);
        for index in 0..count {
            let kind = EnemyKind::ALL[rng.range_usize(0, EnemyKind::ALL.len() - 1)];
            match self.enemy_position(rng, player) {
                Some(pos) => enemies.push(Enemy::new(pos, kind, &self.config.enemies)),
                None => warn!("enemy {index} of level {level} skipped: no free spawn cell"),
            }
        }
        enemies
    }

    /// Scatters collectibles across every room whose interior is at least 2x2 cells.
    pub fn collectibles(&self, rng: &mut GameRng, player: &Aabb) -> Vec<Collectible> {
        let settings = &self.config.collectibles;
        let mut placed: Vec<Collectible> = Vec::new();
        for room in self.rooms {
            let Some((rows, cols)) = room.rect.interior() else {
                continue;
            };
            if rows.len() < 2 || cols.len() < 2 {
                continue;
            }
            let wanted = rng.range_usize(settings.per_room_min, settings.per_room_max);
            for _ in 0..wanted {
                let kind = CollectibleKind::ALL[rng.range_usize(0, CollectibleKind::ALL.len() - 1)];
                let spot = (0..settings.placement_attempts).find_map(|_| {
                    let pos = self.interior_pos(rng, room)?;
                    let bounds = Aabb::square(pos, settings.size);
                    let free = self.fits(pos, settings.size)
                        && !boxes_overlap(&bounds, player)
                        && placed.iter().all(|other| !boxes_overlap(&bounds, &other.bounds()));
                    free.then_some(pos)
                });
                match spot {
                    Some(pos) => placed.push(Collectible::new(pos, kind, settings)),
                    None => warn!(
                        "collectible skipped in room at ({}, {}): no free cell after {} attempts",
                        room.rect.start_row, room.rect.start_col, settings.placement_attempts
                    ),
                }
            }
        }
        placed
    }
}

/// Enemies for `level`: grows linearly from the base count and is capped.
pub(super) fn enemy_count(config: &GameConfig, level: u32) -> usize {
    let growth = config.enemies.count_growth_per_level * level.saturating_sub(1) as usize;
    (config.enemies.base_count + growth).min(config.enemies.max_count)
}
