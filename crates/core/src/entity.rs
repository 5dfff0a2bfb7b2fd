//! Player, enemy and collectible records.

use crate::config::{CollectibleConfig, EnemyConfig, PlayerConfig};
use crate::motion::MotionPolicy;
use crate::types::{Aabb, CollectibleKind, EnemyKind, TimerId, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub health: i32,
    pub speed: f32,
    pub default_speed: f32,
    pub score: u32,
    /// Pending expiry of the active speed boost, if any.
    pub boost_timer: Option<TimerId>,
}

impl Player {
    pub fn new(pos: Vec2, config: &PlayerConfig) -> Self {
        Self {
            pos,
            size: config.size,
            health: config.health,
            speed: config.speed,
            default_speed: config.speed,
            score: 0,
            boost_timer: None,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub health: i32,
    pub motion: MotionPolicy,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: EnemyKind, config: &EnemyConfig) -> Self {
        Self {
            pos,
            size: config.size,
            speed: config.speed,
            health: config.health,
            motion: MotionPolicy::for_kind(kind, config),
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.motion.kind()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: f32,
    pub kind: CollectibleKind,
    pub collected: bool,
}

impl Collectible {
    pub fn new(pos: Vec2, kind: CollectibleKind, config: &CollectibleConfig) -> Self {
        Self { pos, size: config.size, kind, collected: false }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// What picking up a collectible does to the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollectibleEffect {
    RestoreHealth(i32),
    SpeedBoost { bonus: f32, duration_ms: u64 },
    AddScore(u32),
}

impl CollectibleEffect {
    pub fn for_kind(kind: CollectibleKind, config: &CollectibleConfig) -> Self {
        match kind {
            CollectibleKind::Health => CollectibleEffect::RestoreHealth(config.health_restore),
            CollectibleKind::Speed => CollectibleEffect::SpeedBoost {
                bonus: config.speed_bonus,
                duration_ms: config.speed_boost_ms,
            },
            CollectibleKind::Score => CollectibleEffect::AddScore(config.score_value),
        }
    }
}
