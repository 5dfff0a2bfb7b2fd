//! Per-kind movement policies. A move is computed as a single candidate position and is
//! committed only when the candidate stays on the canvas and clear of walls.

use crate::collision::entity_vs_grid;
use crate::config::EnemyConfig;
use crate::entity::{Enemy, Player};
use crate::grid::Grid;
use crate::random::GameRng;
use crate::types::{Aabb, EnemyKind, InputState, Vec2};

/// World facts a mover needs for one tick.
#[derive(Clone, Copy, Debug)]
pub struct MotionContext<'a> {
    pub grid: &'a Grid,
    pub tile_size: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_pos: Vec2,
}

impl MotionContext<'_> {
    pub fn on_canvas(&self, bounds: &Aabb) -> bool {
        bounds.x >= 0.0
            && bounds.y >= 0.0
            && bounds.right() <= self.canvas_width
            && bounds.bottom() <= self.canvas_height
    }

    pub fn can_occupy(&self, bounds: &Aabb) -> bool {
        self.on_canvas(bounds) && !entity_vs_grid(bounds, self.grid, self.tile_size)
    }

    fn clamp_to_canvas(&self, pos: Vec2, size: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(0.0, (self.canvas_width - size).max(0.0)),
            pos.y.clamp(0.0, (self.canvas_height - size).max(0.0)),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionPolicy {
    /// Steps toward the player while within `pursuit_radius`, wanders otherwise.
    Chaser { pursuit_radius: f32 },
    /// Walks along `axis`; `direction` is +1 or -1 and flips when blocked.
    Patroller { axis: Axis, direction: f32 },
    Stationary,
    Wanderer,
}

impl MotionPolicy {
    pub fn for_kind(kind: EnemyKind, config: &EnemyConfig) -> Self {
        match kind {
            EnemyKind::Chaser => MotionPolicy::Chaser { pursuit_radius: config.pursuit_radius },
            EnemyKind::Patroller => {
                MotionPolicy::Patroller { axis: Axis::Horizontal, direction: 1.0 }
            }
            EnemyKind::Stationary => MotionPolicy::Stationary,
            EnemyKind::Wanderer => MotionPolicy::Wanderer,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self {
            MotionPolicy::Chaser { .. } => EnemyKind::Chaser,
            MotionPolicy::Patroller { .. } => EnemyKind::Patroller,
            MotionPolicy::Stationary => EnemyKind::Stationary,
            MotionPolicy::Wanderer => EnemyKind::Wanderer,
        }
    }
}

/// Moves the player by the held directions at its current speed. Returns whether it moved.
pub fn step_player(player: &mut Player, input: &InputState, ctx: &MotionContext<'_>) -> bool {
    let mut displacement = Vec2::default();
    for direction in input.held() {
        let unit = direction.unit();
        displacement.x += unit.x;
        displacement.y += unit.y;
    }
    if displacement == Vec2::default() {
        return false;
    }

    let candidate = ctx.clamp_to_canvas(
        Vec2::new(
            player.pos.x + displacement.x * player.speed,
            player.pos.y + displacement.y * player.speed,
        ),
        player.size,
    );
    if candidate == player.pos
        || entity_vs_grid(&Aabb::square(candidate, player.size), ctx.grid, ctx.tile_size)
    {
        return false;
    }
    player.pos = candidate;
    true
}

/// Advances one enemy by its policy. Returns whether it moved.
pub fn step_enemy(enemy: &mut Enemy, ctx: &MotionContext<'_>, rng: &mut GameRng) -> bool {
    match enemy.motion {
        MotionPolicy::Stationary => false,
        MotionPolicy::Wanderer => wander(enemy, ctx, rng),
        MotionPolicy::Chaser { pursuit_radius } => {
            if enemy.pos.distance(ctx.player_pos) < pursuit_radius {
                let dx = axis_sign(ctx.player_pos.x - enemy.pos.x) * enemy.speed;
                let dy = axis_sign(ctx.player_pos.y - enemy.pos.y) * enemy.speed;
                try_commit(enemy, dx, dy, ctx)
            } else {
                wander(enemy, ctx, rng)
            }
        }
        MotionPolicy::Patroller { axis, direction } => {
            let step = direction * enemy.speed;
            let (dx, dy) = match axis {
                Axis::Horizontal => (step, 0.0),
                Axis::Vertical => (0.0, step),
            };
            if try_commit(enemy, dx, dy, ctx) {
                return true;
            }
            enemy.motion = MotionPolicy::Patroller { axis, direction: -direction };
            false
        }
    }
}

fn wander(enemy: &mut Enemy, ctx: &MotionContext<'_>, rng: &mut GameRng) -> bool {
    let dx = rng.axis_step() * enemy.speed;
    let dy = rng.axis_step() * enemy.speed;
    try_commit(enemy, dx, dy, ctx)
}

fn try_commit(enemy: &mut Enemy, dx: f32, dy: f32, ctx: &MotionContext<'_>) -> bool {
    if dx == 0.0 && dy == 0.0 {
        return false;
    }
    let candidate = Vec2::new(enemy.pos.x + dx, enemy.pos.y + dy);
    if !ctx.can_occupy(&Aabb::square(candidate, enemy.size)) {
        return false;
    }
    enemy.pos = candidate;
    true
}

fn axis_sign(delta: f32) -> f32 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}
