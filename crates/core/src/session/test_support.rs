//! Shared fixtures for the `session` test suites.
//! This module exists to avoid repeating arena and entity setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::mapgen::RoomRect;

pub(super) const FRAME: Duration = Duration::from_millis(16);

pub(super) fn started_session(seed: u64) -> LevelSession {
    let mut session = LevelSession::new(GameConfig::default(), seed).expect("default config");
    session.start().expect("fresh session starts");
    session
}

/// A started session whose level is one large walled room with the player at (100, 100) and a
/// single collectible parked in the far corner so the level does not end on its own.
pub(super) fn arena_session(seed: u64) -> LevelSession {
    let mut session = started_session(seed);
    let (rows, cols) = session.config.grid_dims();
    let rect = RoomRect { start_row: 1, start_col: 1, height: rows - 2, width: cols - 2 };
    let mut grid = Grid::new(rows, cols);
    for cell in rect.border_cells() {
        grid.set_wall(cell.row, cell.col);
    }
    session.level = LevelState {
        number: 1,
        grid,
        rooms: vec![Room { rect, openings: Vec::new() }],
        enemies: SlotMap::with_key(),
        collectibles: SlotMap::with_key(),
    };
    session.player.pos = Vec2::new(100.0, 100.0);
    place_collectible(&mut session, Vec2::new(700.0, 500.0), CollectibleKind::Score);
    session
}

pub(super) fn place_enemy(session: &mut LevelSession, pos: Vec2, kind: EnemyKind) -> EnemyId {
    session.level.enemies.insert(Enemy::new(pos, kind, &session.config.enemies))
}

pub(super) fn place_collectible(
    session: &mut LevelSession,
    pos: Vec2,
    kind: CollectibleKind,
) -> CollectibleId {
    session.level.collectibles.insert(Collectible::new(pos, kind, &session.config.collectibles))
}

pub(super) fn collect_everything(session: &mut LevelSession) {
    for collectible in session.level.collectibles.values_mut() {
        collectible.collected = true;
    }
}

pub(super) fn idle() -> InputState {
    InputState::default()
}
