//! Level installation and the collectible-exhaustion level-up.
//! This module exists to keep level state replacement in one place.
//! It does not own the per-tick movement or encounter rules.

use log::info;
use slotmap::SlotMap;

use super::spawns::SpawnArea;
use super::*;
use crate::random::derive_level_seed;
use crate::timers::TimedEffect;

impl LevelSession {
    /// Generates level `number` and swaps it in as a whole. Player health, score and speed
    /// carry over; only the position changes.
    pub(super) fn install_level(&mut self, number: u32) {
        let mut level_rng =
            GameRng::seed_from_u64(derive_level_seed(self.run_seed, self.run_index, number));
        let generated = self.generator.generate(&mut level_rng);

        let area = SpawnArea { grid: &generated.grid, rooms: &generated.rooms, config: &self.config };
        let player_pos = area.player_position(&mut level_rng);
        let player_box = Aabb::square(player_pos, self.player.size);

        let mut enemies = SlotMap::with_key();
        for enemy in area.enemies(&mut level_rng, number, &player_box) {
            enemies.insert(enemy);
        }
        let mut collectibles = SlotMap::with_key();
        for collectible in area.collectibles(&mut level_rng, &player_box) {
            collectibles.insert(collectible);
        }

        self.player.pos = player_pos;
        self.level = LevelState {
            number,
            grid: generated.grid,
            rooms: generated.rooms,
            enemies,
            collectibles,
        };

        info!(
            "level {number}: {} rooms, {} enemies, {} collectibles",
            self.level.rooms.len(),
            self.level.enemies.len(),
            self.level.collectibles.len()
        );
        self.log.push(SessionEvent::LevelStarted {
            level: number,
            rooms: self.level.rooms.len(),
            enemies: self.level.enemies.len(),
            collectibles: self.level.collectibles.len(),
        });
        self.notify(&format!("Level {number}"));
    }

    /// Advances to the next level once every collectible is gone, unless a level-up happened
    /// within the grace window.
    pub(super) fn check_level_up(&mut self) -> Option<u32> {
        if self.just_leveled_up || self.level.remaining_collectibles() > 0 {
            return None;
        }
        let next = self.level.number + 1;
        info!("level {} cleared, advancing to {next}", self.level.number);
        self.log.push(SessionEvent::LevelUp { level: next });
        self.install_level(next);

        self.just_leveled_up = true;
        if let Some(previous) = self.grace_timer.take() {
            self.timers.cancel(previous);
        }
        self.grace_timer =
            Some(self.timers.schedule(self.config.level_up_grace(), TimedEffect::LevelUpGraceEnded));
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::collision::entity_vs_grid;
    use crate::session::test_support::*;

    #[test]
    fn installing_a_level_puts_the_player_on_a_free_cell() {
        let session = started_session(7);
        let player = session.player().bounds();
        assert!(!entity_vs_grid(&player, &session.level().grid, session.config().tile_size));
        assert_eq!(session.level().number, 1);
    }

    #[test]
    fn level_layout_is_a_function_of_seed_run_and_level() {
        let first = started_session(41);
        let second = started_session(41);
        assert_eq!(first.level().grid, second.level().grid);
        assert_eq!(first.player().pos, second.player().pos);
    }

    #[test]
    fn level_up_keeps_health_and_score() {
        let mut session = started_session(3);
        session.player.score = 70;
        session.player.health = 2;
        collect_everything(&mut session);
        assert_eq!(session.check_level_up(), Some(2));
        assert_eq!(session.player().score, 70);
        assert_eq!(session.player().health, 2);
        assert!(session.just_leveled_up);
        assert!(session.grace_timer.is_some());
    }
}
