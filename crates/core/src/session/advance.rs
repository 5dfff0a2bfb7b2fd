//! Per-tick simulation loop.

use log::debug;

use super::*;
use crate::motion::{MotionContext, step_enemy, step_player};
use crate::timers::TimedEffect;

impl LevelSession {
    /// Runs one frame: timers, player motion, enemy motion, defeated-enemy cleanup, enemy
    /// contact, pickups, then the level-up check. Does nothing outside `Playing`.
    pub fn tick(&mut self, input: &InputState, dt: Duration) -> TickOutcome {
        if self.phase != SessionPhase::Playing {
            return TickOutcome::Idle;
        }

        for effect in self.timers.advance(dt) {
            self.apply_timed_effect(effect);
        }

        let LevelState { grid, enemies, .. } = &mut self.level;
        let ctx = MotionContext {
            grid: &*grid,
            tile_size: self.config.tile_size,
            canvas_width: self.config.canvas_width,
            canvas_height: self.config.canvas_height,
            player_pos: self.player.pos,
        };
        step_player(&mut self.player, input, &ctx);
        let ctx = MotionContext { player_pos: self.player.pos, ..ctx };
        for enemy in enemies.values_mut() {
            step_enemy(enemy, &ctx, &mut self.rng);
        }

        self.remove_defeated_enemies();
        self.resolve_enemy_contacts();
        if self.phase == SessionPhase::GameOver {
            return TickOutcome::GameOver;
        }
        self.collect_touching();

        match self.check_level_up() {
            Some(level) => TickOutcome::LevelUp { level },
            None => TickOutcome::Advanced,
        }
    }

    fn apply_timed_effect(&mut self, effect: TimedEffect) {
        debug!("timer fired: {effect:?}");
        match effect {
            TimedEffect::SpeedBoostExpired => {
                self.player.speed = self.player.default_speed;
                self.player.boost_timer = None;
                self.log.push(SessionEvent::SpeedBoostExpired);
            }
            TimedEffect::LevelUpGraceEnded => {
                self.just_leveled_up = false;
                self.grace_timer = None;
            }
        }
    }
}
