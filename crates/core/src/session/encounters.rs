//! Player contact with enemies and collectibles, and the damage that follows.
//! This module exists to keep encounter side effects out of the tick loop.

use log::{debug, info, warn};

use super::spawns::SpawnArea;
use super::*;
use crate::collision::boxes_overlap;
use crate::entity::CollectibleEffect;
use crate::timers::TimedEffect;

impl LevelSession {
    pub(super) fn remove_defeated_enemies(&mut self) {
        let defeated: Vec<EnemyId> = self
            .level
            .enemies
            .iter()
            .filter(|(_, enemy)| enemy.is_destroyed())
            .map(|(id, _)| id)
            .collect();
        for id in defeated {
            if let Some(enemy) = self.level.enemies.remove(id) {
                debug!("{:?} enemy defeated", enemy.kind());
                self.log.push(SessionEvent::EnemyDefeated { kind: enemy.kind() });
            }
        }
    }

    /// Each touching enemy hurts the player once and is replaced elsewhere.
    pub(super) fn resolve_enemy_contacts(&mut self) {
        let player_box = self.player.bounds();
        let touching: Vec<EnemyId> = self
            .level
            .enemies
            .iter()
            .filter(|(_, enemy)| boxes_overlap(&player_box, &enemy.bounds()))
            .map(|(id, _)| id)
            .collect();

        for id in touching {
            self.level.enemies.remove(id);
            self.apply_player_damage(self.config.enemies.contact_damage);
            if self.phase == SessionPhase::GameOver {
                return;
            }
            self.respawn_enemy();
        }
    }

    fn respawn_enemy(&mut self) {
        let kind = if self.rng.coin_flip() { EnemyKind::Chaser } else { EnemyKind::Patroller };
        let area = SpawnArea { grid: &self.level.grid, rooms: &self.level.rooms, config: &self.config };
        let Some(pos) = area.enemy_position(&mut self.rng, &self.player.bounds()) else {
            warn!("{kind:?} replacement skipped: no free cell away from the player");
            return;
        };
        debug!("{kind:?} respawned at ({}, {})", pos.x, pos.y);
        self.level.enemies.insert(Enemy::new(pos, kind, &self.config.enemies));
        self.log.push(SessionEvent::EnemyRespawned { kind });
    }

    pub(super) fn apply_player_damage(&mut self, amount: i32) {
        self.player.take_damage(amount);
        self.log.push(SessionEvent::PlayerHit { damage: amount, health: self.player.health });
        if self.player.is_dead() {
            self.phase = SessionPhase::GameOver;
            info!("game over on level {} with score {}", self.level.number, self.player.score);
            self.log.push(SessionEvent::GameOver {
                level: self.level.number,
                score: self.player.score,
            });
            self.notify("Game over");
        }
    }

    pub(super) fn collect_touching(&mut self) {
        let player_box = self.player.bounds();
        let touching: Vec<CollectibleId> = self
            .level
            .collectibles
            .iter()
            .filter(|(_, item)| !item.collected && boxes_overlap(&player_box, &item.bounds()))
            .map(|(id, _)| id)
            .collect();

        for id in touching {
            let Some(item) = self.level.collectibles.get_mut(id) else {
                continue;
            };
            item.collected = true;
            let kind = item.kind;
            self.apply_collectible(CollectibleEffect::for_kind(kind, &self.config.collectibles));
            self.log.push(SessionEvent::CollectiblePicked { kind });
        }
    }

    fn apply_collectible(&mut self, effect: CollectibleEffect) {
        match effect {
            CollectibleEffect::RestoreHealth(amount) => {
                self.player.health += amount;
                self.notify(&format!("+{amount} health"));
            }
            CollectibleEffect::SpeedBoost { bonus, duration_ms } => {
                // A new boost restarts the clock instead of stacking.
                if let Some(previous) = self.player.boost_timer.take() {
                    self.timers.cancel(previous);
                }
                self.player.speed = self.player.default_speed + bonus;
                self.player.boost_timer = Some(self.timers.schedule(
                    Duration::from_millis(duration_ms),
                    TimedEffect::SpeedBoostExpired,
                ));
                self.notify("Speed boost!");
            }
            CollectibleEffect::AddScore(points) => {
                self.player.score += points;
                self.notify(&format!("+{points} score"));
            }
        }
    }
}
