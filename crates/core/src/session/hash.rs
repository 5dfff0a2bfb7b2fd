//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation code.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl LevelSession {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.run_seed);
        hasher.write_u64(self.run_index);
        hasher.write_u8(match self.phase {
            SessionPhase::Start => 0,
            SessionPhase::Playing => 1,
            SessionPhase::Paused => 2,
            SessionPhase::GameOver => 3,
        });
        hasher.write_u32(self.level.number);
        hasher.write(&self.level.grid.canonical_bytes());
        hasher.write_u64(self.timers.now().as_millis() as u64);

        hasher.write_u32(self.player.pos.x.to_bits());
        hasher.write_u32(self.player.pos.y.to_bits());
        hasher.write_u32(self.player.speed.to_bits());
        hasher.write_i32(self.player.health);
        hasher.write_u32(self.player.score);
        hasher.write_u8(u8::from(self.just_leveled_up));

        for enemy in self.level.enemies.values() {
            hasher.write_u8(enemy.kind() as u8);
            hasher.write_u32(enemy.pos.x.to_bits());
            hasher.write_u32(enemy.pos.y.to_bits());
            hasher.write_i32(enemy.health);
        }
        for collectible in self.level.collectibles.values() {
            hasher.write_u8(collectible.kind as u8);
            hasher.write_u32(collectible.pos.x.to_bits());
            hasher.write_u32(collectible.pos.y.to_bits());
            hasher.write_u8(u8::from(collectible.collected));
        }
        hasher.finish()
    }
}
