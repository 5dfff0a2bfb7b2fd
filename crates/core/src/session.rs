//! One playable level at a time: phases, the per-tick loop, level-up and game over.
//! Submodules split the tick loop, level installation, spawning and encounters.

use std::time::Duration;

use log::info;
use slotmap::SlotMap;

use crate::config::{ConfigError, GameConfig};
use crate::entity::{Collectible, Enemy, Player};
use crate::grid::Grid;
use crate::hud::{Headless, HudCounters, NotificationSink, RenderFrame};
use crate::mapgen::{Room, RoomLayoutGenerator};
use crate::random::{GameRng, mix_seed_stream};
use crate::timers::Timers;
use crate::types::*;

mod advance;
mod encounters;
mod hash;
mod level_transition;
mod spawns;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

/// Everything that belongs to the current level. Replaced as a whole on level-up and restart.
#[derive(Clone, Debug)]
pub struct LevelState {
    pub number: u32,
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub collectibles: SlotMap<CollectibleId, Collectible>,
}

impl LevelState {
    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            number: 0,
            grid: Grid::new(rows, cols),
            rooms: Vec::new(),
            enemies: SlotMap::with_key(),
            collectibles: SlotMap::with_key(),
        }
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.values().filter(|collectible| !collectible.collected).count()
    }
}

pub struct LevelSession {
    config: GameConfig,
    generator: RoomLayoutGenerator,
    run_seed: u64,
    run_index: u64,
    rng: GameRng,
    phase: SessionPhase,
    level: LevelState,
    player: Player,
    timers: Timers,
    // Blocks a second level-up until the grace timer clears it.
    just_leveled_up: bool,
    grace_timer: Option<TimerId>,
    log: Vec<SessionEvent>,
    sink: Box<dyn NotificationSink>,
}

impl LevelSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let (rows, cols) = config.grid_dims();
        let generator = RoomLayoutGenerator::new(rows, cols, config.layout.clone())?;
        let player = Player::new(Vec2::default(), &config.player);
        Ok(Self {
            generator,
            rng: GameRng::seed_from_u64(mix_seed_stream(seed, 0)),
            run_seed: seed,
            run_index: 0,
            phase: SessionPhase::Start,
            level: LevelState::empty(rows, cols),
            player,
            timers: Timers::new(),
            just_leveled_up: false,
            grace_timer: None,
            log: Vec::new(),
            sink: Box::new(Headless),
            config,
        })
    }

    pub fn set_notification_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sink = sink;
    }

    /// Leaves the start screen and enters level 1.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Start {
            return Err(SessionError::AlreadyStarted);
        }
        info!("run {} started from seed {}", self.run_index, self.run_seed);
        self.begin_run();
        Ok(())
    }

    /// Drops the current run, cancelling every pending timer, and starts over at level 1.
    pub fn restart(&mut self) {
        if self.phase != SessionPhase::Start {
            self.run_index += 1;
            self.log.push(SessionEvent::RunRestarted { run: self.run_index });
        }
        info!("run {} restarted from seed {}", self.run_index, self.run_seed);
        self.begin_run();
    }

    pub fn toggle_pause(&mut self) -> Result<SessionPhase, SessionError> {
        self.phase = match self.phase {
            SessionPhase::Playing => {
                self.log.push(SessionEvent::Paused);
                SessionPhase::Paused
            }
            SessionPhase::Paused => {
                self.log.push(SessionEvent::Resumed);
                SessionPhase::Playing
            }
            SessionPhase::Start | SessionPhase::GameOver => return Err(SessionError::NotRunning),
        };
        Ok(self.phase)
    }

    /// Applies damage to the player; reaching zero health ends the run.
    pub fn take_damage(&mut self, amount: i32) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Playing {
            return Err(SessionError::NotRunning);
        }
        self.apply_player_damage(amount);
        Ok(())
    }

    /// Damages an enemy. Destroyed enemies are removed at the start of the next tick's cleanup.
    pub fn damage_enemy(&mut self, id: EnemyId, amount: i32) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Playing {
            return Err(SessionError::NotRunning);
        }
        let Some(enemy) = self.level.enemies.get_mut(id) else {
            return Err(SessionError::UnknownEnemy);
        };
        enemy.take_damage(amount);
        Ok(())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.run_seed
    }

    pub fn log(&self) -> &[SessionEvent] {
        &self.log
    }

    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    pub fn counters(&self) -> HudCounters {
        HudCounters {
            elapsed: self.timers.now(),
            health: self.player.health,
            score: self.player.score,
            level: self.level.number,
            remaining_collectibles: self.level.remaining_collectibles(),
        }
    }

    pub fn render_frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            grid: &self.level.grid,
            rooms: &self.level.rooms,
            tile_size: self.config.tile_size,
            player: self.player.bounds(),
            enemies: self.level.enemies.values().map(|enemy| (enemy.kind(), enemy.bounds())).collect(),
            collectibles: self
                .level
                .collectibles
                .values()
                .filter(|collectible| !collectible.collected)
                .map(|collectible| (collectible.kind, collectible.bounds()))
                .collect(),
        }
    }

    fn begin_run(&mut self) {
        self.rng = GameRng::seed_from_u64(mix_seed_stream(self.run_seed, self.run_index));
        self.timers.clear();
        self.grace_timer = None;
        self.just_leveled_up = false;
        self.player = Player::new(Vec2::default(), &self.config.player);
        self.phase = SessionPhase::Playing;
        self.install_level(1);
    }

    fn notify(&mut self, message: &str) {
        self.sink.show_message(message);
    }
}
