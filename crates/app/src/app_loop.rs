use std::time::Duration;

use log::debug;
use macroquad::prelude::KeyCode;
use roomrun_core::{Direction, InputState, LevelSession, SessionPhase, TickOutcome};

use crate::banners::BannerQueue;

const MOVE_KEYS: [(KeyCode, Direction); 8] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::W, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::S, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::A, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::D, Direction::Right),
];

/// Keys sampled for one frame: edge-triggered presses and level-triggered holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameKeys {
    pub pressed: Vec<KeyCode>,
    pub held: Vec<KeyCode>,
}

impl FrameKeys {
    pub fn input_state(&self) -> InputState {
        let mut input = InputState::default();
        for (key, direction) in MOVE_KEYS {
            if self.held.contains(&key) {
                input.set(direction, true);
            }
        }
        input
    }

    fn was_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.pressed.contains(key))
    }
}

pub struct AppState {
    pub banners: BannerQueue,
}

impl AppState {
    /// Routes the session's notifications into this app's banner queue.
    pub fn attach(session: &mut LevelSession) -> Self {
        let (banners, sender) = BannerQueue::channel();
        session.set_notification_sink(Box::new(sender));
        Self { banners }
    }

    /// Handles the frame's phase keys, then advances the session by `dt`.
    pub fn tick(&mut self, session: &mut LevelSession, keys: &FrameKeys, dt: Duration) -> TickOutcome {
        match session.phase() {
            SessionPhase::Start => {
                if keys.was_pressed(&[KeyCode::Enter, KeyCode::Space]) && session.start().is_err() {
                    debug!("start ignored: session already running");
                }
            }
            SessionPhase::Playing | SessionPhase::Paused => {
                if keys.was_pressed(&[KeyCode::P, KeyCode::Escape])
                    && let Ok(phase) = session.toggle_pause()
                {
                    debug!("pause toggled, now {phase:?}");
                }
            }
            SessionPhase::GameOver => {
                if keys.was_pressed(&[KeyCode::R, KeyCode::Enter]) {
                    self.banners.clear();
                    session.restart();
                }
            }
        }

        let outcome = session.tick(&keys.input_state(), dt);
        self.banners.pump(dt);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_the_same_directions() {
        let keys = FrameKeys { pressed: Vec::new(), held: vec![KeyCode::W, KeyCode::Right] };
        let input = keys.input_state();
        assert!(input.up && input.right);
        assert!(!input.down && !input.left);
    }

    #[test]
    fn pressed_only_keys_do_not_move() {
        let keys = FrameKeys { pressed: vec![KeyCode::Left], held: Vec::new() };
        assert_eq!(keys.input_state(), InputState::default());
    }
}
