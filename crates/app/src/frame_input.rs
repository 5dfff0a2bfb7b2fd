//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};
use roomrun_app::app_loop::FrameKeys;

const PRESS_KEYS: [KeyCode; 6] =
    [KeyCode::Enter, KeyCode::Space, KeyCode::P, KeyCode::Escape, KeyCode::R, KeyCode::Q];

const HOLD_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
];

pub fn capture_frame_keys() -> FrameKeys {
    FrameKeys {
        pressed: PRESS_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect(),
        held: HOLD_KEYS.into_iter().filter(|key| is_key_down(*key)).collect(),
    }
}

pub fn quit_requested(keys: &FrameKeys) -> bool {
    keys.pressed.contains(&KeyCode::Q)
}
