//! Window configuration for the desktop app.

use macroquad::window::Conf;
use roomrun_app::APP_NAME;
use roomrun_core::GameConfig;

/// Height of the HUD strip drawn above the play field.
pub const HUD_HEIGHT: f32 = 32.0;

pub fn build_window_conf() -> Conf {
    let canvas = GameConfig::default();
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: canvas.canvas_width as i32,
        window_height: (canvas.canvas_height + HUD_HEIGHT) as i32,
        high_dpi: true,
        ..Default::default()
    }
}
