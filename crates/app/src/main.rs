mod frame_input;
mod render;
mod window_config;

use std::env;
use std::time::Duration;

use log::{error, info};
use macroquad::prelude::*;
use macroquad::window::Conf;
use roomrun_app::app_loop::AppState;
use roomrun_app::config_file::resolve_config;
use roomrun_app::{format_seed, format_snapshot_hash};
use roomrun_app::launch::{SeedChoice, generate_runtime_seed, parse_launch_options};
use roomrun_core::{GameConfig, LevelSession, TickOutcome};

use crate::frame_input::{capture_frame_keys, quit_requested};
use crate::render::draw_frame;
use crate::window_config::build_window_conf;

// Frames longer than this are treated as a stall and not simulated in one step.
const MAX_FRAME: Duration = Duration::from_millis(100);

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_options(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    let seed = options.seed.value();
    if let SeedChoice::Generated(_) = options.seed {
        info!("generated seed {}", format_seed(seed));
    }

    let config = resolve_config(options.config_path.as_deref());
    let mut session = match LevelSession::new(config, seed) {
        Ok(session) => session,
        Err(err) => {
            error!("config rejected ({err:?}); falling back to defaults");
            match LevelSession::new(GameConfig::default(), seed) {
                Ok(session) => session,
                Err(err) => {
                    error!("default config rejected: {err:?}");
                    return;
                }
            }
        }
    };
    let mut app = AppState::attach(&mut session);

    loop {
        let keys = capture_frame_keys();
        if quit_requested(&keys) {
            break;
        }
        let dt = Duration::from_secs_f32(get_frame_time().max(0.0)).min(MAX_FRAME);
        if app.tick(&mut session, &keys, dt) == TickOutcome::GameOver {
            info!(
                "run over on level {} with seed {}, state {}",
                session.level().number,
                format_seed(seed),
                format_snapshot_hash(session.snapshot_hash())
            );
        }
        draw_frame(&session, &app);
        next_frame().await
    }
}
