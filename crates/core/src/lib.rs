pub mod collision;
pub mod config;
pub mod entity;
pub mod grid;
pub mod hud;
pub mod mapgen;
pub mod motion;
pub mod random;
pub mod session;
pub mod timers;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use grid::{CellState, Grid};
pub use hud::{Headless, HudCounters, NotificationSink, RenderFrame};
pub use mapgen::{GeneratedLevel, RoomLayoutGenerator, generate_level};
pub use random::GameRng;
pub use session::{LevelSession, LevelState};
pub use types::*;
