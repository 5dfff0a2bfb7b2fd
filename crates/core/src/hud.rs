//! Read-only views handed to the frontend: counters, draw lists and transient messages.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::grid::Grid;
use crate::mapgen::Room;
use crate::types::{Aabb, CollectibleKind, EnemyKind};

/// Receives short player-facing messages such as "Level 3!".
pub trait NotificationSink {
    fn show_message(&mut self, message: &str);
}

/// Discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl NotificationSink for Headless {
    fn show_message(&mut self, _message: &str) {}
}

impl NotificationSink for Sender<String> {
    fn show_message(&mut self, message: &str) {
        // A dropped receiver just means nobody is showing banners anymore.
        let _ = self.send(message.to_owned());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudCounters {
    pub elapsed: Duration,
    pub health: i32,
    pub score: u32,
    pub level: u32,
    pub remaining_collectibles: usize,
}

#[derive(Clone, Debug)]
pub struct RenderFrame<'a> {
    pub grid: &'a Grid,
    pub rooms: &'a [Room],
    pub tile_size: f32,
    pub player: Aabb,
    pub enemies: Vec<(EnemyKind, Aabb)>,
    pub collectibles: Vec<(CollectibleKind, Aabb)>,
}
