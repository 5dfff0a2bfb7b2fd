//! Drawing for the play field, HUD strip, banners and phase overlays.

use macroquad::prelude::*;
use roomrun_app::app_loop::AppState;
use roomrun_app::hud_text::{hud_line, overlay_lines};
use roomrun_core::{Aabb, CollectibleKind, EnemyKind, LevelSession, RenderFrame};

use crate::window_config::HUD_HEIGHT;

const FLOOR_COLOR: Color = Color { r: 0.08, g: 0.08, b: 0.1, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.45, g: 0.45, b: 0.5, a: 1.0 };
const HUD_COLOR: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.85 };
const OVERLAY_COLOR: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.6 };

/// Maps canvas units onto the window below the HUD strip.
struct Viewport {
    scale: f32,
    offset_y: f32,
}

impl Viewport {
    fn fit(session: &LevelSession) -> Self {
        let config = session.config();
        let scale = (screen_width() / config.canvas_width)
            .min((screen_height() - HUD_HEIGHT).max(1.0) / config.canvas_height);
        Self { scale, offset_y: HUD_HEIGHT }
    }

    fn rect(&self, bounds: &Aabb, color: Color) {
        draw_rectangle(
            bounds.x * self.scale,
            self.offset_y + bounds.y * self.scale,
            bounds.w * self.scale,
            bounds.h * self.scale,
            color,
        );
    }
}

pub fn draw_frame(session: &LevelSession, app: &AppState) {
    clear_background(FLOOR_COLOR);
    let viewport = Viewport::fit(session);
    draw_play_field(&session.render_frame(), &viewport);
    draw_hud(session);
    if let Some(message) = app.banners.current() {
        draw_centered(message, screen_height() * 0.2, 36.0, YELLOW);
    }
    draw_overlay(session);
}

fn draw_play_field(frame: &RenderFrame<'_>, viewport: &Viewport) {
    let tile = frame.tile_size;
    for row in 0..frame.grid.rows() {
        for col in 0..frame.grid.cols() {
            if frame.grid.is_wall(row as i32, col as i32) {
                let cell = Aabb::new(col as f32 * tile, row as f32 * tile, tile, tile);
                viewport.rect(&cell, WALL_COLOR);
            }
        }
    }
    for (kind, bounds) in &frame.collectibles {
        viewport.rect(bounds, collectible_color(*kind));
    }
    for (kind, bounds) in &frame.enemies {
        viewport.rect(bounds, enemy_color(*kind));
    }
    viewport.rect(&frame.player, SKYBLUE);
}

fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Chaser => RED,
        EnemyKind::Patroller => ORANGE,
        EnemyKind::Stationary => MAROON,
        EnemyKind::Wanderer => PINK,
    }
}

fn collectible_color(kind: CollectibleKind) -> Color {
    match kind {
        CollectibleKind::Health => GREEN,
        CollectibleKind::Speed => GOLD,
        CollectibleKind::Score => VIOLET,
    }
}

fn draw_hud(session: &LevelSession) {
    draw_rectangle(0.0, 0.0, screen_width(), HUD_HEIGHT, HUD_COLOR);
    draw_text(&hud_line(&session.counters()), 10.0, HUD_HEIGHT * 0.7, 20.0, WHITE);
}

fn draw_overlay(session: &LevelSession) {
    let lines = overlay_lines(session.phase(), &session.counters());
    if lines.is_empty() {
        return;
    }
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY_COLOR);
    let mut y = screen_height() * 0.45;
    for (index, line) in lines.iter().enumerate() {
        let size = if index == 0 { 48.0 } else { 24.0 };
        draw_centered(line, y, size, WHITE);
        y += size + 8.0;
    }
}

fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (screen_width() - dims.width) * 0.5, y, font_size, color);
}
