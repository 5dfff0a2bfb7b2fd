//! Text for the HUD strip and the full-screen phase overlays.

use roomrun_core::{HudCounters, SessionPhase};

pub fn hud_line(counters: &HudCounters) -> String {
    format!(
        "Level {}   Health {}   Score {}   Items left {}   Time {}s",
        counters.level,
        counters.health,
        counters.score,
        counters.remaining_collectibles,
        counters.elapsed.as_secs()
    )
}

/// Centered overlay lines for every phase except active play.
pub fn overlay_lines(phase: SessionPhase, counters: &HudCounters) -> Vec<String> {
    match phase {
        SessionPhase::Start => {
            vec!["ROOM RUN".to_string(), "Press Enter to start".to_string()]
        }
        SessionPhase::Paused => {
            vec!["Paused".to_string(), "Press P to resume".to_string()]
        }
        SessionPhase::GameOver => vec![
            "Game over".to_string(),
            format!("Reached level {} with {} points", counters.level, counters.score),
            "Press R to restart".to_string(),
        ],
        SessionPhase::Playing => Vec::new(),
    }
}
