pub mod app_loop;
pub mod banners;
pub mod config_file;
pub mod hud_text;
pub mod launch;

pub const APP_NAME: &str = "roomrun";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
