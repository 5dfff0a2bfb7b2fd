//! Optional TOML game configuration on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use roomrun_core::GameConfig;

use crate::APP_NAME;

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.toml");
        path
    })
}

/// Reads and validates a config file. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> io::Result<GameConfig> {
    let content = fs::read_to_string(path)?;
    let config: GameConfig =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{e:?}")))?;
    Ok(config)
}

pub fn write_config(config: &GameConfig, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    let text = toml::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(&tmp_path, text)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// An explicit path must load; the default location is optional and is seeded with the
/// built-in defaults on first launch. Any failure falls back to the defaults with a warning.
pub fn resolve_config(explicit: Option<&Path>) -> GameConfig {
    resolve_config_at(explicit, default_config_path())
}

fn resolve_config_at(explicit: Option<&Path>, default_path: Option<PathBuf>) -> GameConfig {
    let path = match (explicit, default_path) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(path)) if path.exists() => path,
        (None, Some(path)) => {
            let config = GameConfig::default();
            match write_config(&config, &path) {
                Ok(()) => info!("wrote default config to {}", path.display()),
                Err(err) => warn!("could not write default config {}: {err}", path.display()),
            }
            return config;
        }
        (None, None) => return GameConfig::default(),
    };
    match load_config(&path) {
        Ok(config) => {
            info!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            warn!("ignoring config {}: {err}; using defaults", path.display());
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn config_file_write_and_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = GameConfig::default();
        config.enemies.max_count = 4;
        config.layout.room_count_max = 6;

        write_config(&config, &path).expect("write");
        assert_eq!(load_config(&path).expect("load"), config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "tile_size = 0.0\n").expect("write");
        let err = load_config(&path).expect_err("zero tile size");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn unreadable_explicit_config_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml");
        assert_eq!(resolve_config(Some(&path)), GameConfig::default());
    }

    #[test]
    fn missing_default_config_is_seeded_on_first_launch() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("roomrun").join("config.toml");
        assert_eq!(resolve_config_at(None, Some(path.clone())), GameConfig::default());
        assert_eq!(load_config(&path).expect("seeded file loads"), GameConfig::default());
    }

    #[test]
    fn existing_default_config_is_loaded_not_overwritten() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[enemies]\nmax_count = 3\n").expect("write");
        let config = resolve_config_at(None, Some(path.clone()));
        assert_eq!(config.enemies.max_count, 3);
        assert_eq!(fs::read_to_string(&path).expect("read"), "[enemies]\nmax_count = 3\n");
    }

    #[test]
    fn explicit_partial_config_is_merged_over_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[player]\nspeed = 7.5\n").expect("write");
        let config = resolve_config(Some(&path));
        assert_eq!(config.player.speed, 7.5);
        assert_eq!(config.player.health, 3);
    }
}
