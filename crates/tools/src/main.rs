use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use roomrun_core::mapgen::GeneratedLevel;
use roomrun_core::random::derive_level_seed;
use roomrun_core::{Cell, GameConfig, generate_level};

/// Prints a generated level layout as ASCII.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Level number whose layout to derive from the seed
    #[arg(short, long, default_value_t = 1)]
    level: u32,
    /// Optional TOML game config; defaults are used for missing fields
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Mark room openings with `+` instead of `.`
    #[arg(long)]
    show_openings: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GameConfig =
        toml::from_str(&text).with_context(|| "Failed to parse config TOML")?;
    config.validate().map_err(|e| anyhow!("Invalid config: {e:?}"))?;
    Ok(config)
}

fn render_ascii(level: &GeneratedLevel, show_openings: bool) -> String {
    let grid = &level.grid;
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let cell = Cell { row, col };
            let glyph = if grid.is_wall_at(cell) {
                '#'
            } else if show_openings && level.rooms.iter().any(|room| room.is_opening_cell(cell)) {
                '+'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let (rows, cols) = config.grid_dims();
    // Same derivation a fresh run uses for its first pass through each level.
    let level_seed = derive_level_seed(args.seed, 0, args.level);
    let level = generate_level(rows, cols, &config.layout, level_seed)
        .map_err(|e| anyhow!("Invalid layout: {e:?}"))?;

    print!("{}", render_ascii(&level, args.show_openings));
    println!("Seed: {} Level: {} Grid: {rows}x{cols}", args.seed, args.level);
    println!("Rooms: {}", level.rooms.len());
    for (index, room) in level.rooms.iter().enumerate() {
        let rect = room.rect;
        println!(
            "  #{index}: at ({}, {}) size {}x{} openings {}",
            rect.start_row,
            rect.start_col,
            rect.height,
            rect.width,
            room.openings.len()
        );
    }
    println!("Walls: {}", level.grid.wall_count());

    Ok(())
}
