use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use roomrun_core::collision::entity_vs_grid;
use roomrun_core::{
    Direction, GameConfig, InputState, LevelSession, SessionEvent, SessionPhase, TickOutcome,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u32,
}

fn random_input(rng: &mut ChaCha8Rng) -> InputState {
    let mut input = InputState::default();
    for direction in Direction::ALL {
        input.set(direction, rng.next_u64() % 3 == 0);
    }
    input
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting soak on seed {} for {} ticks...", args.seed, args.ticks);
    let mut session = LevelSession::new(GameConfig::default(), args.seed)
        .map_err(|e| anyhow!("default config rejected: {e:?}"))?;
    session.start().map_err(|e| anyhow!("start failed: {e:?}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let tile = session.config().tile_size;

    let mut level_ups = 0_u32;
    let mut game_overs = 0_u32;
    let mut input = random_input(&mut rng);
    for tick in 0..args.ticks {
        if tick % 20 == 0 {
            input = random_input(&mut rng);
        }
        match session.tick(&input, Duration::from_millis(16)) {
            TickOutcome::LevelUp { .. } => level_ups += 1,
            TickOutcome::GameOver => {
                game_overs += 1;
                session.restart();
                continue;
            }
            TickOutcome::Idle => bail!("session idle while playing at tick {tick}"),
            TickOutcome::Advanced => {}
        }

        if session.phase() != SessionPhase::Playing {
            bail!("unexpected phase {:?} at tick {tick}", session.phase());
        }
        let level = session.level();
        if entity_vs_grid(&session.player().bounds(), &level.grid, tile) {
            bail!("player inside a wall at tick {tick}");
        }
        for enemy in level.enemies.values() {
            if entity_vs_grid(&enemy.bounds(), &level.grid, tile) {
                bail!("{:?} enemy inside a wall at tick {tick}", enemy.kind());
            }
        }
    }

    let hits = session
        .log()
        .iter()
        .filter(|event| matches!(event, SessionEvent::PlayerHit { .. }))
        .count();
    println!(
        "Soak completed: {level_ups} level-ups, {game_overs} game overs, {hits} hits taken."
    );
    println!("Final level {} hash {:#018x}", session.level().number, session.snapshot_hash());
    Ok(())
}
