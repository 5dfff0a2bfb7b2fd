use std::sync::mpsc;

use super::test_support::*;
use super::*;
use crate::collision::entity_vs_grid;

#[test]
fn new_session_waits_on_the_start_screen() {
    let mut session = LevelSession::new(GameConfig::default(), 1).expect("default config");
    assert_eq!(session.phase(), SessionPhase::Start);
    assert_eq!(session.tick(&idle(), FRAME), TickOutcome::Idle);
    assert_eq!(session.toggle_pause(), Err(SessionError::NotRunning));
    assert_eq!(session.take_damage(1), Err(SessionError::NotRunning));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = GameConfig { tile_size: -1.0, ..GameConfig::default() };
    assert!(LevelSession::new(config, 1).is_err());
}

#[test]
fn huge_layout_margin_starts_an_empty_level() {
    let mut config = GameConfig::default();
    config.layout.margin = usize::MAX / 2 + 1;
    let mut session = LevelSession::new(config, 4).expect("margin passes validation");
    session.start().expect("start");
    assert!(session.level().rooms.is_empty());
    assert_eq!(session.phase(), SessionPhase::Playing);
}

#[test]
fn start_enters_level_one_exactly_once() {
    let mut session = started_session(11);
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.level().number, 1);
    assert_eq!(session.start(), Err(SessionError::AlreadyStarted));
    assert!(matches!(session.log().first(), Some(SessionEvent::LevelStarted { level: 1, .. })));
}

#[test]
fn pause_freezes_motion_and_time() {
    let mut session = arena_session(5);
    assert_eq!(session.tick(&idle(), FRAME), TickOutcome::Advanced);
    let elapsed = session.elapsed();

    assert_eq!(session.toggle_pause(), Ok(SessionPhase::Paused));
    let right = InputState::default().with(Direction::Right);
    assert_eq!(session.tick(&right, Duration::from_secs(1)), TickOutcome::Idle);
    assert_eq!(session.player().pos, Vec2::new(100.0, 100.0));
    assert_eq!(session.elapsed(), elapsed);

    assert_eq!(session.toggle_pause(), Ok(SessionPhase::Playing));
    session.tick(&right, FRAME);
    assert_eq!(session.player().pos, Vec2::new(105.0, 100.0));
    assert!(session.log().contains(&SessionEvent::Paused));
    assert!(session.log().contains(&SessionEvent::Resumed));
}

#[test]
fn damage_to_exactly_zero_ends_the_run_and_freezes_positions() {
    let mut session = arena_session(6);
    let enemy = place_enemy(&mut session, Vec2::new(400.0, 300.0), EnemyKind::Wanderer);
    session.take_damage(3).expect("playing");
    assert_eq!(session.player().health, 0);
    assert_eq!(session.phase(), SessionPhase::GameOver);

    let enemy_pos = session.level().enemies[enemy].pos;
    let right = InputState::default().with(Direction::Right);
    for _ in 0..5 {
        assert_eq!(session.tick(&right, FRAME), TickOutcome::Idle);
    }
    assert_eq!(session.player().pos, Vec2::new(100.0, 100.0));
    assert_eq!(session.level().enemies[enemy].pos, enemy_pos);
    assert_eq!(session.toggle_pause(), Err(SessionError::NotRunning));
    assert!(matches!(session.log().last(), Some(SessionEvent::GameOver { level: 1, score: 0 })));
}

#[test]
fn enemy_contact_costs_one_health_and_replaces_the_enemy() {
    let mut session = arena_session(8);
    place_enemy(&mut session, Vec2::new(110.0, 100.0), EnemyKind::Stationary);

    assert_eq!(session.tick(&idle(), FRAME), TickOutcome::Advanced);
    assert_eq!(session.player().health, 2);
    assert_eq!(session.level().enemies.len(), 1);

    let replacement = session.level().enemies.values().next().expect("respawned enemy");
    assert!(matches!(replacement.kind(), EnemyKind::Chaser | EnemyKind::Patroller));
    assert!(replacement.pos.distance(session.player().pos) >= 60.0);
    assert!(!entity_vs_grid(&replacement.bounds(), &session.level().grid, 20.0));
    assert!(session.log().contains(&SessionEvent::PlayerHit { damage: 1, health: 2 }));
}

#[test]
fn last_health_point_lost_on_contact_reports_game_over() {
    let mut session = arena_session(9);
    session.player.health = 1;
    place_enemy(&mut session, Vec2::new(105.0, 105.0), EnemyKind::Stationary);
    assert_eq!(session.tick(&idle(), FRAME), TickOutcome::GameOver);
    assert_eq!(session.phase(), SessionPhase::GameOver);
}

#[test]
fn chaser_fifty_units_away_closes_in_each_tick() {
    let mut session = arena_session(10);
    let chaser = place_enemy(&mut session, Vec2::new(150.0, 100.0), EnemyKind::Chaser);
    let mut distance = session.level().enemies[chaser].pos.distance(session.player().pos);
    for _ in 0..5 {
        session.tick(&idle(), FRAME);
        let next = session.level().enemies[chaser].pos.distance(session.player().pos);
        assert!(next < distance);
        distance = next;
    }
}

#[test]
fn collecting_the_last_item_levels_up_in_the_same_tick() {
    let mut session = arena_session(12);
    session.level.collectibles.clear();
    place_collectible(&mut session, Vec2::new(120.0, 100.0), CollectibleKind::Score);
    let arena_grid = session.level().grid.clone();

    let right = InputState::default().with(Direction::Right);
    assert_eq!(session.tick(&right, FRAME), TickOutcome::LevelUp { level: 2 });
    assert_eq!(session.level().number, 2);
    assert_ne!(session.level().grid, arena_grid);
    assert_eq!(session.player().score, 10);
    assert!(!entity_vs_grid(&session.player().bounds(), &session.level().grid, 20.0));
    assert!(session.log().contains(&SessionEvent::LevelUp { level: 2 }));
}

#[test]
fn a_second_level_up_waits_for_the_grace_window() {
    let mut session = arena_session(13);
    collect_everything(&mut session);
    assert_eq!(session.tick(&idle(), FRAME), TickOutcome::LevelUp { level: 2 });

    collect_everything(&mut session);
    assert_eq!(session.tick(&idle(), FRAME), TickOutcome::Advanced);
    assert_eq!(session.level().number, 2);

    assert_eq!(session.tick(&idle(), Duration::from_millis(1_000)), TickOutcome::LevelUp { level: 3 });
}

#[test]
fn speed_boost_lasts_five_seconds_and_renews() {
    let mut session = arena_session(14);
    place_collectible(&mut session, Vec2::new(100.0, 100.0), CollectibleKind::Speed);
    session.tick(&idle(), FRAME);
    assert_eq!(session.player().speed, 8.0);

    session.tick(&idle(), Duration::from_millis(3_000));
    place_collectible(&mut session, Vec2::new(100.0, 100.0), CollectibleKind::Speed);
    session.tick(&idle(), FRAME);
    assert_eq!(session.timers.pending_count(), 1);

    session.tick(&idle(), Duration::from_millis(2_500));
    assert_eq!(session.player().speed, 8.0);
    session.tick(&idle(), Duration::from_millis(2_500));
    assert_eq!(session.player().speed, 5.0);
    assert!(session.log().contains(&SessionEvent::SpeedBoostExpired));
}

#[test]
fn boosted_player_moves_faster() {
    let mut session = arena_session(15);
    place_collectible(&mut session, Vec2::new(100.0, 100.0), CollectibleKind::Speed);
    session.tick(&idle(), FRAME);
    session.tick(&InputState::default().with(Direction::Down), FRAME);
    assert_eq!(session.player().pos, Vec2::new(100.0, 108.0));
}

#[test]
fn health_and_score_pickups_apply_their_effects() {
    let mut session = arena_session(16);
    place_collectible(&mut session, Vec2::new(100.0, 100.0), CollectibleKind::Health);
    place_collectible(&mut session, Vec2::new(105.0, 100.0), CollectibleKind::Score);
    session.tick(&idle(), FRAME);
    assert_eq!(session.player().health, 23);
    assert_eq!(session.player().score, 10);
    assert_eq!(session.counters().remaining_collectibles, 1);
}

#[test]
fn damaged_enemies_are_removed_on_the_next_tick() {
    let mut session = arena_session(17);
    let enemy = place_enemy(&mut session, Vec2::new(400.0, 300.0), EnemyKind::Stationary);
    session.damage_enemy(enemy, 50).expect("enemy exists");
    assert!(session.level().enemies.contains_key(enemy));

    session.tick(&idle(), FRAME);
    assert!(!session.level().enemies.contains_key(enemy));
    assert!(session.log().contains(&SessionEvent::EnemyDefeated { kind: EnemyKind::Stationary }));
    assert_eq!(session.damage_enemy(enemy, 1), Err(SessionError::UnknownEnemy));
}

#[test]
fn restart_begins_a_fresh_run_and_drops_timers() {
    let mut session = arena_session(18);
    place_collectible(&mut session, Vec2::new(100.0, 100.0), CollectibleKind::Speed);
    session.tick(&idle(), FRAME);
    session.take_damage(3).expect("playing");
    assert_eq!(session.phase(), SessionPhase::GameOver);

    session.restart();
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.level().number, 1);
    assert_eq!(session.player().health, 3);
    assert_eq!(session.player().speed, 5.0);
    assert_eq!(session.elapsed(), Duration::ZERO);
    assert_eq!(session.timers.pending_count(), 0);
    assert!(session.log().contains(&SessionEvent::RunRestarted { run: 1 }));
}

#[test]
fn notifications_reach_the_installed_sink() {
    let (sender, receiver) = mpsc::channel();
    let mut session = LevelSession::new(GameConfig::default(), 19).expect("default config");
    session.set_notification_sink(Box::new(sender));
    session.start().expect("starts");
    assert_eq!(receiver.try_recv().as_deref(), Ok("Level 1"));

    // The pause overlay covers pausing; no banner is queued that could outlive it.
    session.toggle_pause().expect("playing");
    session.toggle_pause().expect("paused");
    assert!(receiver.try_recv().is_err());
}

#[test]
fn counters_and_render_frame_track_the_level() {
    let mut session = arena_session(20);
    place_enemy(&mut session, Vec2::new(400.0, 300.0), EnemyKind::Stationary);
    session.tick(&idle(), FRAME);

    let counters = session.counters();
    assert_eq!(counters.level, 1);
    assert_eq!(counters.health, 3);
    assert_eq!(counters.remaining_collectibles, 1);
    assert_eq!(counters.elapsed, FRAME);

    let frame = session.render_frame();
    assert_eq!(frame.enemies, vec![(EnemyKind::Stationary, Aabb::new(400.0, 300.0, 20.0, 20.0))]);
    assert_eq!(frame.collectibles.len(), 1);
    assert_eq!(frame.player, Aabb::new(100.0, 100.0, 20.0, 20.0));
    assert_eq!(frame.rooms.len(), 1);
}

#[test]
fn snapshot_hash_follows_session_state() {
    let first = started_session(21);
    let second = started_session(21);
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());

    let mut moved = started_session(21);
    moved.player.pos.x += 1.0;
    assert_ne!(first.snapshot_hash(), moved.snapshot_hash());
}
