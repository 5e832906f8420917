/// Frame-by-frame scenarios for whole matches
///
/// These tests drive [`World::advance`] with synthetic input snapshots and
/// hand-picked timestamps, the same way the main loop does with real ones.
/// Millisecond boundaries matter here: the bomb fuse and the explosion
/// lifetime are both checked right at their edges.
use bomber_duel::match_log::GameEvent;
use bomber_duel::{FrameInput, GridPos, MatchLog, PlayerId, World};
use macroquad::prelude::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn idle() -> FrameInput {
    FrameInput::default()
}

fn held(keys: &[KeyCode]) -> FrameInput {
    FrameInput {
        keys_down: keys.iter().copied().collect(),
        keys_pressed: HashSet::new(),
        quit: false,
    }
}

fn pressed(keys: &[KeyCode]) -> FrameInput {
    FrameInput {
        keys_down: HashSet::new(),
        keys_pressed: keys.iter().copied().collect(),
        quit: false,
    }
}

#[test]
fn test_bomb_lifecycle_at_window_boundaries() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut log = MatchLog::new();

    // Player 1 plants on its starting cell
    assert!(world
        .advance(&pressed(&[KeyCode::F]), 1000, &mut rng, &mut log)
        .is_none());
    assert_eq!(world.bombs.len(), 1, "press should plant exactly one bomb");

    // One millisecond before the fuse runs out nothing has happened
    assert!(world.advance(&idle(), 2199, &mut rng, &mut log).is_none());
    assert_eq!(world.bombs.len(), 1, "fuse should still be burning at 1199ms");
    assert!(world.explosions.is_empty());
    assert_eq!(world.player1.lives, 3);

    // At exactly 1200ms the bomb detonates and catches the planter:
    // from (0, 0) the blast runs 4 cells in each direction with no wall
    // in row 0 or column 0, so 17 cells light up
    assert!(world.advance(&idle(), 2200, &mut rng, &mut log).is_none());
    assert!(world.bombs.is_empty(), "detonated bomb should leave the armed list");
    assert_eq!(world.explosions.len(), 17);
    assert_eq!(world.player1.lives, 2, "planter standing on the bomb takes the hit");

    // Walk the respawned player back into the fire: the cells stay lethal
    // for one millisecond short of their lifetime
    world.player1.pos = GridPos::new(0, 0);
    assert!(world.advance(&idle(), 2699, &mut rng, &mut log).is_none());
    assert_eq!(world.player1.lives, 1, "cells created at 2200 still burn at 2699");

    // At exactly 500ms of age the cells are pruned before damage is checked
    world.player1.pos = GridPos::new(0, 0);
    assert!(world.advance(&idle(), 2700, &mut rng, &mut log).is_none());
    assert_eq!(world.player1.lives, 1, "expired cells must not damage anyone");
    assert!(world.explosions.is_empty());

    // The log saw the whole story
    let planted = log
        .events()
        .iter()
        .filter(|e| matches!(e.event, GameEvent::BombPlanted { .. }))
        .count();
    let detonated = log
        .events()
        .iter()
        .filter(|e| matches!(e.event, GameEvent::BombDetonated { .. }))
        .count();
    let hits = log
        .events()
        .iter()
        .filter(|e| matches!(e.event, GameEvent::PlayerHit { .. }))
        .count();
    assert_eq!((planted, detonated, hits), (1, 1, 2));
}

#[test]
fn test_own_bomb_ends_the_match_on_last_life() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(9);
    let mut log = MatchLog::new();

    // Player 2 is down to one life and plants without stepping away
    world.player2.lives = 1;
    assert!(world
        .advance(&pressed(&[KeyCode::L]), 100, &mut rng, &mut log)
        .is_none());
    assert_eq!(world.bombs.len(), 1);
    assert_eq!(world.bombs[0].pos, world.player2.pos);

    // Detonation frame: the blast origin is player 2's cell, so the hit,
    // the zeroed lives and the winner all land on the same frame
    let outcome = world.advance(&idle(), 1300, &mut rng, &mut log);
    assert_eq!(outcome, Some(PlayerId::One));
    assert_eq!(world.player2.lives, 0);
    assert_eq!(
        world.player2.pos,
        GridPos::new(760, 560),
        "a player with no lives left does not respawn"
    );

    // MatchEnded is the final log entry
    let last = log.events().last().expect("log should not be empty");
    assert!(matches!(
        last.event,
        GameEvent::MatchEnded {
            winner: PlayerId::One
        }
    ));
}

#[test]
fn test_double_knockout_goes_to_player_two() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut log = MatchLog::new();

    // Both players on the same cell, both on their last life
    world.player1.lives = 1;
    world.player2.lives = 1;
    world.player2.pos = GridPos::new(0, 0);
    assert!(world
        .advance(&pressed(&[KeyCode::F]), 0, &mut rng, &mut log)
        .is_none());

    // Player 1's lives are checked first, so its loss decides the match
    let outcome = world.advance(&idle(), 1200, &mut rng, &mut log);
    assert_eq!(outcome, Some(PlayerId::Two));
    assert_eq!(world.player1.lives, 0);
    assert_eq!(world.player2.lives, 0);

    let hits = log
        .events()
        .iter()
        .filter(|e| matches!(e.event, GameEvent::PlayerHit { .. }))
        .count();
    assert_eq!(hits, 2, "both players should be hit before the match ends");
}

#[test]
fn test_pillar_shields_a_player_from_the_blast() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut log = MatchLog::new();

    // A bomb at (0, 40) has the pillar at (40, 40) directly to its right.
    // Player 2 waits two cells down that ray, player 1 clears out to a
    // cell no ray can reach.
    world.player1.pos = GridPos::new(0, 40);
    world.player2.pos = GridPos::new(80, 40);
    assert!(world
        .advance(&pressed(&[KeyCode::F]), 0, &mut rng, &mut log)
        .is_none());
    world.player1.pos = GridPos::new(160, 0);

    assert!(world.advance(&idle(), 1200, &mut rng, &mut log).is_none());

    // The upward ray is open and reaches (0, 0); the rightward ray dies
    // on the pillar before player 2's cell
    assert!(world
        .explosions
        .iter()
        .any(|cell| cell.pos == GridPos::new(0, 0)));
    assert!(!world
        .explosions
        .iter()
        .any(|cell| cell.pos == GridPos::new(80, 40)));
    assert_eq!(world.player1.lives, 3);
    assert_eq!(world.player2.lives, 3, "the pillar should shield player 2");
}

#[test]
fn test_held_key_moves_on_the_cooldown_rhythm() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(21);
    let mut log = MatchLog::new();

    // Holding right: the first frame past the cooldown moves one cell
    assert!(world
        .advance(&held(&[KeyCode::D]), 300, &mut rng, &mut log)
        .is_none());
    assert_eq!(world.player1.pos, GridPos::new(40, 0));

    // 133ms later the cooldown is still running
    assert!(world
        .advance(&held(&[KeyCode::D]), 433, &mut rng, &mut log)
        .is_none());
    assert_eq!(world.player1.pos, GridPos::new(40, 0));

    // 250ms after the last step the next cell is granted
    assert!(world
        .advance(&held(&[KeyCode::D]), 550, &mut rng, &mut log)
        .is_none());
    assert_eq!(world.player1.pos, GridPos::new(80, 0));

    // Player 2 never saw its own keys and stayed put
    assert_eq!(world.player2.pos, GridPos::new(760, 560));

    let moves = log
        .events()
        .iter()
        .filter(|e| matches!(e.event, GameEvent::Moved { player: PlayerId::One, .. }))
        .count();
    assert_eq!(moves, 2, "exactly two steps fit into these three frames");
}
