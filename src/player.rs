use crate::maze::{GridPos, Maze};
use macroquad::prelude::{Color, KeyCode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cooldown between accepted moves, in milliseconds
pub const MOVE_DELAY_MS: u64 = 250;

/// Lives each player starts the match with
pub const STARTING_LIVES: i32 = 3;

/// Rendered side length of a player square, in pixels (inset into its cell)
pub const PLAYER_SIZE: i32 = 30;

/// Which of the two players an event or outcome refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

/// Key bindings for one player: four directions plus the bomb plant
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub bomb: KeyCode,
}

impl Controls {
    /// Left-hand layout: WASD movement, F plants
    pub fn wasd() -> Self {
        Controls {
            up: KeyCode::W,
            down: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            bomb: KeyCode::F,
        }
    }

    /// Right-hand layout: arrow-key movement, L plants
    pub fn arrows() -> Self {
        Controls {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
            bomb: KeyCode::L,
        }
    }
}

/// One player: grid position, identity color, key bindings, movement
/// cooldown state and remaining lives
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: GridPos,
    pub color: Color,
    pub controls: Controls,
    /// Timestamp of the last accepted move, in milliseconds
    pub last_move: u64,
    pub lives: i32,
}

impl Player {
    pub fn new(pos: GridPos, color: Color, controls: Controls) -> Self {
        Player {
            pos,
            color,
            controls,
            last_move: 0,
            lives: STARTING_LIVES,
        }
    }

    /// Take at most one grid step in the first held direction, priority
    /// up, down, left, right. Opposing keys never combine into a diagonal
    /// and a blocked first choice does not fall through to the next one.
    ///
    /// The candidate cell is accepted only when it is inside the playfield
    /// and not a wall; acceptance moves the player and restarts the
    /// cooldown. A refused or absent candidate leaves the cooldown alone,
    /// so the retry happens as soon as the delay has elapsed.
    ///
    /// Returns true when the player actually moved.
    pub fn attempt_move(&mut self, keys_down: &HashSet<KeyCode>, maze: &Maze, now: u64) -> bool {
        if now - self.last_move < MOVE_DELAY_MS {
            return false;
        }

        let step = maze.cell;
        let (dx, dy) = if keys_down.contains(&self.controls.up) {
            (0, -step)
        } else if keys_down.contains(&self.controls.down) {
            (0, step)
        } else if keys_down.contains(&self.controls.left) {
            (-step, 0)
        } else if keys_down.contains(&self.controls.right) {
            (step, 0)
        } else {
            return false;
        };

        let target = GridPos::new(self.pos.x + dx, self.pos.y + dy);
        if maze.in_bounds(target) && !maze.contains(target) {
            self.pos = target;
            self.last_move = now;
            return true;
        }

        false
    }

    /// Lose one life. A player with lives left respawns on a random open
    /// cell; at zero lives the player stays where it died and the match
    /// ends on the next lives check.
    pub fn take_damage(&mut self, maze: &Maze, rng: &mut impl Rng) {
        self.lives -= 1;
        if self.lives > 0 {
            self.pos = maze.random_free_cell(rng);
        }
    }
}
