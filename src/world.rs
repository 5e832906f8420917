use crate::bomb::Bomb;
use crate::explosion::{blast_area, ExplosionCell};
use crate::input::FrameInput;
use crate::match_log::{GameEvent, MatchLog};
use crate::maze::{GridPos, Maze, GRID_SIZE, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::player::{Controls, Player, PlayerId};
use macroquad::prelude::{BLUE, GREEN};
use rand::Rng;

/// The whole mutable state of one match
///
/// Owned by the main loop and mutated only through [`World::advance`]. The
/// two players are direct fields, not a collection.
pub struct World {
    pub maze: Maze,
    pub player1: Player,
    pub player2: Player,
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<ExplosionCell>,
}

impl World {
    /// Fresh match: pillar maze, player 1 blue in the top-left corner on
    /// WASD, player 2 green in the bottom-right corner on the arrow keys
    pub fn new() -> Self {
        let maze = Maze::build(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, GRID_SIZE);
        let player1 = Player::new(GridPos::new(0, 0), BLUE, Controls::wasd());
        let player2 = Player::new(
            GridPos::new(PLAYFIELD_WIDTH - GRID_SIZE, PLAYFIELD_HEIGHT - GRID_SIZE),
            GREEN,
            Controls::arrows(),
        );

        World {
            maze,
            player1,
            player2,
            bombs: Vec::new(),
            explosions: Vec::new(),
        }
    }

    /// One frame's worth of state transitions, in fixed order: movement,
    /// fuse expiry, explosion aging, damage, lives check, bomb plants.
    ///
    /// Returns the winner once a player has run out of lives; the caller
    /// stops advancing the world after that.
    pub fn advance(
        &mut self,
        input: &FrameInput,
        now: u64,
        rng: &mut impl Rng,
        log: &mut MatchLog,
    ) -> Option<PlayerId> {
        // movement: both players resolve against the same maze and may
        // end up on the same cell
        if self.player1.attempt_move(&input.keys_down, &self.maze, now) {
            log.record(
                now,
                GameEvent::Moved {
                    player: PlayerId::One,
                    x: self.player1.pos.x,
                    y: self.player1.pos.y,
                },
            );
        }
        if self.player2.attempt_move(&input.keys_down, &self.maze, now) {
            log.record(
                now,
                GameEvent::Moved {
                    player: PlayerId::Two,
                    x: self.player2.pos.x,
                    y: self.player2.pos.y,
                },
            );
        }

        // fuse check: expired bombs leave the armed list for good
        let mut detonated = Vec::new();
        self.bombs.retain(|bomb| {
            if bomb.fuse_expired(now) {
                detonated.push(*bomb);
                false
            } else {
                true
            }
        });

        // cells from earlier frames age out before this frame's batch is
        // added, so a fresh detonation damages players on the very frame
        // it fires
        self.explosions.retain(|cell| !cell.expired(now));
        for bomb in &detonated {
            log.record(
                now,
                GameEvent::BombDetonated {
                    x: bomb.pos.x,
                    y: bomb.pos.y,
                },
            );
            for pos in blast_area(bomb.pos, &self.maze) {
                self.explosions.push(ExplosionCell::new(pos, now));
            }
        }

        // damage: at most one hit per player per frame, own bombs included
        if self
            .explosions
            .iter()
            .any(|cell| cell.pos == self.player1.pos)
        {
            self.player1.take_damage(&self.maze, rng);
            log.record(
                now,
                GameEvent::PlayerHit {
                    player: PlayerId::One,
                    lives_left: self.player1.lives,
                },
            );
        }
        if self
            .explosions
            .iter()
            .any(|cell| cell.pos == self.player2.pos)
        {
            self.player2.take_damage(&self.maze, rng);
            log.record(
                now,
                GameEvent::PlayerHit {
                    player: PlayerId::Two,
                    lives_left: self.player2.lives,
                },
            );
        }

        // lives check: player 1's loss is reported first when both die on
        // the same frame
        if self.player1.lives <= 0 {
            log.record(now, GameEvent::MatchEnded { winner: PlayerId::Two });
            return Some(PlayerId::Two);
        }
        if self.player2.lives <= 0 {
            log.record(now, GameEvent::MatchEnded { winner: PlayerId::One });
            return Some(PlayerId::One);
        }

        // plants are edge-triggered: one bomb per key press, planted at the
        // player's cell after this frame's movement and damage resolved
        if input.keys_pressed.contains(&self.player1.controls.bomb) {
            self.bombs.push(Bomb::new(self.player1.pos, now));
            log.record(
                now,
                GameEvent::BombPlanted {
                    player: PlayerId::One,
                    x: self.player1.pos.x,
                    y: self.player1.pos.y,
                },
            );
        }
        if input.keys_pressed.contains(&self.player2.controls.bomb) {
            self.bombs.push(Bomb::new(self.player2.pos, now));
            log.record(
                now,
                GameEvent::BombPlanted {
                    player: PlayerId::Two,
                    x: self.player2.pos.x,
                    y: self.player2.pos.y,
                },
            );
        }

        None
    }
}
