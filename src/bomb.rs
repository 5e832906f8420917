use crate::maze::GridPos;

/// Fuse length: delay between planting and detonation, in milliseconds
pub const BOMB_TIMER_MS: u64 = 1200;

/// An armed bomb counting down to detonation
/// The position is a snapshot of the planting player's cell at plant time;
/// the bomb stays put when the player moves on.
#[derive(Debug, Clone, Copy)]
pub struct Bomb {
    pub pos: GridPos,
    /// Plant moment, in milliseconds
    pub planted_at: u64,
}

impl Bomb {
    pub fn new(pos: GridPos, now: u64) -> Self {
        Bomb {
            pos,
            planted_at: now,
        }
    }

    /// True once the fuse has burned down. A detonated bomb leaves the
    /// armed collection and is never revisited; bombs do not trigger each
    /// other early.
    pub fn fuse_expired(&self, now: u64) -> bool {
        now - self.planted_at >= BOMB_TIMER_MS
    }
}
