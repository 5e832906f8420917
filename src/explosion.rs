use crate::maze::{GridPos, Maze};

/// How many cells a blast reaches in each direction when unobstructed
pub const BLAST_RADIUS: i32 = 4;

/// Lifetime of one explosion cell, in milliseconds
pub const EXPLOSION_TIME_MS: u64 = 500;

/// Compute the cells covered by a detonation at `origin`.
///
/// The origin itself is always covered. Each cardinal direction is walked
/// independently, one cell at a time up to the blast radius; the first wall
/// stops that direction and is itself left out. Cells past the playfield
/// edge are kept as-is; no player can ever occupy one.
pub fn blast_area(origin: GridPos, maze: &Maze) -> Vec<GridPos> {
    let mut cells = vec![origin];

    for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        for step in 1..=BLAST_RADIUS {
            let pos = GridPos::new(
                origin.x + step * dx * maze.cell,
                origin.y + step * dy * maze.cell,
            );
            if maze.contains(pos) {
                break;
            }
            cells.push(pos);
        }
    }

    cells
}

/// One damaging cell left behind by a detonation, active while rendered
/// Cells from different detonations age independently.
#[derive(Debug, Clone, Copy)]
pub struct ExplosionCell {
    pub pos: GridPos,
    /// Detonation moment, in milliseconds
    pub created_at: u64,
}

impl ExplosionCell {
    pub fn new(pos: GridPos, created_at: u64) -> Self {
        ExplosionCell { pos, created_at }
    }

    /// True once the cell has outlived its window and stops damaging
    pub fn expired(&self, now: u64) -> bool {
        now - self.created_at >= EXPLOSION_TIME_MS
    }
}
