use rand::Rng;
use std::collections::HashSet;

/// Playfield dimensions in pixels
pub const PLAYFIELD_WIDTH: i32 = 800;
pub const PLAYFIELD_HEIGHT: i32 = 600;

/// Side length of one grid cell in pixels
pub const GRID_SIZE: i32 = 40;

/// A grid-aligned position. Coordinates are pixel values and always a
/// multiple of the cell size; equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        GridPos { x, y }
    }
}

/// Static wall layout for one match
/// Built once at startup, read-only afterwards
#[derive(Clone)]
pub struct Maze {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
    pub walls: HashSet<GridPos>,
}

impl Maze {
    /// Place a wall at every cell whose column and row index are both odd,
    /// covering the whole playfield with a pillar pattern. Deterministic.
    pub fn build(width: i32, height: i32, cell: i32) -> Self {
        let cols = width / cell;
        let rows = height / cell;

        let mut walls = HashSet::new();
        for cx in (1..cols).step_by(2) {
            for cy in (1..rows).step_by(2) {
                walls.insert(GridPos::new(cx * cell, cy * cell));
            }
        }

        Maze {
            width,
            height,
            cell,
            walls,
        }
    }

    /// Exact membership test against the wall set
    pub fn contains(&self, pos: GridPos) -> bool {
        self.walls.contains(&pos)
    }

    /// Check that a position lies inside the playfield on both axes
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Sample a uniformly random grid-aligned cell that is not a wall.
    ///
    /// The draw loop is bounded; if it is exhausted the maze is scanned in
    /// row order for the first open cell instead. A maze without a single
    /// open cell is a broken construction invariant.
    pub fn random_free_cell(&self, rng: &mut impl Rng) -> GridPos {
        let cols = self.width / self.cell;
        let rows = self.height / self.cell;

        for _ in 0..10_000 {
            let pos = GridPos::new(
                rng.gen_range(0..cols) * self.cell,
                rng.gen_range(0..rows) * self.cell,
            );
            if !self.walls.contains(&pos) {
                return pos;
            }
        }

        for cy in 0..rows {
            for cx in 0..cols {
                let pos = GridPos::new(cx * self.cell, cy * self.cell);
                if !self.walls.contains(&pos) {
                    return pos;
                }
            }
        }

        panic!("maze has no free cells");
    }
}
