pub mod bomb;
pub mod config;
pub mod explosion;
pub mod input;
pub mod match_log;
pub mod maze;
pub mod player;
pub mod world;

pub use bomb::Bomb;
pub use explosion::ExplosionCell;
pub use input::FrameInput;
pub use match_log::MatchLog;
pub use maze::{GridPos, Maze};
pub use player::{Player, PlayerId};
pub use world::World;
