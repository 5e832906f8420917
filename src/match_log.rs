use crate::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Gameplay transitions worth keeping for post-match review
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player stepped onto a new cell
    Moved { player: PlayerId, x: i32, y: i32 },
    /// A bomb was planted at the player's cell
    BombPlanted { player: PlayerId, x: i32, y: i32 },
    /// An armed bomb's fuse ran out
    BombDetonated { x: i32, y: i32 },
    /// A player stood on an active explosion cell
    PlayerHit { player: PlayerId, lives_left: i32 },
    /// A player ran out of lives
    MatchEnded { winner: PlayerId },
}

/// Logged event with the frame timestamp it happened on
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Milliseconds since startup
    pub timestamp_ms: u64,
    pub event: GameEvent,
}

/// In-memory match event log
/// Timestamps come in from the frame update; the log never reads a clock.
pub struct MatchLog {
    events: Vec<LoggedEvent>,
}

impl MatchLog {
    pub fn new() -> Self {
        MatchLog { events: Vec::new() }
    }

    /// Record an event with the current frame timestamp
    pub fn record(&mut self, now: u64, event: GameEvent) {
        self.events.push(LoggedEvent {
            timestamp_ms: now,
            event,
        });
    }

    /// All recorded events, in order
    pub fn events(&self) -> &[LoggedEvent] {
        &self.events
    }

    /// Save the log to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Short statistics block over the whole match
    pub fn summary(&self) -> String {
        let mut moves = 0;
        let mut plants = 0;
        let mut detonations = 0;
        let mut hits = 0;

        for logged in &self.events {
            match logged.event {
                GameEvent::Moved { .. } => moves += 1,
                GameEvent::BombPlanted { .. } => plants += 1,
                GameEvent::BombDetonated { .. } => detonations += 1,
                GameEvent::PlayerHit { .. } => hits += 1,
                GameEvent::MatchEnded { .. } => {}
            }
        }

        let duration = self.events.last().map_or(0, |e| e.timestamp_ms);

        format!(
            "Match Duration: {}ms\n\
             Total Events: {}\n\
             Moves: {} | Bombs Planted: {} | Detonations: {} | Hits: {}",
            duration,
            self.events.len(),
            moves,
            plants,
            detonations,
            hits
        )
    }
}
