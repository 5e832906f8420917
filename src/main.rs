use bomber_duel::config::Config;
use bomber_duel::input::FrameInput;
use bomber_duel::match_log::MatchLog;
use bomber_duel::maze::{GRID_SIZE, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use bomber_duel::player::{PlayerId, PLAYER_SIZE};
use bomber_duel::world::World;
use macroquad::prelude::*;
use std::thread;
use std::time::{Duration, Instant};

/// Frames per second the main loop is held to
const FRAME_RATE: u64 = 30;

fn window_conf() -> Conf {
    Conf {
        window_title: "Bomber Duel".to_string(),
        window_width: PLAYFIELD_WIDTH,
        window_height: PLAYFIELD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draw one frame of the scene: maze walls, both players, armed bombs,
/// then explosion cells on top
fn draw_world(world: &World) {
    let cell = world.maze.cell as f32;

    for wall in &world.maze.walls {
        draw_rectangle(wall.x as f32, wall.y as f32, cell, cell, WHITE);
    }

    let inset = ((GRID_SIZE - PLAYER_SIZE) / 2) as f32;
    for player in [&world.player1, &world.player2] {
        draw_rectangle(
            player.pos.x as f32 + inset,
            player.pos.y as f32 + inset,
            PLAYER_SIZE as f32,
            PLAYER_SIZE as f32,
            player.color,
        );
    }

    let half = cell / 2.0;
    for bomb in &world.bombs {
        draw_circle(bomb.pos.x as f32 + half, bomb.pos.y as f32 + half, half, RED);
    }

    for explosion in &world.explosions {
        draw_rectangle(explosion.pos.x as f32, explosion.pos.y as f32, cell, cell, YELLOW);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    let background = Color::from_rgba(
        config.visual.background_r,
        config.visual.background_g,
        config.visual.background_b,
        255,
    );

    let mut world = World::new();
    let mut log = MatchLog::new();
    // `::` so this hits the rand crate, not the `rand` module the
    // macroquad prelude glob brings in
    let mut rng = ::rand::thread_rng();
    let frame_time = Duration::from_micros(1_000_000 / FRAME_RATE);

    // Window close requests surface through FrameInput so the match log
    // still gets written on the way out
    prevent_quit();

    let winner = loop {
        let frame_start = Instant::now();

        // Snapshot input, then run one fixed-order state step
        let input = FrameInput::poll();
        let now = (get_time() * 1000.0) as u64;
        let outcome = world.advance(&input, now, &mut rng, &mut log);

        // Draw
        clear_background(background);
        draw_world(&world);

        if outcome.is_some() || input.quit {
            next_frame().await;
            break outcome;
        }

        // Hold to the frame cap
        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
        next_frame().await
    };

    if let Some(winner) = winner {
        let name = match winner {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        };
        println!("{} wins!", name);
    }

    println!("{}", log.summary());

    if config.logging.enable_match_log {
        if let Err(e) = log.save_to_file(&config.logging.match_log_path) {
            eprintln!("Warning: Failed to save match log: {}", e);
        }
    }
}
