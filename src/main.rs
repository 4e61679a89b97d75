//! Vector Asteroids entry point
//!
//! Runs a headless session on native targets: a scripted pilot drives the
//! game in real time at the tick period until game over, every frame goes to
//! a logging renderer, and the final snapshot is printed as JSON.
//!
//! Usage: `vector-asteroids [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(not(target_arch = "wasm32"))]
use vector_asteroids::renderer::{LogRenderer, Renderer};
#[cfg(not(target_arch = "wasm32"))]
use vector_asteroids::sim::GameEvent;
#[cfg(not(target_arch = "wasm32"))]
use vector_asteroids::{Game, Intent, Settings};

/// Stop the demo after this many ticks (one minute at 100 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICK_LIMIT: u64 = 6000;

/// Scripted controls for a tick: keep turning right, thrust in bursts and
/// fire on alternate ticks
#[cfg(not(target_arch = "wasm32"))]
fn pilot(tick: u64) -> [Intent; 4] {
    [
        Intent::TurnRight(tick % 120 < 60),
        Intent::TurnLeft(false),
        Intent::Accelerate(tick % 200 < 20),
        Intent::Fire(tick % 2 == 0),
    ]
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Vector Asteroids (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let period = settings.tick_period();

    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let mut renderer = LogRenderer::default();

    renderer.render(&game.snapshot());
    game.handle_intent(Intent::Start);

    let mut last = Instant::now();
    while game.is_ticking() && game.state().time_ticks < DEMO_TICK_LIMIT {
        for intent in pilot(game.state().time_ticks) {
            game.handle_intent(intent);
        }

        std::thread::sleep(period);
        let now = Instant::now();
        if game.advance(now - last) > 0 {
            for event in game.events() {
                if let GameEvent::ShipLost { lives_left } = event {
                    log::info!("Ship lost, {} lives left", lives_left);
                }
            }
        }
        last = now;

        renderer.render(&game.snapshot());
    }

    let snapshot = game.snapshot();
    log::info!(
        "Session ended in {:?} after {} ticks, {} frames, score {}",
        snapshot.phase,
        game.state().time_ticks,
        renderer.frames,
        snapshot.score
    );
    match snapshot.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the embedding page
}
