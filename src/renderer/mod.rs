//! Rendering seam
//!
//! The simulation never draws. Each frame the driver captures a
//! `RenderSnapshot` and hands it to a `Renderer`; `shapes::build_frame`
//! turns it into primitives for backends that only draw shapes and text.

pub mod shapes;

pub use shapes::{Shape, TextAlign, build_frame};

use glam::Vec2;
use serde::Serialize;

use crate::settings::PlayBounds;
use crate::sim::{GamePhase, GameState};

/// Ship pose for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub heading: f32,
    pub size: f32,
}

/// Asteroid position and diameter for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub size: f32,
}

/// Everything a renderer needs for one frame (read-only)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub bounds: PlayBounds,
    /// Absent on the start screen
    pub ship: Option<ShipView>,
    pub bullets: Vec<Vec2>,
    pub bullet_size: f32,
    pub asteroids: Vec<AsteroidView>,
    pub score: u64,
    pub lives: u8,
    /// Set once the run is over
    pub final_score: Option<u64>,
    /// Best score recorded this session
    pub best_score: Option<u64>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, best_score: Option<u64>) -> Self {
        let in_run = state.phase != GamePhase::Start;

        let ship = in_run.then(|| ShipView {
            pos: state.ship.pos,
            heading: state.ship.heading,
            size: state.tuning.ship_size,
        });
        let bullets = if in_run {
            state.bullets.iter().map(|b| b.pos).collect()
        } else {
            Vec::new()
        };
        let asteroids = if in_run {
            state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pos: a.pos,
                    size: a.size as f32,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            phase: state.phase,
            bounds: state.bounds,
            ship,
            bullets,
            bullet_size: state.tuning.bullet_size,
            asteroids,
            score: state.score,
            lives: state.lives,
            final_score: state.final_score,
            best_score,
        }
    }

    /// Serialize for an out-of-process renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Rendering collaborator: draws a snapshot, never feeds back into the sim
pub trait Renderer {
    fn render(&mut self, snapshot: &RenderSnapshot);
}

/// Headless renderer that builds each frame and logs it
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    last_phase: Option<GamePhase>,
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        let shapes = build_frame(snapshot);
        self.frames += 1;

        if self.last_phase != Some(snapshot.phase) {
            log::debug!("Renderer now drawing {:?}", snapshot.phase);
            self.last_phase = Some(snapshot.phase);
        }
        log::trace!(
            "Frame {}: {} shapes, score {}, lives {}",
            self.frames,
            shapes.len(),
            snapshot.score,
            snapshot.lives
        );
    }
}
