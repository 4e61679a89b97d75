//! Vector Asteroids - a wrapped-field arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `game`: Fixed-step driver, intent dispatch and render snapshots
//! - `renderer`: Snapshot and geometric shape descriptors for a renderer
//! - `input`: Player intents produced by an input collaborator
//! - `settings` / `tuning`: Explicit configuration threaded into the sim

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use input::Intent;
pub use settings::{PlayBounds, Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for `Settings` and `Tuning`)
pub mod consts {
    /// Default play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Fixed simulation tick period (100 Hz)
    pub const TICK_PERIOD_MS: u64 = 10;
    /// Maximum ticks per `Game::advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ship handling
    pub const SHIP_ACCELERATION: f32 = 1.0;
    pub const SHIP_FRICTION: f32 = 0.99;
    pub const SHIP_MAX_SPEED: f32 = 5.0;
    pub const SHIP_TURN_RATE: f32 = 0.1; // radians per tick
    pub const SHIP_SIZE: f32 = 20.0;

    /// Bullets
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_SIZE: f32 = 4.0;

    /// Asteroids (inclusive ranges)
    pub const ASTEROID_MIN_SPEED: u32 = 1;
    pub const ASTEROID_MAX_SPEED: u32 = 3;
    pub const ASTEROID_MIN_SIZE: u32 = 10;
    pub const ASTEROID_MAX_SIZE: u32 = 29;
    /// Minimum number of asteroids alive while playing
    pub const ASTEROID_FLOOR: usize = 5;

    /// Session
    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_ASTEROID: u64 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector pointing along `heading` (radians, 0 = +x, y grows downward)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}
