//! Data-driven game balance
//!
//! Every gameplay constant lives here so a settings file can override it.
//! Missing fields fall back to the defaults in `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for ship, bullets, asteroids and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Speed added per tick while accelerating
    pub ship_acceleration: f32,
    /// Multiplicative speed decay per tick while coasting
    pub ship_friction: f32,
    /// Speed is clamped to [-max, max]
    pub ship_max_speed: f32,
    /// Heading change per tick while turning (radians)
    pub ship_turn_rate: f32,
    /// Side of the ship's square bounding box
    pub ship_size: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Side of the bullet's square bounding box
    pub bullet_size: f32,

    // === Asteroids ===
    /// Inclusive spawn speed range
    pub asteroid_speed: (u32, u32),
    /// Inclusive spawn diameter range
    pub asteroid_size: (u32, u32),
    /// Asteroid pool is refilled to this count every tick
    pub asteroid_floor: usize,

    // === Session ===
    pub starting_lives: u8,
    pub points_per_asteroid: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_acceleration: SHIP_ACCELERATION,
            ship_friction: SHIP_FRICTION,
            ship_max_speed: SHIP_MAX_SPEED,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_size: SHIP_SIZE,

            bullet_speed: BULLET_SPEED,
            bullet_size: BULLET_SIZE,

            asteroid_speed: (ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
            asteroid_size: (ASTEROID_MIN_SIZE, ASTEROID_MAX_SIZE),
            asteroid_floor: ASTEROID_FLOOR,

            starting_lives: STARTING_LIVES,
            points_per_asteroid: POINTS_PER_ASTEROID,
        }
    }
}

impl Tuning {
    /// Largest asteroid diameter this tuning can spawn
    pub fn max_asteroid_size(&self) -> f32 {
        self.asteroid_size.1 as f32
    }
}
