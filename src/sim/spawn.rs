//! Asteroid spawning
//!
//! Spawns are rejection-sampled: position, heading, speed and size are
//! re-rolled together until the asteroid's box clears the ship spawn box at
//! the field center. The check always uses the canonical center box, not the
//! ship's live position.

use std::f32::consts::TAU;

use rand::Rng;

use super::collision::{Aabb, asteroid_bounds};
use super::state::Asteroid;
use crate::settings::PlayBounds;
use crate::tuning::Tuning;

/// The ship's spawn box at the field center
pub fn ship_spawn_box(bounds: &PlayBounds, tuning: &Tuning) -> Aabb {
    Aabb::from_center(bounds.center(), tuning.ship_size)
}

/// Roll a random asteroid that does not overlap the ship spawn box
pub fn roll_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    id: u64,
    bounds: &PlayBounds,
    tuning: &Tuning,
) -> Asteroid {
    let keep_out = ship_spawn_box(bounds, tuning);
    let mut rejected = 0u32;

    loop {
        let asteroid = Asteroid {
            id,
            pos: glam::Vec2::new(
                rng.random_range(0.0..bounds.width),
                rng.random_range(0.0..bounds.height),
            ),
            heading: rng.random_range(0.0..TAU),
            speed: rng.random_range(tuning.asteroid_speed.0..=tuning.asteroid_speed.1),
            size: rng.random_range(tuning.asteroid_size.0..=tuning.asteroid_size.1),
        };

        if !asteroid_bounds(&asteroid).intersects(&keep_out) {
            if rejected > 0 {
                log::trace!("Asteroid {} placed after {} rejected rolls", id, rejected);
            }
            return asteroid;
        }
        rejected += 1;
    }
}
