//! Axis-aligned bounding-box collision detection
//!
//! Every entity collides as a square box centered on its position: the ship
//! and bullets use fixed sizes from `Tuning`, asteroids use their diameter.
//! No spatial partitioning; entity counts are small.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};
use crate::tuning::Tuning;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Square box of side `size` centered on `center`
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Interiors overlap. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

pub fn ship_bounds(ship: &Ship, tuning: &Tuning) -> Aabb {
    Aabb::from_center(ship.pos, tuning.ship_size)
}

pub fn bullet_bounds(bullet: &Bullet, tuning: &Tuning) -> Aabb {
    Aabb::from_center(bullet.pos, tuning.bullet_size)
}

pub fn asteroid_bounds(asteroid: &Asteroid) -> Aabb {
    Aabb::from_center(asteroid.pos, asteroid.size as f32)
}

/// A bullet that destroyed an asteroid (indices into the scanned slices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHit {
    pub bullet: usize,
    pub asteroid: usize,
}

/// Scan every bullet against every asteroid.
///
/// A bullet is credited with the first asteroid it overlaps in iteration
/// order and stops there. An asteroid destroyed by an earlier bullet is not
/// available to later bullets in the same scan.
pub fn find_bullet_hits(bullets: &[Bullet], asteroids: &[Asteroid], tuning: &Tuning) -> Vec<BulletHit> {
    let mut hits = Vec::new();
    let mut destroyed = vec![false; asteroids.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let bullet_box = bullet_bounds(bullet, tuning);
        for (ai, asteroid) in asteroids.iter().enumerate() {
            if destroyed[ai] {
                continue;
            }
            if bullet_box.intersects(&asteroid_bounds(asteroid)) {
                destroyed[ai] = true;
                hits.push(BulletHit {
                    bullet: bi,
                    asteroid: ai,
                });
                break;
            }
        }
    }

    hits
}

/// Index of the first asteroid overlapping the ship
pub fn first_ship_hit(ship: &Ship, asteroids: &[Asteroid], tuning: &Tuning) -> Option<usize> {
    let ship_box = ship_bounds(ship, tuning);
    asteroids
        .iter()
        .position(|a| ship_box.intersects(&asteroid_bounds(a)))
}
