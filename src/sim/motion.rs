//! Entity motion: Euler integration and screen wrap
//!
//! One call per entity per tick. Velocity is `speed * (cos θ, sin θ)`.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};
use crate::heading_vector;
use crate::normalize_angle;
use crate::settings::PlayBounds;
use crate::tuning::Tuning;

/// Wrap a point into `[0, width] x [0, height]`.
///
/// A coordinate past one edge is moved to the opposite edge. Points already
/// inside are returned unchanged.
pub fn wrap_point(p: Vec2, bounds: &PlayBounds) -> Vec2 {
    wrap_point_with_margin(p, bounds, 0.0)
}

/// Wrap a point into `[-margin, width + margin] x [-margin, height + margin]`
pub fn wrap_point_with_margin(p: Vec2, bounds: &PlayBounds, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(p.x, bounds.width, margin),
        wrap_axis(p.y, bounds.height, margin),
    )
}

#[inline]
fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// Apply this tick's controls to the ship.
///
/// `turn` is -1 (left), 0 or 1 (right).
pub fn steer_ship(ship: &mut Ship, accelerate: bool, turn: f32, tuning: &Tuning) {
    ship.accelerating = accelerate;
    if turn != 0.0 {
        ship.heading = normalize_angle(ship.heading + turn * tuning.ship_turn_rate);
    }
}

/// Update speed (thrust or friction, then clamp), integrate and wrap
pub fn advance_ship(ship: &mut Ship, bounds: &PlayBounds, tuning: &Tuning) {
    if ship.accelerating {
        ship.speed += tuning.ship_acceleration;
    } else {
        ship.speed *= tuning.ship_friction;
    }
    ship.speed = ship.speed.clamp(-tuning.ship_max_speed, tuning.ship_max_speed);

    ship.pos += heading_vector(ship.heading) * ship.speed;
    ship.pos = wrap_point(ship.pos, bounds);
}

/// Integrate a bullet; it goes inactive once it leaves the field
pub fn advance_bullet(bullet: &mut Bullet, bounds: &PlayBounds, tuning: &Tuning) {
    bullet.pos += heading_vector(bullet.heading()) * tuning.bullet_speed;
    if !bounds.contains(bullet.pos) {
        bullet.active = false;
    }
}

/// Integrate an asteroid and wrap with a margin of its diameter so it
/// leaves the screen fully before reappearing
pub fn advance_asteroid(asteroid: &mut Asteroid, bounds: &PlayBounds) {
    asteroid.pos += heading_vector(asteroid.heading) * asteroid.speed as f32;
    asteroid.pos = wrap_point_with_margin(asteroid.pos, bounds, asteroid.size as f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_wrap_point_edges() {
        let bounds = PlayBounds::default();
        assert_eq!(wrap_point(Vec2::new(-1.0, 400.0), &bounds), Vec2::new(800.0, 400.0));
        assert_eq!(wrap_point(Vec2::new(801.0, 400.0), &bounds), Vec2::new(0.0, 400.0));
        assert_eq!(wrap_point(Vec2::new(400.0, -3.0), &bounds), Vec2::new(400.0, 800.0));
        assert_eq!(wrap_point(Vec2::new(400.0, 805.0), &bounds), Vec2::new(400.0, 0.0));
        // Edges themselves are in bounds
        assert_eq!(wrap_point(Vec2::new(800.0, 0.0), &bounds), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_wrap_with_margin() {
        let bounds = PlayBounds::default();
        assert_eq!(
            wrap_point_with_margin(Vec2::new(-21.0, 10.0), &bounds, 20.0),
            Vec2::new(820.0, 10.0)
        );
        assert_eq!(
            wrap_point_with_margin(Vec2::new(-19.0, 10.0), &bounds, 20.0),
            Vec2::new(-19.0, 10.0)
        );
        assert_eq!(
            wrap_point_with_margin(Vec2::new(10.0, 821.0), &bounds, 20.0),
            Vec2::new(10.0, -20.0)
        );
    }

    #[test]
    fn test_ship_accelerates_and_clamps() {
        let bounds = PlayBounds::default();
        let tuning = Tuning::default();
        let mut ship = Ship::spawn_at(bounds.center());

        steer_ship(&mut ship, true, 0.0, &tuning);
        advance_ship(&mut ship, &bounds, &tuning);
        assert_eq!(ship.speed, 1.0);
        assert_eq!(ship.pos, Vec2::new(401.0, 400.0));

        for _ in 0..10 {
            advance_ship(&mut ship, &bounds, &tuning);
        }
        assert_eq!(ship.speed, 5.0);
    }

    #[test]
    fn test_ship_friction() {
        let bounds = PlayBounds::default();
        let tuning = Tuning::default();
        let mut ship = Ship::spawn_at(bounds.center());
        ship.speed = 5.0;

        steer_ship(&mut ship, false, 0.0, &tuning);
        advance_ship(&mut ship, &bounds, &tuning);
        assert!((ship.speed - 4.95).abs() < 1e-5);
    }

    #[test]
    fn test_steer_turns_by_rate() {
        let tuning = Tuning::default();
        let mut ship = Ship::spawn_at(Vec2::ZERO);
        steer_ship(&mut ship, false, -1.0, &tuning);
        assert!((ship.heading + 0.1).abs() < 1e-6);
        steer_ship(&mut ship, false, 1.0, &tuning);
        steer_ship(&mut ship, false, 1.0, &tuning);
        assert!((ship.heading - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_ship_wraps_right_edge() {
        let bounds = PlayBounds::default();
        let tuning = Tuning::default();
        let mut ship = Ship::spawn_at(Vec2::new(798.0, 100.0));
        ship.speed = 5.0;
        ship.accelerating = true;
        advance_ship(&mut ship, &bounds, &tuning);
        assert_eq!(ship.pos, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_bullet_leaves_field_after_40_ticks() {
        let bounds = PlayBounds::default();
        let tuning = Tuning::default();
        let mut bullet = Bullet::new(1, Vec2::new(400.0, 400.0), 0.0);

        for _ in 0..39 {
            advance_bullet(&mut bullet, &bounds, &tuning);
            assert!(bullet.active);
        }
        advance_bullet(&mut bullet, &bounds, &tuning);
        assert!(!bullet.active);
        assert_eq!(bullet.pos.x, 800.0);
    }

    #[test]
    fn test_bullet_leaves_top_edge() {
        let bounds = PlayBounds::default();
        let tuning = Tuning::default();
        let mut bullet = Bullet::new(1, Vec2::new(400.0, 5.0), -PI / 2.0);
        advance_bullet(&mut bullet, &bounds, &tuning);
        assert!(!bullet.active);
    }

    #[test]
    fn test_asteroid_moves_at_constant_speed() {
        let bounds = PlayBounds::default();
        let mut asteroid = Asteroid {
            id: 1,
            pos: Vec2::new(100.0, 100.0),
            heading: 0.0,
            speed: 3,
            size: 20,
        };
        advance_asteroid(&mut asteroid, &bounds);
        advance_asteroid(&mut asteroid, &bounds);
        assert_eq!(asteroid.pos, Vec2::new(106.0, 100.0));
        assert_eq!(asteroid.speed, 3);
    }

    proptest! {
        #[test]
        fn prop_wrap_is_idempotent(x in 0.0f32..=800.0, y in 0.0f32..=800.0) {
            let bounds = PlayBounds::default();
            let p = Vec2::new(x, y);
            let once = wrap_point(p, &bounds);
            prop_assert_eq!(once, p);
            prop_assert_eq!(wrap_point(once, &bounds), once);
        }

        #[test]
        fn prop_ship_stays_in_bounds(
            x in 0.0f32..=800.0,
            y in 0.0f32..=800.0,
            heading in -PI..PI,
            speed in -5.0f32..=5.0,
            controls in proptest::collection::vec((any::<bool>(), -1i8..=1), 1..50),
        ) {
            let bounds = PlayBounds::default();
            let tuning = Tuning::default();
            let mut ship = Ship { pos: Vec2::new(x, y), heading, speed, accelerating: false };
            for (accelerate, turn) in controls {
                steer_ship(&mut ship, accelerate, turn as f32, &tuning);
                advance_ship(&mut ship, &bounds, &tuning);
                prop_assert!(ship.speed >= -5.0 && ship.speed <= 5.0);
                prop_assert!(ship.pos.x >= 0.0 && ship.pos.x <= 800.0);
                prop_assert!(ship.pos.y >= 0.0 && ship.pos.y <= 800.0);
            }
        }

        #[test]
        fn prop_asteroid_stays_in_margin(
            x in 0.0f32..800.0,
            y in 0.0f32..800.0,
            heading in 0.0f32..(2.0 * PI),
            speed in 1u32..=3,
            size in 10u32..=29,
            ticks in 1usize..600,
        ) {
            let bounds = PlayBounds::default();
            let mut asteroid = Asteroid { id: 1, pos: Vec2::new(x, y), heading, speed, size };
            let margin = size as f32;
            for _ in 0..ticks {
                advance_asteroid(&mut asteroid, &bounds);
                prop_assert!(asteroid.pos.x >= -margin && asteroid.pos.x <= 800.0 + margin);
                prop_assert!(asteroid.pos.y >= -margin && asteroid.pos.y <= 800.0 + margin);
            }
        }
    }
}
