//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, BulletHit, asteroid_bounds, bullet_bounds, find_bullet_hits, first_ship_hit, ship_bounds};
pub use motion::{advance_asteroid, advance_bullet, advance_ship, steer_ship, wrap_point, wrap_point_with_margin};
pub use spawn::{roll_asteroid, ship_spawn_box};
pub use state::{Asteroid, Bullet, GameEvent, GamePhase, GameState, Ship};
pub use tick::{TickInput, tick};
