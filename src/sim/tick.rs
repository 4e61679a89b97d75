//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one step.

use std::collections::HashSet;

use super::collision::{find_bullet_hits, first_ship_hit};
use super::motion::{advance_asteroid, advance_bullet, advance_ship, steer_ship};
use super::state::{GameEvent, GamePhase, GameState};

/// Level-triggered controls sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust (up)
    pub accelerate: bool,
    /// Rotate counter-clockwise on screen
    pub turn_left: bool,
    /// Rotate clockwise on screen
    pub turn_right: bool,
    /// Fire one bullet every tick while held
    pub fire: bool,
}

impl TickInput {
    /// -1 for left, 1 for right, 0 for none. Left wins when both are held.
    pub fn turn_direction(&self) -> f32 {
        if self.turn_left {
            -1.0
        } else if self.turn_right {
            1.0
        } else {
            0.0
        }
    }
}

/// Advance the game state by one fixed timestep.
///
/// Does nothing outside `Playing`. Events raised by this tick replace the
/// previous tick's events in `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // --- CONTROLS ---
    steer_ship(&mut state.ship, input.accelerate, input.turn_direction(), &state.tuning);
    if input.fire {
        state.fire_bullet();
    }

    // --- MOTION ---
    advance_ship(&mut state.ship, &state.bounds, &state.tuning);
    for bullet in state.bullets.iter_mut() {
        advance_bullet(bullet, &state.bounds, &state.tuning);
    }
    for asteroid in state.asteroids.iter_mut() {
        advance_asteroid(asteroid, &state.bounds);
    }
    state.bullets.retain(|b| b.active);

    // --- COLLISIONS ---
    resolve_bullet_hits(state);
    resolve_ship_hit(state);

    // Keep the asteroid floor (a finished run stays frozen as it ended)
    if state.phase == GamePhase::Playing {
        state.refill_asteroids();
    }
}

/// Remove every bullet/asteroid pair that collided and score them
fn resolve_bullet_hits(state: &mut GameState) {
    let hits = find_bullet_hits(&state.bullets, &state.asteroids, &state.tuning);
    if hits.is_empty() {
        return;
    }

    let mut spent_bullets = HashSet::with_capacity(hits.len());
    let mut destroyed = HashSet::with_capacity(hits.len());
    for hit in &hits {
        let bullet_id = state.bullets[hit.bullet].id;
        let asteroid_id = state.asteroids[hit.asteroid].id;
        spent_bullets.insert(bullet_id);
        destroyed.insert(asteroid_id);
        state.score += state.tuning.points_per_asteroid;
        state.events.push(GameEvent::AsteroidDestroyed {
            asteroid_id,
            bullet_id,
        });
        log::debug!("Bullet {} destroyed asteroid {}", bullet_id, asteroid_id);
    }

    state.bullets.retain(|b| !spent_bullets.contains(&b.id));
    state.asteroids.retain(|a| !destroyed.contains(&a.id));
}

/// Check the ship against asteroids; the first overlap costs a life
fn resolve_ship_hit(state: &mut GameState) {
    let Some(idx) = first_ship_hit(&state.ship, &state.asteroids, &state.tuning) else {
        return;
    };

    state.lives = state.lives.saturating_sub(1);
    log::debug!(
        "Ship hit asteroid {} ({} lives left)",
        state.asteroids[idx].id,
        state.lives
    );
    state.events.push(GameEvent::ShipLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.end_run();
    } else {
        state.respawn_ship();
        state.respawn_asteroids();
    }
}
