//! Game state and core simulation types
//!
//! Entities are plain records; motion and bounding boxes are free functions
//! in `motion` and `collision`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::roll_asteroid;
use crate::settings::{PlayBounds, Settings, SettingsError};
use crate::tuning::Tuning;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, simulation not running
    Start,
    /// Active gameplay
    Playing,
    /// Lives exhausted, simulation frozen
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Facing direction (radians)
    pub heading: f32,
    /// Signed scalar speed along `heading`
    pub speed: f32,
    pub accelerating: bool,
}

impl Ship {
    /// Fresh ship at rest, facing +x
    pub fn spawn_at(pos: Vec2) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            accelerating: false,
        }
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u64,
    pub pos: Vec2,
    heading: f32,
    /// Cleared once the bullet leaves the play field
    pub active: bool,
}

impl Bullet {
    pub fn new(id: u64, pos: Vec2, heading: f32) -> Self {
        Self {
            id,
            pos,
            heading,
            active: true,
        }
    }

    /// Direction of travel, fixed at creation
    pub fn heading(&self) -> f32 {
        self.heading
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u64,
    pub pos: Vec2,
    pub heading: f32,
    /// Units per tick, constant after spawn
    pub speed: u32,
    /// Diameter
    pub size: u32,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AsteroidDestroyed { asteroid_id: u64, bullet_id: u64 },
    ShipLost { lives_left: u8 },
    GameOver { final_score: u64 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Play field shared by wrap and spawn logic
    pub bounds: PlayBounds,
    /// Gameplay constants
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score for the current (or just finished) run
    pub score: u64,
    /// Remaining lives
    pub lives: u8,
    /// Score frozen at game over
    pub final_score: Option<u64>,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    pub ship: Ship,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Live asteroids in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u64,
}

impl GameState {
    /// Create a state sitting on the start screen.
    ///
    /// Settings are validated first: spawning needs a field with room outside
    /// the ship spawn box.
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        Ok(Self {
            bounds: settings.bounds,
            tuning: settings.tuning.clone(),
            seed,
            phase: GamePhase::Start,
            score: 0,
            lives: settings.tuning.starting_lives,
            final_score: None,
            time_ticks: 0,
            ship: Ship::spawn_at(settings.bounds.center()),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full reset into `Playing`: score, lives, ship, bullets and asteroids
    pub fn start_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.final_score = None;
        self.time_ticks = 0;
        self.ship = Ship::spawn_at(self.bounds.center());
        self.bullets.clear();
        self.events.clear();
        self.respawn_asteroids();
        log::info!(
            "Run started (seed {}, {} asteroids)",
            self.seed,
            self.asteroids.len()
        );
    }

    /// Replace the ship with a fresh one at the field center
    pub fn respawn_ship(&mut self) {
        self.ship = Ship::spawn_at(self.bounds.center());
    }

    /// Append a bullet at the ship's position and heading
    pub fn fire_bullet(&mut self) {
        let id = self.next_entity_id();
        self.bullets
            .push(Bullet::new(id, self.ship.pos, self.ship.heading));
    }

    /// Spawn one asteroid away from the ship spawn box
    pub fn spawn_asteroid(&mut self) {
        let id = self.next_entity_id();
        let asteroid = roll_asteroid(&mut self.rng, id, &self.bounds, &self.tuning);
        self.asteroids.push(asteroid);
    }

    /// Top up the asteroid pool to the floor count
    pub fn refill_asteroids(&mut self) {
        while self.asteroids.len() < self.tuning.asteroid_floor {
            self.spawn_asteroid();
        }
    }

    /// Discard every asteroid and spawn a fresh pool
    pub fn respawn_asteroids(&mut self) {
        self.asteroids.clear();
        self.refill_asteroids();
    }

    /// Freeze the run
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.final_score = Some(self.score);
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!(
            "Game over: final score {} after {} ticks",
            self.score,
            self.time_ticks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameState {
        GameState::new(&Settings {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_state_waits_on_start_screen() {
        let state = seeded(1);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.lives, 3);
        assert!(state.asteroids.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_rejects_unplayable_settings() {
        let settings = Settings {
            bounds: PlayBounds::new(0.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(&settings),
            Err(SettingsError::Invalid(_))
        ));

        // Too small to fit an asteroid outside the ship spawn box
        let settings = Settings {
            bounds: PlayBounds::new(40.0, 40.0),
            ..Default::default()
        };
        assert!(GameState::new(&settings).is_err());
    }

    #[test]
    fn test_entity_ids_do_not_overflow_u32() {
        let mut state = seeded(5);
        state.next_id = u32::MAX as u64;
        assert_eq!(state.next_entity_id(), u32::MAX as u64);
        assert_eq!(state.next_entity_id(), u32::MAX as u64 + 1);
    }

    #[test]
    fn test_start_run_resets_everything() {
        let mut state = seeded(2);
        state.start_run();
        state.score = 120;
        state.lives = 1;
        state.ship.speed = 4.0;
        state.fire_bullet();

        state.start_run();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.asteroids.len(), 5);
        assert!(state.bullets.is_empty());
        assert_eq!(state.ship, Ship::spawn_at(Vec2::new(400.0, 400.0)));
    }

    #[test]
    fn test_fire_bullet_uses_ship_pose() {
        let mut state = seeded(3);
        state.ship.pos = Vec2::new(10.0, 20.0);
        state.ship.heading = 1.25;
        state.fire_bullet();
        let bullet = state.bullets[0];
        assert_eq!(bullet.pos, Vec2::new(10.0, 20.0));
        assert_eq!(bullet.heading(), 1.25);
        assert!(bullet.active);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = seeded(4);
        state.start_run();
        state.fire_bullet();
        state.fire_bullet();
        let mut ids: Vec<u64> = state
            .asteroids
            .iter()
            .map(|a| a.id)
            .chain(state.bullets.iter().map(|b| b.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_same_seed_same_asteroids() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        a.start_run();
        b.start_run();
        assert_eq!(a.asteroids, b.asteroids);
    }
}
