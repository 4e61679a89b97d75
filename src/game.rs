//! Game driver
//!
//! Owns the simulation state and the held controls, runs the fixed-step
//! accumulator that stands in for the tick timer, and answers render
//! snapshot queries. Input flows in through `handle_intent` only; nothing
//! here holds a reference back to its caller.

use std::time::Duration;

use crate::input::Intent;
use crate::renderer::RenderSnapshot;
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Elapsed time above this is treated as a stall and clamped
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    input: TickInput,
    tick_period: Duration,
    max_substeps: u32,
    accumulator: Duration,
    /// Tick source armed
    ticking: bool,
    /// Events raised by the last `advance` or `step` call
    events: Vec<GameEvent>,
    /// Highest final score this session
    best_score: Option<u64>,
}

impl Game {
    /// Create a game on the start screen. Fails if the settings don't
    /// describe a playable field.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        let state = GameState::new(&settings)?;
        log::info!(
            "Game created: {}x{} field, {:?} tick, seed {}",
            state.bounds.width,
            state.bounds.height,
            settings.tick_period(),
            state.seed
        );
        Ok(Self {
            state,
            input: TickInput::default(),
            tick_period: settings.tick_period(),
            max_substeps: settings.max_substeps,
            accumulator: Duration::ZERO,
            ticking: false,
            events: Vec::new(),
            best_score: None,
        })
    }

    /// Single entry point for player input
    pub fn handle_intent(&mut self, intent: Intent) {
        if intent.is_level() {
            log::trace!("Intent {:?}", intent);
        }
        match intent {
            Intent::Accelerate(held) => self.input.accelerate = held,
            Intent::TurnLeft(held) => self.input.turn_left = held,
            Intent::TurnRight(held) => self.input.turn_right = held,
            Intent::Fire(held) => self.input.fire = held,
            Intent::Start => {
                if self.state.phase == GamePhase::Start {
                    self.begin_run();
                } else {
                    log::debug!("Ignoring start request in {:?}", self.state.phase);
                }
            }
            Intent::Restart => {
                if self.state.phase == GamePhase::GameOver {
                    self.begin_run();
                } else {
                    log::debug!("Ignoring restart request in {:?}", self.state.phase);
                }
            }
        }
    }

    /// Reset the run, clear held controls and arm the tick source
    fn begin_run(&mut self) {
        self.input = TickInput::default();
        self.accumulator = Duration::ZERO;
        self.events.clear();
        self.state.start_run();
        self.ticking = true;
    }

    /// Feed wall-clock time into the fixed-step accumulator.
    ///
    /// Runs as many ticks as `elapsed` covers, at most `max_substeps` per
    /// call; time the cap leaves unsimulated is dropped rather than carried
    /// into later frames. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.events.clear();
        if !self.ticking {
            return 0;
        }
        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.ticking && self.accumulator >= self.tick_period && substeps < self.max_substeps {
            self.accumulator -= self.tick_period;
            self.run_tick();
            substeps += 1;
        }
        if self.accumulator >= self.tick_period {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        substeps
    }

    /// Run one tick with the current held controls, bypassing the
    /// accumulator. Returns false (and does nothing) while the tick source is
    /// stopped.
    pub fn step(&mut self) -> bool {
        self.events.clear();
        self.run_tick()
    }

    fn run_tick(&mut self) -> bool {
        if !self.ticking {
            return false;
        }
        tick(&mut self.state, &self.input);
        self.events.extend_from_slice(&self.state.events);

        if self.state.phase == GamePhase::GameOver {
            self.stop_ticking();
        }
        true
    }

    fn stop_ticking(&mut self) {
        self.ticking = false;
        self.accumulator = Duration::ZERO;
        let score = self.state.score;
        if self.best_score.is_none_or(|best| score > best) {
            log::info!("New best score: {}", score);
            self.best_score = Some(score);
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.best_score)
    }

    /// Events raised by the last `advance` or `step` call
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Whether the tick source is running
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Currently held controls
    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Highest final score of any finished run this session
    pub fn best_score(&self) -> Option<u64> {
        self.best_score
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }
}
