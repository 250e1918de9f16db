//! The session controller: the only place game state is written.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arbiter::HeadingMailbox;
use crate::clock::GameClock;
use crate::config::{Difficulty, DifficultyPolicy, GameConfig};
use crate::engine::{Arena, StepResult};
use crate::error::Result;
use crate::grid::{Cell, Heading, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

/// Read-only copy of everything presentation needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Head first.
    pub organism: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub best_score: u32,
    pub state: SessionState,
    pub heading: Heading,
    pub size: Size,
    pub difficulty: Difficulty,
    pub last_step: Option<StepResult>,
    pub revision: u64,
}

impl Snapshot {
    /// The run ended because the organism covered the whole grid.
    pub fn board_cleared(&self) -> bool {
        self.state == SessionState::GameOver && self.last_step == Some(StepResult::Filled)
    }
}

pub struct Session<R = StdRng> {
    config: GameConfig,
    rng: R,
    state: SessionState,
    arena: Arena,
    heading: Heading,
    mailbox: HeadingMailbox,
    clock: GameClock,
    difficulty: Difficulty,
    best_score: u32,
    last_step: Option<StepResult>,
    revision: u64,
}

impl Session<StdRng> {
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Session::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Result<Self> {
        Session::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let arena = Arena::spawn(&config, &mut rng);
        Ok(Session {
            heading: config.initial_heading,
            clock: GameClock::new(config.speeds.period(config.difficulty)),
            difficulty: config.difficulty,
            config,
            rng,
            state: SessionState::NotStarted,
            arena,
            mailbox: HeadingMailbox::new(),
            best_score: 0,
            last_step: None,
            revision: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn score(&self) -> u32 {
        self.arena.score()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.time_until_tick(now)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            organism: self.arena.snek().cells().collect(),
            food: self.arena.food(),
            score: self.arena.score(),
            best_score: self.best_score,
            state: self.state,
            heading: self.heading,
            size: self.arena.size(),
            difficulty: self.difficulty,
            last_step: self.last_step,
            revision: self.revision,
        }
    }

    /// Begins a fresh run. Valid from every state; a run in progress is
    /// discarded.
    pub fn start(&mut self, now: Instant) {
        self.clock.stop();
        self.arena = Arena::spawn(&self.config, &mut self.rng);
        self.heading = self.config.initial_heading;
        self.mailbox.clear();
        self.last_step = None;
        self.state = SessionState::Playing;
        self.clock.start(now);
        self.touch();
        info!(
            "Session started on {}x{} at {} difficulty",
            self.config.size.width, self.config.size.height, self.difficulty
        );
    }

    pub fn restart(&mut self, now: Instant) {
        self.start(now);
    }

    /// Queues a heading for the next tick. Returns whether it was accepted;
    /// reversals and requests outside a running game are dropped.
    pub fn request_direction(&mut self, heading: Heading) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        self.mailbox.request(self.heading, heading)
    }

    pub fn request_direction_token(&mut self, token: &str) -> Result<bool> {
        let heading = token.parse::<Heading>()?;
        Ok(self.request_direction(heading))
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty, now: Instant) {
        let previous = std::mem::replace(&mut self.difficulty, difficulty);
        self.clock
            .set_period(self.config.speeds.period(difficulty), now);
        info!("Difficulty changed from {previous} to {difficulty}");

        if self.state == SessionState::Playing
            && self.config.difficulty_policy == DifficultyPolicy::Restart
        {
            self.restart(now);
        } else {
            self.touch();
        }
    }

    pub fn set_difficulty_token(&mut self, token: &str, now: Instant) -> Result<()> {
        let difficulty = token.parse::<Difficulty>()?;
        self.set_difficulty(difficulty, now);
        Ok(())
    }

    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Playing {
            return false;
        }
        self.clock.stop();
        self.state = SessionState::Paused;
        self.touch();
        debug!("Session paused at score {}", self.arena.score());
        true
    }

    pub fn resume(&mut self, now: Instant) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Playing;
        self.clock.start(now);
        self.touch();
        debug!("Session resumed");
        true
    }

    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        match self.state {
            SessionState::Playing => self.pause(),
            SessionState::Paused => self.resume(now),
            _ => false,
        }
    }

    /// Runs a tick if the clock says one is due.
    pub fn poll(&mut self, now: Instant) -> Option<StepResult> {
        if self.clock.poll(now) {
            self.tick()
        } else {
            None
        }
    }

    /// Advances the simulation by one step. Does nothing unless playing.
    pub fn tick(&mut self) -> Option<StepResult> {
        if self.state != SessionState::Playing {
            return None;
        }

        self.heading = self.mailbox.drain(self.heading);
        let result = self.arena.advance(self.heading, &mut self.rng);
        self.last_step = Some(result);

        if result.is_terminal() {
            self.clock.stop();
            self.state = SessionState::GameOver;
            let score = self.arena.score();
            self.best_score = self.best_score.max(score);
            match result {
                StepResult::Filled => info!("Board cleared with score {score}"),
                _ => info!(
                    "Game over with score {score}, length {}",
                    self.arena.snek().len()
                ),
            }
        }

        self.touch();
        Some(result)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
