use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::food::DEFAULT_PLACEMENT_ATTEMPTS;
use crate::grid::{Cell, Heading, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(token.to_string())),
        }
    }
}

/// Tick period for each difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSpeeds {
    pub easy: Duration,
    pub normal: Duration,
    pub hard: Duration,
}

impl Default for TickSpeeds {
    fn default() -> Self {
        TickSpeeds {
            easy: Duration::from_millis(200),
            normal: Duration::from_millis(150),
            hard: Duration::from_millis(100),
        }
    }
}

impl TickSpeeds {
    pub fn period(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

/// What a difficulty change does to a run in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DifficultyPolicy {
    /// Throw the run away and start a fresh one at the new pace.
    #[default]
    Restart,
    /// Keep the run and only restart the clock at the new period.
    Retime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Size,
    pub start: Cell,
    pub initial_heading: Heading,
    /// Cells laid out behind the start cell, head included.
    pub initial_length: usize,
    pub speeds: TickSpeeds,
    pub difficulty: Difficulty,
    pub difficulty_policy: DifficultyPolicy,
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: Size::default(),
            start: Cell::new(5, 5),
            initial_heading: Heading::Right,
            initial_length: 1,
            speeds: TickSpeeds::default(),
            difficulty: Difficulty::default(),
            difficulty_policy: DifficultyPolicy::default(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        GameConfig {
            size: Size::new(width, height),
            ..Default::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if !self.size.contains(self.start) {
            return Err(Error::InvalidConfig(format!(
                "start cell {} lies outside the {}x{} grid",
                self.start, self.size.width, self.size.height
            )));
        }

        let axis = match self.initial_heading {
            Heading::Left | Heading::Right => self.size.width,
            Heading::Up | Heading::Down => self.size.height,
        } as usize;
        if self.initial_length == 0 || self.initial_length > axis {
            return Err(Error::InvalidConfig(format!(
                "initial length must be between 1 and {axis} when heading {}, got {}",
                self.initial_heading, self.initial_length
            )));
        }
        if self.initial_length >= self.size.area() {
            return Err(Error::InvalidConfig(
                "initial organism leaves no room for food".to_string(),
            ));
        }

        for difficulty in Difficulty::ALL {
            if self.speeds.period(difficulty).is_zero() {
                return Err(Error::InvalidConfig(format!(
                    "tick period for {difficulty} must be non-zero"
                )));
            }
        }
        Ok(())
    }
}
