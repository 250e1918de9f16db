//! snekgrid: a single snake on a toroidal grid.
//!
//! The library is the whole simulation with no I/O or rendering:
//! - `grid`: cells, headings and wraparound
//! - `food`: free-cell selection for the next morsel
//! - `arbiter`: reversal filtering and the per-tick heading mailbox
//! - `engine`: one step of movement, growth and self-collision
//! - `clock`: the single pending tick deadline
//! - `session`: the state machine presentation talks to
//!
//! Drive it by calling [`Session::poll`] from an event loop and drawing
//! [`Session::snapshot`] whenever [`Session::revision`] moves.

pub mod arbiter;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod session;

pub use arbiter::{propose, HeadingMailbox};
pub use clock::GameClock;
pub use config::{Difficulty, DifficultyPolicy, GameConfig, TickSpeeds};
pub use engine::{Arena, Snek, StepResult};
pub use error::{Error, Result};
pub use food::FoodPlacer;
pub use grid::{step, wrap, Cell, CellDelta, Heading, Size};
pub use session::{Session, SessionState, Snapshot};
