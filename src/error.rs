use thiserror::Error;

/// Validation failures raised by the simulation core.
///
/// None of these leave a session half-updated: the command that returns one
/// has not touched any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown heading `{0}` (expected up, down, left or right)")]
    UnknownHeading(String),
    #[error("unknown difficulty `{0}` (expected easy, normal or hard)")]
    UnknownDifficulty(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
