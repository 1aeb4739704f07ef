use thiserror::Error as ThisError;

use super::GameId;

#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum RtpError {
    #[error("unknown game: {0}")]
    UnknownGame(String),
    #[error("no RTP target configured for {0}")]
    MissingTarget(GameId),
    #[error("RTP target for {game} must be in (0, 1] (got {value})")]
    InvalidTarget { game: GameId, value: f64 },
    #[error("invalid RTP config: {0}")]
    Config(String),
}

#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum BetArrayError {
    #[error("bet array has no slots")]
    Empty,
    #[error("multiplier at slot {index} must be finite and >= 0 (got {value})")]
    InvalidMultiplier { index: usize, value: f64 },
    #[error("weight count does not match slot count (weights={weights}, slots={slots})")]
    WeightCountMismatch { weights: usize, slots: usize },
    #[error("weight at slot {index} must be finite and >= 0 (got {value})")]
    InvalidWeight { index: usize, value: f64 },
    #[error("weights must sum to 1 (got {sum})")]
    WeightSum { sum: f64 },
}
