//! Bet-array generators.
//!
//! Each game module exposes `bet_array(table, params)` and, where the game has a single payout,
//! `get_multiplier(..)`. [`calculate_bet_array`] dispatches on [`GameParams`].
//!
//! Generators never return a degenerate all-zero array for bad input: out-of-range parameters
//! are rejected with a [`GameError`].

use houseline_types::casino::{
    BetArray, BetArrayError, GameId, GameParams, RouletteBet, RtpError, RtpTable,
};
use thiserror::Error;
use tracing::debug;

pub mod binary;
pub mod dice;
pub mod hilo;
pub mod keno;
pub mod logging;
pub mod math;
pub mod mines;
pub mod plinko;
pub mod registry;
pub mod roulette;
pub mod target_multiplier;
pub mod verify;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("roll_under must be in {min}..={max} (got {got})")]
    InvalidRollUnder { got: u8, min: u8, max: u8 },
    #[error("mine_count must be one of {allowed:?} (got {got})")]
    InvalidMineCount { got: u8, allowed: &'static [u8] },
    #[error("cells_revealed must be below the {safe} safe cells (got {got})")]
    InvalidCellsRevealed { got: u8, safe: u8 },
    #[error("invalid roulette bet: {0:?}")]
    InvalidRouletteBet(RouletteBet),
    #[error("target multiplier must be in {min:.2}..={max:.2} (got {got})")]
    InvalidTargetMultiplier { got: f64, min: f64, max: f64 },
    #[error("rank must be in 1..={max} (got {got})")]
    InvalidRank { got: u8, max: u8 },
    #[error("picks must be in {min}..={max} (got {got})")]
    InvalidPicks { got: u8, min: u8, max: u8 },
    #[error("{0} is not active")]
    GameInactive(GameId),
    #[error(transparent)]
    Rtp(#[from] RtpError),
    #[error(transparent)]
    BetArray(#[from] BetArrayError),
}

/// Build the bet array for `params` against the targets in `table`.
pub fn calculate_bet_array(table: &RtpTable, params: &GameParams) -> Result<BetArray, GameError> {
    let array = match params {
        GameParams::Dice(p) => dice::bet_array(table, p)?,
        GameParams::Flip => binary::bet_array(table, GameId::Flip)?,
        GameParams::MagicEightBall => binary::bet_array(table, GameId::MagicEightBall)?,
        GameParams::Mines(p) => mines::bet_array(table, p)?,
        GameParams::Plinko(p) => plinko::bet_array(table, p)?,
        GameParams::Roulette(p) => roulette::bet_array(table, p)?,
        GameParams::Limbo(p) => target_multiplier::limbo_bet_array(table, p)?,
        GameParams::Crash(p) => target_multiplier::crash_bet_array(table, p)?,
        GameParams::HiLo(p) => hilo::bet_array(table, p)?,
        GameParams::Keno(p) => keno::bet_array(table, p)?,
    };
    debug!(
        game = %params.game(),
        slots = array.len(),
        expected_value = array.expected_value(),
        multipliers = %logging::format_multiplier_list(array.multipliers(), 8),
        "generated bet array"
    );
    Ok(array)
}
