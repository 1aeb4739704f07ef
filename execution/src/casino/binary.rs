//! Two-outcome games: coin flip and Magic 8-Ball.
//!
//! Both encode as `[round4(2 * rtp), 0]` over two equiprobable slots.

use houseline_types::casino::{
    BetArray, GameId, RtpTable, BINARY_FAIR_MULTIPLIER, SLOT_MULTIPLIER_DECIMALS,
};

use super::{math::round_to, GameError};

/// Payout on the winning side.
pub fn get_multiplier(table: &RtpTable, game: GameId) -> Result<f64, GameError> {
    let rtp = table.target(game)?;
    Ok(round_to(BINARY_FAIR_MULTIPLIER * rtp, SLOT_MULTIPLIER_DECIMALS))
}

pub fn bet_array(table: &RtpTable, game: GameId) -> Result<BetArray, GameError> {
    let multiplier = get_multiplier(table, game)?;
    Ok(BetArray::uniform(vec![multiplier, 0.0])?)
}
