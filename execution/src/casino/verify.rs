//! RTP verification.

use houseline_types::casino::{BetArray, GameId, RtpError, RtpTable, RTP_TOLERANCE};
use serde::Serialize;
use tracing::warn;

/// Arithmetic mean of the multipliers.
///
/// Exact for uniform arrays only; weighted arrays should use [`BetArray::expected_value`].
pub fn calculate_rtp(multipliers: &[f64]) -> f64 {
    if multipliers.is_empty() {
        return 0.0;
    }
    multipliers.iter().sum::<f64>() / multipliers.len() as f64
}

/// Outcome of checking one bet array against its target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RtpCheck {
    pub game: GameId,
    pub target: f64,
    pub actual: f64,
    pub deviation: f64,
    pub within_tolerance: bool,
}

pub fn check_rtp(table: &RtpTable, game: GameId, array: &BetArray) -> Result<RtpCheck, RtpError> {
    let target = table.target(game)?;
    let actual = array.expected_value();
    let deviation = actual - target;
    let within_tolerance = deviation.abs() <= RTP_TOLERANCE;
    if !within_tolerance {
        warn!(%game, target, actual, deviation, "bet array misses rtp target");
    }
    Ok(RtpCheck {
        game,
        target,
        actual,
        deviation,
        within_tolerance,
    })
}

/// Whether the array's expected value is within tolerance of the game's target.
pub fn validate_rtp(table: &RtpTable, game: GameId, array: &BetArray) -> Result<bool, RtpError> {
    Ok(check_rtp(table, game, array)?.within_tolerance)
}
