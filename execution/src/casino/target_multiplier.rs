//! Limbo and Crash bet arrays.
//!
//! Both games pay exactly the chosen target multiplier `m` when the drawn multiplier reaches it,
//! so the house edge lives in the win probability `rtp / m`. Targets are quantized to hundredths.
//!
//! Layout: with `total = m * 10_000` and `wins = rtp * 10_000` (both integral), reduce by their
//! gcd; the first `wins / g` of `total / g` equiprobable slots pay `m`, the rest lose.
//!
//! An RTP that shares few factors with `total` can leave up to a million slots. Layouts longer
//! than [`TARGET_MULTIPLIER_MAX_SLOTS`] are coarsened to the finest divisor of `total` that fits.
//! `total / 100` always fits, so expected value moves by at most `0.005`.

use houseline_types::casino::{
    BetArray, CrashParams, GameId, LimboParams, RtpTable, TARGET_MULTIPLIER_MAX_HUNDREDTHS,
    TARGET_MULTIPLIER_MAX_SLOTS, TARGET_MULTIPLIER_MIN_HUNDREDTHS, TARGET_MULTIPLIER_RESOLUTION,
};
use tracing::debug;

use super::{math::gcd, GameError};

/// Quantize a target to hundredths, rejecting anything outside `[1.01, 100.00]`.
pub fn quantize(target: f64) -> Result<u32, GameError> {
    let err = GameError::InvalidTargetMultiplier {
        got: target,
        min: TARGET_MULTIPLIER_MIN_HUNDREDTHS as f64 / 100.0,
        max: TARGET_MULTIPLIER_MAX_HUNDREDTHS as f64 / 100.0,
    };
    if !target.is_finite() {
        return Err(err);
    }
    let hundredths = (target * 100.0).round();
    if hundredths < TARGET_MULTIPLIER_MIN_HUNDREDTHS as f64
        || hundredths > TARGET_MULTIPLIER_MAX_HUNDREDTHS as f64
    {
        return Err(err);
    }
    Ok(hundredths as u32)
}

/// Probability of reaching `target` under the configured RTP.
pub fn win_probability(table: &RtpTable, game: GameId, target: f64) -> Result<f64, GameError> {
    let rtp = table.target(game)?;
    let hundredths = quantize(target)?;
    Ok(rtp * 100.0 / hundredths as f64)
}

fn bet_array(table: &RtpTable, game: GameId, target: f64) -> Result<BetArray, GameError> {
    let rtp = table.target(game)?;
    let hundredths = quantize(target)?;
    let payout = hundredths as f64 / 100.0;

    let total = hundredths as u64 * (TARGET_MULTIPLIER_RESOLUTION / 100);
    let wins = (rtp * TARGET_MULTIPLIER_RESOLUTION as f64).round() as u64;
    let (slots, winning) = layout(total, wins);

    let multipliers = (0..slots)
        .map(|slot| if slot < winning { payout } else { 0.0 })
        .collect();
    Ok(BetArray::uniform(multipliers)?)
}

/// Slot count and winning slots for `wins` in `total`, reduced and capped.
fn layout(total: u64, wins: u64) -> (usize, usize) {
    let g = gcd(total, wins).max(1);
    let (mut slots, mut winning) = (total / g, wins / g);
    if slots > TARGET_MULTIPLIER_MAX_SLOTS {
        let mut step = total.div_ceil(TARGET_MULTIPLIER_MAX_SLOTS);
        while total % step != 0 {
            step += 1;
        }
        let coarse_total = total / step;
        let coarse_wins = (wins + step / 2) / step;
        let g = gcd(coarse_total, coarse_wins).max(1);
        debug!(total, wins, step, "coarsened target multiplier layout");
        (slots, winning) = (coarse_total / g, coarse_wins / g);
    }
    (slots as usize, winning as usize)
}

pub fn limbo_bet_array(table: &RtpTable, params: &LimboParams) -> Result<BetArray, GameError> {
    bet_array(table, GameId::Limbo, params.target_multiplier)
}

/// Crash with an automatic cash out prices exactly like a Limbo target.
pub fn crash_bet_array(table: &RtpTable, params: &CrashParams) -> Result<BetArray, GameError> {
    bet_array(table, GameId::Crash, params.cash_out_at)
}
