//! Dice bet array.
//!
//! Layout: 100 equiprobable slots, one per percentile of the roll. A roll-under bet on `t`
//! wins on slots `[0, t)`, each paying `round4(100 / t * rtp)`; slots `[t, 100)` lose.

use houseline_types::casino::{
    BetArray, DiceParams, GameId, RtpTable, DICE_MAX_ROLL_UNDER, DICE_MIN_ROLL_UNDER, DICE_SLOTS,
    SLOT_MULTIPLIER_DECIMALS,
};

use super::{math::round_to, GameError};

fn validate(roll_under: u8) -> Result<(), GameError> {
    if !(DICE_MIN_ROLL_UNDER..=DICE_MAX_ROLL_UNDER).contains(&roll_under) {
        return Err(GameError::InvalidRollUnder {
            got: roll_under,
            min: DICE_MIN_ROLL_UNDER,
            max: DICE_MAX_ROLL_UNDER,
        });
    }
    Ok(())
}

/// Win probability of a roll-under bet.
pub fn win_probability(roll_under: u8) -> Result<f64, GameError> {
    validate(roll_under)?;
    Ok(roll_under as f64 / DICE_SLOTS as f64)
}

/// Payout multiplier on a winning roll.
pub fn get_multiplier(table: &RtpTable, roll_under: u8) -> Result<f64, GameError> {
    let rtp = table.target(GameId::Dice)?;
    let p = win_probability(roll_under)?;
    Ok(round_to((1.0 / p) * rtp, SLOT_MULTIPLIER_DECIMALS))
}

pub fn bet_array(table: &RtpTable, params: &DiceParams) -> Result<BetArray, GameError> {
    let multiplier = get_multiplier(table, params.roll_under)?;
    let winning = params.roll_under as usize;
    let multipliers = (0..DICE_SLOTS)
        .map(|slot| if slot < winning { multiplier } else { 0.0 })
        .collect();
    Ok(BetArray::uniform(multipliers)?)
}
