//! HiLo bet array.
//!
//! Cards are drawn with replacement, so each of the 13 ranks (Ace = 1 .. King = 13) is equally
//! likely. Slot `i` stands for rank `i + 1`.
//!
//! Win conditions:
//! - HigherOrSame: next rank `>=` current
//! - LowerOrSame: next rank `<=` current
//!
//! Winning ranks pay `round4(13 / winning_ranks * rtp)`.

use houseline_types::casino::{
    BetArray, GameId, HiLoGuess, HiLoParams, RtpTable, HILO_RANKS, SLOT_MULTIPLIER_DECIMALS,
};

use super::{math::round_to, GameError};

fn validate(current_rank: u8) -> Result<(), GameError> {
    if current_rank == 0 || current_rank > HILO_RANKS {
        return Err(GameError::InvalidRank {
            got: current_rank,
            max: HILO_RANKS,
        });
    }
    Ok(())
}

/// Check if `next` rank wins the guess made at `current`.
pub fn guess_wins(current: u8, guess: HiLoGuess, next: u8) -> bool {
    match guess {
        HiLoGuess::HigherOrSame => next >= current,
        HiLoGuess::LowerOrSame => next <= current,
    }
}

/// Number of ranks that win the guess.
pub fn winning_ranks(current_rank: u8, guess: HiLoGuess) -> Result<u8, GameError> {
    validate(current_rank)?;
    Ok(match guess {
        HiLoGuess::HigherOrSame => HILO_RANKS - current_rank + 1,
        HiLoGuess::LowerOrSame => current_rank,
    })
}

pub fn get_multiplier(
    table: &RtpTable,
    current_rank: u8,
    guess: HiLoGuess,
) -> Result<f64, GameError> {
    let rtp = table.target(GameId::HiLo)?;
    let wins = winning_ranks(current_rank, guess)?;
    Ok(round_to(
        HILO_RANKS as f64 / wins as f64 * rtp,
        SLOT_MULTIPLIER_DECIMALS,
    ))
}

pub fn bet_array(table: &RtpTable, params: &HiLoParams) -> Result<BetArray, GameError> {
    let multiplier = get_multiplier(table, params.current_rank, params.guess)?;
    let multipliers = (1..=HILO_RANKS)
        .map(|next| {
            if guess_wins(params.current_rank, params.guess, next) {
                multiplier
            } else {
                0.0
            }
        })
        .collect();
    Ok(BetArray::uniform(multipliers)?)
}
