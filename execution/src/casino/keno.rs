//! Keno bet array.
//!
//! 40 number board, 10 numbers drawn. A player marking `p` numbers hits `h` of them with
//! hypergeometric probability `C(p, h) * C(40 - p, 10 - h) / C(40, 10)`.
//!
//! Layout: one weighted slot per hit count `h` in `0..=p`. Hit counts from `max(1, ceil(p / 2))`
//! upward pay; each paying bucket takes an equal share of the return, `round2(rtp / (W * P(h)))`
//! for `W` paying buckets.

use houseline_types::casino::{
    BetArray, GameId, KenoParams, RtpTable, BUCKET_MULTIPLIER_DECIMALS, KENO_DRAWN, KENO_MAX_PICKS,
    KENO_MIN_PICKS, KENO_NUMBERS,
};

use super::{
    math::{hypergeometric_pmf, round_to},
    GameError,
};

fn validate(picks: u8) -> Result<(), GameError> {
    if !(KENO_MIN_PICKS..=KENO_MAX_PICKS).contains(&picks) {
        return Err(GameError::InvalidPicks {
            got: picks,
            min: KENO_MIN_PICKS,
            max: KENO_MAX_PICKS,
        });
    }
    Ok(())
}

/// Smallest hit count that pays.
pub fn min_paying_hits(picks: u8) -> u8 {
    picks.div_ceil(2).max(1)
}

/// Probability of each hit count `0..=picks`.
pub fn hit_probabilities(picks: u8) -> Result<Vec<f64>, GameError> {
    validate(picks)?;
    Ok((0..=picks as u32)
        .map(|hits| {
            hypergeometric_pmf(
                KENO_NUMBERS as u32,
                picks as u32,
                KENO_DRAWN as u32,
                hits,
            )
        })
        .collect())
}

/// Paytable indexed by hit count.
pub fn paytable(table: &RtpTable, picks: u8) -> Result<Vec<f64>, GameError> {
    let rtp = table.target(GameId::Keno)?;
    let probabilities = hit_probabilities(picks)?;
    let first = min_paying_hits(picks) as usize;
    let paying = (probabilities.len() - first) as f64;

    Ok(probabilities
        .iter()
        .enumerate()
        .map(|(hits, &p)| {
            if hits < first || p == 0.0 {
                return 0.0;
            }
            round_to(rtp / (paying * p), BUCKET_MULTIPLIER_DECIMALS)
        })
        .collect())
}

pub fn bet_array(table: &RtpTable, params: &KenoParams) -> Result<BetArray, GameError> {
    let multipliers = paytable(table, params.picks)?;
    let weights = hit_probabilities(params.picks)?;
    Ok(BetArray::weighted(multipliers, weights)?)
}
