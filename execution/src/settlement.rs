//! Settlement contract.
//!
//! Real settlement happens in an external engine that takes a wager and a bet array, draws one
//! slot, and reports the outcome. [`Settlement`] captures that `play` / `result` contract so
//! callers can be exercised against [`SeededSettlement`], a deterministic local stand-in.

use houseline_types::casino::{BetArray, BetArrayError, Weighting};
use rand::{
    distributions::{Distribution, WeightedError, WeightedIndex},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SettlementError {
    #[error("wager must be positive")]
    ZeroWager,
    #[error("malformed bet array: {0}")]
    MalformedBet(#[from] BetArrayError),
    #[error("cannot sample bet array: {0}")]
    Sampling(#[from] WeightedError),
    #[error("no play pending")]
    NoPendingPlay,
    #[error("previous play has not been settled")]
    PlayPending,
}

/// Outcome of a settled play.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayResult {
    pub wager: u64,
    /// Slot of the bet array that was drawn.
    pub result_index: usize,
    pub multiplier: f64,
    /// `floor(wager * multiplier)`.
    pub payout: u64,
}

impl PlayResult {
    /// Payout minus wager.
    pub fn net(&self) -> i128 {
        self.payout as i128 - self.wager as i128
    }

    pub fn is_win(&self) -> bool {
        self.multiplier > 0.0
    }
}

/// A settlement engine: one `play` followed by one `result`.
pub trait Settlement {
    fn play(&mut self, wager: u64, bet: &BetArray) -> Result<(), SettlementError>;

    fn result(&mut self) -> Result<PlayResult, SettlementError>;

    /// Play and immediately collect the result.
    fn settle(&mut self, wager: u64, bet: &BetArray) -> Result<PlayResult, SettlementError> {
        self.play(wager, bet)?;
        self.result()
    }
}

/// Settlement driven by a seeded ChaCha stream; the same seed replays the same outcomes.
#[derive(Clone, Debug)]
pub struct SeededSettlement {
    rng: ChaCha20Rng,
    pending: Option<PlayResult>,
}

impl SeededSettlement {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            pending: None,
        }
    }

    fn draw(&mut self, bet: &BetArray) -> Result<usize, SettlementError> {
        match bet.weighting() {
            Weighting::Uniform => Ok(self.rng.gen_range(0..bet.len())),
            Weighting::Weighted(weights) => {
                let index = WeightedIndex::new(weights)?;
                Ok(index.sample(&mut self.rng))
            }
        }
    }
}

impl Settlement for SeededSettlement {
    fn play(&mut self, wager: u64, bet: &BetArray) -> Result<(), SettlementError> {
        if self.pending.is_some() {
            return Err(SettlementError::PlayPending);
        }
        if wager == 0 {
            return Err(SettlementError::ZeroWager);
        }
        bet.validate()?;

        let result_index = self.draw(bet)?;
        let multiplier = bet.multipliers()[result_index];
        let payout = (wager as f64 * multiplier).floor() as u64;
        trace!(wager, result_index, multiplier, payout, "settled play");
        self.pending = Some(PlayResult {
            wager,
            result_index,
            multiplier,
            payout,
        });
        Ok(())
    }

    fn result(&mut self) -> Result<PlayResult, SettlementError> {
        self.pending.take().ok_or(SettlementError::NoPendingPlay)
    }
}
