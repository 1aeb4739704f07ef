//! Bet array handed to the settlement engine.
//!
//! A bet array is an ordered list of payout multipliers, one per outcome slot. Slot `i` paying
//! `0` is a loss; any other value pays `wager * multiplier`. How likely each slot is depends on
//! the encoding:
//! - [`Weighting::Uniform`]: every slot is equally likely, so probability is baked into slot
//!   repetition (dice uses 100 slots, roulette 37).
//! - [`Weighting::Weighted`]: slots carry explicit probabilities (plinko buckets follow the
//!   binomial distribution).

use serde::{Deserialize, Serialize};

use super::{BetArrayError, WEIGHT_SUM_TOLERANCE};

/// How outcome probabilities are assigned to slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "weights", rename_all = "lowercase")]
pub enum Weighting {
    Uniform,
    Weighted(Vec<f64>),
}

/// Multipliers plus their weighting. Deserializing runs [`BetArray::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBetArray")]
pub struct BetArray {
    multipliers: Vec<f64>,
    weighting: Weighting,
}

#[derive(Deserialize)]
struct RawBetArray {
    multipliers: Vec<f64>,
    weighting: Weighting,
}

impl TryFrom<RawBetArray> for BetArray {
    type Error = BetArrayError;

    fn try_from(raw: RawBetArray) -> Result<Self, Self::Error> {
        let array = Self {
            multipliers: raw.multipliers,
            weighting: raw.weighting,
        };
        array.validate()?;
        Ok(array)
    }
}

impl BetArray {
    /// Equiprobable slots.
    pub fn uniform(multipliers: Vec<f64>) -> Result<Self, BetArrayError> {
        let array = Self {
            multipliers,
            weighting: Weighting::Uniform,
        };
        array.validate()?;
        Ok(array)
    }

    /// Slots with explicit probabilities (must sum to 1).
    pub fn weighted(multipliers: Vec<f64>, weights: Vec<f64>) -> Result<Self, BetArrayError> {
        let array = Self {
            multipliers,
            weighting: Weighting::Weighted(weights),
        };
        array.validate()?;
        Ok(array)
    }

    /// Check the array is something a settlement engine can consume.
    pub fn validate(&self) -> Result<(), BetArrayError> {
        if self.multipliers.is_empty() {
            return Err(BetArrayError::Empty);
        }
        for (index, &value) in self.multipliers.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(BetArrayError::InvalidMultiplier { index, value });
            }
        }
        if let Weighting::Weighted(weights) = &self.weighting {
            if weights.len() != self.multipliers.len() {
                return Err(BetArrayError::WeightCountMismatch {
                    weights: weights.len(),
                    slots: self.multipliers.len(),
                });
            }
            for (index, &value) in weights.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(BetArrayError::InvalidWeight { index, value });
                }
            }
            let sum: f64 = weights.iter().sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(BetArrayError::WeightSum { sum });
            }
        }
        Ok(())
    }

    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    pub fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self.weighting, Weighting::Uniform)
    }

    /// Probability of landing on slot `index` (0 when out of range).
    pub fn probability(&self, index: usize) -> f64 {
        if index >= self.multipliers.len() {
            return 0.0;
        }
        match &self.weighting {
            Weighting::Uniform => 1.0 / self.multipliers.len() as f64,
            Weighting::Weighted(weights) => weights.get(index).copied().unwrap_or(0.0),
        }
    }

    /// Per-slot probabilities.
    pub fn probabilities(&self) -> Vec<f64> {
        match &self.weighting {
            Weighting::Uniform => {
                vec![1.0 / self.multipliers.len() as f64; self.multipliers.len()]
            }
            Weighting::Weighted(weights) => weights.clone(),
        }
    }

    /// Probability-weighted expected multiplier.
    pub fn expected_value(&self) -> f64 {
        match &self.weighting {
            Weighting::Uniform => {
                if self.multipliers.is_empty() {
                    return 0.0;
                }
                self.multipliers.iter().sum::<f64>() / self.multipliers.len() as f64
            }
            Weighting::Weighted(weights) => self
                .multipliers
                .iter()
                .zip(weights)
                .map(|(m, p)| m * p)
                .sum(),
        }
    }

    /// Probability of any paying slot.
    pub fn win_probability(&self) -> f64 {
        (0..self.multipliers.len())
            .filter(|&i| self.multipliers[i] > 0.0)
            .map(|i| self.probability(i))
            .sum()
    }

    pub fn max_multiplier(&self) -> f64 {
        self.multipliers.iter().copied().fold(0.0, f64::max)
    }

    pub fn into_multipliers(self) -> Vec<f64> {
        self.multipliers
    }
}
