//! Return-to-player targets.
//!
//! The table is built once (from defaults or a config file) and passed by reference to every
//! generator. Iteration order follows [`GameId`] ordering so that audits and reports are stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{GameId, RtpError, DEFAULT_MINES_RTP, DEFAULT_RTP};

/// Immutable map of game to target RTP fraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<GameId, f64>", into = "BTreeMap<GameId, f64>")]
pub struct RtpTable {
    targets: BTreeMap<GameId, f64>,
}

impl Default for RtpTable {
    fn default() -> Self {
        let targets = GameId::ALL
            .iter()
            .map(|&game| (game, Self::default_target(game)))
            .collect();
        Self { targets }
    }
}

impl RtpTable {
    /// Default target for a game.
    pub const fn default_target(game: GameId) -> f64 {
        match game {
            GameId::Mines => DEFAULT_MINES_RTP,
            _ => DEFAULT_RTP,
        }
    }

    /// Build a table from explicit targets. Games not listed have no target.
    pub fn from_targets(targets: BTreeMap<GameId, f64>) -> Result<Self, RtpError> {
        for (&game, &value) in &targets {
            validate_target(game, value)?;
        }
        Ok(Self { targets })
    }

    /// Parse a YAML mapping of game id to target.
    pub fn from_yaml_str(raw: &str) -> Result<Self, RtpError> {
        let targets: BTreeMap<GameId, f64> =
            serde_yaml::from_str(raw).map_err(|err| RtpError::Config(err.to_string()))?;
        Self::from_targets(targets)
    }

    /// Parse a JSON object of game id to target.
    pub fn from_json_str(raw: &str) -> Result<Self, RtpError> {
        let targets: BTreeMap<GameId, f64> =
            serde_json::from_str(raw).map_err(|err| RtpError::Config(err.to_string()))?;
        Self::from_targets(targets)
    }

    /// Overlay `overrides` on top of this table.
    pub fn merge(mut self, overrides: &RtpTable) -> Self {
        for (&game, &value) in &overrides.targets {
            self.targets.insert(game, value);
        }
        self
    }

    /// Replace a single target.
    pub fn with_target(mut self, game: GameId, value: f64) -> Result<Self, RtpError> {
        validate_target(game, value)?;
        self.targets.insert(game, value);
        Ok(self)
    }

    /// Target RTP for a game.
    pub fn target(&self, game: GameId) -> Result<f64, RtpError> {
        self.targets
            .get(&game)
            .copied()
            .ok_or(RtpError::MissingTarget(game))
    }

    /// House edge (`1 - target`) for a game.
    pub fn house_edge(&self, game: GameId) -> Result<f64, RtpError> {
        Ok(1.0 - self.target(game)?)
    }

    pub fn contains(&self, game: GameId) -> bool {
        self.targets.contains_key(&game)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameId, f64)> + '_ {
        self.targets.iter().map(|(&game, &value)| (game, value))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TryFrom<BTreeMap<GameId, f64>> for RtpTable {
    type Error = RtpError;

    fn try_from(targets: BTreeMap<GameId, f64>) -> Result<Self, Self::Error> {
        Self::from_targets(targets)
    }
}

impl From<RtpTable> for BTreeMap<GameId, f64> {
    fn from(table: RtpTable) -> Self {
        table.targets
    }
}

/// Check `0 < value <= 1`.
pub fn validate_target(game: GameId, value: f64) -> Result<(), RtpError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(RtpError::InvalidTarget { game, value })
    }
}
