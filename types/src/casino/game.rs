use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::RtpError;

/// Games whose settlement is driven by a bet array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Dice,
    Flip,
    #[serde(rename = "magic8ball")]
    MagicEightBall,
    Mines,
    Plinko,
    Roulette,
    Limbo,
    Crash,
    HiLo,
    Keno,
}

impl GameId {
    /// Every supported game, in a stable order.
    pub const ALL: [GameId; 10] = [
        GameId::Dice,
        GameId::Flip,
        GameId::MagicEightBall,
        GameId::Mines,
        GameId::Plinko,
        GameId::Roulette,
        GameId::Limbo,
        GameId::Crash,
        GameId::HiLo,
        GameId::Keno,
    ];

    /// Stable lowercase identifier (matches the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameId::Dice => "dice",
            GameId::Flip => "flip",
            GameId::MagicEightBall => "magic8ball",
            GameId::Mines => "mines",
            GameId::Plinko => "plinko",
            GameId::Roulette => "roulette",
            GameId::Limbo => "limbo",
            GameId::Crash => "crash",
            GameId::HiLo => "hilo",
            GameId::Keno => "keno",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameId {
    type Err = RtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        GameId::ALL
            .iter()
            .copied()
            .find(|game| game.as_str() == normalized)
            .ok_or_else(|| RtpError::UnknownGame(s.to_string()))
    }
}
