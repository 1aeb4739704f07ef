//! Per-game parameters that select which bet array is generated.
//!
//! Parameters are small immutable values chosen by the player for a single play. Range checks
//! live with the generators so that a bad value is reported with the game's own error.

use serde::{Deserialize, Serialize};

use super::{GameId, PLINKO_DEGEN_ROWS, PLINKO_NORMAL_ROWS};

/// Dice: win when the roll (0..100) lands under `roll_under`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceParams {
    pub roll_under: u8,
}

impl Default for DiceParams {
    fn default() -> Self {
        Self { roll_under: 50 }
    }
}

/// Mines: board with `mine_count` mines of which `cells_revealed` safe cells are already open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesParams {
    pub mine_count: u8,
    #[serde(default)]
    pub cells_revealed: u8,
}

impl Default for MinesParams {
    fn default() -> Self {
        Self {
            mine_count: 3,
            cells_revealed: 0,
        }
    }
}

/// Plinko board mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlinkoMode {
    /// 14 peg rows.
    #[default]
    Normal,
    /// 16 peg rows.
    Degen,
}

impl PlinkoMode {
    pub const fn rows(&self) -> u8 {
        match self {
            PlinkoMode::Normal => PLINKO_NORMAL_ROWS,
            PlinkoMode::Degen => PLINKO_DEGEN_ROWS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlinkoParams {
    #[serde(default)]
    pub mode: PlinkoMode,
}

/// Roulette bet types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "lowercase")]
pub enum RouletteBet {
    /// Single number 0-36.
    Straight(u8),
    Red,
    Black,
    Even,
    Odd,
    /// 1-18.
    Low,
    /// 19-36.
    High,
    /// 0 = 1-12, 1 = 13-24, 2 = 25-36.
    Dozen(u8),
    /// 0 = 1, 4, 7, ..; 1 = 2, 5, 8, ..; 2 = 3, 6, 9, ..
    Column(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteParams {
    pub bet: RouletteBet,
}

impl Default for RouletteParams {
    fn default() -> Self {
        Self {
            bet: RouletteBet::Red,
        }
    }
}

/// Limbo: win when the drawn multiplier reaches `target_multiplier`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LimboParams {
    pub target_multiplier: f64,
}

impl Default for LimboParams {
    fn default() -> Self {
        Self {
            target_multiplier: 2.0,
        }
    }
}

/// Crash: automatic cash out at `cash_out_at`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrashParams {
    pub cash_out_at: f64,
}

impl Default for CrashParams {
    fn default() -> Self {
        Self { cash_out_at: 2.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiLoGuess {
    #[default]
    HigherOrSame,
    LowerOrSame,
}

/// HiLo: guess whether the next card ranks at least / at most `current_rank` (Ace = 1, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiLoParams {
    pub current_rank: u8,
    #[serde(default)]
    pub guess: HiLoGuess,
}

impl Default for HiLoParams {
    fn default() -> Self {
        Self {
            current_rank: 7,
            guess: HiLoGuess::HigherOrSame,
        }
    }
}

/// Keno: the player marks `picks` numbers on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KenoParams {
    pub picks: u8,
}

impl Default for KenoParams {
    fn default() -> Self {
        Self { picks: 5 }
    }
}

/// Parameters for any supported game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum GameParams {
    Dice(DiceParams),
    Flip,
    #[serde(rename = "magic8ball")]
    MagicEightBall,
    Mines(MinesParams),
    Plinko(PlinkoParams),
    Roulette(RouletteParams),
    Limbo(LimboParams),
    Crash(CrashParams),
    HiLo(HiLoParams),
    Keno(KenoParams),
}

impl GameParams {
    /// Default parameters for a game.
    pub fn default_for(game: GameId) -> Self {
        match game {
            GameId::Dice => Self::Dice(DiceParams::default()),
            GameId::Flip => Self::Flip,
            GameId::MagicEightBall => Self::MagicEightBall,
            GameId::Mines => Self::Mines(MinesParams::default()),
            GameId::Plinko => Self::Plinko(PlinkoParams::default()),
            GameId::Roulette => Self::Roulette(RouletteParams::default()),
            GameId::Limbo => Self::Limbo(LimboParams::default()),
            GameId::Crash => Self::Crash(CrashParams::default()),
            GameId::HiLo => Self::HiLo(HiLoParams::default()),
            GameId::Keno => Self::Keno(KenoParams::default()),
        }
    }

    /// Get the game these parameters belong to.
    pub fn game(&self) -> GameId {
        match self {
            Self::Dice(_) => GameId::Dice,
            Self::Flip => GameId::Flip,
            Self::MagicEightBall => GameId::MagicEightBall,
            Self::Mines(_) => GameId::Mines,
            Self::Plinko(_) => GameId::Plinko,
            Self::Roulette(_) => GameId::Roulette,
            Self::Limbo(_) => GameId::Limbo,
            Self::Crash(_) => GameId::Crash,
            Self::HiLo(_) => GameId::HiLo,
            Self::Keno(_) => GameId::Keno,
        }
    }
}
