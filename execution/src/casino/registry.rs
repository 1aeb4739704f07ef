//! Game registry for managing available games and their RTP configuration.
//!
//! The registry provides:
//! - Centralized listing of supported games
//! - The RTP target table every generator reads
//! - Per-game default parameters, adjustable at runtime
//! - Active/inactive game filtering
//! - Metadata for display (names, descriptions, categories)
//!
//! # Example
//! ```rust
//! use houseline_execution::casino::registry::{GameCategory, GameRegistry};
//! use houseline_types::casino::GameId;
//!
//! let registry = GameRegistry::default();
//! assert!(registry.is_active(GameId::Plinko));
//! let info = GameRegistry::get_info(GameId::Plinko);
//! assert_eq!(info.name, "Plinko");
//! assert_eq!(info.category, GameCategory::Board);
//! ```

use std::collections::HashMap;

use houseline_types::casino::{BetArray, GameId, GameParams, RtpTable};
use serde::Serialize;

use super::{
    calculate_bet_array,
    verify::{check_rtp, RtpCheck},
    GameError,
};

/// Game category for display grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    /// Single draw, fixed odds (Dice, Flip, Magic 8-Ball).
    Instant,
    /// Player picks a target multiplier (Limbo, Crash).
    Multiplier,
    /// Board games with a distribution of outcomes (Mines, Plinko, Keno).
    Board,
    /// Wheel games (Roulette).
    Table,
    /// Card games (HiLo).
    Cards,
}

/// Metadata about a game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameInfo {
    pub game: GameId,
    /// Display name.
    pub name: &'static str,
    pub description: &'static str,
    pub category: GameCategory,
    /// Whether the game is currently active.
    pub active: bool,
}

impl GameInfo {
    const fn new(
        game: GameId,
        name: &'static str,
        description: &'static str,
        category: GameCategory,
    ) -> Self {
        Self {
            game,
            name,
            description,
            category,
            active: true,
        }
    }
}

/// Registry of available games, their RTP targets and default parameters.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    table: RtpTable,
    defaults: HashMap<GameId, GameParams>,
    active: HashMap<GameId, bool>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(RtpTable::default())
    }
}

impl GameRegistry {
    /// Create a registry with every game active and default parameters.
    pub fn new(table: RtpTable) -> Self {
        let mut defaults = HashMap::new();
        let mut active = HashMap::new();

        for &game in Self::all_games() {
            defaults.insert(game, GameParams::default_for(game));
            active.insert(game, true);
        }

        Self {
            table,
            defaults,
            active,
        }
    }

    /// List all supported games.
    pub fn all_games() -> &'static [GameId] {
        &GameId::ALL
    }

    /// Get static metadata for a game.
    pub fn get_info(game: GameId) -> GameInfo {
        match game {
            GameId::Dice => GameInfo::new(
                GameId::Dice,
                "Dice",
                "Roll under your chosen number.",
                GameCategory::Instant,
            ),
            GameId::Flip => GameInfo::new(
                GameId::Flip,
                "Coin Flip",
                "Call heads or tails.",
                GameCategory::Instant,
            ),
            GameId::MagicEightBall => GameInfo::new(
                GameId::MagicEightBall,
                "Magic 8-Ball",
                "Ask the ball a yes or no question.",
                GameCategory::Instant,
            ),
            GameId::Mines => GameInfo::new(
                GameId::Mines,
                "Mines",
                "Reveal safe cells and cash out before hitting a mine.",
                GameCategory::Board,
            ),
            GameId::Plinko => GameInfo::new(
                GameId::Plinko,
                "Plinko",
                "Drop a ball through the pegs into a paying bucket.",
                GameCategory::Board,
            ),
            GameId::Roulette => GameInfo::new(
                GameId::Roulette,
                "Roulette",
                "Spin the European wheel and bet on numbers or colors.",
                GameCategory::Table,
            ),
            GameId::Limbo => GameInfo::new(
                GameId::Limbo,
                "Limbo",
                "Pick a target multiplier and hope the draw reaches it.",
                GameCategory::Multiplier,
            ),
            GameId::Crash => GameInfo::new(
                GameId::Crash,
                "Crash",
                "Cash out before the multiplier crashes.",
                GameCategory::Multiplier,
            ),
            GameId::HiLo => GameInfo::new(
                GameId::HiLo,
                "Hi-Lo",
                "Predict if the next card ranks higher or lower.",
                GameCategory::Cards,
            ),
            GameId::Keno => GameInfo::new(
                GameId::Keno,
                "Keno",
                "Mark numbers and match the draw.",
                GameCategory::Board,
            ),
        }
    }

    /// RTP targets in use.
    pub fn rtp_table(&self) -> &RtpTable {
        &self.table
    }

    /// Check if a game is active.
    pub fn is_active(&self, game: GameId) -> bool {
        self.active.get(&game).copied().unwrap_or(false)
    }

    /// Set a game's active status.
    pub fn set_active(&mut self, game: GameId, active: bool) {
        self.active.insert(game, active);
    }

    /// Get all active games.
    pub fn active_games(&self) -> Vec<GameId> {
        Self::all_games()
            .iter()
            .copied()
            .filter(|&game| self.is_active(game))
            .collect()
    }

    /// Default parameters used by [`Self::default_bet_array`] and [`Self::audit`].
    pub fn default_params(&self, game: GameId) -> GameParams {
        self.defaults
            .get(&game)
            .copied()
            .unwrap_or_else(|| GameParams::default_for(game))
    }

    /// Replace the default parameters for the game `params` belongs to.
    pub fn set_default_params(&mut self, params: GameParams) {
        self.defaults.insert(params.game(), params);
    }

    /// Build a bet array, refusing inactive games.
    pub fn bet_array(&self, params: &GameParams) -> Result<BetArray, GameError> {
        let game = params.game();
        if !self.is_active(game) {
            return Err(GameError::GameInactive(game));
        }
        calculate_bet_array(&self.table, params)
    }

    pub fn default_bet_array(&self, game: GameId) -> Result<BetArray, GameError> {
        self.bet_array(&self.default_params(game))
    }

    /// Check every active game's default bet array against its target.
    pub fn audit(&self) -> Result<Vec<RtpCheck>, GameError> {
        self.active_games()
            .into_iter()
            .map(|game| -> Result<RtpCheck, GameError> {
                let array = self.default_bet_array(game)?;
                Ok(check_rtp(&self.table, game, &array)?)
            })
            .collect()
    }

    /// Get all game info with current active status.
    pub fn all_games_info(&self) -> Vec<GameInfo> {
        Self::all_games()
            .iter()
            .map(|&game| {
                let mut info = Self::get_info(game);
                info.active = self.is_active(game);
                info
            })
            .collect()
    }

    /// Get games by category.
    pub fn games_by_category(&self, category: GameCategory) -> Vec<GameId> {
        Self::all_games()
            .iter()
            .copied()
            .filter(|&game| Self::get_info(game).category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use houseline_types::casino::{DiceParams, MinesParams, RtpError};

    #[test]
    fn test_registry_default() {
        let registry = GameRegistry::default();

        for &game in GameRegistry::all_games() {
            assert!(registry.is_active(game), "{game} should be active");
            assert_eq!(registry.default_params(game).game(), game);
        }
        assert_eq!(registry.rtp_table(), &RtpTable::default());
    }

    #[test]
    fn test_set_active() {
        let mut registry = GameRegistry::default();

        assert!(registry.is_active(GameId::Keno));
        registry.set_active(GameId::Keno, false);
        assert!(!registry.is_active(GameId::Keno));
        assert_eq!(
            registry.default_bet_array(GameId::Keno),
            Err(GameError::GameInactive(GameId::Keno))
        );
        registry.set_active(GameId::Keno, true);
        assert!(registry.default_bet_array(GameId::Keno).is_ok());
    }

    #[test]
    fn test_active_games() {
        let mut registry = GameRegistry::default();
        assert_eq!(registry.active_games().len(), 10);

        registry.set_active(GameId::Crash, false);
        registry.set_active(GameId::Roulette, false);

        let active = registry.active_games();
        assert_eq!(active.len(), 8);
        assert!(!active.contains(&GameId::Crash));
        assert!(!active.contains(&GameId::Roulette));
    }

    #[test]
    fn test_games_by_category() {
        let registry = GameRegistry::default();

        let board = registry.games_by_category(GameCategory::Board);
        assert_eq!(board, vec![GameId::Mines, GameId::Plinko, GameId::Keno]);

        let instant = registry.games_by_category(GameCategory::Instant);
        assert!(instant.contains(&GameId::Dice));
        assert!(instant.contains(&GameId::MagicEightBall));

        assert_eq!(
            registry.games_by_category(GameCategory::Cards),
            vec![GameId::HiLo]
        );
    }

    #[test]
    fn test_all_games_info() {
        let mut registry = GameRegistry::default();
        registry.set_active(GameId::Limbo, false);

        let infos = registry.all_games_info();
        assert_eq!(infos.len(), 10);

        let limbo = infos.iter().find(|i| i.game == GameId::Limbo).unwrap();
        assert!(!limbo.active);
        let dice = infos.iter().find(|i| i.game == GameId::Dice).unwrap();
        assert!(dice.active);
        assert_eq!(dice.name, "Dice");
    }

    #[test]
    fn test_audit_passes_with_defaults() {
        let registry = GameRegistry::default();
        let checks = registry.audit().unwrap();
        assert_eq!(checks.len(), 10);
        for check in checks {
            assert!(check.within_tolerance, "{check:?}");
        }
    }

    #[test]
    fn test_audit_skips_inactive_games() {
        let mut registry = GameRegistry::default();
        registry.set_active(GameId::Mines, false);
        let checks = registry.audit().unwrap();
        assert_eq!(checks.len(), 9);
        assert!(checks.iter().all(|c| c.game != GameId::Mines));
    }

    #[test]
    fn test_audit_reports_missing_target() {
        let table = RtpTable::from_yaml_str("dice: 0.97\n").unwrap();
        let registry = GameRegistry::new(table);
        assert_eq!(
            registry.audit(),
            Err(GameError::Rtp(RtpError::MissingTarget(GameId::Flip)))
        );
    }

    #[test]
    fn test_set_default_params() {
        let mut registry = GameRegistry::default();
        registry.set_default_params(GameParams::Dice(DiceParams { roll_under: 10 }));
        registry.set_default_params(GameParams::Mines(MinesParams {
            mine_count: 24,
            cells_revealed: 0,
        }));

        let dice = registry.default_bet_array(GameId::Dice).unwrap();
        assert_eq!(dice.multipliers()[0], 9.5);
        let mines = registry.default_bet_array(GameId::Mines).unwrap();
        assert_eq!(mines.multipliers()[0], 23.5);
    }
}
