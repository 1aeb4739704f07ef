//! Houseline execution layer.
//!
//! This crate turns game parameters into the bet arrays consumed by the settlement engine and
//! checks that every array returns its configured RTP.
//!
//! ## Determinism requirements
//! - Generators are pure: the same table and parameters always yield the same array.
//! - Do not use randomness outside [`settlement::SeededSettlement`], which derives it from a seed.
//! - Avoid iteration order of hash-based collections influencing outputs.
//!
//! ## Example
//! ```rust
//! use houseline_execution::casino::{calculate_bet_array, verify::validate_rtp};
//! use houseline_types::casino::{DiceParams, GameId, GameParams, RtpTable};
//!
//! let table = RtpTable::default();
//! let bet = calculate_bet_array(&table, &GameParams::Dice(DiceParams { roll_under: 50 })).unwrap();
//! assert_eq!(bet.len(), 100);
//! assert!(validate_rtp(&table, GameId::Dice, &bet).unwrap());
//! ```

pub mod casino;
pub mod settlement;

pub use casino::registry::{GameCategory, GameInfo, GameRegistry};
pub use casino::verify::{calculate_rtp, check_rtp, validate_rtp, RtpCheck};
pub use casino::{calculate_bet_array, GameError};
pub use settlement::{PlayResult, SeededSettlement, Settlement, SettlementError};
