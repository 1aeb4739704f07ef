//! Common types used throughout houseline.
//!
//! Everything here is plain data: game identifiers, per-game parameters, the RTP target table and
//! the bet array handed to the settlement engine. Generation and verification live in
//! `houseline-execution`.

pub mod casino;

pub use casino::{
    BetArray, BetArrayError, GameId, GameParams, RtpError, RtpTable, Weighting, RTP_TOLERANCE,
};
