//! Casino domain types.
//!
//! Defines game identifiers, game parameters, RTP targets, bet arrays and constants used by the
//! execution layer and clients.

mod bet_array;
mod constants;
mod error;
mod game;
mod params;
mod rtp;

pub use bet_array::*;
pub use constants::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use rtp::*;
