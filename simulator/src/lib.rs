//! Tooling behind the `houseline-simulator` binary: RTP config loading, command line parameter
//! parsing and Monte Carlo simulation against the seeded settlement.

mod config;
pub use config::{load_rtp_table, resolve_rtp_table};

mod params;
pub use params::{parse_hilo_guess, parse_plinko_mode, parse_roulette_bet};

mod simulate;
pub use simulate::{simulate, SimulationError};

mod stats;
pub use stats::{SimulationReport, Stats};
