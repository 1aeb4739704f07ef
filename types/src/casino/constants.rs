/// Maximum allowed distance between a bet array's expected value and its RTP target.
pub const RTP_TOLERANCE: f64 = 0.01;

/// Maximum allowed distance between the sum of outcome weights and 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Decimal places kept on per-slot multipliers (dice, flip, mines, roulette, hilo).
pub const SLOT_MULTIPLIER_DECIMALS: u32 = 4;

/// Decimal places kept on per-bucket multipliers (plinko, keno).
pub const BUCKET_MULTIPLIER_DECIMALS: u32 = 2;

/// Default RTP targets.
pub const DEFAULT_RTP: f64 = 0.95;
pub const DEFAULT_MINES_RTP: f64 = 0.94;

/// Dice: one slot per percentile.
pub const DICE_SLOTS: usize = 100;
pub const DICE_MIN_ROLL_UNDER: u8 = 1;
pub const DICE_MAX_ROLL_UNDER: u8 = 100;

/// Binary games (flip, magic 8-ball): fair payout on a 50/50 outcome.
pub const BINARY_FAIR_MULTIPLIER: f64 = 2.0;

/// Mines board (5x5).
pub const MINES_GRID_SIZE: u8 = 25;
/// Mine counts offered by the board.
pub const MINES_ALLOWED_COUNTS: [u8; 6] = [1, 3, 5, 10, 15, 24];

/// Plinko peg rows per mode.
pub const PLINKO_NORMAL_ROWS: u8 = 14;
pub const PLINKO_DEGEN_ROWS: u8 = 16;

/// European single-zero wheel.
pub const ROULETTE_SLOTS: u8 = 37;
/// Red numbers on a roulette wheel.
pub const ROULETTE_RED_NUMBERS: [u8; 18] =
    [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Target multipliers (limbo and crash) are quantized to hundredths.
pub const TARGET_MULTIPLIER_MIN_HUNDREDTHS: u32 = 101;
pub const TARGET_MULTIPLIER_MAX_HUNDREDTHS: u32 = 10_000;
/// Resolution of the win-probability encoding for target multiplier games.
pub const TARGET_MULTIPLIER_RESOLUTION: u64 = 10_000;
/// Longest target multiplier array; larger layouts are coarsened to fit.
pub const TARGET_MULTIPLIER_MAX_SLOTS: u64 = 10_000;

/// Ranks per suit (Ace = 1 .. King = 13).
pub const HILO_RANKS: u8 = 13;

/// Keno board: numbers on the board and numbers drawn per round.
pub const KENO_NUMBERS: u8 = 40;
pub const KENO_DRAWN: u8 = 10;
pub const KENO_MIN_PICKS: u8 = 1;
pub const KENO_MAX_PICKS: u8 = 10;
