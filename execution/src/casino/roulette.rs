//! Roulette bet array.
//!
//! European wheel: 37 equiprobable pockets `0..=36`, one slot per pocket. A bet covers a set of
//! pockets; covered slots pay `round4(37 / covered * rtp)` and the rest lose.
//!
//! Bet coverage:
//! - Straight: one number, zero included
//! - Red / Black / Even / Odd / Low (1-18) / High (19-36): 18 numbers
//! - Dozen 0/1/2: 1-12, 13-24, 25-36
//! - Column 0/1/2: numbers `n` with `(n - 1) % 3` equal to the column
//!
//! Zero loses every bet except a straight bet on zero.

use houseline_types::casino::{
    BetArray, GameId, RouletteBet, RouletteParams, RtpTable, ROULETTE_RED_NUMBERS, ROULETTE_SLOTS,
    SLOT_MULTIPLIER_DECIMALS,
};

use super::{math::round_to, GameError};

/// Check if a number is red.
pub fn is_red(number: u8) -> bool {
    ROULETTE_RED_NUMBERS.contains(&number)
}

/// Check if a bet wins for a given pocket.
pub fn bet_wins(bet: RouletteBet, result: u8) -> bool {
    if result == 0 {
        return bet == RouletteBet::Straight(0);
    }

    match bet {
        RouletteBet::Straight(number) => number == result,
        RouletteBet::Red => is_red(result),
        RouletteBet::Black => !is_red(result),
        RouletteBet::Even => result % 2 == 0,
        RouletteBet::Odd => result % 2 == 1,
        RouletteBet::Low => (1..=18).contains(&result),
        RouletteBet::High => (19..=36).contains(&result),
        RouletteBet::Dozen(dozen) => (result - 1) / 12 == dozen,
        RouletteBet::Column(column) => (result - 1) % 3 == column,
    }
}

fn validate(bet: RouletteBet) -> Result<(), GameError> {
    let valid = match bet {
        RouletteBet::Straight(number) => number < ROULETTE_SLOTS,
        RouletteBet::Dozen(index) | RouletteBet::Column(index) => index <= 2,
        _ => true,
    };
    if !valid {
        return Err(GameError::InvalidRouletteBet(bet));
    }
    Ok(())
}

/// Number of pockets the bet covers.
pub fn covered(bet: RouletteBet) -> Result<usize, GameError> {
    validate(bet)?;
    Ok((0..ROULETTE_SLOTS).filter(|&n| bet_wins(bet, n)).count())
}

pub fn get_multiplier(table: &RtpTable, bet: RouletteBet) -> Result<f64, GameError> {
    let rtp = table.target(GameId::Roulette)?;
    let covered = covered(bet)?;
    Ok(round_to(
        ROULETTE_SLOTS as f64 / covered as f64 * rtp,
        SLOT_MULTIPLIER_DECIMALS,
    ))
}

pub fn bet_array(table: &RtpTable, params: &RouletteParams) -> Result<BetArray, GameError> {
    let multiplier = get_multiplier(table, params.bet)?;
    let multipliers = (0..ROULETTE_SLOTS)
        .map(|pocket| {
            if bet_wins(params.bet, pocket) {
                multiplier
            } else {
                0.0
            }
        })
        .collect();
    Ok(BetArray::uniform(multipliers)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_red() {
        assert!(is_red(1));
        assert!(is_red(3));
        assert!(is_red(32));
        assert!(!is_red(2));
        assert!(!is_red(4));
        assert!(!is_red(0));
    }

    #[test]
    fn test_bet_wins_straight() {
        assert!(bet_wins(RouletteBet::Straight(17), 17));
        assert!(!bet_wins(RouletteBet::Straight(17), 18));
        assert!(bet_wins(RouletteBet::Straight(0), 0));
        assert!(!bet_wins(RouletteBet::Straight(1), 0));
    }

    #[test]
    fn test_zero_loses_outside_bets() {
        for bet in [
            RouletteBet::Red,
            RouletteBet::Black,
            RouletteBet::Even,
            RouletteBet::Odd,
            RouletteBet::Low,
            RouletteBet::High,
            RouletteBet::Dozen(0),
            RouletteBet::Column(0),
        ] {
            assert!(!bet_wins(bet, 0), "{bet:?} should lose on zero");
        }
    }

    #[test]
    fn test_bet_wins_dozen_and_column() {
        assert!(bet_wins(RouletteBet::Dozen(0), 12));
        assert!(!bet_wins(RouletteBet::Dozen(0), 13));
        assert!(bet_wins(RouletteBet::Dozen(1), 24));
        assert!(bet_wins(RouletteBet::Dozen(2), 25));

        assert!(bet_wins(RouletteBet::Column(0), 34));
        assert!(bet_wins(RouletteBet::Column(1), 35));
        assert!(bet_wins(RouletteBet::Column(2), 36));
        assert!(!bet_wins(RouletteBet::Column(2), 1));
    }

    #[test]
    fn test_coverage() {
        assert_eq!(covered(RouletteBet::Straight(0)).unwrap(), 1);
        assert_eq!(covered(RouletteBet::Red).unwrap(), 18);
        assert_eq!(covered(RouletteBet::Black).unwrap(), 18);
        assert_eq!(covered(RouletteBet::Even).unwrap(), 18);
        assert_eq!(covered(RouletteBet::High).unwrap(), 18);
        assert_eq!(covered(RouletteBet::Dozen(1)).unwrap(), 12);
        assert_eq!(covered(RouletteBet::Column(2)).unwrap(), 12);
    }

    #[test]
    fn test_bet_array_layout() {
        let table = RtpTable::default();
        let array = bet_array(&table, &RouletteParams::default()).unwrap();
        assert_eq!(array.len(), 37);
        assert_eq!(array.multipliers()[0], 0.0);
        // 37 / 18 * 0.95 = 1.95277..
        assert_eq!(array.multipliers()[1], 1.9528);
        assert_eq!(array.multipliers()[2], 0.0);
        assert!((array.expected_value() - 0.95).abs() < 1e-3);

        let straight = get_multiplier(&table, RouletteBet::Straight(7)).unwrap();
        assert_eq!(straight, 35.15);
    }

    #[test]
    fn test_invalid_bets() {
        let table = RtpTable::default();
        for bet in [
            RouletteBet::Straight(37),
            RouletteBet::Dozen(3),
            RouletteBet::Column(9),
        ] {
            assert_eq!(
                bet_array(&table, &RouletteParams { bet }),
                Err(GameError::InvalidRouletteBet(bet))
            );
        }
    }
}
