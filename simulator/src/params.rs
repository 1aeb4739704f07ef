//! Command line parsers for game parameters.

use houseline_types::casino::{HiLoGuess, PlinkoMode, RouletteBet};

/// Parse a roulette bet: `red`, `black`, `even`, `odd`, `low`, `high`, `straight:<n>`,
/// `dozen:<0-2>` or `column:<0-2>`.
pub fn parse_roulette_bet(raw: &str) -> Result<RouletteBet, String> {
    let raw = raw.trim().to_ascii_lowercase();
    let (kind, number) = match raw.split_once(':') {
        Some((kind, number)) => {
            let number = number
                .trim()
                .parse::<u8>()
                .map_err(|err| format!("invalid number in roulette bet {raw:?}: {err}"))?;
            (kind.trim(), Some(number))
        }
        None => (raw.as_str(), None),
    };

    match (kind, number) {
        ("red", None) => Ok(RouletteBet::Red),
        ("black", None) => Ok(RouletteBet::Black),
        ("even", None) => Ok(RouletteBet::Even),
        ("odd", None) => Ok(RouletteBet::Odd),
        ("low", None) => Ok(RouletteBet::Low),
        ("high", None) => Ok(RouletteBet::High),
        ("straight", Some(n)) => Ok(RouletteBet::Straight(n)),
        ("dozen", Some(n)) => Ok(RouletteBet::Dozen(n)),
        ("column", Some(n)) => Ok(RouletteBet::Column(n)),
        _ => Err(format!("unknown roulette bet {raw:?}")),
    }
}

pub fn parse_plinko_mode(raw: &str) -> Result<PlinkoMode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "normal" => Ok(PlinkoMode::Normal),
        "degen" => Ok(PlinkoMode::Degen),
        other => Err(format!("unknown plinko mode {other:?} (expected normal or degen)")),
    }
}

pub fn parse_hilo_guess(raw: &str) -> Result<HiLoGuess, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "higher" | "higher_or_same" | "hi" => Ok(HiLoGuess::HigherOrSame),
        "lower" | "lower_or_same" | "lo" => Ok(HiLoGuess::LowerOrSame),
        other => Err(format!("unknown hilo guess {other:?} (expected higher or lower)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roulette_bets() {
        assert_eq!(parse_roulette_bet("red"), Ok(RouletteBet::Red));
        assert_eq!(parse_roulette_bet(" Black "), Ok(RouletteBet::Black));
        assert_eq!(parse_roulette_bet("straight:17"), Ok(RouletteBet::Straight(17)));
        assert_eq!(parse_roulette_bet("dozen:2"), Ok(RouletteBet::Dozen(2)));
        assert_eq!(parse_roulette_bet("column:0"), Ok(RouletteBet::Column(0)));
    }

    #[test]
    fn rejects_bad_roulette_bets() {
        assert!(parse_roulette_bet("straight").is_err());
        assert!(parse_roulette_bet("red:3").is_err());
        assert!(parse_roulette_bet("dozen:x").is_err());
        assert!(parse_roulette_bet("split:1").is_err());
    }

    #[test]
    fn parses_modes_and_guesses() {
        assert_eq!(parse_plinko_mode("Degen"), Ok(PlinkoMode::Degen));
        assert!(parse_plinko_mode("wild").is_err());
        assert_eq!(parse_hilo_guess("lower"), Ok(HiLoGuess::LowerOrSame));
        assert_eq!(parse_hilo_guess("higher_or_same"), Ok(HiLoGuess::HigherOrSame));
        assert!(parse_hilo_guess("same").is_err());
    }
}
