//! Shared probability helpers.
//!
//! Counting is done in `u128` so binomial coefficients for every board size we use are exact;
//! conversion to `f64` happens only when forming probabilities.

/// Round `value` to `decimals` places, halves rounding up.
///
/// Multipliers are always non-negative, so this matches rounding half toward positive infinity.
/// Kept explicit so that `0.125` rounds to `0.13` and never to the banker's `0.12`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale + 0.5).floor() / scale
}

/// `C(n, k)`; zero when `k > n`.
pub fn binomial_coefficient(n: u32, k: u32) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Each partial product is itself a binomial coefficient, so the division is exact.
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// Probability of exactly `k` rights in `n` fair left/right bounces.
pub fn binomial_pmf(n: u32, k: u32) -> f64 {
    binomial_coefficient(n, k) as f64 / 2f64.powi(n as i32)
}

/// Probability of exactly `hits` marked numbers among `drawn` numbers drawn from a board of
/// `population` numbers, `marked` of which were picked.
pub fn hypergeometric_pmf(population: u32, marked: u32, drawn: u32, hits: u32) -> f64 {
    if hits > marked || hits > drawn || marked > population || drawn > population {
        return 0.0;
    }
    let misses = drawn - hits;
    let unmarked = population - marked;
    let ways = binomial_coefficient(marked, hits) * binomial_coefficient(unmarked, misses);
    let total = binomial_coefficient(population, drawn);
    if total == 0 {
        return 0.0;
    }
    ways as f64 / total as f64
}

/// Probability of surviving `reveals` consecutive picks without hitting one of `mines`.
pub fn survival_probability(grid: u32, mines: u32, reveals: u32) -> f64 {
    let safe = grid.saturating_sub(mines);
    if reveals > safe {
        return 0.0;
    }
    (0..reveals)
        .map(|i| (safe - i) as f64 / (grid - i) as f64)
        .product()
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(1.06818181, 4), 1.0682);
        assert_eq!(round_to(2.0, 4), 2.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_binomial_coefficients() {
        assert_eq!(binomial_coefficient(8, 4), 70);
        assert_eq!(binomial_coefficient(14, 7), 3432);
        assert_eq!(binomial_coefficient(16, 0), 1);
        assert_eq!(binomial_coefficient(40, 10), 847_660_528);
        assert_eq!(binomial_coefficient(3, 5), 0);
        let row: Vec<u128> = (0..=8).map(|k| binomial_coefficient(8, k)).collect();
        assert_eq!(row, vec![1, 8, 28, 56, 70, 56, 28, 8, 1]);
    }

    #[test]
    fn test_binomial_pmf_sums_to_one() {
        for n in [8, 14, 16] {
            let total: f64 = (0..=n).map(|k| binomial_pmf(n, k)).sum();
            assert!((total - 1.0).abs() < 1e-12, "n={n} sums to {total}");
        }
        assert_eq!(binomial_pmf(14, 0), 1.0 / 16384.0);
    }

    #[test]
    fn test_hypergeometric_pmf() {
        // One pick on a 40 number board with 10 drawn hits a quarter of the time.
        assert!((hypergeometric_pmf(40, 1, 10, 1) - 0.25).abs() < 1e-12);
        for marked in 1..=10 {
            let total: f64 = (0..=marked)
                .map(|hits| hypergeometric_pmf(40, marked, 10, hits))
                .sum();
            assert!((total - 1.0).abs() < 1e-12, "marked={marked} sums to {total}");
        }
        assert_eq!(hypergeometric_pmf(40, 2, 10, 3), 0.0);
    }

    #[test]
    fn test_survival_probability() {
        assert_eq!(survival_probability(25, 3, 0), 1.0);
        assert!((survival_probability(25, 3, 1) - 22.0 / 25.0).abs() < 1e-12);
        assert!((survival_probability(25, 3, 2) - (22.0 / 25.0) * (21.0 / 24.0)).abs() < 1e-12);
        assert!((survival_probability(25, 24, 1) - 1.0 / 25.0).abs() < 1e-12);
        assert_eq!(survival_probability(25, 24, 2), 0.0);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(20_000, 9_500), 500);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(13, 7), 1);
    }
}
