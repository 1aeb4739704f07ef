//! Plinko bet array.
//!
//! A ball falls through `n` peg rows, bouncing left or right with equal probability, and lands in
//! bucket `k` (number of rights) with probability `C(n, k) / 2^n`. Every bucket gets an equal
//! share of the return: its fair multiplier is `1 / ((n + 1) * P(k))`, scaled by the RTP target
//! and rounded to cents.

use houseline_types::casino::{
    BetArray, GameId, PlinkoMode, PlinkoParams, RtpTable, BUCKET_MULTIPLIER_DECIMALS,
};

use super::{
    math::{binomial_pmf, round_to},
    GameError,
};

/// Landing probability per bucket, edge to edge.
pub fn bucket_probabilities(rows: u8) -> Vec<f64> {
    let n = rows as u32;
    (0..=n).map(|k| binomial_pmf(n, k)).collect()
}

/// House multipliers per bucket for `mode`.
pub fn multipliers(table: &RtpTable, mode: PlinkoMode) -> Result<Vec<f64>, GameError> {
    let rtp = table.target(GameId::Plinko)?;
    let probabilities = bucket_probabilities(mode.rows());
    let buckets = probabilities.len() as f64;
    Ok(probabilities
        .iter()
        .map(|&p| {
            if p == 0.0 {
                return 0.0;
            }
            let fair = 1.0 / (buckets * p);
            round_to(fair * rtp, BUCKET_MULTIPLIER_DECIMALS)
        })
        .collect())
}

pub fn bet_array(table: &RtpTable, params: &PlinkoParams) -> Result<BetArray, GameError> {
    let multipliers = multipliers(table, params.mode)?;
    let weights = bucket_probabilities(params.mode.rows());
    Ok(BetArray::weighted(multipliers, weights)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use houseline_types::casino::RTP_TOLERANCE;

    #[test]
    fn test_normal_board() {
        let table = RtpTable::default();
        let array = bet_array(&table, &PlinkoParams::default()).unwrap();
        assert_eq!(array.len(), 15);
        assert!(!array.is_uniform());
        let m = array.multipliers();
        assert_eq!(m[0], m[14]);
        assert!((array.expected_value() - 0.95).abs() <= RTP_TOLERANCE);
    }

    #[test]
    fn test_degen_board() {
        let table = RtpTable::default();
        let array = bet_array(
            &table,
            &PlinkoParams {
                mode: PlinkoMode::Degen,
            },
        )
        .unwrap();
        assert_eq!(array.len(), 17);
        assert!((array.expected_value() - 0.95).abs() <= RTP_TOLERANCE);
    }

    #[test]
    fn test_symmetric_and_edge_heavy() {
        let table = RtpTable::default();
        for mode in [PlinkoMode::Normal, PlinkoMode::Degen] {
            let m = multipliers(&table, mode).unwrap();
            let n = m.len() - 1;
            for k in 0..=n {
                assert_eq!(m[k], m[n - k], "{mode:?} bucket {k}");
            }
            // Rarer buckets pay more.
            for k in 0..n / 2 {
                assert!(m[k] > m[k + 1], "{mode:?} bucket {k}");
            }
        }
    }

    #[test]
    fn test_edge_bucket_value() {
        let table = RtpTable::default();
        let m = multipliers(&table, PlinkoMode::Normal).unwrap();
        // 2^14 / 15 * 0.95 = 1037.6533..
        assert_eq!(m[0], 1037.65);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        for rows in [14, 16] {
            let total: f64 = bucket_probabilities(rows).iter().sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }
}
