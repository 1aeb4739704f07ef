//! Mines bet array.
//!
//! The player has opened `cells_revealed` safe cells on a 25 cell board and is pricing the next
//! reveal. Surviving it has probability `prod_{i=0..=k} (safe - i) / (grid - i)`; the cash-out
//! multiplier is `round4(rtp / prob)`.
//!
//! Layout (weighted, `grid + 1` slots):
//! - slot 0: cash out, carries the multiplier with weight `prob`
//! - slots 1..=grid: mine hit, zero with weight `(1 - prob) / grid` each

use houseline_types::casino::{
    BetArray, GameId, MinesParams, RtpTable, MINES_ALLOWED_COUNTS, MINES_GRID_SIZE,
    SLOT_MULTIPLIER_DECIMALS,
};

use super::{
    math::{round_to, survival_probability},
    GameError,
};

fn validate(mine_count: u8, cells_revealed: u8) -> Result<u8, GameError> {
    if !MINES_ALLOWED_COUNTS.contains(&mine_count) || mine_count >= MINES_GRID_SIZE {
        return Err(GameError::InvalidMineCount {
            got: mine_count,
            allowed: &MINES_ALLOWED_COUNTS,
        });
    }
    let safe = MINES_GRID_SIZE - mine_count;
    if cells_revealed >= safe {
        return Err(GameError::InvalidCellsRevealed {
            got: cells_revealed,
            safe,
        });
    }
    Ok(safe)
}

/// Probability that the next reveal is safe and the player survives to cash out.
pub fn survival(mine_count: u8, cells_revealed: u8) -> Result<f64, GameError> {
    validate(mine_count, cells_revealed)?;
    Ok(survival_probability(
        MINES_GRID_SIZE as u32,
        mine_count as u32,
        cells_revealed as u32 + 1,
    ))
}

pub fn get_multiplier(
    table: &RtpTable,
    mine_count: u8,
    cells_revealed: u8,
) -> Result<f64, GameError> {
    let rtp = table.target(GameId::Mines)?;
    let prob = survival(mine_count, cells_revealed)?;
    Ok(round_to(rtp / prob, SLOT_MULTIPLIER_DECIMALS))
}

pub fn bet_array(table: &RtpTable, params: &MinesParams) -> Result<BetArray, GameError> {
    let multiplier = get_multiplier(table, params.mine_count, params.cells_revealed)?;
    let prob = survival(params.mine_count, params.cells_revealed)?;
    let grid = MINES_GRID_SIZE as usize;

    let mut multipliers = vec![0.0; grid + 1];
    multipliers[0] = multiplier;
    let mut weights = vec![(1.0 - prob) / grid as f64; grid + 1];
    weights[0] = prob;

    Ok(BetArray::weighted(multipliers, weights)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use houseline_types::casino::RTP_TOLERANCE;

    #[test]
    fn test_first_reveal_with_three_mines() {
        let table = RtpTable::default();
        let expected = round_to(25.0 / 22.0 * 0.94, 4);
        assert_eq!(expected, 1.0682);
        assert_eq!(get_multiplier(&table, 3, 0).unwrap(), expected);

        let array = bet_array(&table, &MinesParams::default()).unwrap();
        assert_eq!(array.len(), 26);
        assert_eq!(array.multipliers()[0], expected);
        assert!(array.multipliers()[1..].iter().all(|&m| m == 0.0));
        assert!((array.probability(0) - 22.0 / 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_multiplier_grows_with_reveals() {
        let table = RtpTable::default();
        let mut last = 0.0;
        for cells_revealed in 0..22 {
            let m = get_multiplier(&table, 3, cells_revealed).unwrap();
            assert!(m > last, "reveal {cells_revealed}: {m} <= {last}");
            last = m;
        }
    }

    #[test]
    fn test_expected_value_matches_target() {
        let table = RtpTable::default();
        for mine_count in MINES_ALLOWED_COUNTS {
            for cells_revealed in 0..(MINES_GRID_SIZE - mine_count) {
                let array = bet_array(
                    &table,
                    &MinesParams {
                        mine_count,
                        cells_revealed,
                    },
                )
                .unwrap();
                assert!((array.expected_value() - 0.94).abs() <= RTP_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_boards() {
        let table = RtpTable::default();
        for mine_count in [0, 2, 25, 30] {
            assert_eq!(
                get_multiplier(&table, mine_count, 0),
                Err(GameError::InvalidMineCount {
                    got: mine_count,
                    allowed: &MINES_ALLOWED_COUNTS,
                })
            );
        }
        assert_eq!(
            get_multiplier(&table, 24, 1),
            Err(GameError::InvalidCellsRevealed { got: 1, safe: 1 })
        );
        assert_eq!(
            get_multiplier(&table, 3, 22),
            Err(GameError::InvalidCellsRevealed { got: 22, safe: 22 })
        );
    }

    #[test]
    fn test_single_safe_cell() {
        let table = RtpTable::default();
        // One safe cell among 25: 25 * 0.94.
        assert_eq!(get_multiplier(&table, 24, 0).unwrap(), 23.5);
    }
}
