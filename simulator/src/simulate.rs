use houseline_execution::{
    calculate_bet_array, GameError, SeededSettlement, Settlement, SettlementError,
};
use houseline_types::casino::{GameParams, RtpError, RtpTable};
use thiserror::Error;
use tracing::{debug, info};

use crate::stats::{SimulationReport, Stats};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("trials must be positive")]
    NoTrials,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Rtp(#[from] RtpError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

/// Play `trials` rounds of `params` at `wager` against a settlement seeded with `seed`.
pub fn simulate(
    table: &RtpTable,
    params: &GameParams,
    trials: u64,
    wager: u64,
    seed: u64,
) -> Result<SimulationReport, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }
    let game = params.game();
    let bet = calculate_bet_array(table, params)?;
    let expected_edge = table.house_edge(game)?;
    let mut settlement = SeededSettlement::new(seed);
    let mut stats = Stats::new(bet.len());

    let progress_every = (trials / 10).max(1);
    for trial in 1..=trials {
        let result = settlement.settle(wager, &bet)?;
        stats.record(&result);
        if trial % progress_every == 0 {
            debug!(
                %game,
                trial,
                house_edge = stats.house_edge(),
                "simulation progress"
            );
        }
    }

    let report = SimulationReport {
        game,
        seed,
        trials: stats.trials(),
        win_rate: stats.win_rate(),
        mean_wagered: stats.mean_wagered(),
        mean_net: stats.mean_net(),
        observed_rtp: stats.observed_rtp(),
        house_edge: stats.house_edge(),
        expected_edge,
        stderr: stats.stderr(),
        max_slot_deviation: stats.max_slot_deviation(&bet),
        slot_hits: stats.hits().to_vec(),
    };
    info!(
        %game,
        trials,
        house_edge = report.house_edge,
        expected_edge,
        "simulation complete"
    );
    Ok(report)
}
