use houseline_execution::PlayResult;
use houseline_types::casino::{BetArray, GameId};
use serde::Serialize;

/// Tally of plays settled against one bet array.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    /// Plays that landed on each slot.
    hits: Vec<u64>,
    trials: u64,
    /// Plays that landed on a paying slot, including ones that returned less than the wager.
    paying: u64,
    wagered: u128,
    paid: u128,
    net_sq: f64,
}

impl Stats {
    pub fn new(slots: usize) -> Self {
        Self {
            hits: vec![0; slots],
            trials: 0,
            paying: 0,
            wagered: 0,
            paid: 0,
            net_sq: 0.0,
        }
    }

    pub fn record(&mut self, play: &PlayResult) {
        if let Some(hits) = self.hits.get_mut(play.result_index) {
            *hits += 1;
        }
        self.trials += 1;
        if play.is_win() {
            self.paying += 1;
        }
        self.wagered += u128::from(play.wager);
        self.paid += u128::from(play.payout);
        let net = play.net() as f64;
        self.net_sq += net * net;
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn hits(&self) -> &[u64] {
        &self.hits
    }

    /// Share of plays that landed on a paying slot.
    pub fn win_rate(&self) -> f64 {
        self.per_trial(self.paying as f64)
    }

    pub fn mean_wagered(&self) -> f64 {
        self.per_trial(self.wagered as f64)
    }

    pub fn mean_net(&self) -> f64 {
        self.per_trial(self.paid as f64 - self.wagered as f64)
    }

    /// Paid over wagered.
    pub fn observed_rtp(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.paid as f64 / self.wagered as f64
        }
    }

    pub fn house_edge(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            1.0 - self.observed_rtp()
        }
    }

    /// Standard error of the mean net result.
    pub fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_net();
        let var = (self.net_sq / self.trials as f64 - mean * mean).max(0.0);
        (var / self.trials as f64).sqrt()
    }

    /// Largest gap between a slot's observed share of plays and its probability in `bet`.
    pub fn max_slot_deviation(&self, bet: &BetArray) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.hits
            .iter()
            .enumerate()
            .map(|(slot, &hits)| (hits as f64 / self.trials as f64 - bet.probability(slot)).abs())
            .fold(0.0, f64::max)
    }

    fn per_trial(&self, total: f64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            total / self.trials as f64
        }
    }
}

/// Summary printed by `simulate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub game: GameId,
    pub seed: u64,
    pub trials: u64,
    pub win_rate: f64,
    pub mean_wagered: f64,
    pub mean_net: f64,
    pub observed_rtp: f64,
    pub house_edge: f64,
    /// `1 - target` for the game.
    pub expected_edge: f64,
    pub stderr: f64,
    pub max_slot_deviation: f64,
    pub slot_hits: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(wager: u64, result_index: usize, multiplier: f64) -> PlayResult {
        PlayResult {
            wager,
            result_index,
            multiplier,
            payout: (wager as f64 * multiplier).floor() as u64,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = Stats::new(2);
        let bet = BetArray::uniform(vec![1.9, 0.0]).unwrap();
        assert_eq!(stats.mean_net(), 0.0);
        assert_eq!(stats.house_edge(), 0.0);
        assert_eq!(stats.stderr(), 0.0);
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.max_slot_deviation(&bet), 0.0);
        assert_eq!(stats.hits(), &[0, 0]);
    }

    #[test]
    fn test_house_edge_from_totals() {
        let mut stats = Stats::new(2);
        // One win of +90 and one loss of -100 on 100 chip wagers.
        stats.record(&play(100, 0, 1.9));
        stats.record(&play(100, 1, 0.0));
        assert_eq!(stats.trials(), 2);
        assert_eq!(stats.mean_net(), -5.0);
        assert_eq!(stats.mean_wagered(), 100.0);
        assert!((stats.observed_rtp() - 0.95).abs() < 1e-12);
        assert!((stats.house_edge() - 0.05).abs() < 1e-12);
        assert_eq!(stats.win_rate(), 0.5);
        // Variance of {90, -100} around -5 is 95^2.
        assert!((stats.stderr() - (9025.0f64 / 2.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_partial_payout_counts_as_win() {
        let mut stats = Stats::new(13);
        // HiLo from an Ace betting higher always pays 0.95.
        for _ in 0..4 {
            stats.record(&play(100, 3, 0.95));
        }
        assert_eq!(stats.win_rate(), 1.0);
        assert!(stats.mean_net() < 0.0);
    }

    #[test]
    fn test_slot_hits_against_probabilities() {
        let bet = BetArray::weighted(vec![4.0, 0.0], vec![0.25, 0.75]).unwrap();
        let mut stats = Stats::new(bet.len());
        for index in [0, 1, 1, 1, 0, 1, 1, 1] {
            stats.record(&play(10, index, bet.multipliers()[index]));
        }
        assert_eq!(stats.hits(), &[2, 6]);
        assert!(stats.max_slot_deviation(&bet) < 1e-12);

        stats.record(&play(10, 0, 4.0));
        assert_eq!(stats.hits(), &[3, 6]);
        assert!((stats.max_slot_deviation(&bet) - (1.0 / 3.0 - 0.25)).abs() < 1e-12);
    }
}
