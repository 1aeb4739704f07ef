use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use houseline_execution::{
    casino::logging::format_rtp_check, check_rtp, GameInfo, GameRegistry, RtpCheck,
};
use houseline_simulator::{
    parse_hilo_guess, parse_plinko_mode, parse_roulette_bet, resolve_rtp_table, simulate,
};
use houseline_types::casino::{
    BetArray, GameId, GameParams, HiLoGuess, PlinkoMode, RouletteBet, RtpTable,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect, audit and simulate houseline bet arrays")]
struct Args {
    /// Log level written to stderr (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// YAML or JSON file of per-game RTP targets, merged over the defaults.
    #[arg(long)]
    rtp_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bet array for a game and its RTP check.
    BetArray(GameArgs),
    /// Check every game's default bet array against its target.
    Audit,
    /// Monte Carlo run against the seeded settlement.
    Simulate {
        #[command(flatten)]
        game: GameArgs,

        #[arg(long, default_value_t = 100_000)]
        trials: u64,

        /// Wager per play, in chips.
        #[arg(long, default_value_t = 100)]
        wager: u64,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

/// Game selection plus optional overrides of its default parameters.
#[derive(ClapArgs, Debug)]
struct GameArgs {
    /// Game id (dice, flip, magic8ball, mines, plinko, roulette, limbo, crash, hilo, keno).
    #[arg(long)]
    game: GameId,

    /// Dice: win when the roll lands under this value (1-100).
    #[arg(long)]
    roll_under: Option<u8>,

    /// Mines: number of mines on the board.
    #[arg(long)]
    mines: Option<u8>,

    /// Mines: safe cells already revealed.
    #[arg(long)]
    revealed: Option<u8>,

    /// Plinko: normal or degen.
    #[arg(long, value_parser = parse_plinko_mode)]
    mode: Option<PlinkoMode>,

    /// Roulette: red, black, even, odd, low, high, straight:<n>, dozen:<0-2>, column:<0-2>.
    #[arg(long, value_parser = parse_roulette_bet)]
    bet: Option<RouletteBet>,

    /// Limbo target or Crash cash out multiplier.
    #[arg(long)]
    target: Option<f64>,

    /// HiLo: current card rank (1 = Ace, 13 = King).
    #[arg(long)]
    rank: Option<u8>,

    /// HiLo: higher or lower.
    #[arg(long, value_parser = parse_hilo_guess)]
    guess: Option<HiLoGuess>,

    /// Keno: numbers marked (1-10).
    #[arg(long)]
    picks: Option<u8>,
}

impl GameArgs {
    /// Default parameters for the game with any flags applied.
    fn params(&self) -> GameParams {
        match GameParams::default_for(self.game) {
            GameParams::Dice(mut p) => {
                if let Some(roll_under) = self.roll_under {
                    p.roll_under = roll_under;
                }
                GameParams::Dice(p)
            }
            GameParams::Mines(mut p) => {
                if let Some(mine_count) = self.mines {
                    p.mine_count = mine_count;
                }
                if let Some(cells_revealed) = self.revealed {
                    p.cells_revealed = cells_revealed;
                }
                GameParams::Mines(p)
            }
            GameParams::Plinko(mut p) => {
                if let Some(mode) = self.mode {
                    p.mode = mode;
                }
                GameParams::Plinko(p)
            }
            GameParams::Roulette(mut p) => {
                if let Some(bet) = self.bet {
                    p.bet = bet;
                }
                GameParams::Roulette(p)
            }
            GameParams::Limbo(mut p) => {
                if let Some(target) = self.target {
                    p.target_multiplier = target;
                }
                GameParams::Limbo(p)
            }
            GameParams::Crash(mut p) => {
                if let Some(target) = self.target {
                    p.cash_out_at = target;
                }
                GameParams::Crash(p)
            }
            GameParams::HiLo(mut p) => {
                if let Some(rank) = self.rank {
                    p.current_rank = rank;
                }
                if let Some(guess) = self.guess {
                    p.guess = guess;
                }
                GameParams::HiLo(p)
            }
            GameParams::Keno(mut p) => {
                if let Some(picks) = self.picks {
                    p.picks = picks;
                }
                GameParams::Keno(p)
            }
            params @ (GameParams::Flip | GameParams::MagicEightBall) => params,
        }
    }
}

#[derive(Serialize)]
struct BetArrayOutput<'a> {
    params: GameParams,
    bet_array: &'a BetArray,
    check: RtpCheck,
}

#[derive(Serialize)]
struct AuditRow {
    #[serde(flatten)]
    info: GameInfo,
    check: RtpCheck,
}

/// Execute a command and return the JSON it prints.
fn run(args: &Args, table: RtpTable) -> Result<String> {
    match &args.command {
        Command::BetArray(game) => {
            let params = game.params();
            let registry = GameRegistry::new(table);
            let bet_array = registry
                .bet_array(&params)
                .with_context(|| format!("failed to build bet array for {}", game.game))?;
            let check = check_rtp(registry.rtp_table(), game.game, &bet_array)?;
            info!("{}", format_rtp_check(&check));
            let output = BetArrayOutput {
                params,
                bet_array: &bet_array,
                check,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        Command::Audit => {
            let registry = GameRegistry::new(table);
            let checks = registry.audit().context("audit failed")?;
            let mut failures = 0;
            let rows: Vec<AuditRow> = checks
                .into_iter()
                .map(|check| {
                    if check.within_tolerance {
                        info!("{}", format_rtp_check(&check));
                    } else {
                        failures += 1;
                        warn!("{}", format_rtp_check(&check));
                    }
                    AuditRow {
                        info: GameRegistry::get_info(check.game),
                        check,
                    }
                })
                .collect();
            let output = serde_json::to_string_pretty(&rows)?;
            if failures > 0 {
                println!("{output}");
                bail!("{failures} games miss their rtp target");
            }
            Ok(output)
        }
        Command::Simulate {
            game,
            trials,
            wager,
            seed,
        } => {
            let report = simulate(&table, &game.params(), *trials, *wager, *seed)
                .with_context(|| format!("simulation of {} failed", game.game))?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);

    let table = resolve_rtp_table(args.rtp_config.as_deref())?;
    let output = run(&args, table)?;
    println!("{output}");
    Ok(())
}
