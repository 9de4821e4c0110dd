//! Dice Odds CLI: replays the dice revealed so far in a round of Liar's Dice
//! and reports how likely each claim is.
//!
//! ```text
//! dice-odds --players 4 --move 1:2:3 --move 2:1:3 --claim 19:3
//! An outrageous claim ->  0.000000000508%
//! ```

mod args;
mod report;

use clap::Parser;
use dice_odds::{ClaimParams, MoveParams};
use tracing::info;

#[derive(Parser)]
#[command(name = "dice-odds")]
#[command(about = "Probability that a Liar's Dice claim holds, given the dice revealed so far")]
struct Args {
    /// Number of players at the table (five dice each)
    #[arg(short, long)]
    players: u32,

    /// Revealed dice as PLAYER:DICE:VALUE, replayed in order
    #[arg(short = 'm', long = "move", value_parser = args::parse_move)]
    moves: Vec<MoveParams>,

    /// Claim to evaluate as DICE:VALUE ("at least DICE dice show VALUE")
    #[arg(short, long = "claim", value_parser = args::parse_claim)]
    claims: Vec<ClaimParams>,

    /// Claim to check against the revealed dice only, as DICE:VALUE
    #[arg(long = "challenge", value_parser = args::parse_claim)]
    challenges: Vec<ClaimParams>,

    /// Print one JSON document instead of message lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(players = args.players, moves = args.moves.len(), "replaying round");

    let report = match report::run(args.players, &args.moves, &args.claims, &args.challenges) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(doc) => println!("{doc}"),
            Err(e) => {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
        }
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
}
