//! Move-generation oracle.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 5`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 3 --divide`

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use maze_chess::move_generation::perft::{perft, perft_detailed, perft_divide};
use maze_chess::utils::fen_parser::parse_fen;
use maze_chess::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Parser)]
#[command(about = "Count leaf positions reachable from a FEN")]
struct Args {
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Print per-root-move counts.
    #[arg(long)]
    divide: bool,

    /// Print capture/check/castle statistics as well as the node count.
    #[arg(long)]
    detailed: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let game = parse_fen(&args.fen).with_context(|| format!("invalid FEN: {}", args.fen))?;
    let started_at = Instant::now();

    if args.divide {
        let mut total = 0;
        for (mv, nodes) in perft_divide(&game, args.depth) {
            println!("{}: {nodes}", move_to_long_algebraic(mv));
            total += nodes;
        }
        println!("\nNodes searched: {total}");
    } else if args.detailed {
        let counts = perft_detailed(&game, args.depth);
        println!("{counts:#?}");
    } else {
        println!("Nodes searched: {}", perft(&game, args.depth));
    }

    println!("elapsed_ms={}", started_at.elapsed().as_millis());
    Ok(())
}
