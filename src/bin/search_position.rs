//! Fixed-depth search runner.
//!
//! Usage:
//! `cargo run --release --bin search_position -- --depth 6`
//! `cargo run --release --bin search_position -- --fen "<fen>" --moves e2e4 e7e5`

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use maze_chess::search::board_scoring::MaterialScorer;
use maze_chess::search::iterative_deepening::{iterative_deepening_search, SearchConfig};
use maze_chess::utils::fen_parser::parse_fen;
use maze_chess::utils::long_algebraic::{apply_long_algebraic_moves, move_to_long_algebraic};

#[derive(Debug, Parser)]
#[command(about = "Search a position and print engine-style info lines")]
struct Args {
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    depth: u8,

    /// Moves to play from the FEN before searching, in long algebraic form.
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let start = parse_fen(&args.fen).with_context(|| format!("invalid FEN: {}", args.fen))?;
    let game = apply_long_algebraic_moves(&start, args.moves.iter().map(String::as_str))
        .context("could not apply move list")?;

    let result = iterative_deepening_search(&game, &MaterialScorer, SearchConfig { max_depth: args.depth });

    for iteration in &result.iterations {
        println!("{}", iteration.info_line());
    }
    match result.best_move {
        Some(mv) => println!("bestmove {}", move_to_long_algebraic(mv)),
        None => println!("bestmove (none)"),
    }
    println!(
        "nodes={} elapsed_ms={} nps={}",
        result.nodes, result.elapsed_ms, result.nps
    );
    Ok(())
}
