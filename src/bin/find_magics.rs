//! Offline magic-number generator.
//!
//! Prints Rust constant tables suitable for `moves::magic_numbers`.
//!
//! Usage:
//! `cargo run --release --bin find_magics`
//! `cargo run --release --bin find_magics -- --seed 42 --max-trials 1000000`

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_chess::moves::magic_search::{find_all_magics, MagicSearchConfig, MagicSet, DEFAULT_MAX_TRIALS, DEFAULT_SEED};
use maze_chess::moves::sliding_attacks::Slider;

#[derive(Debug, Parser)]
#[command(about = "Search magic multipliers for bishop and rook attack tables")]
struct Args {
    /// RNG seed for the candidate stream.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Candidates tried per square before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_TRIALS)]
    max_trials: u64,
}

fn print_table(name: &str, values: impl Iterator<Item = String>) {
    println!("pub const {name}: [{}; 64] = [", if name.ends_with("BITS") { "u8" } else { "u64" });
    let values: Vec<String> = values.collect();
    for row in values.chunks(4) {
        println!("    {},", row.join(", "));
    }
    println!("];\n");
}

fn print_set(prefix: &str, set: &MagicSet) {
    print_table(&format!("{prefix}_RELEVANT_BITS"), set.relevant_bits.iter().map(u8::to_string));
    print_table(&format!("{prefix}_MAGICS"), set.magics.iter().map(|magic| format!("0x{magic:016x}")));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = MagicSearchConfig {
        seed: args.seed,
        max_trials: args.max_trials,
    };

    let bishops = find_all_magics(Slider::Bishop, &config).context("bishop magic search failed")?;
    let rooks = find_all_magics(Slider::Rook, &config).context("rook magic search failed")?;

    print_set("BISHOP", &bishops);
    print_set("ROOK", &rooks);
    Ok(())
}
