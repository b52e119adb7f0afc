//! Match simulator CLI - runs many headless draw-and-match games and reports
//! how often each seat wins.

mod output;
mod simulator;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use draw_match::{panic_hook, NUM_ROUNDS, PLAYERS};
use output::OutputWriter;
use simulator::{game_seed, GameRecord, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Batch simulator for draw-and-match games")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game n uses seed + n - 1 (random per game when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, default_value_t = NUM_ROUNDS as u32, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Write one JSON line per game to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    panic_hook::abort_on_panic();

    let mut output_writer = OutputWriter::new(args.output.as_deref())?;
    let simulator = Simulator::new(args.rounds as usize);

    let start = Instant::now();
    let mut records = Vec::new();
    let mut errors = 0;

    for game in 1..=args.games {
        let seed = game_seed(args.seed, game);
        match simulator.simulate_game(game, seed) {
            Ok(record) => {
                if let Err(e) = output_writer.write_game(&record) {
                    warn!("Failed to write results for game {}: {}", game, e);
                }
                info!(
                    game,
                    seed,
                    wins = ?record.summary.wins_by_seat(),
                    "game completed"
                );
                records.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game, e);
            }
        }
    }

    let elapsed = start.elapsed();
    if let Some(path) = output_writer.output_path() {
        println!("Results written to: {}", path.display());
    }
    output_writer.finish()?;

    print_summary(&records, errors, elapsed, args.games);
    Ok(())
}

fn print_summary(records: &[GameRecord], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", records.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if records.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / records.len() as u32
    );

    let mut wins = [0usize; PLAYERS];
    let mut rounds = 0usize;
    let mut turns = 0usize;
    for record in records {
        for (seat, count) in record.summary.wins_by_seat().iter().enumerate() {
            wins[seat] += count;
        }
        rounds += record.summary.rounds.len();
        turns += record.summary.total_turns();
    }

    println!("Average turns per round: {:.1}", turns as f64 / rounds as f64);
    println!("\n=== Round Wins by Seat ===");
    for (seat, &count) in wins.iter().enumerate() {
        let win_rate = (count as f64 / rounds as f64) * 100.0;
        println!("Player {}: wins={} ({:.1}%)", seat + 1, count, win_rate);
    }
}
