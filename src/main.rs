//! Headless cascade runner (default binary).
//!
//! Generates a stable board from a seeded gem supply, lists the productive swaps,
//! plays the first one through full cascade resolution and prints the result.
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gem_cascade::config::SimConfig;
use gem_cascade::core::{resolve_cascades_with, BoardSnapshot, BoardState, SeededGemSupply};
use gem_cascade::engine::{productive_swaps, simulate_move_with};
use gem_cascade::types::Swap;

#[derive(Debug, Serialize)]
struct RunReport {
    seed: u32,
    initial: BoardSnapshot,
    productive_swaps: Vec<Swap>,
    played: Option<Swap>,
    result: Option<BoardSnapshot>,
    rounds: u32,
    cleared: usize,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut config = SimConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    let report = run(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn run(config: &SimConfig) -> Result<RunReport> {
    let cascade = config.cascade_config();
    let mut supply = SeededGemSupply::new(config.seed);

    let empty = BoardState::empty(config.width, config.height)?;
    let initial = resolve_cascades_with(&empty, &mut supply, &cascade)?.board;
    info!(
        seed = config.seed,
        width = config.width,
        height = config.height,
        "generated stable board"
    );

    let swaps = productive_swaps(&initial);
    info!(count = swaps.len(), "productive swaps");

    let mut report = RunReport {
        seed: config.seed,
        initial: BoardSnapshot::capture(&initial),
        productive_swaps: swaps.clone(),
        played: None,
        result: None,
        rounds: 0,
        cleared: 0,
    };

    if let Some(&swap) = swaps.first() {
        let outcome = simulate_move_with(&initial, swap, &mut supply, &cascade)?;
        info!(%swap, rounds = outcome.rounds, cleared = outcome.cleared, "move resolved");
        report.played = Some(swap);
        report.result = Some(BoardSnapshot::capture(&outcome.board));
        report.rounds = outcome.rounds;
        report.cleared = outcome.cleared;
    }

    Ok(report)
}

fn print_text(report: &RunReport) {
    println!("seed {}", report.seed);
    println!("{}", report.initial.rows.join("\n"));
    println!();
    println!("{} productive swaps", report.productive_swaps.len());
    for swap in &report.productive_swaps {
        println!("  {}", swap);
    }

    match (&report.played, &report.result) {
        (Some(swap), Some(result)) => {
            println!();
            println!(
                "played {} ({} rounds, {} cleared)",
                swap, report.rounds, report.cleared
            );
            println!("{}", result.rows.join("\n"));
        }
        _ => println!("no productive swap available"),
    }
}
