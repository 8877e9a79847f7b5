//! yah: command-line driver for the Yahtzee rules engine.

use std::process;

use yah_core::{Config, MIN_PLAYERS};
use yah_logging::{now_ms, EventLog, GameSummaryEventV1, TurnEventV1, LOG_SCHEMA_VERSION};
use yah_sim::MatchOutcome;

fn print_help() {
    eprintln!(
        r#"yah - Yahtzee rules engine CLI

USAGE:
    yah <COMMAND> [OPTIONS]

COMMANDS:
    sim    Run random-policy simulations and print score statistics

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print version
"#
    );
}

fn print_version() {
    println!("yah {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_sim(args: &[String]) {
    let mut games: usize = 1000;
    let mut players: usize = 2;
    let mut seed: u64 = 0;
    let mut config_path: Option<String> = None;
    let mut log_path: Option<String> = None;
    let mut no_hist = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yah sim - run random-policy simulations

USAGE:
    yah sim [OPTIONS]

OPTIONS:
    --games N        Number of games to simulate (default: 1000)
    --players K      Number of generated players (default: 2)
    --config FILE    Load the player roster from a YAML file (overrides --players)
    --seed S         Base RNG seed (default: 0)
    --log PATH       Append NDJSON game events to PATH
    --no-hist        Skip the score histogram
    -h, --help       Print this help
"#
                );
                return;
            }
            "--games" => {
                games = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--games requires a number");
                        process::exit(1)
                    });
                i += 2;
            }
            "--players" => {
                players = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--players requires a number");
                        process::exit(1)
                    });
                i += 2;
            }
            "--seed" => {
                seed = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--seed requires a number");
                        process::exit(1)
                    });
                i += 2;
            }
            "--config" => {
                config_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--log" => {
                log_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yah sim`: {other}");
                eprintln!("Run `yah sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    let names: Vec<String> = match &config_path {
        Some(path) => match Config::load(path) {
            Ok(cfg) => cfg.players,
            Err(e) => {
                eprintln!("Failed to load config {path}: {e}");
                process::exit(1);
            }
        },
        None => (1..=players).map(|i| format!("Player {i}")).collect(),
    };
    if names.len() < MIN_PLAYERS {
        eprintln!("--players must be at least {MIN_PLAYERS}");
        process::exit(1);
    }

    let mut log = match &log_path {
        Some(path) => match EventLog::open_append_with_flush(path, 100) {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("Failed to open log {path}: {e:?}");
                process::exit(1);
            }
        },
        None => None,
    };

    println!("Running simulation...");
    let report = match yah_sim::simulate_with(games, &names, seed, |game_id, outcome| {
        if let Some(log) = log.as_mut() {
            write_game_events(log, game_id, &names, outcome);
        }
    }) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            process::exit(1);
        }
    };
    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            eprintln!("Failed to flush log: {e:?}");
            process::exit(1);
        }
    }

    println!();
    println!("Evaluation:");
    println!("  - Games: {} ({} players)", report.games, report.players);
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        report.summary.mean,
        report.summary.median,
        report.summary.std_dev,
        report.summary.min,
        report.summary.max
    );
    println!("  - Upper bonus rate: {:.1}%", report.bonus_rate * 100.0);
    println!("  - Tie rate: {:.1}%", report.tie_rate * 100.0);

    if !no_hist {
        println!();
        yah_sim::print_histogram(&report.scores);
    }
}

fn write_game_events(log: &mut EventLog, game_id: u64, names: &[String], outcome: &MatchOutcome) {
    for t in &outcome.turns {
        let ev = TurnEventV1 {
            event: "turn",
            ts_ms: now_ms(),
            schema_version: LOG_SCHEMA_VERSION,
            game_id,
            round: t.round,
            seat: t.seat as u32,
            player: names[t.seat].clone(),
            dice: t.dice,
            rerolls_used: t.rerolls_used,
            category: t.category.name().to_string(),
            score: t.score,
        };
        if let Err(e) = log.write_event(&ev) {
            eprintln!("Failed to write event: {e:?}");
            process::exit(1);
        }
    }

    let summary = GameSummaryEventV1 {
        event: "game_summary",
        ts_ms: now_ms(),
        schema_version: LOG_SCHEMA_VERSION,
        game_id,
        rounds: outcome.rounds_played as u32,
        players: names.to_vec(),
        totals: outcome.totals.clone(),
        winners: outcome.winners.iter().map(|&w| names[w].clone()).collect(),
        upper_bonus: outcome.upper_bonus.clone(),
    };
    if let Err(e) = log.write_event(&summary) {
        eprintln!("Failed to write event: {e:?}");
        process::exit(1);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_help();
        process::exit(0);
    }
    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "-V" | "--version" => print_version(),
        "sim" => cmd_sim(&args[2..]),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("Run `yah --help` for usage.");
            process::exit(1);
        }
    }
}
