//! yah-sim: random-policy match simulation and score statistics.
//!
//! Drives full games through the rules engine with a uniformly random
//! policy: random keep masks, random reroll depth, random category among
//! the ones still open. Useful for smoke-testing the engine and for
//! producing score distributions.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use yah_core::{
    Category, Game, GameError, DICE_COUNT, REROLLS_PER_TURN, TOTAL_ROUNDS, UPPER_BONUS_THRESHOLD,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One committed turn inside a match.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub round: u32,
    pub seat: usize,
    pub dice: [u8; DICE_COUNT],
    pub rerolls_used: u8,
    pub category: Category,
    pub score: i32,
}

/// Result of one complete match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub totals: Vec<i32>,
    pub winners: Vec<usize>,
    pub rounds_played: usize,
    pub upper_bonus: Vec<bool>,
    pub turns: Vec<TurnRecord>,
}

/// Derive a per-game seed from a base seed and a game index.
pub fn game_seed(base: u64, idx: u64) -> u64 {
    base ^ idx.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Play one full match with random decisions. Deterministic for a given
/// seed and roster.
pub fn play_random_match(names: &[String], seed: u64) -> Result<MatchOutcome, GameError> {
    let mut game = Game::seeded(names.to_vec(), seed)?;
    // Separate stream for decisions so dice and policy don't entangle.
    let mut chooser = ChaCha8Rng::seed_from_u64(seed ^ 0xD6E8_FEB8_6659_FD93);

    let mut turns = Vec::with_capacity(TOTAL_ROUNDS * game.player_count());

    while !game.is_finished() {
        for _seat in 0..game.player_count() {
            game.roll_all()?;
            let mut rerolls_used: u8 = 0;
            for _ in 0..chooser.gen_range(0..=REROLLS_PER_TURN) {
                let keep: Vec<usize> = (0..DICE_COUNT).filter(|_| chooser.gen_bool(0.5)).collect();
                game.roll_keeping(&keep)?;
                rerolls_used += 1;
            }

            let options = game.available_scores();
            let (category, score) = options[chooser.gen_range(0..options.len())];
            turns.push(TurnRecord {
                round: game.current_round() as u32,
                seat: game.current_player_index(),
                dice: game.dice(),
                rerolls_used,
                category,
                score,
            });
            game.fill_current_player(category, score)?;
            game.advance_player();
        }
        game.advance_round();
    }

    game.finalize_scores()?;

    let totals: Vec<i32> = game.players().iter().map(|p| p.total_score()).collect();
    let best = totals.iter().copied().max().unwrap_or(0);
    let winners: Vec<usize> = totals
        .iter()
        .enumerate()
        .filter(|(_, &t)| t == best)
        .map(|(i, _)| i)
        .collect();
    let upper_bonus: Vec<bool> = game
        .players()
        .iter()
        .map(|p| p.sheet().upper_section_total() >= UPPER_BONUS_THRESHOLD)
        .collect();

    Ok(MatchOutcome {
        totals,
        winners,
        rounds_played: game.current_round(),
        upper_bonus,
        turns,
    })
}

/// Aggregate score statistics over a batch of sheets.
#[derive(Debug, Clone, Copy)]
pub struct ScoreSummary {
    pub mean: f64,
    pub median: i32,
    pub std_dev: f64,
    pub min: i32,
    pub max: i32,
}

/// Aggregate report over a batch of simulated games.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub games: usize,
    pub players: usize,
    pub summary: ScoreSummary,
    pub bonus_rate: f64,
    pub tie_rate: f64,
    pub scores: Vec<i32>,
}

pub fn summarize(scores: &[i32]) -> ScoreSummary {
    if scores.is_empty() {
        return ScoreSummary {
            mean: 0.0,
            median: 0,
            std_dev: 0.0,
            min: 0,
            max: 0,
        };
    }
    let n = scores.len() as f64;
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
    let var = scores
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();
    ScoreSummary {
        mean,
        median: sorted[sorted.len() / 2],
        std_dev: var.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

/// Run `games` matches and aggregate per-sheet scores.
pub fn simulate(games: usize, names: &[String], base_seed: u64) -> Result<SimReport, GameError> {
    simulate_with(games, names, base_seed, |_, _| {})
}

/// Like [`simulate`], but calls `on_game` with each finished match.
pub fn simulate_with<F>(
    games: usize,
    names: &[String],
    base_seed: u64,
    mut on_game: F,
) -> Result<SimReport, GameError>
where
    F: FnMut(u64, &MatchOutcome),
{
    let mut scores = Vec::with_capacity(games * names.len());
    let mut bonus_hits = 0usize;
    let mut ties = 0usize;

    for i in 0..games {
        let outcome = play_random_match(names, game_seed(base_seed, i as u64))?;
        scores.extend_from_slice(&outcome.totals);
        bonus_hits += outcome.upper_bonus.iter().filter(|&&b| b).count();
        if outcome.winners.len() > 1 {
            ties += 1;
        }
        on_game(i as u64, &outcome);
    }

    let sheets = scores.len().max(1);
    Ok(SimReport {
        games,
        players: names.len(),
        summary: summarize(&scores),
        bonus_rate: bonus_hits as f64 / sheets as f64,
        tie_rate: ties as f64 / games.max(1) as f64,
        scores,
    })
}

/// Print a fixed-width ASCII histogram of scores, bucketed by 25 points.
pub fn print_histogram(scores: &[i32]) {
    if scores.is_empty() {
        return;
    }
    const BUCKET: i32 = 25;
    let min = scores.iter().copied().min().unwrap_or(0);
    let max = scores.iter().copied().max().unwrap_or(0);
    let min_b = min / BUCKET;
    let max_b = max / BUCKET;

    let mut counts = vec![0usize; (max_b - min_b + 1) as usize];
    for &s in scores {
        counts[(s / BUCKET - min_b) as usize] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);

    println!("Score histogram ({} sheets):", scores.len());
    for (i, &count) in counts.iter().enumerate() {
        let lo = (min_b + i as i32) * BUCKET;
        let hi = lo + BUCKET - 1;
        let width = count * 50 / peak;
        println!("  {:>3}-{:>3} | {:<50} {}", lo, hi, "#".repeat(width), count);
    }
}
