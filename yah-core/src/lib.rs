//! yah-core: Game rules, scoring, score sheets, and turn orchestration.

pub mod category;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod scoring;
pub mod sheet;

#[cfg(test)]
mod dice_tests;
#[cfg(test)]
mod game_tests;

pub use category::{
    Category, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, NUM_CATEGORIES, SMALL_STRAIGHT_SCORE,
    UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_SCORE,
};
pub use config::{Config, ConfigError};
pub use dice::{DiceSet, DieSource, ScriptedDieSource, SeededDieSource, DICE_COUNT};
pub use error::GameError;
pub use game::{
    Game, Player, TurnPhase, MIN_PLAYERS, REROLLS_PER_TURN, SCORE_UPPER_BOUND, TOTAL_ROUNDS,
};
pub use scoring::{category_score, scores_for_dice};
pub use sheet::ScoreSheet;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
