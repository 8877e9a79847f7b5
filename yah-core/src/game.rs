//! Turn and round orchestration for a multi-player game.
//!
//! This module is the single place that advances game state via the rules:
//! phase-checked rolls, reroll budgeting, category commits, and end-of-game
//! totals and winners.

use std::fmt;

use crate::category::Category;
use crate::dice::{DiceSet, DieSource, SeededDieSource, DICE_COUNT};
use crate::error::GameError;
use crate::sheet::ScoreSheet;

/// Rounds in a full game. Each player fills one category per round.
pub const TOTAL_ROUNDS: usize = 13;
/// Rerolls allowed after the opening roll of a turn.
pub const REROLLS_PER_TURN: u8 = 2;
/// Minimum number of players.
pub const MIN_PLAYERS: usize = 2;
/// Strict upper bound on any finalized total. The category maxima sum to
/// 414 but cannot all be hit with five shared dice, so no total reaches it.
pub const SCORE_UPPER_BOUND: i32 = 414;

/// One participant: display name, sheet, and the finalized total.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    sheet: ScoreSheet,
    total: Option<i32>,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            sheet: ScoreSheet::new(),
            total: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    /// Finalized total. Reads as 0 until [`Game::finalize_scores`] has run.
    pub fn total_score(&self) -> i32 {
        self.total.unwrap_or(0)
    }
}

/// Where the active player is within their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Turn not started; the opening roll comes next.
    AwaitingRoll,
    /// Dice are live; the player may reroll while the budget lasts, or commit.
    AwaitingDecision { rerolls_left: u8 },
}

/// Full game state: players, dice, the die source, and turn/round bookkeeping.
pub struct Game {
    players: Vec<Player>,
    dice: DiceSet,
    source: Box<dyn DieSource>,
    round: usize,
    current: usize,
    phase: TurnPhase,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `source` is an opaque trait object; every other field is shown.
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("dice", &self.dice)
            .field("round", &self.round)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// New game over the given players, drawing dice from `source`.
    pub fn new(names: Vec<String>, source: Box<dyn DieSource>) -> Result<Self, GameError> {
        if names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                min: MIN_PLAYERS,
                got: names.len(),
            });
        }
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
            dice: DiceSet::new(),
            source,
            round: 0,
            current: 0,
            phase: TurnPhase::AwaitingRoll,
        })
    }

    /// Deterministic game: dice from a ChaCha8 stream seeded with `seed`.
    pub fn seeded(names: Vec<String>, seed: u64) -> Result<Self, GameError> {
        Self::new(names, Box::new(SeededDieSource::new(seed)))
    }

    /// Game with OS-entropy dice.
    pub fn from_entropy(names: Vec<String>) -> Result<Self, GameError> {
        Self::new(names, Box::new(SeededDieSource::from_entropy()))
    }

    /// Roll all five dice.
    ///
    /// The opening roll of a turn starts the reroll budget; each later call
    /// consumes one reroll.
    pub fn roll_all(&mut self) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingRoll => {
                self.dice.roll_all(self.source.as_mut());
                self.phase = TurnPhase::AwaitingDecision {
                    rerolls_left: REROLLS_PER_TURN,
                };
                Ok(())
            }
            TurnPhase::AwaitingDecision { rerolls_left } => {
                if rerolls_left == 0 {
                    return Err(GameError::RerollsExhausted);
                }
                self.dice.roll_all(self.source.as_mut());
                self.phase = TurnPhase::AwaitingDecision {
                    rerolls_left: rerolls_left - 1,
                };
                Ok(())
            }
        }
    }

    /// Reroll every die whose position is not in `keep`.
    ///
    /// Requires a live hand (the opening roll must be [`Game::roll_all`]) and
    /// a remaining reroll. Positions outside 0..=4 are rejected before any
    /// die changes; duplicates in `keep` are tolerated.
    pub fn roll_keeping(&mut self, keep: &[usize]) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingRoll => Err(GameError::RollRequired),
            TurnPhase::AwaitingDecision { rerolls_left } => {
                if rerolls_left == 0 {
                    return Err(GameError::RerollsExhausted);
                }
                self.dice.reroll_keeping(keep, self.source.as_mut())?;
                self.phase = TurnPhase::AwaitingDecision {
                    rerolls_left: rerolls_left - 1,
                };
                Ok(())
            }
        }
    }

    /// Record `score` for `category` on the active player's sheet.
    pub fn fill_current_player(&mut self, category: Category, score: i32) -> Result<(), GameError> {
        self.players[self.current].sheet.fill(category, score)
    }

    /// Move to the next player (wrapping) and reset the turn phase.
    pub fn advance_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.phase = TurnPhase::AwaitingRoll;
    }

    /// Count a completed round. Saturates at [`TOTAL_ROUNDS`].
    pub fn advance_round(&mut self) {
        if self.round < TOTAL_ROUNDS {
            self.round += 1;
        }
    }

    /// True once all rounds have been played.
    pub fn is_finished(&self) -> bool {
        self.round >= TOTAL_ROUNDS
    }

    /// Total every sheet and store the results.
    ///
    /// Every sheet is totalled before anything is stored, so a failure
    /// leaves all finalized totals untouched.
    pub fn finalize_scores(&mut self) -> Result<(), GameError> {
        let mut totals = Vec::with_capacity(self.players.len());
        for p in &self.players {
            totals.push(p.sheet.total()?);
        }
        for (p, total) in self.players.iter_mut().zip(totals) {
            p.total = Some(total);
        }
        Ok(())
    }

    /// Every player whose total equals the maximum.
    ///
    /// Before finalization all totals read 0, so every player ties.
    pub fn winners(&self) -> Vec<&Player> {
        let best = self
            .players
            .iter()
            .map(Player::total_score)
            .max()
            .unwrap_or(0);
        self.players
            .iter()
            .filter(|p| p.total_score() == best)
            .collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Current faces, by die position.
    pub fn dice(&self) -> [u8; DICE_COUNT] {
        self.dice.faces()
    }

    /// Completed rounds so far: 0 at the start, [`TOTAL_ROUNDS`] when done.
    pub fn current_round(&self) -> usize {
        self.round
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Rerolls still available this turn. A turn not yet opened has the full
    /// budget ahead of it.
    pub fn rerolls_left(&self) -> u8 {
        match self.phase {
            TurnPhase::AwaitingRoll => REROLLS_PER_TURN,
            TurnPhase::AwaitingDecision { rerolls_left } => rerolls_left,
        }
    }

    /// Unfilled categories for the active player.
    pub fn available_categories(&self) -> Vec<Category> {
        self.current_player().sheet().available_categories()
    }

    /// Would-be scores for the active player's unfilled categories with the
    /// live dice.
    pub fn available_scores(&self) -> Vec<(Category, i32)> {
        self.current_player()
            .sheet()
            .scores_for_available(self.dice.faces())
    }
}
