//! Rules-level error type.

use thiserror::Error;

use crate::category::Category;

/// Errors produced by the rules engine and orchestrator.
///
/// Every variant is a rejected operation: the game, sheet, and dice are
/// unchanged when one is returned. Nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("need at least {min} players, got {got}")]
    NotEnoughPlayers { min: usize, got: usize },
    #[error("die position {pos} out of range 0..=4")]
    DiePositionOutOfRange { pos: usize },
    #[error("category index {index} out of range 0..=12")]
    CategoryOutOfRange { index: u8 },
    #[error("category {0:?} is already filled")]
    CategoryAlreadyFilled(Category),
    #[error("score sheet incomplete: {unfilled} categories unfilled")]
    SheetIncomplete { unfilled: usize },
    #[error("no rerolls left this turn")]
    RerollsExhausted,
    #[error("turn must open with a full roll")]
    RollRequired,
}
