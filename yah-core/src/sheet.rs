//! Per-player score sheet: fill-once category slots and the bonus-aware total.

use crate::category::{Category, NUM_CATEGORIES, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use crate::dice::DICE_COUNT;
use crate::error::GameError;
use crate::scoring;

/// One player's sheet: a fill-once slot per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    slots: [Option<i32>; NUM_CATEGORIES],
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would-be score for `category` with the given hand. Never mutates.
    pub fn score(&self, category: Category, dice: [u8; DICE_COUNT]) -> i32 {
        scoring::category_score(category, dice)
    }

    pub fn is_filled(&self, category: Category) -> bool {
        self.slots[category.index() as usize].is_some()
    }

    /// Recorded score for a category, if filled.
    pub fn filled_score(&self, category: Category) -> Option<i32> {
        self.slots[category.index() as usize]
    }

    /// Unfilled categories, in identifier order.
    pub fn available_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| !self.is_filled(*c))
            .collect()
    }

    /// Would-be score for every unfilled category, in identifier order.
    pub fn scores_for_available(&self, dice: [u8; DICE_COUNT]) -> Vec<(Category, i32)> {
        self.available_categories()
            .into_iter()
            .map(|c| (c, scoring::category_score(c, dice)))
            .collect()
    }

    /// Record `score` for an unfilled category.
    ///
    /// A filled slot is immutable: a second fill fails and the first score
    /// stays.
    pub fn fill(&mut self, category: Category, score: i32) -> Result<(), GameError> {
        let slot = &mut self.slots[category.index() as usize];
        if slot.is_some() {
            return Err(GameError::CategoryAlreadyFilled(category));
        }
        *slot = Some(score);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Sum of the filled upper-section slots. The bonus is not included.
    pub fn upper_section_total(&self) -> i32 {
        Category::ALL
            .iter()
            .filter(|c| c.is_upper())
            .filter_map(|c| self.filled_score(*c))
            .sum()
    }

    /// Grand total: all thirteen scores, plus the upper bonus when the upper
    /// section reaches the threshold.
    ///
    /// Only defined for a complete sheet. Pure; repeated calls agree.
    pub fn total(&self) -> Result<i32, GameError> {
        let unfilled = self.slots.iter().filter(|s| s.is_none()).count();
        if unfilled > 0 {
            return Err(GameError::SheetIncomplete { unfilled });
        }
        let base: i32 = self.slots.iter().flatten().sum();
        if self.upper_section_total() >= UPPER_BONUS_THRESHOLD {
            Ok(base + UPPER_BONUS)
        } else {
            Ok(base)
        }
    }
}
