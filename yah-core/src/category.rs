//! Scoring categories and their fixed score constants.

use crate::error::GameError;

/// Number of scoring categories on a sheet.
pub const NUM_CATEGORIES: usize = 13;

/// Fixed award for a full house.
pub const FULL_HOUSE_SCORE: i32 = 25;
/// Fixed award for a small straight.
pub const SMALL_STRAIGHT_SCORE: i32 = 30;
/// Fixed award for a large straight.
pub const LARGE_STRAIGHT_SCORE: i32 = 40;
/// Fixed award for a Yahtzee (five of a kind).
pub const YAHTZEE_SCORE: i32 = 50;
/// Bonus added to the total when the upper section reaches the threshold.
pub const UPPER_BONUS: i32 = 35;
/// Upper-section sum required for the bonus.
pub const UPPER_BONUS_THRESHOLD: i32 = 63;

/// The thirteen scoring categories, declared in identifier order (0..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Chance,
    Yahtzee,
}

impl Category {
    /// All categories in identifier order.
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Chance,
        Category::Yahtzee,
    ];

    /// Stable numeric identifier (declaration order).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Category for an external numeric identifier.
    pub fn from_index(index: u8) -> Result<Category, GameError> {
        Category::ALL
            .get(index as usize)
            .copied()
            .ok_or(GameError::CategoryOutOfRange { index })
    }

    /// True for the six single-face categories (Aces through Sixes) whose
    /// sum gates the upper bonus.
    pub fn is_upper(self) -> bool {
        (self as u8) < 6
    }

    /// Stable lowercase name for logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Category::Aces => "aces",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Chance => "chance",
            Category::Yahtzee => "yahtzee",
        }
    }
}
