//! Dice-to-score mapping for all thirteen categories.
//!
//! Pure functions over 5-face hands; nothing here touches game state.

use crate::category::{
    Category, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, NUM_CATEGORIES, SMALL_STRAIGHT_SCORE,
    YAHTZEE_SCORE,
};
use crate::dice::DICE_COUNT;

/// Score one category for a 5-dice hand.
///
/// - Input faces must be in 1..=6. Order does not matter; the hand is never
///   mutated.
/// - Returned scores are **raw** category scores; the upper bonus is applied
///   by the sheet total, not here.
pub fn category_score(category: Category, dice: [u8; DICE_COUNT]) -> i32 {
    match category {
        Category::Aces => face_sum(dice, 1),
        Category::Twos => face_sum(dice, 2),
        Category::Threes => face_sum(dice, 3),
        Category::Fours => face_sum(dice, 4),
        Category::Fives => face_sum(dice, 5),
        Category::Sixes => face_sum(dice, 6),
        Category::ThreeOfAKind => of_a_kind(dice, 3),
        Category::FourOfAKind => of_a_kind(dice, 4),
        Category::FullHouse => full_house(dice),
        Category::SmallStraight => small_straight(dice),
        Category::LargeStraight => large_straight(dice),
        Category::Chance => dice_sum(dice),
        Category::Yahtzee => yahtzee(dice),
    }
}

/// Compute raw scores for every category at once.
pub fn scores_for_dice(dice: [u8; DICE_COUNT]) -> [i32; NUM_CATEGORIES] {
    let mut out = [0i32; NUM_CATEGORIES];
    for (slot, cat) in out.iter_mut().zip(Category::ALL) {
        *slot = category_score(cat, dice);
    }
    out
}

/// Per-face occurrence counts, indexed by face value minus one.
fn face_counts(dice: [u8; DICE_COUNT]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for d in dice {
        counts[(d - 1) as usize] += 1;
    }
    counts
}

fn dice_sum(dice: [u8; DICE_COUNT]) -> i32 {
    dice.iter().map(|&d| d as i32).sum()
}

/// Sum of the dice showing `face`.
fn face_sum(dice: [u8; DICE_COUNT], face: u8) -> i32 {
    dice.iter().filter(|&&d| d == face).map(|&d| d as i32).sum()
}

/// Sum of all five dice if any face appears at least `n` times, else 0.
fn of_a_kind(dice: [u8; DICE_COUNT], n: u8) -> i32 {
    if face_counts(dice).iter().any(|&c| c >= n) {
        dice_sum(dice)
    } else {
        0
    }
}

/// 25 for exactly a triple of one face plus a pair of another.
///
/// A count of 3 and a count of 2 over five dice leaves no other shape, so
/// five of a kind does not qualify.
fn full_house(dice: [u8; DICE_COUNT]) -> i32 {
    let counts = face_counts(dice);
    if counts.contains(&3) && counts.contains(&2) {
        FULL_HOUSE_SCORE
    } else {
        0
    }
}

/// 30 when four consecutive distinct values appear anywhere in the hand.
///
/// Scans the sorted faces counting +1 steps: equal neighbours are skipped,
/// a gap resets the run, and the longest run must reach three steps.
fn small_straight(dice: [u8; DICE_COUNT]) -> i32 {
    let mut sorted = dice;
    sorted.sort_unstable();
    let mut best = 0u8;
    let mut run = 0u8;
    for w in sorted.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
        } else if w[1] != w[0] {
            run = 0;
        }
        best = best.max(run);
    }
    if best >= 3 {
        SMALL_STRAIGHT_SCORE
    } else {
        0
    }
}

/// 40 when all five values are pairwise-consecutive and distinct.
fn large_straight(dice: [u8; DICE_COUNT]) -> i32 {
    let mut sorted = dice;
    sorted.sort_unstable();
    let steps = sorted.windows(2).filter(|w| w[1] == w[0] + 1).count();
    if steps >= 4 {
        LARGE_STRAIGHT_SCORE
    } else {
        0
    }
}

/// 50 if all five dice show the same face.
fn yahtzee(dice: [u8; DICE_COUNT]) -> i32 {
    if dice.iter().all(|&d| d == dice[0]) {
        YAHTZEE_SCORE
    } else {
        0
    }
}
