#[cfg(test)]
mod tests {
    use crate::dice::{DiceSet, DieSource, ScriptedDieSource, SeededDieSource, DICE_COUNT};
    use crate::error::GameError;

    #[test]
    fn seeded_source_rolls_in_range() {
        let mut src = SeededDieSource::new(42);
        for _ in 0..1000 {
            let face = src.roll();
            assert!((1..=6).contains(&face), "face out of range: {}", face);
        }
    }

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = SeededDieSource::new(7);
        let mut b = SeededDieSource::new(7);
        let left: Vec<u8> = (0..50).map(|_| a.roll()).collect();
        let right: Vec<u8> = (0..50).map(|_| b.roll()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn scripted_source_cycles() {
        let mut src = ScriptedDieSource::new(vec![1, 2, 3]);
        let got: Vec<u8> = (0..7).map(|_| src.roll()).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn fresh_dice_show_ones() {
        let dice = DiceSet::new();
        assert_eq!(dice.faces(), [1; DICE_COUNT]);
    }

    #[test]
    fn roll_all_replaces_every_face() {
        let mut dice = DiceSet::new();
        let mut src = ScriptedDieSource::new(vec![2, 3, 4, 5, 6]);
        dice.roll_all(&mut src);
        assert_eq!(dice.faces(), [2, 3, 4, 5, 6]);
    }

    #[test]
    fn reroll_keeping_preserves_kept_positions() {
        let mut dice = DiceSet::new();
        let mut src = ScriptedDieSource::new(vec![1, 2, 3, 4, 5]);
        dice.roll_all(&mut src);
        assert_eq!(dice.faces(), [1, 2, 3, 4, 5]);

        // Keep positions 0 and 4; the rest are drawn from a stream of sixes.
        let mut sixes = ScriptedDieSource::new(vec![6]);
        dice.reroll_keeping(&[0, 4], &mut sixes).unwrap();
        assert_eq!(dice.faces(), [1, 6, 6, 6, 5]);
    }

    #[test]
    fn keeping_every_position_changes_nothing() {
        let mut dice = DiceSet::new();
        let mut src = ScriptedDieSource::new(vec![3, 1, 4, 1, 5]);
        dice.roll_all(&mut src);
        let before = dice.faces();

        let mut sixes = ScriptedDieSource::new(vec![6]);
        dice.reroll_keeping(&[0, 1, 2, 3, 4], &mut sixes).unwrap();
        assert_eq!(dice.faces(), before);
    }

    #[test]
    fn duplicate_keep_positions_are_tolerated() {
        let mut dice = DiceSet::new();
        let mut src = ScriptedDieSource::new(vec![1, 2, 3, 4, 5]);
        dice.roll_all(&mut src);

        let mut sixes = ScriptedDieSource::new(vec![6]);
        dice.reroll_keeping(&[2, 2, 2], &mut sixes).unwrap();
        assert_eq!(dice.faces(), [6, 6, 3, 6, 6]);
    }

    #[test]
    fn out_of_range_position_rejected_before_any_reroll() {
        let mut dice = DiceSet::new();
        let mut src = ScriptedDieSource::new(vec![1, 2, 3, 4, 5]);
        dice.roll_all(&mut src);
        let before = dice.faces();

        let mut sixes = ScriptedDieSource::new(vec![6]);
        let err = dice.reroll_keeping(&[0, 5], &mut sixes).unwrap_err();
        assert!(matches!(err, GameError::DiePositionOutOfRange { pos: 5 }));
        assert_eq!(dice.faces(), before, "dice changed despite the error");
    }
}
