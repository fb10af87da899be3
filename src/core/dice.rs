//! Dice, die slots and the per-turn used-dice ledger.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pip values to consume in one turn: two for a normal roll, four for a double.
pub type PipSequence = SmallVec<[u8; 4]>;

/// Which of the two dice an action refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    Left = 0,
    Right = 1,
}

impl Die {
    pub const BOTH: [Die; 2] = [Die::Left, Die::Right];

    /// Block index of this die in the action space.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An unordered pair of dice. `Dice::default()` means "not rolled yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    pub left: u8,
    pub right: u8,
}

impl Dice {
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Both dice show the same value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Value shown by one die.
    #[must_use]
    pub const fn get(self, die: Die) -> u8 {
        match die {
            Die::Left => self.left,
            Die::Right => self.right,
        }
    }

    /// Pips to consume this turn, left die first.
    #[must_use]
    pub fn pips(self) -> PipSequence {
        if self.is_double() {
            SmallVec::from_slice(&[self.left; 4])
        } else {
            SmallVec::from_slice(&[self.left, self.right])
        }
    }

    /// Same roll with the dice swapped.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.right, self.left)
    }

    /// Die slot showing `pips`. The left die wins when both match.
    #[must_use]
    pub fn die_for(self, pips: u8) -> Option<Die> {
        if pips == self.left {
            Some(Die::Left)
        } else if pips == self.right {
            Some(Die::Right)
        } else {
            None
        }
    }

    /// Number of submoves a turn with this roll allows.
    #[must_use]
    pub const fn submove_cap(self) -> usize {
        if self.is_double() {
            4
        } else {
            2
        }
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}

/// Pips consumed so far this turn, in play order. A skip is recorded as `0`.
///
/// Only used for display; rules never consult it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedDice {
    used: SmallVec<[u8; 4]>,
}

impl UsedDice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one consumed pip value.
    pub fn count(&mut self, pips: u8) {
        self.used.push(pips);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.used
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pips_normal_roll() {
        let dice = Dice::new(1, 3);
        assert!(!dice.is_double());
        assert_eq!(dice.pips().as_slice(), &[1, 3]);
        assert_eq!(dice.swapped().pips().as_slice(), &[3, 1]);
        assert_eq!(dice.submove_cap(), 2);
    }

    #[test]
    fn test_pips_double() {
        let dice = Dice::new(2, 2);
        assert!(dice.is_double());
        assert_eq!(dice.pips().as_slice(), &[2, 2, 2, 2]);
        assert_eq!(dice.submove_cap(), 4);
    }

    #[test]
    fn test_die_for() {
        let dice = Dice::new(2, 3);
        assert_eq!(dice.die_for(2), Some(Die::Left));
        assert_eq!(dice.die_for(3), Some(Die::Right));
        assert_eq!(dice.die_for(1), None);

        // Doubles always report the left die
        assert_eq!(Dice::new(1, 1).die_for(1), Some(Die::Left));
    }

    #[test]
    fn test_get() {
        let dice = Dice::new(3, 1);
        assert_eq!(dice.get(Die::Left), 3);
        assert_eq!(dice.get(Die::Right), 1);
        assert_eq!(dice.to_string(), "3-1");
    }

    #[test]
    fn test_used_dice_ledger() {
        let mut used = UsedDice::new();
        assert!(used.is_empty());

        used.count(2);
        used.count(0);
        used.count(3);

        assert_eq!(used.len(), 3);
        assert_eq!(used.as_slice(), &[2, 0, 3]);
    }
}
