use crate::error::RollError;
use crate::random::RandomGenerator;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Zero: this die is not in play. 1-6: that many pips.
pub type Die = u8;

pub const NO_DIE: Die = 0;

/// Up to four dice. A doublet such as `6 6` is played as four sixes.
///
/// Invariant: once a slot holds [`NO_DIE`], every later slot does too.
///
/// Equality and hashing ignore the order of the dice, so `6 5` equals `5 6`.
#[derive(Debug, Default, Copy, Clone)]
pub struct Roll([Die; 4]);

impl Roll {
    pub const EMPTY: Roll = Roll([NO_DIE; 4]);

    /// Builds the roll of two dice, larger first, expanding a doublet to four
    /// dice.
    pub const fn of(a: Die, b: Die) -> Self {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        if hi == lo {
            Roll([hi; 4])
        } else {
            Roll([hi, lo, NO_DIE, NO_DIE])
        }
    }

    /// Builds a roll from raw slots exactly as given. Use [`Roll::validate`]
    /// to check the shape.
    pub const fn from_slots(slots: [Die; 4]) -> Self {
        Roll(slots)
    }

    /// Rolls two fresh dice.
    pub fn roll<R: RandomGenerator>(random: &mut R) -> Self {
        let x = random.next_range(0, 36) as Die;
        Roll::of(x % 6 + 1, x / 6 + 1)
    }

    /// Rolls until the two dice differ, as for the opening roll of a game.
    pub fn roll_opening<R: RandomGenerator>(random: &mut R) -> Self {
        loop {
            let roll = Roll::roll(random);
            if !roll.is_doublet() {
                return roll;
            }
        }
    }

    pub fn slots(&self) -> [Die; 4] {
        self.0
    }

    /// The dice still in the roll, in slot order.
    pub fn dice(&self) -> impl Iterator<Item = Die> + '_ {
        self.0.iter().copied().filter(|&d| d != NO_DIE)
    }

    pub fn len(&self) -> usize {
        self.dice().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == NO_DIE
    }

    pub fn is_doublet(&self) -> bool {
        self.0[0] != NO_DIE && self.0[0] == self.0[1]
    }

    /// Distinct dice, largest first.
    pub fn unique_dice(&self) -> Vec<Die> {
        let mut unique: Vec<Die> = self.dice().collect();
        unique.sort_unstable_by(|a, b| b.cmp(a));
        unique.dedup();
        unique
    }

    /// The dice sorted largest first.
    fn sorted(&self) -> [Die; 4] {
        let mut sorted = self.0;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// Removes the first occurrence of `die`, keeping the remaining dice packed
    /// at the front.
    ///
    /// # Panics
    ///
    /// Panics if `die` is not in the roll.
    pub fn remove(&mut self, die: Die) {
        let Some(index) = self.0.iter().position(|&d| d == die && d != NO_DIE) else {
            panic!("die {die} is not in roll {self}");
        };
        self.0.copy_within(index + 1.., index);
        self.0[3] = NO_DIE;
    }

    /// Appends `die` to the first empty slot.
    ///
    /// # Panics
    ///
    /// Panics if the roll is already full.
    pub fn push(&mut self, die: Die) {
        let Some(slot) = self.0.iter_mut().find(|d| **d == NO_DIE) else {
            panic!("roll {self} is full");
        };
        *slot = die;
    }

    /// Checks the shape of a freshly rolled roll: two distinct dice, largest
    /// first, or a doublet spelled out as four dice.
    pub fn validate(&self) -> Result<(), RollError> {
        let unique = self.unique_dice();
        if unique.len() > 2 {
            return Err(RollError::TooManyUniqueDice(unique));
        }
        if unique.len() == 2 && self.len() > 2 {
            return Err(RollError::TooManyDice(self.dice().collect()));
        }
        for (slot, &die) in self.0.iter().enumerate() {
            let lowest = if slot < 2 { 1 } else { NO_DIE };
            if die < lowest || die > 6 {
                return Err(RollError::OutOfRange { slot, die });
            }
        }
        if self.0[0] < self.0[1] {
            return Err(RollError::NotLargestFirst(self.0[0], self.0[1]));
        }
        if self.0[0] == self.0[1] && (self.0[0] != self.0[2] || self.0[0] != self.0[3]) {
            return Err(RollError::IncompleteDoublet(self.0[0]));
        }
        Ok(())
    }
}

impl PartialEq for Roll {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Roll {}

impl Hash for Roll {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl From<[Die; 4]> for Roll {
    fn from(slots: [Die; 4]) -> Self {
        Roll::from_slots(slots)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("<>");
        }
        for die in self.dice() {
            write!(f, "{die}")?;
        }
        Ok(())
    }
}
