use crate::checker::Checker;
use std::fmt;

/// The most checkers a single point can ever hold.
pub const MAX_CHECKERS: u8 = 15;

/// A point (pip) of the board holding zero or more checkers of one color.
///
/// Stored as a signed magnitude: positive counts are White, negative counts
/// are Red. A point therefore cannot hold both colors at once.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Point(i8);

impl Point {
    pub const EMPTY: Point = Point(0);

    /// Creates a point holding `count` checkers of `color`.
    pub const fn new(count: u8, color: Checker) -> Self {
        let count = count as i8;
        match color {
            Checker::White => Point(count),
            Checker::Red => Point(-count),
        }
    }

    /// Number of checkers on the point, whatever their color.
    pub const fn count(&self) -> u8 {
        self.0.unsigned_abs()
    }

    /// Color of the checkers on the point, `None` when empty.
    pub const fn color(&self) -> Option<Checker> {
        if self.0 > 0 {
            Some(Checker::White)
        } else if self.0 < 0 {
            Some(Checker::Red)
        } else {
            None
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of `player`'s checkers on the point.
    pub fn num(&self, player: Checker) -> u8 {
        if self.color() == Some(player) {
            self.count()
        } else {
            0
        }
    }

    /// A made point has two or more checkers of `player`.
    pub fn is_made_by(&self, player: Checker) -> bool {
        self.num(player) >= 2
    }

    /// A blot is a lone checker of `player`.
    pub fn is_blot_of(&self, player: Checker) -> bool {
        self.num(player) == 1
    }

    /// Clears the point and then places `count` checkers of `color` on it.
    pub fn reset(&mut self, count: u8, color: Checker) {
        *self = Point::new(count, color);
    }

    /// Places one more checker of `color`.
    ///
    /// # Panics
    ///
    /// Panics if the point holds the other color or is already full.
    pub fn add(&mut self, color: Checker) {
        if self.color() == Some(color.other()) {
            panic!("cannot add {color} to point {self}");
        }
        if self.count() >= MAX_CHECKERS {
            panic!("point {self} is full");
        }
        match color {
            Checker::White => self.0 += 1,
            Checker::Red => self.0 -= 1,
        }
    }

    /// Removes one checker.
    ///
    /// # Panics
    ///
    /// Panics if the point is empty.
    pub fn subtract(&mut self) {
        match self.color() {
            Some(Checker::White) => self.0 -= 1,
            Some(Checker::Red) => self.0 += 1,
            None => panic!("no checkers to remove"),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(color) = self.color() {
            for _ in 0..self.count() {
                write!(f, "{color}")?;
            }
        }
        Ok(())
    }
}
