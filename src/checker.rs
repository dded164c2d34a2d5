use std::fmt;

/// The color of a checker. Each player owns 15 of them.
///
/// White moves from low point numbers to high ones and bears off to pip 0;
/// Red moves from high to low and bears off to pip 25. An empty point has no
/// color, which is expressed as `Option<Checker>`.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Checker {
    White,
    Red,
}

impl Checker {
    /// Both colors, White first.
    pub const BOTH: [Checker; 2] = [Checker::White, Checker::Red];

    /// Returns the opponent's color.
    pub const fn other(self) -> Checker {
        match self {
            Checker::White => Checker::Red,
            Checker::Red => Checker::White,
        }
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checker::White => f.write_str("W"),
            Checker::Red => f.write_str("r"),
        }
    }
}
