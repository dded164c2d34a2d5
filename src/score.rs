use crate::checker::Checker;
use std::fmt;

/// Match score. `Score { goal: 5, ..Default::default() }` is a match to 5
/// under the Crawford rule; the rule is standard so the default uses it.
///
/// A goal of zero means money play: no match, just points.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Score {
    pub white: u32,
    pub red: u32,
    pub no_crawford_rule: bool,
    pub already_played_crawford_game: bool,
    pub goal: u32,
}

impl Score {
    /// A fresh match to `goal` under the Crawford rule.
    pub fn to(goal: u32) -> Self {
        Score {
            goal,
            ..Default::default()
        }
    }

    pub fn of(&self, player: Checker) -> u32 {
        match player {
            Checker::White => self.white,
            Checker::Red => self.red,
        }
    }

    /// Credits `victor` with `stakes` points, saturating at `u32::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `stakes` is zero.
    pub fn update(&mut self, victor: Checker, stakes: u32) {
        assert!(stakes >= 1, "bad stakes {stakes} for victor {victor}");
        match victor {
            Checker::White => self.white = self.white.saturating_add(stakes),
            Checker::Red => self.red = self.red.saturating_add(stakes),
        }
    }

    /// True when the game about to start is the Crawford game: one side is a
    /// single point from the goal and the rule has not been used yet.
    pub fn crawford_rule_applies_next_game(&self) -> bool {
        if self.no_crawford_rule || self.already_played_crawford_game {
            return false;
        }
        self.red.saturating_add(1) == self.goal
            || self.white.saturating_add(1) == self.goal
    }

    pub fn match_over(&self) -> bool {
        self.goal > 0 && (self.white >= self.goal || self.red >= self.goal)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crawford = if self.no_crawford_rule {
            "off"
        } else if self.already_played_crawford_game {
            "on,dormant"
        } else {
            "on,inactive"
        };
        write!(
            f,
            "Score{{Goal:{},{}:{},{}:{},Crawford {}}}",
            self.goal,
            Checker::White,
            self.white,
            Checker::Red,
            self.red,
            crawford
        )
    }
}
