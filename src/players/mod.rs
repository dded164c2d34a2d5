//! Heuristic players.
//!
//! Each strategy is a fixed list of [`Criterion`]s handed to the
//! [`Selection`] engine, with a random tie-break at the end. Every score is
//! from the point of view of the side that just moved, which is the roller of
//! each candidate board.

pub mod aggressive;
pub mod conservative;
pub mod racer;
pub mod random;

use crate::board::{Board, borne_off};
use crate::random::RandomGenerator;
use crate::selection::{AnalyzedBoard, Criterion, Selection};
use crate::trace::Tracer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranks the legal continuations of a turn, best first.
///
/// Only the first board returned is played; the rest are there for
/// diagnostics. Returning nothing means "play the first candidate".
pub trait Chooser {
    fn choose(&mut self, candidates: &[Board], tracer: &mut dyn Tracer) -> Vec<AnalyzedBoard>;
}

impl<T: Chooser + ?Sized> Chooser for &mut T {
    fn choose(&mut self, candidates: &[Board], tracer: &mut dyn Tracer) -> Vec<AnalyzedBoard> {
        (**self).choose(candidates, tracer)
    }
}

impl<T: Chooser + ?Sized> Chooser for Box<T> {
    fn choose(&mut self, candidates: &[Board], tracer: &mut dyn Tracer) -> Vec<AnalyzedBoard> {
        (**self).choose(candidates, tracer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Hates leaving blots, even unhittable ones. Plays as a racer once
    /// contact is over.
    #[default]
    Conservative,
    /// Sends the opponent back and builds points before worrying about blots.
    /// Plays as a racer once contact is over.
    Aggressive,
    /// Bears off as fast as possible. Only sensible when there is no contact.
    Racer,
    /// Any legal move will do.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Conservative,
        Strategy::Aggressive,
        Strategy::Racer,
        Strategy::Random,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Conservative => "conservative",
            Strategy::Aggressive => "aggressive",
            Strategy::Racer => "racer",
            Strategy::Random => "random",
        };
        write!(f, "{name}")
    }
}

/// A computer player: a strategy plus its own source of randomness for
/// breaking ties.
pub struct Player<R: RandomGenerator> {
    strategy: Strategy,
    random: R,
}

impl<R: RandomGenerator> Player<R> {
    pub fn new(strategy: Strategy, random: R) -> Self {
        Player { strategy, random }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl<R: RandomGenerator> Chooser for Player<R> {
    fn choose(&mut self, candidates: &[Board], tracer: &mut dyn Tracer) -> Vec<AnalyzedBoard> {
        match self.strategy {
            Strategy::Conservative => conservative::choose(candidates, &mut self.random, tracer),
            Strategy::Aggressive => aggressive::choose(candidates, &mut self.random, tracer),
            Strategy::Racer => racer::choose(candidates, &mut self.random, tracer),
            Strategy::Random => random::choose(candidates, &mut self.random, tracer),
        }
    }
}

/// Lets any closure sit at the table, e.g. one that prompts a human.
pub struct ClosureChooser<F>(pub F);

impl<F> Chooser for ClosureChooser<F>
where
    F: FnMut(&[Board]) -> Vec<AnalyzedBoard>,
{
    fn choose(&mut self, candidates: &[Board], _tracer: &mut dyn Tracer) -> Vec<AnalyzedBoard> {
        (self.0)(candidates)
    }
}

/// Runs `criteria` then a random tie-break over `candidates`.
///
/// A lone candidate is returned as is, with no analysis.
pub(crate) fn rank<R: RandomGenerator + ?Sized>(
    candidates: &[Board],
    criteria: &[Criterion],
    random: &mut R,
    tracer: &mut dyn Tracer,
) -> Vec<AnalyzedBoard> {
    match candidates {
        [] => Vec::new(),
        [only] => vec![AnalyzedBoard::unanalyzed(*only)],
        _ => {
            let mut selection = Selection::traced(candidates, &mut *tracer);
            selection.apply_all(criteria).randomize(random);
            selection.finish()
        }
    }
}

/// Traces the outcome of `scope`'s ranking.
pub(crate) fn trace_decision(scope: &str, ranked: &[AnalyzedBoard], tracer: &mut dyn Tracer) {
    if tracer.enabled() {
        if let Some(best) = ranked.first() {
            tracer.trace(scope, &format!("decided on {best}"));
        }
    }
}

pub(crate) fn my_blot_liability(board: &Board) -> i64 {
    i64::from(board.blot_liability(board.roller, false))
}

pub(crate) fn my_blot_liability_including_unhittable(board: &Board) -> i64 {
    i64::from(board.blot_liability(board.roller, true))
}

pub(crate) fn my_blots(board: &Board) -> i64 {
    i64::from(board.num_blots(board.roller))
}

pub(crate) fn opponent_pip_count(board: &Board) -> i64 {
    i64::from(board.pip_count(board.roller.other()))
}

pub(crate) fn my_blocked_points(board: &Board) -> i64 {
    i64::from(board.num_points_blocked(board.roller))
}

pub(crate) fn prime_size(board: &Board) -> i64 {
    i64::from(board.length_of_max_prime(board.roller))
}

pub(crate) fn my_checkers_home(board: &Board) -> i64 {
    i64::from(board.num_checkers_home(board.roller))
}

pub(crate) fn backgammon_exposure(board: &Board) -> i64 {
    board.backgammon_exposure(board.roller)
}

pub(crate) fn my_borne_off(board: &Board) -> i64 {
    i64::from(board.pips[borne_off(board.roller)].count())
}

pub(crate) fn my_farthest(board: &Board) -> i64 {
    i64::from(board.pip_count_of_farthest_checker(board.roller))
}
