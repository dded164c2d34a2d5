//! Lexicographic ranking of candidate boards.
//!
//! A [`Selection`] holds the candidates in best-first order. Applying a
//! [`Criterion`] scores the candidates that are still in the running, keeps
//! those with the best score and rules out the rest, which drop to just
//! behind the survivors. Applying criteria one after another therefore ranks
//! by the first criterion, breaking its ties with the second, and so on.

use crate::board::Board;
use crate::random::RandomGenerator;
use crate::trace::Tracer;
use std::collections::BTreeMap;
use std::fmt;

/// Label of the final pseudo-criterion that breaks ties at random.
pub const RANDOMIZER: &str = "randomizer";

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Goal {
    Maximize,
    Minimize,
}

/// A named way to score a board, and which end of the scale is better.
///
/// Scores are from the point of view of the board's roller.
#[derive(Debug, Copy, Clone)]
pub struct Criterion {
    pub label: &'static str,
    pub goal: Goal,
    pub score: fn(&Board) -> i64,
}

impl Criterion {
    pub const fn maximize(label: &'static str, score: fn(&Board) -> i64) -> Self {
        Criterion {
            label,
            goal: Goal::Maximize,
            score,
        }
    }

    pub const fn minimize(label: &'static str, score: fn(&Board) -> i64) -> Self {
        Criterion {
            label,
            goal: Goal::Minimize,
            score,
        }
    }
}

/// Why a board was ranked where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    NoAnalysis,
    Ranked {
        /// `None` for boards that survived every criterion.
        ruled_out: Option<String>,
        scores: BTreeMap<String, i64>,
    },
    RandomPick,
}

impl Analysis {
    /// A human-readable justification, `None` when there is nothing to say.
    pub fn summary(&self) -> Option<String> {
        match self {
            Analysis::NoAnalysis => None,
            Analysis::Ranked {
                ruled_out: Some(reason),
                ..
            } => Some(reason.clone()),
            Analysis::Ranked {
                ruled_out: None,
                scores,
            } => {
                let details: Vec<String> = scores.iter().map(|(k, v)| format!("{k}={v}")).collect();
                Some(format!(
                    "wasn't ruled out by heuristics. Details: {}",
                    details.join(" ")
                ))
            }
            Analysis::RandomPick => Some("chosen at random".to_string()),
        }
    }
}

/// A candidate board together with the reasoning that placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedBoard {
    pub board: Board,
    pub analysis: Analysis,
}

impl AnalyzedBoard {
    pub fn unanalyzed(board: Board) -> Self {
        AnalyzedBoard {
            board,
            analysis: Analysis::NoAnalysis,
        }
    }
}

impl fmt::Display for AnalyzedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.analysis.summary() {
            None => write!(f, "{}", self.board),
            Some(summary) => write!(f, "{} ({})", self.board, summary),
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    board: Board,
    ruled_out: Option<String>,
    scores: BTreeMap<String, i64>,
}

/// Candidates being narrowed down by successive criteria.
///
/// The first [`Selection::num_active`] candidates are still in the running,
/// in their original relative order. Everything after them has been ruled
/// out; candidates ruled out by later criteria sit ahead of those ruled out
/// earlier.
pub struct Selection<'t> {
    candidates: Vec<Candidate>,
    active: usize,
    tracer: Option<&'t mut dyn Tracer>,
}

impl<'t> Selection<'t> {
    pub fn new(boards: &[Board]) -> Self {
        let candidates: Vec<Candidate> = boards
            .iter()
            .map(|&board| Candidate {
                board,
                ruled_out: None,
                scores: BTreeMap::new(),
            })
            .collect();
        Selection {
            active: candidates.len(),
            candidates,
            tracer: None,
        }
    }

    /// Starts a selection that explains each step to `tracer`.
    pub fn traced(boards: &[Board], tracer: &'t mut dyn Tracer) -> Self {
        Selection {
            tracer: Some(tracer),
            ..Selection::new(boards)
        }
    }

    fn trace(&mut self, label: &str, message: impl FnOnce() -> String) {
        if let Some(tracer) = self.tracer.as_deref_mut() {
            if tracer.enabled() {
                tracer.trace(label, &message());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// How many candidates have not been ruled out.
    pub fn num_active(&self) -> usize {
        self.active
    }

    /// The boards still in the running, in their original order.
    pub fn winners(&self) -> impl Iterator<Item = &Board> + '_ {
        self.candidates[..self.active].iter().map(|c| &c.board)
    }

    /// Every board, best first.
    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.candidates.iter().map(|c| &c.board)
    }

    pub fn apply(&mut self, criterion: &Criterion) -> &mut Self {
        self.apply_with(criterion.label, criterion.goal, criterion.score)
    }

    pub fn apply_all(&mut self, criteria: &[Criterion]) -> &mut Self {
        for criterion in criteria {
            self.apply(criterion);
        }
        self
    }

    /// Scores the active candidates with `score` and rules out every one that
    /// misses the best score.
    pub fn apply_with(
        &mut self,
        label: &str,
        goal: Goal,
        mut score: impl FnMut(&Board) -> i64,
    ) -> &mut Self {
        if self.active == 0 {
            return self;
        }
        let remaining = self.active;
        self.trace(label, || format!("starting with {remaining} remaining choices"));
        let mut active: Vec<Candidate> = self.candidates.drain(..self.active).collect();
        debug_assert!(active.iter().all(|c| c.ruled_out.is_none()));
        let scores: Vec<i64> = active.iter().map(|c| score(&c.board)).collect();
        let best = match goal {
            Goal::Maximize => scores.iter().copied().max(),
            Goal::Minimize => scores.iter().copied().min(),
        }
        .unwrap_or_default();

        let mut winners = Vec::with_capacity(active.len());
        let mut losers = Vec::new();
        for (i, (mut candidate, value)) in active.drain(..).zip(scores).enumerate() {
            self.trace(label, || {
                format!("score is {value}, choice is {i:<3} {}", candidate.board)
            });
            candidate.scores.insert(label.to_string(), value);
            if value == best {
                winners.push(candidate);
                continue;
            }
            candidate.ruled_out = Some(format!("Ruled out by {label} ({value})"));
            losers.push((value, candidate));
        }
        losers.sort_by_key(|(value, _)| *value);

        if winners.len() > 1 {
            for winner in &winners {
                self.trace(label, || format!("score={best} {}", winner.board));
            }
        }
        self.active = winners.len();
        winners.extend(losers.into_iter().map(|(_, candidate)| candidate));
        winners.append(&mut self.candidates);
        self.candidates = winners;
        self
    }

    /// Breaks any remaining tie by an opaque random score.
    pub fn randomize<R: RandomGenerator + ?Sized>(&mut self, random: &mut R) -> &mut Self {
        if self.candidates.len() > 1 {
            self.apply_with(RANDOMIZER, Goal::Maximize, |_| random.next_score());
        }
        self
    }

    /// The ranking, best first, each board with its scores and the reason it
    /// was ruled out, if it was.
    pub fn finish(self) -> Vec<AnalyzedBoard> {
        self.candidates
            .into_iter()
            .map(|c| AnalyzedBoard {
                board: c.board,
                analysis: Analysis::Ranked {
                    ruled_out: c.ruled_out,
                    scores: c.scores,
                },
            })
            .collect()
    }
}
