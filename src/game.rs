//! Drives whole games and matches between two [`Chooser`]s.

use crate::board::{Board, RollCheck};
use crate::checker::Checker;
use crate::error::GameError;
use crate::players::Chooser;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::score::Score;
use crate::trace::{NoopTracer, Tracer};
use crate::turn::Doubling;

/// How a single game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub victor: Checker,
    /// Points won: the cube value times one, two (gammon) or three
    /// (backgammon).
    pub stakes: u32,
    /// The match score after this game.
    pub score: Score,
    /// How many boards the observer saw, the starting board included.
    pub num_boards: usize,
    pub final_board: Board,
}

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub score: Score,
    pub games: Vec<GameResult>,
}

/// Two players at the table, the doubling policy and the dice.
pub struct Game<'a, K: RandomGenerator> {
    white: &'a mut dyn Chooser,
    red: &'a mut dyn Chooser,
    doubling: Doubling<'a>,
    random: K,
    tracer: Box<dyn Tracer + 'a>,
    paranoid: bool,
}

/// A builder for creating instances of `Game`.
pub struct GameBuilder<'a, K: RandomGenerator> {
    white: &'a mut dyn Chooser,
    red: &'a mut dyn Chooser,
    doubling: Doubling<'a>,
    random_generator: K,
    tracer: Box<dyn Tracer + 'a>,
    paranoid: bool,
}

impl<'a> GameBuilder<'a, StandardRandomGenerator> {
    /// Creates a new builder: thread RNG dice, no doubling, no tracing, no
    /// paranoia.
    pub fn new(white: &'a mut dyn Chooser, red: &'a mut dyn Chooser) -> Self {
        Self {
            white,
            red,
            doubling: Doubling::none(),
            random_generator: StandardRandomGenerator,
            tracer: Box::new(NoopTracer),
            paranoid: false,
        }
    }
}

impl<'a, K: RandomGenerator> GameBuilder<'a, K> {
    /// Sets the source of dice and opening rollers.
    pub fn with_random_generator<K2: RandomGenerator>(self, rg: K2) -> GameBuilder<'a, K2> {
        GameBuilder {
            white: self.white,
            red: self.red,
            doubling: self.doubling,
            random_generator: rg,
            tracer: self.tracer,
            paranoid: self.paranoid,
        }
    }

    pub fn with_doubling(mut self, doubling: Doubling<'a>) -> Self {
        self.doubling = doubling;
        self
    }

    /// Sends continuation and player diagnostics to `tracer`.
    pub fn with_tracer(mut self, tracer: impl Tracer + 'a) -> Self {
        self.tracer = Box::new(tracer);
        self
    }

    /// Validates every board as it is played.
    pub fn with_paranoia(mut self, paranoid: bool) -> Self {
        self.paranoid = paranoid;
        self
    }

    pub fn build(self) -> Game<'a, K> {
        Game {
            white: self.white,
            red: self.red,
            doubling: self.doubling,
            random: self.random_generator,
            tracer: self.tracer,
            paranoid: self.paranoid,
        }
    }
}

impl<'a> Game<'a, StandardRandomGenerator> {
    /// Returns a new builder for `Game`.
    pub fn builder(
        white: &'a mut dyn Chooser,
        red: &'a mut dyn Chooser,
    ) -> GameBuilder<'a, StandardRandomGenerator> {
        GameBuilder::new(white, red)
    }
}

impl<'a, K: RandomGenerator> Game<'a, K> {
    /// Plays `board` out to the end.
    ///
    /// `observer` sees the starting board and the board after every turn.
    /// A chooser that returns nothing plays the first legal continuation. The
    /// starting board is never offered a double.
    pub fn play(
        &mut self,
        board: Board,
        mut observer: impl FnMut(&Board),
    ) -> Result<GameResult, GameError> {
        let mut board = board;
        if self.paranoid {
            board.validate(RollCheck::Enforce)?;
        }
        observer(&board);
        let mut num_boards = 1;
        loop {
            let candidates = board.legal_continuations_traced(&mut *self.tracer);
            let chooser: &mut dyn Chooser = match board.roller {
                Checker::White => &mut *self.white,
                Checker::Red => &mut *self.red,
            };
            let ranked = chooser.choose(&candidates, &mut *self.tracer);
            if ranked.len() > candidates.len() {
                return Err(GameError::TooManyChoices {
                    returned: ranked.len(),
                    offered: candidates.len(),
                });
            }
            board = match ranked.first() {
                None => candidates[0],
                Some(chosen) if candidates.contains(&chosen.board) => chosen.board,
                Some(chosen) => return Err(GameError::NotACandidate(chosen.board.to_string())),
            };

            let outcome = board.take_turn(&mut self.doubling, &mut self.random)?;
            if self.paranoid {
                board.validate(RollCheck::Ignore)?;
            }
            observer(&board);
            num_boards += 1;

            if let Some(victor) = outcome.victor {
                return Ok(GameResult {
                    victor,
                    stakes: outcome.stakes,
                    score: outcome.score,
                    num_boards,
                    final_board: board,
                });
            }
        }
    }

    /// Plays new games carrying `score` forward until somebody reaches the
    /// goal. With a goal of zero, plays a single money game.
    pub fn play_match(
        &mut self,
        score: Score,
        mut observer: impl FnMut(&Board),
    ) -> Result<MatchResult, GameError> {
        let mut score = score;
        let mut games = Vec::new();
        loop {
            let mut board = Board::new_game(&mut self.random, self.paranoid);
            board.set_score(score);
            let result = self.play(board, &mut observer)?;
            score = result.score;
            games.push(result);
            if score.goal == 0 || score.match_over() {
                return Ok(MatchResult { score, games });
            }
        }
    }
}
