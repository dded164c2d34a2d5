use crate::board::{Board, home};
use crate::checker::Checker;
use crate::error::TurnError;
use crate::point::MAX_CHECKERS;
use crate::random::RandomGenerator;
use crate::roll::Roll;
use crate::score::Score;

type DoublingCallback<'a> = Box<dyn FnMut(&Board) -> bool + 'a>;

/// The doubling cube policy for the side about to roll.
///
/// `offer` decides whether the new roller turns the cube; `accept` decides
/// whether the opponent takes. Either both are present or neither is.
///
/// ```rust
/// use backgammon_lib::turn::Doubling;
///
/// let never = Doubling::none();
/// let always = Doubling::none().offer(|_| true).accept(|_| true);
/// # drop((never, always));
/// ```
#[derive(Default)]
pub struct Doubling<'a> {
    offer: Option<DoublingCallback<'a>>,
    accept: Option<DoublingCallback<'a>>,
}

impl<'a> Doubling<'a> {
    /// Nobody ever offers a double.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn offer(mut self, offer: impl FnMut(&Board) -> bool + 'a) -> Self {
        self.offer = Some(Box::new(offer));
        self
    }

    pub fn accept(mut self, accept: impl FnMut(&Board) -> bool + 'a) -> Self {
        self.accept = Some(Box::new(accept));
        self
    }

    fn check(&self) -> Result<(), TurnError> {
        match (&self.offer, &self.accept) {
            (Some(_), None) => Err(TurnError::OfferWithoutAccept),
            (None, Some(_)) => Err(TurnError::AcceptWithoutOffer),
            _ => Ok(()),
        }
    }
}

/// What happened when a turn was taken.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TurnOutcome {
    /// `None` while the game goes on.
    pub victor: Option<Checker>,
    /// Points won, zero while the game goes on.
    pub stakes: u32,
    pub score: Score,
}

impl Board {
    /// The winner and the points won, if the roller has borne off every
    /// checker.
    ///
    /// The win counts triple (backgammon) when the loser still has a checker
    /// on the bar or in the winner's home, double (gammon) when the loser has
    /// borne nothing off, and single otherwise.
    pub fn victor(&self) -> Option<(Checker, u32)> {
        let winner = self.roller;
        if self.num_checkers_borne_off(winner) < u32::from(MAX_CHECKERS) {
            return None;
        }
        let loser = winner.other();
        let multiplier = if self.num_on_bar(loser) > 0
            || self.pips[home(winner)].iter().any(|p| p.num(loser) > 0)
        {
            3
        } else if self.num_checkers_borne_off(loser) == 0 {
            2
        } else {
            1
        };
        Some((winner, self.stakes.saturating_mul(multiplier)))
    }

    /// Ends the roller's turn on a board produced by
    /// [`Board::legal_continuations`].
    ///
    /// If the roller has won, the match score is credited and nothing else
    /// changes. Otherwise the opponent becomes the roller, may offer a double
    /// and rolls fresh dice. A declined double ends the game in favor of the
    /// side that offered it, at the stakes before the offer. No double is
    /// offered once the stakes cannot be doubled again.
    ///
    /// Unpaired doubling callbacks are rejected before the board is touched.
    pub fn take_turn<R: RandomGenerator>(
        &mut self,
        doubling: &mut Doubling<'_>,
        random: &mut R,
    ) -> Result<TurnOutcome, TurnError> {
        doubling.check()?;
        if let Some((victor, stakes)) = self.victor() {
            return Ok(self.finish(victor, stakes));
        }
        self.roller = self.roller.other();
        self.roll = Roll::EMPTY;
        self.roll_used = Roll::EMPTY;
        let doubled = self.stakes.checked_mul(2);
        if let Some(doubled) = doubled.filter(|_| self.can_double(self.roller)) {
            if let (Some(offer), Some(accept)) = (&mut doubling.offer, &mut doubling.accept) {
                if offer(self) {
                    if !accept(self) {
                        return Ok(self.finish(self.roller, self.stakes));
                    }
                    self.stakes = doubled;
                    let taker = self.roller.other();
                    self.white_can_double = taker == Checker::White;
                    self.red_can_double = taker == Checker::Red;
                }
            }
        }
        self.roll = Roll::roll(random);
        Ok(TurnOutcome {
            victor: None,
            stakes: 0,
            score: self.match_score,
        })
    }

    fn finish(&mut self, victor: Checker, stakes: u32) -> TurnOutcome {
        self.match_score.update(victor, stakes);
        TurnOutcome {
            victor: Some(victor),
            stakes,
            score: self.match_score,
        }
    }
}
