//! Enumeration of every legal way to play a roll.
//!
//! Generation runs in two phases. The bar phase enters checkers from the
//! roller's bar, one die at a time, until the bar is empty or nothing more
//! can enter. The post-bar phase then moves checkers around the board with
//! whatever dice remain. Both phases recurse on copies of the board, one per
//! playable die, and drop structurally identical results while keeping the
//! order in which they were first reached.
//!
//! The raw results include partial plays. Backgammon requires playing as many
//! dice as possible, and when only one die can be played, the larger one if
//! that is playable. [`Board::legal_continuations`] applies both rules.

use crate::board::{BORNE_OFF_RED, BORNE_OFF_WHITE, Board, POINTS, RollCheck, bar, home};
use crate::checker::Checker;
use crate::roll::Die;
use crate::trace::{NoopTracer, Tracer};
use std::collections::HashSet;

const SCOPE: &str = "legal_continuations";

impl Board {
    /// Every distinct board the roller may legally reach by playing this
    /// board's roll. Never empty: when nothing can move, the result is this
    /// board unchanged.
    ///
    /// The returned boards keep the roller; the dice they played move from
    /// `roll` to `roll_used`. Call [`Board::take_turn`] on the chosen one.
    pub fn legal_continuations(&self) -> Vec<Board> {
        self.legal_continuations_traced(&mut NoopTracer)
    }

    /// [`Board::legal_continuations`], reporting how the candidates were
    /// narrowed to `tracer`.
    pub fn legal_continuations_traced(&self, tracer: &mut dyn Tracer) -> Vec<Board> {
        debug_assert!(
            self.validate(RollCheck::Ignore).is_ok(),
            "generating continuations of an invalid board: {self}"
        );
        let already_used = self.roll_used.len();
        let candidates = self.quasi_legal_continuations();
        let max_used = candidates
            .iter()
            .map(|c| c.roll_used.len() - already_used)
            .max()
            .unwrap_or(0);
        if tracer.enabled() {
            tracer.trace(
                SCOPE,
                &format!(
                    "{} candidates for {self}, the most dice used is {max_used}",
                    candidates.len()
                ),
            );
        }
        let mut legal: Vec<Board> = candidates
            .into_iter()
            .filter(|c| c.roll_used.len() - already_used == max_used)
            .collect();

        // Playing only the small die is not allowed when the large die alone
        // is playable.
        if max_used == 1 {
            let played = |c: &Board| c.roll_used.dice().nth(already_used);
            if let Some(largest) = legal.iter().filter_map(played).max() {
                legal.retain(|c| played(c) == Some(largest));
                if tracer.enabled() {
                    tracer.trace(
                        SCOPE,
                        &format!("only one die can be played, keeping {} that play {largest}", legal.len()),
                    );
                }
            }
        }
        if tracer.enabled() {
            tracer.trace(SCOPE, &format!("{} legal continuations", legal.len()));
        }
        legal
    }

    /// All plays of the roll, including those that stop early.
    fn quasi_legal_continuations(&self) -> Vec<Board> {
        let mut continuations = Vec::new();
        for entered in self.bar_continuations() {
            continuations.extend(entered.post_bar_continuations());
        }
        unique(continuations)
    }

    /// Boards reachable by entering checkers from the roller's bar.
    fn bar_continuations(&self) -> Vec<Board> {
        let mut possibilities = Vec::new();
        if self.num_on_bar(self.roller) > 0 {
            for die in self.roll.unique_dice() {
                if let Some(entered) = self.enter(die) {
                    possibilities.extend(entered.bar_continuations());
                }
            }
        }
        if possibilities.is_empty() {
            return vec![*self];
        }
        unique(possibilities)
    }

    /// Enters one checker from the bar with `die`, or `None` if the entry
    /// point is made by the opponent.
    fn enter(&self, die: Die) -> Option<Board> {
        let player = self.roller;
        let target = match player {
            Checker::White => usize::from(die),
            Checker::Red => 25 - usize::from(die),
        };
        if self.is_blocked_for(player, target) {
            return None;
        }
        let mut next = *self;
        next.play_die(die);
        next.hit_blot(player, target);
        next.pips[target].add(player);
        next.pips[bar(player)].subtract();
        Some(next)
    }

    /// Boards reachable by moving checkers already on the board. Returns this
    /// board alone when no dice remain, the bar is still occupied, or no die
    /// moves anything.
    fn post_bar_continuations(&self) -> Vec<Board> {
        if self.roll.is_empty() || self.num_on_bar(self.roller) > 0 {
            return vec![*self];
        }
        let player = self.roller;
        let mut continuations = Vec::new();
        let mut tried = [false; 7];
        for die in self.roll.dice() {
            if std::mem::replace(&mut tried[usize::from(die)], true) {
                continue;
            }
            for start in POINTS {
                if self.pips[start].num(player) == 0 {
                    continue;
                }
                if let Some(target) = self.target_of(start, die) {
                    let mut next = *self;
                    next.pips[start].subtract();
                    next.hit_blot(player, target);
                    next.pips[target].add(player);
                    next.play_die(die);
                    continuations.extend(next.post_bar_continuations());
                }
            }
        }
        if continuations.is_empty() {
            return vec![*self];
        }
        unique(continuations)
    }

    /// Where the roller's checker on `start` lands when moved `die` pips, or
    /// `None` if that move is not allowed.
    ///
    /// Overshooting the last point bears the checker off. That needs every
    /// checker home, and unless the die is exact, no checker of the roller
    /// may sit further from home than `start`.
    fn target_of(&self, start: usize, die: Die) -> Option<usize> {
        let player = self.roller;
        let die = usize::from(die);
        let (target, bears_off, exact, behind) = match player {
            Checker::White => {
                let target = start + die;
                (target, target > 24, target == 25, *home(player).start()..start)
            }
            Checker::Red => {
                let target = start as isize - die as isize;
                let behind = start + 1..*home(player).end() + 1;
                (target.max(0) as usize, target < 1, target == 0, behind)
            }
        };
        if !bears_off {
            return (!self.is_blocked_for(player, target)).then_some(target);
        }
        if !home(player).contains(&start) {
            return None;
        }
        let nothing_behind = || self.pips[behind.clone()].iter().all(|p| p.num(player) == 0);
        if (exact || nothing_behind()) && self.can_bear_off(player) {
            return Some(match player {
                Checker::White => BORNE_OFF_WHITE,
                Checker::Red => BORNE_OFF_RED,
            });
        }
        None
    }

    /// Moves `die` from the roll to the used dice.
    fn play_die(&mut self, die: Die) {
        self.roll.remove(die);
        self.roll_used.push(die);
    }
}

/// Drops boards equal to one seen earlier, keeping first-seen order.
fn unique(boards: Vec<Board>) -> Vec<Board> {
    let mut seen = HashSet::with_capacity(boards.len());
    boards.into_iter().filter(|b| seen.insert(*b)).collect()
}

#[cfg(test)]
mod tests {
    use crate::board::{BAR_RED, BAR_WHITE, BORNE_OFF_RED, BORNE_OFF_WHITE, Board, RollCheck};
    use crate::checker::Checker::{Red, White};
    use crate::point::Point;
    use crate::roll::Roll;
    use crate::trace::BufferTracer;

    fn rendered(boards: &[Board]) -> Vec<String> {
        boards.iter().map(|b| b.to_string()).collect()
    }

    fn assert_all_valid(boards: &[Board]) {
        for board in boards {
            assert_eq!(board.validate(RollCheck::Ignore), Ok(()), "{board}");
        }
    }

    #[test]
    fn opening_six_five_for_white() {
        // arrange
        let mut board = Board::starting_position();
        board.roll = Roll::of(6, 5);

        // act
        let continuations = board.legal_continuations();

        // assert
        assert_eq!(
            rendered(&continuations),
            vec![
                "{W after playing 65; !dbl; 1:W 2: 3: 4: 5: 6:rrrrr 7: 8:rrr 9: 10: 11: 12:WWWWWW 13:rrrrr 14: 15: 16: 17:WWW 18: 19:WWWWW 20: 21: 22: 23: 24:rr}",
                "{W after playing 65; !dbl; 1:W 2: 3: 4: 5: 6:rrrrr 7:W 8:rrr 9: 10: 11: 12:WWWW 13:rrrrr 14: 15: 16: 17:WWWW 18: 19:WWWWW 20: 21: 22: 23: 24:rr}",
                "{W after playing 65; !dbl; 1:W 2: 3: 4: 5: 6:rrrrr 7:W 8:rrr 9: 10: 11: 12:WWWWW 13:rrrrr 14: 15: 16: 17:WW 18: 19:WWWWW 20: 21: 22:W 23: 24:rr}",
                "{W after playing 65; !dbl; 1:WW 2: 3: 4: 5: 6:rrrrr 7: 8:rrr 9: 10: 11: 12:WWW 13:rrrrr 14: 15: 16: 17:WWWW 18:W 19:WWWWW 20: 21: 22: 23: 24:rr}",
                "{W after playing 65; !dbl; 1:WW 2: 3: 4: 5: 6:rrrrr 7: 8:rrr 9: 10: 11: 12:WWWW 13:rrrrr 14: 15: 16: 17:WW 18:W 19:WWWWW 20: 21: 22:W 23: 24:rr}",
                "{W after playing 65; !dbl; 1:WW 2: 3: 4: 5: 6:rrrrr 7: 8:rrr 9: 10: 11: 12:WWWW 13:rrrrr 14: 15: 16: 17:WWW 18: 19:WWWWW 20: 21: 22: 23:W 24:rr}",
                "{W after playing 65; !dbl; 1:WW 2: 3: 4: 5: 6:rrrrr 7: 8:rrr 9: 10: 11: 12:WWWWW 13:rrrrr 14: 15: 16: 17:W 18: 19:WWWWW 20: 21: 22:W 23:W 24:rr}",
            ]
        );
        assert_all_valid(&continuations);
    }

    #[test]
    fn bar_entry_blocked_on_the_six_wastes_it() {
        // arrange
        let mut board = Board::starting_position();
        board.roll = Roll::of(6, 1);
        board.pips[BAR_WHITE] = Point::new(1, White);
        board.pips[20] = Point::new(5, White);
        board.pips[21] = Point::new(4, White);
        board.pips[17] = Point::EMPTY;
        board.pips[12] = Point::EMPTY;
        board.pips[1] = Point::EMPTY;
        board.pips[7] = Point::new(2, Red);
        board.pips[6] = Point::new(3, Red);
        assert_eq!(board.validate(RollCheck::Enforce), Ok(()));

        // act
        let continuations = board.legal_continuations();

        // assert
        assert_eq!(
            rendered(&continuations),
            vec![
                "{W to play 6 after playing 1; !dbl; 1:W 2: 3: 4: 5: 6:rrr 7:rr 8:rrr 9: 10: 11: 12: 13:rrrrr 14: 15: 16: 17: 18: 19:WWWWW 20:WWWWW 21:WWWW 22: 23: 24:rr}"
            ]
        );
    }

    #[test]
    fn bearing_off_must_use_both_dice_when_possible() {
        // With 1, 2, 5 and 6 occupied, a 4-3 cannot bear off and must be
        // played inside the home board.
        let board = Board::from_layout(
            Red,
            Roll::of(4, 3),
            &[
                (24, 1, White),
                (1, 1, Red),
                (2, 1, Red),
                (5, 1, Red),
                (6, 1, Red),
                (BORNE_OFF_RED, 11, Red),
                (BORNE_OFF_WHITE, 14, White),
            ],
        );

        let continuations = board.legal_continuations();

        assert_eq!(
            rendered(&continuations),
            vec![
                "{r after playing 43; !dbl; 1:rr 2:r 3:r 4: 5: 6: 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:W, 14 W off, 11 r off}",
                "{r after playing 43; !dbl; 1:r 2:rrr 3: 4: 5: 6: 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:W, 14 W off, 11 r off}",
            ]
        );
    }

    #[test]
    fn bearing_off_depends_on_the_order_of_the_dice() {
        // Playing the 2 first frees the 5 to bear a checker off.
        let board = Board::from_layout(
            Red,
            Roll::of(5, 2),
            &[
                (24, 1, White),
                (1, 2, Red),
                (3, 2, Red),
                (6, 1, Red),
                (BORNE_OFF_RED, 10, Red),
                (BORNE_OFF_WHITE, 14, White),
            ],
        );

        let continuations = board.legal_continuations();

        assert_eq!(
            rendered(&continuations),
            vec![
                "{r after playing 52; !dbl; 1:rrrr 2: 3:r 4: 5: 6: 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:W, 14 W off, 10 r off}",
                "{r after playing 25; !dbl; 1:rr 2: 3:rr 4: 5: 6: 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:W, 14 W off, 11 r off}",
            ]
        );
    }

    #[test]
    fn ninety_six_ways_to_play_double_sixes() {
        let board = Board::from_layout(
            White,
            Roll::of(6, 6),
            &[
                (7, 3, White),
                (6, 4, White),
                (5, 4, White),
                (4, 4, White),
                (BAR_RED, 1, Red),
                (BORNE_OFF_RED, 14, Red),
            ],
        );

        let continuations = board.legal_continuations();

        assert_eq!(continuations.len(), 96);
        assert_eq!(
            continuations[0].to_string(),
            "{W after playing 6666; !dbl; 1: 2: 3: 4: 5:WWWW 6:WWWW 7:WWW 8: 9: 10:WWWW 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:, r on bar, 14 r off}"
        );
        assert!(continuations.iter().all(|c| c.roll.is_empty() && c.roll_used.len() == 4));
        assert_all_valid(&continuations);
    }

    #[test]
    fn doublet_entering_from_the_bar_stops_at_a_blocked_point() {
        let cases = [
            (3, 12, "{W to play 6 after playing 666; !dbl; 1: 2: 3: 4: 5: 6:WWW 7: 8: 9: 10: 11: 12:rr 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:, rrrrrrrrrrrrr on bar, 12 W off}"),
            (2, 13, "{W to play 66 after playing 66; !dbl; 1: 2: 3: 4: 5: 6:WW 7: 8: 9: 10: 11: 12:rr 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:, rrrrrrrrrrrrr on bar, 13 W off}"),
            (1, 14, "{W to play 666 after playing 6; !dbl; 1: 2: 3: 4: 5: 6:W 7: 8: 9: 10: 11: 12:rr 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:, rrrrrrrrrrrrr on bar, 14 W off}"),
        ];
        for (on_bar, off, expected) in cases {
            let board = Board::from_layout(
                White,
                Roll::of(6, 6),
                &[
                    (BAR_WHITE, on_bar, White),
                    (BORNE_OFF_WHITE, off, White),
                    (12, 2, Red),
                    (BAR_RED, 13, Red),
                ],
            );
            assert_eq!(rendered(&board.legal_continuations()), vec![expected]);
        }
    }

    #[test]
    fn red_enters_from_the_bar_as_a_mirror_image() {
        let board = Board::from_layout(
            Red,
            Roll::of(6, 6),
            &[
                (BAR_RED, 2, Red),
                (BORNE_OFF_RED, 13, Red),
                (13, 2, White),
                (BAR_WHITE, 13, White),
            ],
        );
        assert_eq!(
            rendered(&board.legal_continuations()),
            vec!["{r to play 66 after playing 66; !dbl; 1: 2: 3: 4: 5: 6: 7: 8: 9: 10: 11: 12: 13:WW 14: 15: 16: 17: 18: 19:rr 20: 21: 22: 23: 24:, WWWWWWWWWWWWW on bar, 13 r off}"]
        );
    }

    #[test]
    fn forced_hit_then_bear_off() {
        let board = Board::from_layout(
            White,
            Roll::of(6, 6),
            &[
                (18, 3, White),
                (19, 4, White),
                (20, 4, White),
                (21, 4, White),
                (24, 1, Red),
                (BORNE_OFF_RED, 14, Red),
            ],
        );
        assert_eq!(
            rendered(&board.legal_continuations()),
            vec!["{W after playing 6666; !dbl; 1: 2: 3: 4: 5: 6: 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19:WWW 20:WWWW 21:WWWW 22: 23: 24:WWW, r on bar, 1 W off, 14 r off}"]
        );

        let board = Board::from_layout(
            Red,
            Roll::of(6, 6),
            &[
                (7, 3, Red),
                (6, 4, Red),
                (5, 4, Red),
                (4, 4, Red),
                (1, 1, White),
                (BORNE_OFF_WHITE, 14, White),
            ],
        );
        assert_eq!(
            rendered(&board.legal_continuations()),
            vec!["{r after playing 6666; !dbl; 1:rrr 2: 3: 4:rrrr 5:rrrr 6:rrr 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:, W on bar, 14 W off, 1 r off}"]
        );
    }

    #[test]
    fn wasted_doublet_leaves_the_board_unchanged() {
        // A naive generator would bear off four checkers here.
        let board = Board::from_layout(
            White,
            Roll::of(6, 6),
            &[
                (18, 4, White),
                (19, 4, White),
                (20, 4, White),
                (21, 3, White),
                (24, 2, Red),
                (BORNE_OFF_RED, 13, Red),
            ],
        );
        assert_eq!(board.legal_continuations(), vec![board]);

        let board = Board::from_layout(
            Red,
            Roll::of(6, 6),
            &[
                (7, 4, Red),
                (6, 4, Red),
                (5, 4, Red),
                (4, 3, Red),
                (1, 2, White),
                (BORNE_OFF_WHITE, 13, White),
            ],
        );
        let continuations = board.legal_continuations();
        assert_eq!(
            rendered(&continuations),
            vec!["{r to play 6666; !dbl; 1:WW 2: 3: 4:rrr 5:rrrr 6:rrrr 7:rrrr 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:, 13 W off}"]
        );
    }

    #[test]
    fn partly_wasted_doublet_keeps_the_unplayable_dice() {
        let board = Board::from_layout(
            White,
            Roll::of(6, 6),
            &[
                (16, 1, White),
                (BORNE_OFF_WHITE, 14, White),
                (17, 2, Red),
                (BORNE_OFF_RED, 13, Red),
            ],
        );
        assert!(board.legal_continuations().iter().all(|c| c.roll_used.len() == 2));
        assert_eq!(
            rendered(&board.legal_continuations()),
            vec!["{W to play 66 after playing 66; !dbl; 1: 2: 3: 4: 5: 6: 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17:rr 18: 19: 20: 21: 22: 23: 24:, 15 W off, 13 r off}"]
        );
    }

    #[test]
    fn only_the_larger_die_when_one_die_can_be_played() {
        // arrange
        let board = Board::from_layout(
            White,
            Roll::of(6, 1),
            &[
                (10, 1, White),
                (BORNE_OFF_WHITE, 14, White),
                (17, 2, Red),
                (BORNE_OFF_RED, 13, Red),
            ],
        );
        let mut tracer = BufferTracer::new();

        // act
        let continuations = board.legal_continuations_traced(&mut tracer);

        // assert
        assert_eq!(continuations.len(), 1);
        assert_eq!(continuations[0].pips[16], Point::new(1, White));
        assert_eq!(continuations[0].roll_used, Roll::from([6, 0, 0, 0]));
        assert_eq!(continuations[0].roll, Roll::from([1, 0, 0, 0]));
        assert!(
            tracer
                .scoped("legal_continuations")
                .any(|line| line.contains("keeping 1 that play 6"))
        );
    }

    #[test]
    fn the_smaller_die_when_the_larger_is_blocked() {
        let board = Board::from_layout(
            White,
            Roll::of(6, 1),
            &[
                (10, 1, White),
                (BORNE_OFF_WHITE, 14, White),
                (16, 2, Red),
                (17, 2, Red),
                (BORNE_OFF_RED, 11, Red),
            ],
        );

        let continuations = board.legal_continuations();

        assert_eq!(continuations.len(), 1);
        assert_eq!(continuations[0].pips[11], Point::new(1, White));
        assert_eq!(continuations[0].roll_used, Roll::from([1, 0, 0, 0]));
    }

    #[test]
    fn no_legal_move_returns_the_board_itself() {
        // White on the bar facing a closed board
        let board = Board::from_layout(
            White,
            Roll::of(4, 2),
            &[
                (BAR_WHITE, 1, White),
                (BORNE_OFF_WHITE, 14, White),
                (1, 2, Red),
                (2, 2, Red),
                (3, 2, Red),
                (4, 3, Red),
                (5, 3, Red),
                (6, 3, Red),
            ],
        );
        assert_eq!(board.legal_continuations(), vec![board]);
    }

    #[test]
    fn entering_hits_a_blot() {
        let board = Board::from_layout(
            Red,
            Roll::of(3, 1),
            &[
                (BAR_RED, 1, Red),
                (22, 1, White),
                (24, 14, Red),
                (BORNE_OFF_WHITE, 14, White),
            ],
        );

        let continuations = board.legal_continuations();

        assert!(
            continuations
                .iter()
                .any(|c| c.pips[22] == Point::new(1, Red) && c.num_on_bar(White) == 1)
        );
        assert!(continuations.iter().all(|c| c.num_on_bar(Red) == 0));
        assert!(continuations.iter().all(|c| c.roll_used.len() == 2));
        assert_all_valid(&continuations);
    }

    #[test]
    fn both_orders_of_a_roll_collapse_to_one_board() {
        let board = Board::from_layout(
            White,
            Roll::of(2, 1),
            &[
                (1, 15, White),
                (24, 15, Red),
            ],
        );

        let continuations = board.legal_continuations();

        // 1-2-3 with one checker, or 1-2 and 1-3
        assert_eq!(continuations.len(), 2);
    }
}
