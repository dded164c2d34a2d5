use crate::checker::Checker;
use crate::error::BoardError;
use crate::point::{MAX_CHECKERS, Point};
use crate::random::RandomGenerator;
use crate::roll::Roll;
use crate::score::Score;
use std::fmt;
use std::ops::RangeInclusive;

pub const BORNE_OFF_WHITE: usize = 0;
pub const BORNE_OFF_RED: usize = 25;
pub const BAR_WHITE: usize = 26;
pub const BAR_RED: usize = 27;
pub const NUM_PIPS: usize = 28;

/// The 24 playable points.
pub const POINTS: RangeInclusive<usize> = 1..=24;

/// Where `player`'s hit checkers wait to re-enter.
pub const fn bar(player: Checker) -> usize {
    match player {
        Checker::White => BAR_WHITE,
        Checker::Red => BAR_RED,
    }
}

/// Where `player`'s checkers go once borne off.
pub const fn borne_off(player: Checker) -> usize {
    match player {
        Checker::White => BORNE_OFF_WHITE,
        Checker::Red => BORNE_OFF_RED,
    }
}

/// `player`'s home quadrant: the six points it bears off from.
pub const fn home(player: Checker) -> RangeInclusive<usize> {
    match player {
        Checker::White => 19..=24,
        Checker::Red => 1..=6,
    }
}

/// Whether [`Board::validate`] also checks the shape of the dice. Boards in
/// the middle of a turn have consumed some dice, so their rolls are partial.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RollCheck {
    Enforce,
    Ignore,
}

/// The complete state of a game between two turns, or partway through one.
///
/// A board is a plain value: copying it yields an independent board. The
/// continuation generator relies on this to branch freely.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Board {
    /// Index 0 is White's borne-off tray, 1-24 are the points, 25 is Red's
    /// borne-off tray, 26 is White's bar and 27 is Red's bar.
    pub pips: [Point; NUM_PIPS],
    /// Dice still to be played.
    pub roll: Roll,
    /// Dice already played this turn, in the order they were played.
    pub roll_used: Roll,
    pub roller: Checker,
    pub stakes: u32,
    pub white_can_double: bool,
    pub red_can_double: bool,
    pub match_score: Score,
}

impl Default for Board {
    /// An empty board: no checkers anywhere, White to roll, stakes of one.
    fn default() -> Self {
        Board {
            pips: [Point::EMPTY; NUM_PIPS],
            roll: Roll::EMPTY,
            roll_used: Roll::EMPTY,
            roller: Checker::White,
            stakes: 1,
            white_can_double: true,
            red_can_double: true,
            match_score: Score::default(),
        }
    }
}

impl Board {
    /// The standard opening layout with no dice rolled yet.
    pub fn starting_position() -> Self {
        Board::from_layout(
            Checker::White,
            Roll::EMPTY,
            &[
                (1, 2, Checker::White),
                (12, 5, Checker::White),
                (17, 3, Checker::White),
                (19, 5, Checker::White),
                (24, 2, Checker::Red),
                (13, 5, Checker::Red),
                (8, 3, Checker::Red),
                (6, 5, Checker::Red),
            ],
        )
    }

    /// Builds a board from `(pip, count, color)` triples; unlisted pips are
    /// empty. No validation is done.
    pub fn from_layout(roller: Checker, roll: Roll, layout: &[(usize, u8, Checker)]) -> Self {
        let mut board = Board {
            roller,
            roll,
            ..Board::default()
        };
        for &(pip, count, color) in layout {
            board.pips[pip].reset(count, color);
        }
        board
    }

    /// Starts a game: standard layout, a random first roller and an opening
    /// roll that is never a doublet.
    ///
    /// # Panics
    ///
    /// With `paranoid` set, panics if the new board fails validation.
    pub fn new_game<R: RandomGenerator>(random: &mut R, paranoid: bool) -> Self {
        let mut board = Board::starting_position();
        board.roller = Checker::BOTH[random.next_range(0, 2) as usize];
        board.roll = Roll::roll_opening(random);
        if paranoid {
            if let Err(err) = board.validate(RollCheck::Enforce) {
                panic!("new game is invalid: {err}: {board}");
            }
        }
        board
    }

    /// Installs the match score for the game about to start. If this is the
    /// Crawford game, neither side may double in it.
    pub fn set_score(&mut self, score: Score) {
        self.match_score = score;
        if score.crawford_rule_applies_next_game() {
            self.white_can_double = false;
            self.red_can_double = false;
            self.match_score.already_played_crawford_game = true;
        }
    }

    pub fn can_double(&self, player: Checker) -> bool {
        match player {
            Checker::White => self.white_can_double,
            Checker::Red => self.red_can_double,
        }
    }

    /// Checks the checker counts, the bar and borne-off trays, and
    /// optionally the roll.
    pub fn validate(&self, roll_check: RollCheck) -> Result<(), BoardError> {
        if roll_check == RollCheck::Enforce {
            self.roll.validate()?;
        }
        let red_on_white_bar = self.pips[BAR_WHITE].num(Checker::Red);
        if red_on_white_bar > 0 {
            return Err(BoardError::RedOnWhiteBar(red_on_white_bar));
        }
        let white_on_red_bar = self.pips[BAR_RED].num(Checker::White);
        if white_on_red_bar > 0 {
            return Err(BoardError::WhiteOnRedBar(white_on_red_bar));
        }
        let red_off_as_white = self.pips[BORNE_OFF_WHITE].num(Checker::Red);
        if red_off_as_white > 0 {
            return Err(BoardError::RedBorneOffAsWhite(red_off_as_white));
        }
        let white_off_as_red = self.pips[BORNE_OFF_RED].num(Checker::White);
        if white_off_as_red > 0 {
            return Err(BoardError::WhiteBorneOffAsRed(white_off_as_red));
        }
        let white = self.num_checkers(Checker::White);
        if white != u32::from(MAX_CHECKERS) {
            return Err(BoardError::WhiteCount { found: white });
        }
        let red = self.num_checkers(Checker::Red);
        if red != u32::from(MAX_CHECKERS) {
            return Err(BoardError::RedCount { found: red });
        }
        Ok(())
    }

    /// All of `player`'s checkers, wherever they are.
    pub fn num_checkers(&self, player: Checker) -> u32 {
        self.pips.iter().map(|p| u32::from(p.num(player))).sum()
    }

    pub fn num_on_bar(&self, player: Checker) -> u8 {
        self.pips[bar(player)].num(player)
    }

    pub fn num_checkers_borne_off(&self, player: Checker) -> u32 {
        u32::from(self.pips[borne_off(player)].num(player))
    }

    /// Whether `player` may bear off: nothing on the bar and nothing outside
    /// the home quadrant.
    pub fn can_bear_off(&self, player: Checker) -> bool {
        if self.num_on_bar(player) > 0 {
            return false;
        }
        let outside = match player {
            Checker::White => 1..=18,
            Checker::Red => 7..=24,
        };
        self.pips[outside].iter().all(|p| p.num(player) == 0)
    }

    /// Whether `player`'s opponent has made the point `pip`.
    pub fn is_blocked_for(&self, player: Checker, pip: usize) -> bool {
        self.pips[pip].is_made_by(player.other())
    }

    /// If `pip` holds a lone checker of `player`'s opponent, sends it to the
    /// opponent's bar.
    pub(crate) fn hit_blot(&mut self, player: Checker, pip: usize) {
        let opponent = player.other();
        if self.pips[pip].is_blot_of(opponent) {
            self.pips[pip].subtract();
            self.pips[bar(opponent)].add(opponent);
        }
    }

    /// Pips left to travel before all of `player`'s checkers are off. A
    /// checker on the bar counts 25.
    pub fn pip_count(&self, player: Checker) -> u32 {
        let on_board: u32 = POINTS
            .map(|i| {
                let distance = match player {
                    Checker::White => 25 - i,
                    Checker::Red => i,
                };
                distance as u32 * u32::from(self.pips[i].num(player))
            })
            .sum();
        on_board + 25 * u32::from(self.num_on_bar(player))
    }

    /// Made points anywhere on the board.
    pub fn num_points_blocked(&self, player: Checker) -> u32 {
        self.pips[POINTS].iter().filter(|p| p.is_made_by(player)).count() as u32
    }

    /// A 4-prime, say, is four consecutive made points.
    pub fn length_of_max_prime(&self, player: Checker) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        for point in &self.pips[POINTS] {
            if point.is_made_by(player) {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        longest
    }

    /// Checkers in the home quadrant, not counting those borne off.
    pub fn num_checkers_home(&self, player: Checker) -> u32 {
        self.pips[home(player)]
            .iter()
            .map(|p| u32::from(p.num(player)))
            .sum()
    }

    pub fn num_blots(&self, player: Checker) -> u32 {
        self.pips[POINTS].iter().filter(|p| p.is_blot_of(player)).count() as u32
    }

    /// Where White's rearmost checker is: 0 for the bar, -1 with nothing left
    /// on the board.
    fn rearmost_white(&self) -> i32 {
        if self.num_on_bar(Checker::White) > 0 {
            return 0;
        }
        POINTS
            .find(|&i| self.pips[i].num(Checker::White) > 0)
            .map_or(-1, |i| i as i32)
    }

    /// Where Red's rearmost checker is: 25 for the bar, -1 with nothing left
    /// on the board.
    fn rearmost_red(&self) -> i32 {
        if self.num_on_bar(Checker::Red) > 0 {
            return 25;
        }
        POINTS
            .rev()
            .find(|&i| self.pips[i].num(Checker::Red) > 0)
            .map_or(-1, |i| i as i32)
    }

    /// Distance from `player`'s rearmost checker to bearing off, or zero when
    /// every checker is off.
    pub fn pip_count_of_farthest_checker(&self, player: Checker) -> u32 {
        match player {
            Checker::White => match self.rearmost_white() {
                -1 => 0,
                i => (25 - i) as u32,
            },
            Checker::Red => self.rearmost_red().max(0) as u32,
        }
    }

    /// A race is when neither side can ever hit the other again: every Red
    /// checker has passed every White checker.
    pub fn racing(&self) -> bool {
        self.rearmost_red() < self.rearmost_white()
    }

    /// Whether the opponent could ever land on `player`'s checker at `pip`.
    fn is_hittable(&self, player: Checker, pip: usize) -> bool {
        let opponent = player.other();
        if self.num_on_bar(opponent) > 0 {
            return true;
        }
        let behind = match player {
            Checker::White => pip + 1..=24,
            Checker::Red => 1..=pip - 1,
        };
        self.pips[behind].iter().any(|p| p.num(opponent) > 0)
    }

    /// Sum over `player`'s blots of how far each has travelled from the
    /// opponent's home, so deeper blots cost more when hit. Unless
    /// `include_unhittable`, blots no opponent checker can reach are free.
    pub fn blot_liability(&self, player: Checker, include_unhittable: bool) -> u32 {
        POINTS
            .filter(|&i| self.pips[i].is_blot_of(player))
            .filter(|&i| include_unhittable || self.is_hittable(player, i))
            .map(|i| match player {
                Checker::White => i as u32,
                Checker::Red => (25 - i) as u32,
            })
            .sum()
    }

    /// Weighted count of `player`'s checkers still deep in the opponent's
    /// home, where they would be when the opponent wins.
    pub fn backgammon_exposure(&self, player: Checker) -> i64 {
        match player {
            Checker::White => (1..=6)
                .map(|i| (7 - i as i64) * i64::from(self.pips[i].num(Checker::White)))
                .sum(),
            Checker::Red => (19..=24)
                .map(|i| (i as i64 - 18) * i64::from(self.pips[i].num(Checker::Red)))
                .sum(),
        }
    }

    /// [`Board::backgammon_exposure`] aware of the match score.
    ///
    /// In a match where the opponent needs a single point, any loss costs the
    /// match, so the risk is the flat value -1.
    pub fn backgammon_risk(&self, player: Checker) -> i64 {
        let score = &self.match_score;
        if score.goal > 0 && score.of(player.other()).saturating_add(1) >= score.goal {
            return -1;
        }
        self.backgammon_exposure(player)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.roller)?;
        if !self.roll.is_empty() {
            write!(f, " to play {}", self.roll)?;
        }
        if !self.roll_used.is_empty() {
            write!(f, " after playing {}", self.roll_used)?;
        }
        if self.stakes == 1 && self.white_can_double && self.red_can_double {
            f.write_str("; !dbl; ")?;
        } else {
            let can = |yes: bool| if yes { "" } else { "NOT" };
            write!(
                f,
                "; Stakes: {}, {} can{} dbl, {} can{} dbl; ",
                self.stakes,
                Checker::White,
                can(self.white_can_double),
                Checker::Red,
                can(self.red_can_double)
            )?;
        }
        for i in POINTS {
            if i > 1 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", i, self.pips[i])?;
        }
        for pip in [BAR_WHITE, BAR_RED] {
            if !self.pips[pip].is_empty() {
                write!(f, ", {} on bar", self.pips[pip])?;
            }
        }
        for player in Checker::BOTH {
            let off = self.num_checkers_borne_off(player);
            if off > 0 {
                write!(f, ", {off} {player} off")?;
            }
        }
        if self.match_score != Score::default() {
            write!(f, ", {}", self.match_score)?;
        }
        f.write_str("}")
    }
}
