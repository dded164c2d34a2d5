use crate::board::Board;
use crate::players::{backgammon_exposure, my_borne_off, my_checkers_home, my_farthest, rank, trace_decision};
use crate::random::RandomGenerator;
use crate::selection::{AnalyzedBoard, Criterion};
use crate::trace::Tracer;

const SCOPE: &str = "racer";

pub const CRITERIA: [Criterion; 4] = [
    // plain exposure, the match score plays no part in a race
    Criterion::minimize("minProbabilityOfGettingBackgammoned", backgammon_exposure),
    Criterion::maximize("maxMyCheckersBorneOff", my_borne_off),
    Criterion::maximize("maxMyCheckersAtHome", my_checkers_home),
    Criterion::minimize("minHowFarAwayMyFarthestIs", my_farthest),
];

/// Ranks `candidates` for a race: stay clear of a backgammon, then bear off
/// as many checkers as possible, then bring the rest home.
///
/// Ignores blots entirely, so it plays badly while there is still contact.
pub fn choose<R: RandomGenerator + ?Sized>(
    candidates: &[Board],
    random: &mut R,
    tracer: &mut dyn Tracer,
) -> Vec<AnalyzedBoard> {
    let ranked = rank(candidates, &CRITERIA, random, tracer);
    trace_decision(SCOPE, &ranked, tracer);
    ranked
}

#[cfg(test)]
mod tests {
    use crate::board::{BORNE_OFF_WHITE, Board, RollCheck};
    use crate::checker::Checker::{self, Red, White};
    use crate::players::racer::choose;
    use crate::random::CustomNumberGenerator;
    use crate::roll::Roll;
    use crate::score::Score;
    use crate::selection::Analysis;
    use crate::trace::NoopTracer;

    fn best(roller: Checker, roll: Roll, layout: &[(usize, u8, Checker)]) -> (String, Analysis) {
        let board = Board::from_layout(roller, roll, layout);
        assert_eq!(board.validate(RollCheck::Enforce), Ok(()));
        let mut ranked = choose(
            &board.legal_continuations(),
            &mut CustomNumberGenerator::new(42),
            &mut NoopTracer,
        );
        let first = ranked.swap_remove(0);
        (first.board.to_string(), first.analysis)
    }

    fn score(analysis: &Analysis, label: &str) -> i64 {
        match analysis {
            Analysis::Ranked { scores, .. } => scores[label],
            other => panic!("expected a ranked analysis, got {other:?}"),
        }
    }

    #[test]
    fn bears_off_when_it_can() {
        // arrange + act
        let (board, analysis) = best(
            Red,
            Roll::of(5, 1),
            &[
                (1, 2, Red),
                (2, 5, Red),
                (3, 4, Red),
                (6, 4, Red),
                (24, 6, White),
                (BORNE_OFF_WHITE, 9, White),
            ],
        );

        // assert
        assert_eq!(
            board,
            "{r after playing 51; !dbl; 1:rr 2:rrrrr 3:rrrr 4: 5: 6:rrr 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17: 18: 19: 20: 21: 22: 23: 24:WWWWWW, 9 W off, 1 r off}"
        );
        assert_eq!(score(&analysis, "maxMyCheckersBorneOff"), 1);
        assert_eq!(score(&analysis, "minHowFarAwayMyFarthestIs"), 6);
        assert_eq!(score(&analysis, "minProbabilityOfGettingBackgammoned"), 0);
    }

    #[test]
    fn brings_the_straggler_closer() {
        let (board, analysis) = best(
            Red,
            Roll::of(2, 1),
            &[(19, 15, White), (6, 13, Red), (8, 1, Red), (11, 1, Red)],
        );

        assert_eq!(
            board,
            "{r after playing 21; !dbl; 1: 2: 3: 4: 5: 6:rrrrrrrrrrrrrr 7: 8: 9: 10:r 11: 12: 13: 14: 15: 16: 17: 18: 19:WWWWWWWWWWWWWWW 20: 21: 22: 23: 24:}"
        );
        assert_eq!(score(&analysis, "maxMyCheckersAtHome"), 14);
        assert_eq!(score(&analysis, "minHowFarAwayMyFarthestIs"), 10);
    }

    #[test]
    fn checkers_home_come_before_the_straggler() {
        let (board, analysis) = best(
            Red,
            Roll::of(6, 1),
            &[(19, 15, White), (17, 1, Red), (7, 2, Red), (2, 12, Red)],
        );

        assert_eq!(
            board,
            "{r after playing 61; !dbl; 1:r 2:rrrrrrrrrrrr 3: 4: 5: 6:r 7: 8: 9: 10: 11: 12: 13: 14: 15: 16: 17:r 18: 19:WWWWWWWWWWWWWWW 20: 21: 22: 23: 24:}"
        );
        assert_eq!(score(&analysis, "minHowFarAwayMyFarthestIs"), 17);
    }

    #[test]
    fn runs_the_straggler_when_everything_else_is_home() {
        let (board, _) = best(
            Red,
            Roll::of(6, 1),
            &[(19, 15, White), (17, 1, Red), (6, 2, Red), (2, 12, Red)],
        );

        assert_eq!(
            board,
            "{r after playing 61; !dbl; 1: 2:rrrrrrrrrrrr 3: 4: 5: 6:rr 7: 8: 9: 10:r 11: 12: 13: 14: 15: 16: 17: 18: 19:WWWWWWWWWWWWWWW 20: 21: 22: 23: 24:}"
        );
    }

    #[test]
    fn white_races_too() {
        let (board, analysis) = best(
            White,
            Roll::of(6, 1),
            &[(6, 15, Red), (7, 1, White), (19, 2, White), (23, 12, White)],
        );

        assert_eq!(
            board,
            "{W after playing 61; !dbl; 1: 2: 3: 4: 5: 6:rrrrrrrrrrrrrrr 7: 8: 9: 10: 11: 12: 13: 14:W 15: 16: 17: 18: 19:WW 20: 21: 22: 23:WWWWWWWWWWWW 24:}"
        );
        assert_eq!(score(&analysis, "minHowFarAwayMyFarthestIs"), 11);
    }

    #[test]
    fn avoids_leaving_checkers_in_the_opponents_home() {
        let (_, analysis) = best(
            Red,
            Roll::of(6, 5),
            &[(19, 2, Red), (6, 13, Red), (24, 15, White)],
        );

        assert_eq!(score(&analysis, "minProbabilityOfGettingBackgammoned"), 0);
    }

    #[test]
    fn backgammon_exposure_ignores_the_match_score() {
        // arrange
        let mut board = Board::from_layout(
            Red,
            Roll::of(6, 5),
            &[(19, 2, Red), (6, 13, Red), (24, 15, White)],
        );
        board.match_score = Score {
            white: 4,
            ..Score::to(5)
        };

        // act
        let ranked = choose(
            &board.legal_continuations(),
            &mut CustomNumberGenerator::new(42),
            &mut NoopTracer,
        );

        // assert
        assert_eq!(board.backgammon_risk(Red), -1);
        assert_eq!(score(&ranked[0].analysis, "minProbabilityOfGettingBackgammoned"), 0);
        assert_eq!(ranked[0].board.backgammon_exposure(Red), 0);
    }
}
