use crate::board::Board;
use crate::players::{
    my_blocked_points, my_blot_liability, my_blot_liability_including_unhittable, my_blots,
    my_checkers_home, opponent_pip_count, prime_size, racer, rank, trace_decision,
};
use crate::random::RandomGenerator;
use crate::selection::{AnalyzedBoard, Criterion};
use crate::trace::Tracer;

const SCOPE: &str = "aggressive";

pub const CRITERIA: [Criterion; 7] = [
    Criterion::maximize("maxOpponentPipCount", opponent_pip_count),
    Criterion::maximize("maxMyBlockedPoints", my_blocked_points),
    Criterion::maximize("maxPrimeSize", prime_size),
    Criterion::minimize("minMyBlotLiability", my_blot_liability),
    Criterion::minimize("minMyBlots", my_blots),
    Criterion::maximize("maxNumCheckersInMyHome", my_checkers_home),
    Criterion::minimize(
        "minMyBlotLiabilityIncludingUnhittable",
        my_blot_liability_including_unhittable,
    ),
];

/// Ranks `candidates` preferring hits and made points over safety. Once
/// every candidate is a race, plays as [`racer::choose`] does.
pub fn choose<R: RandomGenerator + ?Sized>(
    candidates: &[Board],
    random: &mut R,
    tracer: &mut dyn Tracer,
) -> Vec<AnalyzedBoard> {
    if tracer.enabled() {
        tracer.trace(SCOPE, &format!("{} choices", candidates.len()));
    }
    if candidates.len() > 1 && candidates.iter().all(Board::racing) {
        if tracer.enabled() {
            tracer.trace(SCOPE, "every choice is a race, playing as a racer");
        }
        return racer::choose(candidates, random, tracer);
    }
    let ranked = rank(candidates, &CRITERIA, random, tracer);
    trace_decision(SCOPE, &ranked, tracer);
    ranked
}
