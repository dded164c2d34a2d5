use crate::board::Board;
use crate::random::RandomGenerator;
use crate::selection::{Analysis, AnalyzedBoard};
use crate::trace::Tracer;

/// Picks one candidate uniformly at random. Nothing else is returned.
pub fn choose<R: RandomGenerator + ?Sized>(
    candidates: &[Board],
    random: &mut R,
    tracer: &mut dyn Tracer,
) -> Vec<AnalyzedBoard> {
    let Some(index) = random.choose_index(candidates.len()) else {
        return Vec::new();
    };
    if tracer.enabled() {
        tracer.trace(
            "random",
            &format!("decided on {index} from range [0, {})", candidates.len()),
        );
    }
    vec![AnalyzedBoard {
        board: candidates[index],
        analysis: Analysis::RandomPick,
    }]
}
