use rand::{Rng, random};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// The single source of nondeterminism: dice, the opening roller, random
/// tie-breaks and the random player all draw from one of these.
pub trait RandomGenerator {
    fn next(&mut self) -> i32;

    /// A value in the half-open range `[from, to)`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// An opaque value used to break ties between equally ranked boards.
    fn next_score(&mut self) -> i64 {
        i64::from(self.next())
    }

    /// A uniformly chosen index into a collection of `len` items.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = i32::try_from(len).unwrap_or(i32::MAX);
        Some(self.next_range(0, len) as usize)
    }

    fn get_random_from_slice<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K>
    where
        Self: Sized,
    {
        self.choose_index(items.len()).and_then(|i| items.get(i))
    }
}

/// Backed by the thread-local RNG of the `rand` crate.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator. Same seed, same game, on every
/// platform.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C).rem_euclid(i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }
}

impl<T: RandomGenerator + ?Sized> RandomGenerator for &mut T {
    fn next(&mut self) -> i32 {
        (**self).next()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (**self).next_range(from, to)
    }
}

impl<T: RandomGenerator + ?Sized> RandomGenerator for Box<T> {
    fn next(&mut self) -> i32 {
        (**self).next()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (**self).next_range(from, to)
    }
}
