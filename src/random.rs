use std::fmt;

use rand::{Rng, SeedableRng, XorShiftRng};

/// The source of every random decision the generator makes.
///
/// The generator draws from it in a fixed order, so a given source, seed and maze descriptor
/// always produce the same maze.
pub trait RandomSource {
    /// Restart the random stream from `seed`.
    fn initialise(&mut self, seed: u32);

    /// Uniformly distributed integer in `low..=high`. Requires `low <= high`.
    fn next_int(&mut self, low: usize, high: usize) -> usize;
}

/// Seed used by a source that has never been initialised.
pub const DEFAULT_SEED: u32 = 32;

/// Default `RandomSource`, a xorshift generator from the `rand` crate.
#[derive(Clone)]
pub struct XorShiftSource {
    rng: XorShiftRng,
}

impl fmt::Debug for XorShiftSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "XorShiftSource")
    }
}

impl XorShiftSource {
    pub fn new() -> XorShiftSource {
        XorShiftSource::from_seed(DEFAULT_SEED)
    }

    pub fn from_seed(seed: u32) -> XorShiftSource {
        XorShiftSource { rng: XorShiftRng::from_seed(expand_seed(seed)) }
    }
}

impl Default for XorShiftSource {
    fn default() -> XorShiftSource {
        XorShiftSource::new()
    }
}

impl RandomSource for XorShiftSource {
    fn initialise(&mut self, seed: u32) {
        self.rng.reseed(expand_seed(seed));
    }

    fn next_int(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low, high + 1)
    }
}

/// A boxed default source for callers that do not bring their own.
pub fn default_random_source() -> Box<dyn RandomSource> {
    Box::new(XorShiftSource::new())
}

// xorshift must never be seeded with all zero words.
fn expand_seed(seed: u32) -> [u32; 4] {
    [seed, seed.rotate_left(16) ^ 0x9E37_79B9, 0x243F_6A88, 0x85A3_08D3]
}
