use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::PivotPolicy;

/// Source of pivot draws for [`UniformRandom`].
pub trait IndexSource {
    /// Returns an index in `low..=high`.
    fn index_in(&mut self, low: usize, high: usize) -> usize;
}

/// Adapts any `rand` generator into an [`IndexSource`] drawing uniformly.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> IndexSource for RngSource<R> {
    #[inline]
    fn index_in(&mut self, low: usize, high: usize) -> usize {
        self.0.random_range(low..=high)
    }
}

/// Randomized pivot: a uniformly drawn index of the range is swapped into the last slot.
#[derive(Clone, Debug)]
pub struct UniformRandom<S> {
    source: S,
}

impl<S: IndexSource> UniformRandom<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl UniformRandom<RngSource<ThreadRng>> {
    /// Draws from the thread-local generator. Not reproducible between runs.
    pub fn thread_local() -> Self {
        Self::new(RngSource(rand::rng()))
    }
}

impl UniformRandom<RngSource<StdRng>> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource(StdRng::seed_from_u64(seed)))
    }
}

impl<S: IndexSource> PivotPolicy for UniformRandom<S> {
    #[inline]
    fn place_pivot<T: Ord>(&mut self, data: &mut [T]) {
        debug_assert!(!data.is_empty());

        let last = data.len() - 1;
        // Draws from injected sources are clamped into the range.
        let idx = self.source.index_in(0, last).min(last);
        data.swap(idx, last);
    }
}
