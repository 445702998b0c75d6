mod algorithms;
mod error;
pub mod generator;
pub mod harness;

pub use algorithms::lomuto::partition;
pub use algorithms::median3::MedianOfThree;
pub use algorithms::random_pivot::{IndexSource, RngSource, UniformRandom};
pub use error::Error;
pub use generator::{Distribution, generate};

/// Pivot selection for the shared Lomuto quicksort.
///
/// `place_pivot` receives a non-empty range and must move the chosen pivot into its last slot.
/// Any choice yields a correct sort; the policy only affects how balanced the splits are.
pub trait PivotPolicy {
    fn place_pivot<T: Ord>(&mut self, data: &mut [T]);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    MedianOfThree,
    UniformRandom,
}

pub const ALL_STRATEGIES: [PivotStrategy; 2] =
    [PivotStrategy::MedianOfThree, PivotStrategy::UniformRandom];

pub fn all_strategies() -> &'static [PivotStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: PivotStrategy) -> &'static str {
    match strategy {
        PivotStrategy::MedianOfThree => "quick_sort_median3",
        PivotStrategy::UniformRandom => "quick_sort_random",
    }
}

/// Returns a sorted copy of `input`. `input` itself is left untouched.
pub fn sort<T: Ord + Clone>(strategy: PivotStrategy, input: &[T]) -> Vec<T> {
    let mut data = input.to_vec();
    sort_in_place(strategy, &mut data);
    data
}

pub fn sort_in_place<T: Ord>(strategy: PivotStrategy, data: &mut [T]) {
    match strategy {
        PivotStrategy::MedianOfThree => sort_in_place_with_policy(data, &mut MedianOfThree),
        PivotStrategy::UniformRandom => {
            sort_in_place_with_policy(data, &mut UniformRandom::thread_local())
        }
    }
}

pub fn sort_with_policy<T: Ord + Clone, P: PivotPolicy>(input: &[T], policy: &mut P) -> Vec<T> {
    let mut data = input.to_vec();
    sort_in_place_with_policy(&mut data, policy);
    data
}

pub fn sort_in_place_with_policy<T: Ord, P: PivotPolicy>(data: &mut [T], policy: &mut P) {
    algorithms::lomuto::quick_sort(data, policy);
}

/// Median-of-three quicksort, returning a sorted copy.
pub fn quicksort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    sort(PivotStrategy::MedianOfThree, input)
}

/// Randomized-pivot quicksort, returning a sorted copy.
pub fn random_quicksort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    sort(PivotStrategy::UniformRandom, input)
}
