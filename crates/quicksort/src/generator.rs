use std::str::FromStr;

use rand::Rng;
use rand::seq::index;

use crate::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    Ascending,
    Descending,
    Random,
    Duplicates,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::Ascending,
    Distribution::Descending,
    Distribution::Random,
    Distribution::Duplicates,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Random => "random",
            Self::Duplicates => "duplicates",
        }
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DISTRIBUTIONS
            .into_iter()
            .find(|dist| dist.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::InvalidArgument(
                    "kind must be 'ascending', 'descending', 'random', or 'duplicates'".into(),
                )
            })
    }
}

/// Generates `n` integers shaped by `kind` (case-insensitive), drawing from the thread-local rng.
///
/// Fails with [`Error::InvalidArgument`] when `n` is negative or `kind` is not one of
/// `ascending`, `descending`, `random` or `duplicates`.
pub fn generate(n: i64, kind: &str) -> Result<Vec<i64>, Error> {
    if n < 0 {
        return Err(Error::InvalidArgument(
            "n must be a non-negative integer".into(),
        ));
    }
    let dist = kind.parse::<Distribution>()?;
    let n = usize::try_from(n)
        .map_err(|_| Error::InvalidArgument(format!("n = {n} does not fit in usize")))?;

    Ok(generate_with_rng(n, dist, &mut rand::rng()))
}

/// Typed form of [`generate`].
///
/// - `Ascending`: `1..=n`.
/// - `Descending`: `n..=1`.
/// - `Random`: `n` distinct values from `[1, 2n)`.
/// - `Duplicates`: `n` values from `[1, max(1, n / 4)]`.
pub fn generate_with_rng<R: Rng + ?Sized>(n: usize, dist: Distribution, rng: &mut R) -> Vec<i64> {
    match dist {
        Distribution::Ascending => (1..=n as i64).collect(),
        Distribution::Descending => (1..=n as i64).rev().collect(),
        Distribution::Random => {
            if n == 0 {
                return Vec::new();
            }
            index::sample(rng, 2 * n - 1, n)
                .into_iter()
                .map(|i| i as i64 + 1)
                .collect()
        }
        Distribution::Duplicates => {
            let max = (n / 4).max(1) as i64;
            (0..n).map(|_| rng.random_range(1..=max)).collect()
        }
    }
}
