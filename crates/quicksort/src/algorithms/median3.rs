use crate::PivotPolicy;

/// Deterministic pivot: median of the first, middle and last elements.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MedianOfThree;

impl PivotPolicy for MedianOfThree {
    #[inline]
    fn place_pivot<T: Ord>(&mut self, data: &mut [T]) {
        place_median3(data);
    }
}

/// Orders `data[0] <= data[mid] <= data[last]`, then swaps the median into `data[last]`.
///
/// `mid` is `(len - 1) / 2`, the floor midpoint of the inclusive range. A single element is left
/// untouched.
#[inline]
pub fn place_median3<T: Ord>(data: &mut [T]) {
    debug_assert!(!data.is_empty());

    let last = data.len() - 1;
    let mid = last / 2;

    if data[0] > data[mid] {
        data.swap(0, mid);
    }
    if data[0] > data[last] {
        data.swap(0, last);
    }
    if data[mid] > data[last] {
        data.swap(mid, last);
    }

    data.swap(mid, last);
}
