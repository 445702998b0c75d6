use crate::PivotPolicy;

/// Sorts `data` by repeatedly partitioning it and recursing into both sides.
///
/// Ranges of length `<= 1` are already sorted. Recursion depth is `O(n)` in the worst case.
pub fn quick_sort<T: Ord, P: PivotPolicy>(data: &mut [T], policy: &mut P) {
    if data.len() < 2 {
        return;
    }

    let pivot = partition(data, policy);
    let (left, rest) = data.split_at_mut(pivot);
    let (_, right) = rest.split_at_mut(1);

    quick_sort(left, policy);
    quick_sort(right, policy);
}

/// Lets `policy` move a pivot into the last slot, then partitions `data` around it.
///
/// Returns the pivot's final index. Everything before it is `<= pivot`, everything after it is
/// `> pivot`. Equal elements land on the left.
pub fn partition<T: Ord, P: PivotPolicy>(data: &mut [T], policy: &mut P) -> usize {
    debug_assert!(!data.is_empty());

    policy.place_pivot(data);
    partition_last(data)
}

/// Lomuto scan using `data[len - 1]` as the pivot.
pub fn partition_last<T: Ord>(data: &mut [T]) -> usize {
    let last = data.len() - 1;
    let (rest, pivot) = data.split_at_mut(last);
    let pivot = &pivot[0];

    // Elements in `rest[..store]` are <= pivot.
    let mut store = 0usize;
    for j in 0..rest.len() {
        if rest[j] <= *pivot {
            rest.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeepLast;

    impl PivotPolicy for KeepLast {
        fn place_pivot<T: Ord>(&mut self, _data: &mut [T]) {}
    }

    fn assert_partitioned(data: &[i64], pivot: usize) {
        let value = data[pivot];
        assert!(data[..pivot].iter().all(|&x| x <= value), "{data:?} at {pivot}");
        assert!(data[pivot + 1..].iter().all(|&x| x > value), "{data:?} at {pivot}");
    }

    #[test]
    fn partition_last_known_cases() {
        let mut data = vec![5, 1, 4, 2, 3];
        let pivot = partition_last(&mut data);
        assert_eq!(pivot, 2);
        assert_eq!(data, vec![1, 2, 3, 5, 4]);

        let mut data = vec![1, 2, 3, 4, 5];
        assert_eq!(partition_last(&mut data), 4);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);

        let mut data = vec![5, 4, 3, 2, 1];
        assert_eq!(partition_last(&mut data), 0);
        assert_partitioned(&data, 0);
    }

    #[test]
    fn single_element_range_returns_zero() {
        let mut data = vec![9];
        assert_eq!(partition_last(&mut data), 0);
        assert_eq!(data, vec![9]);
    }

    #[test]
    fn equal_elements_go_left() {
        let mut data = vec![3, 3, 3, 3];
        assert_eq!(partition_last(&mut data), 3);

        let mut data = vec![2, 5, 2, 1, 2];
        let pivot = partition_last(&mut data);
        assert_eq!(pivot, 3);
        assert_partitioned(&data, pivot);
        assert_eq!(&data[pivot + 1..], &[5]);
    }

    #[test]
    fn quick_sort_with_last_element_pivot() {
        let cases = [
            vec![],
            vec![1],
            vec![2, 1],
            vec![3, 3, 3, 1, 1, 2],
            vec![9, -4, 0, 7, 7, -4, 12, 3],
        ];

        for case in cases {
            let mut actual = case.clone();
            quick_sort(&mut actual, &mut KeepLast);

            let mut expected = case;
            expected.sort_unstable();
            assert_eq!(actual, expected);
        }
    }
}
