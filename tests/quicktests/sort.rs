use dsa::sort::{bubble_sort, insertion_sort, merge_sort, quick_sort};

/// Sorts `xs` with every algorithm and returns the four results.
fn sort_all<T: Ord + Clone>(xs: &[T]) -> [Vec<T>; 4] {
    let mut bubbled = xs.to_vec();
    bubble_sort(&mut bubbled);
    let mut inserted = xs.to_vec();
    insertion_sort(&mut inserted);

    [bubbled, inserted, merge_sort(xs.to_vec()), quick_sort(xs.to_vec())]
}

#[quickcheck]
fn sorts_agree_with_std(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort();

    sort_all(&xs).iter().all(|sorted| *sorted == expected)
}

#[quickcheck]
fn sorting_sorted_input_changes_nothing(xs: Vec<i8>) -> bool {
    let mut sorted = xs;
    sorted.sort();

    sort_all(&sorted).iter().all(|resorted| *resorted == sorted)
}

#[quickcheck]
fn stable_sorts_keep_equal_keys_in_order(keys: Vec<u8>) -> bool {
    // Sort (key / 8, position) pairs by key only through a wrapper that
    // ignores position, then check positions are still ascending per key.
    #[derive(Clone, Debug)]
    struct ByKey(u8, usize);
    impl PartialEq for ByKey {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for ByKey {}
    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for ByKey {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let records: Vec<_> = keys
        .iter()
        .enumerate()
        .map(|(pos, key)| ByKey(key / 8, pos))
        .collect();
    let [bubbled, inserted, merged, _] = sort_all(&records);

    [bubbled, inserted, merged].iter().all(|sorted| {
        sorted
            .windows(2)
            .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1))
    })
}
