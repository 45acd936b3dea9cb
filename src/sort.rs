//! Comparison sorts. Every function leaves its elements in non-decreasing order
//! and treats empty and single-element input as already sorted.
//!
//! [`bubble_sort`] and [`insertion_sort`] rearrange a slice in place. [`merge_sort`]
//! and [`quick_sort`] build new sequences, so they take their input by value and
//! hand back the sorted `Vec`.
//!
//! | sort               | best       | average    | worst      | stable | in place |
//! |--------------------|------------|------------|------------|--------|----------|
//! | [`bubble_sort`]    | O(n)       | O(n²)      | O(n²)      | yes    | yes      |
//! | [`insertion_sort`] | O(n)       | O(n²)      | O(n²)      | yes    | yes      |
//! | [`merge_sort`]     | O(n log n) | O(n log n) | O(n log n) | yes    | no       |
//! | [`quick_sort`]     | O(n log n) | O(n log n) | O(n²)      | no     | no       |
//!
//! # Examples
//!
//! ```
//! use dsa::sort::{bubble_sort, insertion_sort, merge_sort, quick_sort};
//!
//! let mut xs = [5, 3, 1, 4, 2];
//! insertion_sort(&mut xs);
//! assert_eq!(xs, [1, 2, 3, 4, 5]);
//!
//! let mut ys = vec![3, 1, 2];
//! bubble_sort(&mut ys);
//! assert_eq!(ys, [1, 2, 3]);
//!
//! assert_eq!(merge_sort(vec![1]), [1]);
//! assert!(quick_sort(Vec::<i32>::new()).is_empty());
//! ```

use std::cmp;

/// Sorts `items` in place by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass bubbles the largest remaining element to the end of the unsorted
/// part, so the next pass can stop one element earlier. A pass that swaps
/// nothing means the slice is sorted and the remaining passes are skipped.
pub fn bubble_sort<T>(items: &mut [T])
where
    T: cmp::Ord,
{
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `items` in place by growing a sorted prefix one element at a time.
/// Each new element is shifted left past every strictly larger element in the
/// prefix, so equal elements keep their order.
pub fn insertion_sort<T>(items: &mut [T])
where
    T: cmp::Ord,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[i] < items[j - 1] {
            j -= 1;
        }
        items[j..=i].rotate_right(1);
    }
}

/// Sorts `items` by splitting it in half, sorting each half and merging the
/// results. On ties the element from the left half is taken first.
pub fn merge_sort<T>(mut items: Vec<T>) -> Vec<T>
where
    T: cmp::Ord,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    merge(merge_sort(items), merge_sort(right))
}

/// Merges two sorted runs into one, preferring `left` on ties.
fn merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: cmp::Ord,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    // At most one of these still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}

/// Sorts `items` around the middle element: everything strictly less, everything
/// equal, and everything strictly greater are collected separately, the outer
/// two are sorted recursively and the three are joined.
///
/// Equal elements end up grouped together but the sort makes no stability
/// promise. Recursion depth is O(n) on adversarial input.
///
/// # Examples
///
/// ```
/// use dsa::sort::quick_sort;
///
/// assert_eq!(quick_sort(vec![3, 6, 1, 6, 2, 6]), [1, 2, 3, 6, 6, 6]);
/// ```
pub fn quick_sort<T>(items: Vec<T>) -> Vec<T>
where
    T: cmp::Ord,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot = &items[items.len() / 2];
    let placements: Vec<_> = items.iter().map(|item| item.cmp(pivot)).collect();

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for (item, placement) in items.into_iter().zip(placements) {
        match placement {
            cmp::Ordering::Less => less.push(item),
            cmp::Ordering::Equal => equal.push(item),
            cmp::Ordering::Greater => greater.push(item),
        }
    }

    let mut sorted = quick_sort(less);
    sorted.append(&mut equal);
    sorted.extend(quick_sort(greater));

    sorted
}
