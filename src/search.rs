//! Searching a slice for a target element. Every search returns the index it
//! found the target at, or `None` when the target isn't there.
//!
//! [`binary_search`] and [`interpolation_search`] assume the slice is sorted in
//! ascending order. That precondition isn't checked: on unsorted input they may
//! miss elements that are present, but they never panic.
//!
//! # Examples
//!
//! ```
//! use dsa::search::{binary_search, interpolation_search, linear_search};
//!
//! let unsorted = [4, 2, 9, 2];
//! assert_eq!(linear_search(&unsorted, &2), Some(1));
//! assert_eq!(linear_search(&unsorted, &7), None);
//!
//! let sorted = [10, 20, 30, 40, 50];
//! assert_eq!(binary_search(&sorted, &40), Some(3));
//! assert_eq!(interpolation_search(&sorted, &20), Some(1));
//! assert_eq!(interpolation_search(&sorted, &25), None);
//! ```

use std::cmp;

use num_traits::ToPrimitive;

/// Checks every element in order and returns the index of the first one equal
/// to `target`. Works on any slice, sorted or not. O(n).
pub fn linear_search<T>(items: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    items.iter().position(|item| item == target)
}

/// Searches an ascending slice by repeatedly halving the inclusive window
/// `[left, right]` around its midpoint. O(log n).
///
/// If several elements equal `target`, any one of their indices may be returned.
pub fn binary_search<T>(items: &[T], target: &T) -> Option<usize>
where
    T: cmp::Ord,
{
    let mut left = 0;
    let mut right = items.len().checked_sub(1)?;
    while left <= right {
        let mid = left + (right - left) / 2;
        match items[mid].cmp(target) {
            cmp::Ordering::Less => left = mid + 1,
            cmp::Ordering::Equal => return Some(mid),
            // Nothing is left of index 0.
            cmp::Ordering::Greater => right = mid.checked_sub(1)?,
        }
    }

    None
}

/// Searches an ascending slice of numbers by estimating where `target` should
/// be from the values at the ends of the window, assuming they are spread
/// evenly between them:
///
/// ```text
/// pos = low + (target - items[low]) * (high - low) / (items[high] - items[low])
/// ```
///
/// O(log log n) on uniformly distributed values, degrading to O(n) when they
/// are badly skewed.
///
/// # Examples
///
/// ```
/// use dsa::search::interpolation_search;
///
/// let evens: Vec<u32> = (0..1000).map(|x| x * 2).collect();
/// assert_eq!(interpolation_search(&evens, &1234), Some(617));
/// assert_eq!(interpolation_search(&evens, &1235), None);
/// ```
pub fn interpolation_search<T>(items: &[T], target: &T) -> Option<usize>
where
    T: cmp::Ord + ToPrimitive,
{
    let mut low = 0;
    let mut high = items.len().checked_sub(1)?;
    while low <= high && items[low] <= *target && *target <= items[high] {
        if low == high {
            return (items[low] == *target).then_some(low);
        }

        let pos = probe(items, low, high, target);
        match items[pos].cmp(target) {
            cmp::Ordering::Less => low = pos + 1,
            cmp::Ordering::Equal => return Some(pos),
            cmp::Ordering::Greater => high = pos.checked_sub(1)?,
        }
    }

    None
}

/// Interpolates the probable index of `target` in `items[low..=high]`. The
/// result is always within the window. Requires `low < high` and
/// `items[low] <= target <= items[high]`.
fn probe<T>(items: &[T], low: usize, high: usize, target: &T) -> usize
where
    T: ToPrimitive,
{
    let midpoint = low + (high - low) / 2;
    let (Some(low_value), Some(high_value), Some(target)) =
        (items[low].to_f64(), items[high].to_f64(), target.to_f64())
    else {
        return midpoint;
    };

    let value_span = high_value - low_value;
    // Equal bounds mean every element in the window is equal (or too large to tell
    // apart as `f64`), so start from the bottom.
    if value_span <= 0.0 {
        return low;
    }

    let index_span = high - low;
    let offset = ((target - low_value) * index_span as f64 / value_span).floor();
    low + (offset as usize).min(index_span)
}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn linear_matches_position(xs: Vec<i8>, target: i8) -> bool {
            linear_search(&xs, &target) == xs.iter().position(|x| *x == target)
        }
    }

    quickcheck::quickcheck! {
        fn binary_and_interpolation_agree_on_presence(xs: Vec<i16>, target: i16) -> bool {
            let mut xs = xs;
            xs.sort();

            let present = xs.contains(&target);
            let binary = binary_search(&xs, &target);
            let interpolation = interpolation_search(&xs, &target);

            binary.map(|i| xs[i] == target).unwrap_or(!present)
                && binary.is_some() == present
                && interpolation.map(|i| xs[i] == target).unwrap_or(!present)
                && interpolation.is_some() == present
        }
    }
}
