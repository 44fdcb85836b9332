use std::cmp::Ordering;

use crate::smallsort::swap_if_less;

sort_impl!("rust_bubble_stable");

/// Sorts the slice in place and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements), allocation free and *O*(*n*^2)
/// worst-case. Already sorted input is detected by the first pass and costs *n* - 1 comparisons.
#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    bubble_sort(v, |a, b| a.lt(b));
    v
}

/// Sorts the slice in place with a comparator function and returns it.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// the same elements and the call still terminates.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, |a, b| compare(a, b) == Ordering::Less);
    v
}

/// Full left to right passes swapping every adjacent pair that is out of order, until a pass
/// performs no swap.
///
/// After pass `k` the `k` largest elements are in their final position, so a total order needs
/// at most `len - 1` swapping passes plus one clean pass. Capping the pass count at `len` changes
/// nothing for a total order and bounds the work for comparators that are not one.
fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for _ in 0..len {
        let mut swapped = false;
        for i in 0..len - 1 {
            swapped |= swap_if_less(v, i, i + 1, &mut is_less);
        }

        if !swapped {
            break;
        }
    }
}
