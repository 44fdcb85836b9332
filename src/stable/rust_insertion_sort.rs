use std::cmp::Ordering;

use crate::smallsort::insert_tail;

sort_impl!("rust_insertion_stable");

/// Sorts the slice in place and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements), allocation free and *O*(*n*^2)
/// worst-case. Each element costs one comparison if it is already in place, so sorted input is
/// handled in *O*(*n*).
///
/// If a comparison panics, the slice still contains every element it held before exactly once.
#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    insertion_sort(v, |a, b| a.lt(b));
    v
}

/// Sorts the slice in place with a comparator function and returns it.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, |a, b| compare(a, b) == Ordering::Less);
    v
}

fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // `v[..end - 1]` is the sorted prefix, `v[end - 1]` the next key.
    for end in 2..=v.len() {
        insert_tail(&mut v[..end], &mut is_less);
    }
}
