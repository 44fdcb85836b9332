//! Comparison, swap and shift primitives shared by the simple stable sorts.

use std::mem::ManuallyDrop;
use std::ptr;

/// Swaps `v[a]` and `v[b]` if `v[b]` is strictly less than `v[a]`. Returns whether a swap took
/// place.
///
/// Equal elements are never swapped, which keeps every caller stable as long as `a < b`.
#[inline(always)]
pub(crate) fn swap_if_less<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let should_swap = is_less(&v[b], &v[a]);
    if should_swap {
        v.swap(a, b);
    }

    should_swap
}

/// Sorts `v` assuming `v[..v.len() - 1]` is already sorted.
///
/// Takes the last element out as the key, shifts every element of the sorted prefix that is
/// strictly greater than the key one slot to the right, and writes the key into the remaining
/// gap. The scan stops at the first element that is not greater than the key, or at the start.
#[inline]
pub(crate) fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let tail = len - 1;

    // Already in place, nothing to shift.
    if !is_less(&v[tail], &v[tail - 1]) {
        return;
    }

    // SAFETY: see individual comments.
    unsafe {
        let v_base = v.as_mut_ptr();

        // SAFETY: after this read `v[tail]` is never read from again, it only ever becomes the
        // destination of a shift. Thus this is effectively a move, not a copy. Should a panic
        // occur, or we have found the correct insertion position, `gap` moves the key back into
        // the slice.
        let key = ManuallyDrop::new(ptr::read(v_base.add(tail)));
        let mut gap = GapGuard {
            src: &*key,
            dst: v_base.add(tail),
        };

        let mut sift = tail - 1;
        loop {
            // SAFETY: `sift < tail < len` and `gap.dst` is the slot directly after `sift`, so
            // both are in-bounds and distinct.
            ptr::copy_nonoverlapping(v_base.add(sift), gap.dst, 1);
            gap.dst = v_base.add(sift);

            if sift == 0 {
                break;
            }

            sift -= 1;
            if !is_less(&*key, &*v_base.add(sift)) {
                break;
            }
        }

        // `gap` gets dropped and thus copies `key` into the remaining gap in `v`.
    }
}

// When dropped, copies from `src` into `dst`.
struct GapGuard<T> {
    src: *const T,
    dst: *mut T,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the held key and `dst` to the single vacated slot of the slice.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dst, 1);
        }
    }
}
