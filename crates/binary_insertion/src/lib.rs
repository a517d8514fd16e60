use std::ptr;

/// Returns the index at which `val` can be inserted into `sorted` so the
/// slice stays sorted, choosing the rightmost slot among elements equal to
/// `val`.
///
/// `sorted` must already be sorted non-descending; for an unsorted slice
/// the result is unspecified but always in `0..=sorted.len()`.
pub fn insertion_point<T: Ord>(sorted: &[T], val: &T) -> usize {
    let mut low = 0_usize;
    let mut high = sorted.len();

    while low < high {
        // Computed from the difference so `low + high` cannot overflow.
        let mid = low + ((high - low) >> 1);
        // mid < high <= sorted.len(), so the access is in bounds.
        let probe = unsafe { sorted.get_unchecked(mid) };
        // Equal keys send the search right; that keeps the sort stable.
        if *probe <= *val {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

/// Sorts `data` in place with binary insertion sort.
///
/// Stable. O(n log n) comparisons, O(n^2) element moves in the worst case
/// (reverse-sorted input), zero moves on already-sorted input.
pub fn sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let pos = insertion_point(&data[..i], &data[i]);
        debug_assert!(pos <= i);
        if pos == i {
            continue;
        }

        // All comparisons for this element are done above; nothing in this
        // block can unwind while the slot at `i` is logically vacated.
        unsafe {
            let ptr = data.as_mut_ptr();
            let key = ptr::read(ptr.add(i));
            // Shift by memmove semantics for overlapping regions.
            ptr::copy(ptr.add(pos), ptr.add(pos + 1), i - pos);
            ptr::write(ptr.add(pos), key);
        }
    }
}
