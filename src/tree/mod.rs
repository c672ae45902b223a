//! Tree-structured partition.
//!
//! The classic partition step of quicksort, expressed as independent divide-and-conquer passes
//! instead of a single scan: a 0/1 mask per element, an exclusive prefix sum over the mask giving
//! every flagged element its destination slot, and a scatter that compacts the flagged elements
//! into a contiguous block of a scratch buffer. A symmetric pass over the complement mask places
//! the remaining elements behind that block, and a final block copy moves the scratch content back
//! into the input slice.
//!
//! Every pass splits its range at the midpoint and recurses into both halves. The halves touch
//! disjoint subslices, so the recursion maps directly onto fork-join execution; which scheduling
//! model actually runs the two halves is decided by the [`Join`] executor the caller picks.

use std::iter;
use std::mem::MaybeUninit;

use crate::PartitionError;

mod mask;
mod prefix_sum;
mod scatter;

pub mod fork_join;
pub mod sequential;

/// Ranges at most this long are processed by the linear fallback loop of each pass instead of
/// splitting further. Recursing all the way down to single elements would make task-spawn overhead
/// dominate under fork-join execution.
pub const SEQ_FALLBACK_LEN: usize = 1000;

/// Executes the two halves of a recursive split.
pub trait Join {
    fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}

/// Runs the left half to completion before starting the right one. Sequentially the recursion
/// buys nothing over a plain loop; its value is that swapping in [`ForkJoin`] changes nothing
/// else.
pub struct Sequential;

impl Join for Sequential {
    #[inline]
    fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let ra = a();
        (ra, b())
    }
}

/// Dispatches the two halves onto rayon's work-stealing pool.
pub struct ForkJoin;

impl Join for ForkJoin {
    #[inline]
    fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(a, b)
    }
}

/// Partitions `v` around the element at `pivot_index` and returns the pivot's final index.
///
/// `fallback_len` is the granularity threshold: subranges at most this long are handled by the
/// linear loop of each pass. The [`sequential`] and [`fork_join`] frontends pass
/// [`SEQ_FALLBACK_LEN`]; tests pass 1 to force the recursion down to single-element leaves.
pub fn partition_at<J, T, F>(
    v: &mut [T],
    pivot_index: usize,
    is_less: &F,
    fallback_len: usize,
) -> Result<usize, PartitionError>
where
    J: Join,
    T: Send + Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    let len = v.len();
    if len == 0 {
        return Err(PartitionError::EmptySlice);
    }
    if pivot_index >= len {
        return Err(PartitionError::PivotIndexOutOfBounds {
            index: pivot_index,
            len,
        });
    }

    v.swap(0, pivot_index);

    // The pivot stays parked in slot 0 while the rest of the slice is compacted. Holding it as a
    // borrow of a disjoint subslice avoids both a copy of the value and any aliasing with the
    // range the passes mutate.
    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let lt_count = if rest.is_empty() {
        0
    } else {
        compact::<J, T, F>(rest, pivot, is_less, fallback_len.max(1))
    };

    // The element displaced out of the boundary slot compares less than the pivot, so it stays
    // inside the lower block.
    v.swap(0, lt_count);

    Ok(lt_count)
}

/// Re-arranges `v` so that all elements satisfying `is_less(elem, pivot)` form a contiguous
/// prefix, and returns how many there are.
fn compact<J, T, F>(v: &mut [T], pivot: &T, is_less: &F, fallback_len: usize) -> usize
where
    J: Join,
    T: Send + Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    let len = v.len();

    let mut lt_mask = vec![0u8; len];
    let lt_count = mask::fill_mask::<J, T, F>(v, &mut lt_mask, pivot, is_less, fallback_len);

    // The mask of the complement predicate is derived from the first mask rather than computed
    // with a second round of comparisons. This keeps the two masks exact complements even if
    // `is_less` is not a consistent total order, which the scatter safety below relies on.
    let mut ge_mask = vec![0u8; len];
    let ge_count = mask::fill_complement_mask::<J>(&lt_mask, &mut ge_mask, fallback_len);
    debug_assert_eq!(lt_count + ge_count, len);

    let mut lt_indexes = vec![0usize; len];
    let mut ge_indexes = vec![0usize; len];
    let (lt_total, ge_total) = {
        let (lt_out, ge_out) = (&mut lt_indexes[..], &mut ge_indexes[..]);
        J::join(
            || prefix_sum::exclusive_prefix_sum::<J>(&lt_mask, lt_out, fallback_len),
            || prefix_sum::exclusive_prefix_sum::<J>(&ge_mask, ge_out, fallback_len),
        )
    };
    debug_assert_eq!(lt_total, lt_count);
    debug_assert_eq!(ge_total, ge_count);

    // Compaction goes through a scratch buffer instead of swapping in place. The prefix sums
    // guarantee that every scratch slot is written exactly once, so the two scatter calls may
    // write their disjoint blocks concurrently.
    let mut output: Vec<MaybeUninit<T>> = iter::repeat_with(MaybeUninit::uninit).take(len).collect();
    let (lt_slots, ge_slots) = output.split_at_mut(lt_count);
    {
        let src = &*v;
        J::join(
            || scatter::scatter_masked::<J, T>(src, &lt_mask, &lt_indexes, lt_slots, 0, fallback_len),
            || scatter::scatter_masked::<J, T>(src, &ge_mask, &ge_indexes, ge_slots, 0, fallback_len),
        );
    }

    // SAFETY: `lt_count + ge_count == len` holds by construction of the complement mask, and each
    // scatter pass initialized its whole block, so all `len` scratch slots are initialized.
    unsafe {
        scatter::write_back::<J, T>(&output, v, fallback_len);
    }

    lt_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_less(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn leaf_level_recursion() {
        // fallback_len == 1 drives every pass down to single-element leaves.
        let mut v = [6, 1, 7, 4, 0, 3, 5, 2];
        let n = partition_at::<Sequential, i32, _>(&mut v, 3, &is_less, 1).unwrap();

        assert_eq!(n, 4);
        assert_eq!(v[n], 4);
        assert!(v[..n].iter().all(|&e| e < 4));
        assert!(v[n + 1..].iter().all(|&e| e >= 4));
    }

    #[test]
    fn fallback_len_zero_is_harmless() {
        let mut v = [2, 1];
        let n = partition_at::<Sequential, i32, _>(&mut v, 0, &is_less, 0).unwrap();

        assert_eq!(n, 1);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn rejects_before_mutating() {
        let mut v = [3, 1, 2];
        let result = partition_at::<Sequential, i32, _>(&mut v, 7, &is_less, 1);

        assert_eq!(
            result,
            Err(PartitionError::PivotIndexOutOfBounds { index: 7, len: 3 })
        );
        assert_eq!(v, [3, 1, 2]);

        let mut empty: [i32; 0] = [];
        assert_eq!(
            partition_at::<Sequential, i32, _>(&mut empty, 0, &is_less, 1),
            Err(PartitionError::EmptySlice)
        );
    }
}
