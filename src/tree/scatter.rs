//! Scatter and copy-back passes.

use std::mem::MaybeUninit;
use std::ptr;

use crate::tree::Join;

/// Moves every element of `v` whose mask flag is set into `out` at the slot named by its prefix
/// sum entry. `base` is the prefix sum value at the start of `v`, i.e. how many destination slots
/// precede `out`.
///
/// `out` must be exactly as long as the number of set flags. The exclusive prefix sum maps the set
/// positions of `mask` bijectively onto `0..out.len()`, so every slot of `out` is initialized
/// exactly once and the two recursive calls write disjoint subslices.
pub(crate) fn scatter_masked<J, T>(
    v: &[T],
    mask: &[u8],
    indexes: &[usize],
    out: &mut [MaybeUninit<T>],
    base: usize,
    fallback_len: usize,
) where
    J: Join,
    T: Send + Sync,
{
    debug_assert_eq!(v.len(), mask.len());
    debug_assert_eq!(v.len(), indexes.len());

    if v.len() <= fallback_len {
        for i in 0..v.len() {
            if mask[i] == 1 {
                // SAFETY: a bitwise copy out of the slice. Ownership of the value conceptually
                // moves into `out`; the stale slot in `v` is overwritten by `write_back` without
                // being dropped, so the value is neither duplicated nor dropped twice.
                out[indexes[i] - base].write(unsafe { ptr::read(&v[i]) });
            }
        }
    } else {
        let mid = v.len() / 2;
        // The prefix sum entry at the split point tells how many destination slots belong to the
        // left half.
        let right_base = indexes[mid];

        let (v_left, v_right) = v.split_at(mid);
        let (mask_left, mask_right) = mask.split_at(mid);
        let (idx_left, idx_right) = indexes.split_at(mid);
        let (out_left, out_right) = out.split_at_mut(right_base - base);

        J::join(
            || scatter_masked::<J, T>(v_left, mask_left, idx_left, out_left, base, fallback_len),
            || {
                scatter_masked::<J, T>(
                    v_right,
                    mask_right,
                    idx_right,
                    out_right,
                    right_base,
                    fallback_len,
                )
            },
        );
    }
}

/// Copies the scratch buffer back over the input slice, block by block.
///
/// # Safety
///
/// Every slot of `src` must be initialized. The old contents of `dst` are overwritten without
/// running destructors; callers uphold that those values are exactly the ones now living in
/// `src`.
pub(crate) unsafe fn write_back<J, T>(src: &[MaybeUninit<T>], dst: &mut [T], fallback_len: usize)
where
    J: Join,
    T: Send + Sync,
{
    debug_assert_eq!(src.len(), dst.len());

    if dst.len() <= fallback_len {
        // SAFETY: `src` and `dst` are distinct allocations of equal length and all of `src` is
        // initialized per the contract above.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr() as *const T, dst.as_mut_ptr(), dst.len());
        }
    } else {
        let mid = dst.len() / 2;
        let (src_left, src_right) = src.split_at(mid);
        let (dst_left, dst_right) = dst.split_at_mut(mid);

        J::join(
            || unsafe { write_back::<J, T>(src_left, dst_left, fallback_len) },
            || unsafe { write_back::<J, T>(src_right, dst_right, fallback_len) },
        );
    }
}
