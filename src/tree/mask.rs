//! Membership mask pass.

use crate::tree::Join;

/// Writes a 0/1 flag per element of `v` into `mask` recording whether the element satisfies
/// `is_less(elem, pivot)`, and returns how many flags were set.
pub(crate) fn fill_mask<J, T, F>(
    v: &[T],
    mask: &mut [u8],
    pivot: &T,
    is_less: &F,
    fallback_len: usize,
) -> usize
where
    J: Join,
    T: Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    debug_assert_eq!(v.len(), mask.len());

    if v.len() <= fallback_len {
        let mut count = 0;
        for (slot, elem) in mask.iter_mut().zip(v) {
            let flag = is_less(elem, pivot) as u8;
            *slot = flag;
            count += usize::from(flag);
        }
        count
    } else {
        let mid = v.len() / 2;
        let (v_left, v_right) = v.split_at(mid);
        let (mask_left, mask_right) = mask.split_at_mut(mid);

        let (count_left, count_right) = J::join(
            || fill_mask::<J, T, F>(v_left, mask_left, pivot, is_less, fallback_len),
            || fill_mask::<J, T, F>(v_right, mask_right, pivot, is_less, fallback_len),
        );

        count_left + count_right
    }
}

/// Inverts `mask` into `complement` and returns the number of set flags in the result. Reading the
/// already computed mask instead of re-running the predicate guarantees the two masks partition
/// the index range even for an inconsistent predicate.
pub(crate) fn fill_complement_mask<J>(mask: &[u8], complement: &mut [u8], fallback_len: usize) -> usize
where
    J: Join,
{
    debug_assert_eq!(mask.len(), complement.len());

    if mask.len() <= fallback_len {
        let mut count = 0;
        for (slot, &flag) in complement.iter_mut().zip(mask) {
            let inverted = 1 - flag;
            *slot = inverted;
            count += usize::from(inverted);
        }
        count
    } else {
        let mid = mask.len() / 2;
        let (mask_left, mask_right) = mask.split_at(mid);
        let (compl_left, compl_right) = complement.split_at_mut(mid);

        let (count_left, count_right) = J::join(
            || fill_complement_mask::<J>(mask_left, compl_left, fallback_len),
            || fill_complement_mask::<J>(mask_right, compl_right, fallback_len),
        );

        count_left + count_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Sequential;

    #[test]
    fn mask_matches_predicate() {
        let v = [6, 1, 7, 4, 0, 3, 5, 2];
        let mut mask = [0u8; 8];

        let count = fill_mask::<Sequential, i32, _>(&v, &mut mask, &4, &|a, b| a < b, 1);

        assert_eq!(count, 4);
        assert_eq!(mask, [0, 1, 0, 0, 1, 1, 0, 1]);
    }

    #[test]
    fn fallback_and_leaf_recursion_agree() {
        let v: Vec<i32> = (0..57).map(|i| (i * 37) % 19).collect();
        let mut leaf_mask = vec![0u8; v.len()];
        let mut linear_mask = vec![0u8; v.len()];

        let leaf_count =
            fill_mask::<Sequential, i32, _>(&v, &mut leaf_mask, &9, &|a, b| a < b, 1);
        let linear_count =
            fill_mask::<Sequential, i32, _>(&v, &mut linear_mask, &9, &|a, b| a < b, v.len());

        assert_eq!(leaf_count, linear_count);
        assert_eq!(leaf_mask, linear_mask);
    }

    #[test]
    fn complement_covers_every_position() {
        let mask = [0u8, 1, 1, 0, 1, 0, 0, 0, 1];
        let mut complement = [0u8; 9];

        let count = fill_complement_mask::<Sequential>(&mask, &mut complement, 2);

        assert_eq!(count, 5);
        for (m, c) in mask.iter().zip(&complement) {
            assert_eq!(m + c, 1);
        }
    }
}
