use crate::tree::{self, Sequential};
use crate::PartitionError;

partition_impl!("tree_sequential");

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], pivot_index: usize, is_less: &F) -> Result<usize, PartitionError>
where
    T: Send + Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    tree::partition_at::<Sequential, T, F>(v, pivot_index, is_less, tree::SEQ_FALLBACK_LEN)
}
