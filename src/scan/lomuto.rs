use crate::PartitionError;

partition_impl!("scan_lomuto");

// Swap-to-front scan partition. No auxiliary buffer, one pass; this is the conventional serial
// shape the tree implementations are measured against, and the test oracle.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], pivot_index: usize, is_less: &F) -> Result<usize, PartitionError>
where
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

    let mut boundary = 1;
    for i in 1..len {
        if is_less(&v[i], &v[0]) {
            v.swap(boundary, i);
            boundary += 1;
        }
    }

    v.swap(0, boundary - 1);

    Ok(boundary - 1)
}
