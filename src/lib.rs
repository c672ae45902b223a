use thiserror::Error;

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl crate::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition<T>(
                v: &mut [T],
                pivot_index: usize,
            ) -> Result<usize, crate::PartitionError>
            where
                T: Ord + Send + Sync,
            {
                partition(v, pivot_index, &|a: &T, b: &T| a.lt(b))
            }

            #[inline]
            fn partition_by<T, F>(
                v: &mut [T],
                pivot_index: usize,
                is_less: F,
            ) -> Result<usize, crate::PartitionError>
            where
                T: Send + Sync,
                F: Fn(&T, &T) -> bool + Sync,
            {
                partition(v, pivot_index, &is_less)
            }
        }
    };
}

pub mod patterns;
pub mod scan;
pub mod tree;

/// Common interface of the partition implementations in this crate.
///
/// A successful call re-arranges `v` so that for the returned boundary index `n` every element
/// before `n` compares less than `v[n]`, every element after it does not, and `v[n]` holds the
/// value that was at `pivot_index` on entry. The element bounds are wide enough to serve both the
/// sequential and the fork-join scheduling frontends through one signature.
pub trait Partition {
    fn name() -> String;

    fn partition<T>(v: &mut [T], pivot_index: usize) -> Result<usize, PartitionError>
    where
        T: Ord + Send + Sync;

    fn partition_by<T, F>(v: &mut [T], pivot_index: usize, is_less: F) -> Result<usize, PartitionError>
    where
        T: Send + Sync,
        F: Fn(&T, &T) -> bool + Sync;
}

/// Rejected inputs. Both cases are caught before the input slice is touched, so a call that
/// returns an error leaves the slice exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("cannot partition an empty slice")]
    EmptySlice,

    #[error("pivot index {index} is out of bounds for a slice of length {len}")]
    PivotIndexOutOfBounds { index: usize, len: usize },
}
