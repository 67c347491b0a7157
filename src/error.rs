use std::{error, fmt};

/// Error enumerates over all possible errors that the [`Llrb`] API
/// shall return to the caller.
///
/// [`Llrb`]: crate::Llrb
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Argument is out of range, like `select(k)` with `k >= len()`, or
    /// a ranged query with `low > high`.
    InvalidArgument(String),
    /// Operation needs at least one entry, like `min()` or `delete_min()`.
    EmptyCollection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::EmptyCollection(msg) => write!(f, "empty collection: {}", msg),
        }
    }
}

impl error::Error for Error {}

/// Violation enumerates the structural rules that [`Llrb::validate`]
/// can find broken. None of these are expected in a healthy tree, they
/// point to a bug in the tree algorithms.
///
/// [`Llrb::validate`]: crate::Llrb::validate
#[derive(Debug, Clone, PartialEq)]
pub enum Violation<K> {
    /// Entries are not in sort-order, (child-key, parent-key).
    SortError(K, K),
    /// Cached subtree size does not match the actual count.
    SizeMismatch { key: K, expect: usize, found: usize },
    /// rank() and select() disagree.
    RankMismatch(String),
    /// Red link leaning right, under the node with this key.
    RightRed(K),
    /// Two red links in a row, ending at the node with this key.
    ConsecutiveReds(K),
    /// Paths from root to null links cross different number of blacks.
    UnbalancedBlacks(String),
}

impl<K> fmt::Display for Violation<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::SortError(key, parent) => {
                write!(f, "sort error: {:?} under {:?}", key, parent)
            }
            Violation::SizeMismatch { key, expect, found } => write!(
                f,
                "size mismatch at {:?}: expected {} found {}",
                key, expect, found
            ),
            Violation::RankMismatch(msg) => write!(f, "rank mismatch: {}", msg),
            Violation::RightRed(key) => write!(f, "red right link under {:?}", key),
            Violation::ConsecutiveReds(key) => {
                write!(f, "consecutive reds at {:?}", key)
            }
            Violation::UnbalancedBlacks(msg) => write!(f, "unbalanced blacks: {}", msg),
        }
    }
}

impl<K> error::Error for Violation<K> where K: fmt::Debug {}
