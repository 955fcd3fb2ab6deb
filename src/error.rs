use thiserror::Error;

/// Failures reported by [`OrderedBoundedList`](crate::OrderedBoundedList).
///
/// Every variant is recoverable; the list is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// `add` was called while every slot was occupied.
    #[error("no room left (capacity {capacity})")]
    Full { capacity: usize },

    /// `element_at` was asked for a position outside `0..count`.
    #[error("position out of range: {position} (count {count})")]
    IndexOutOfRange { position: isize, count: usize },

    /// A negative capacity was supplied to the signed constructor.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(i64),

    /// Storage for the requested capacity could not be allocated.
    #[error("capacity too large: {0}")]
    CapacityTooLarge(usize),
}

impl ListError {
    pub fn is_full(&self) -> bool {
        matches!(self, ListError::Full { .. })
    }
}
