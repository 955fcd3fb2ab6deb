use log::{debug, trace};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

use crate::error::ListError;

/// A list of at most `capacity` elements, kept sorted ascending.
///
/// Storage is allocated once at construction and never grows. Adding to a
/// full list fails instead of evicting anything.
#[derive(Debug, Clone)]
pub struct OrderedBoundedList<T> {
    items: Vec<T>,
    capacity: usize,
}

/// Serializable view of a list's current contents.
#[derive(Debug, Serialize)]
pub struct ListSnapshot<'a, T> {
    pub capacity: usize,
    pub count: usize,
    pub elements: &'a [T],
}

impl<T: Ord> OrderedBoundedList<T> {
    /// Panics if storage for `capacity` elements cannot be allocated.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Construct from a signed capacity, rejecting negative values up front.
    ///
    /// Unlike [`new`](Self::new), a capacity whose storage cannot be allocated
    /// is reported as [`ListError::CapacityTooLarge`] instead of panicking.
    pub fn with_signed_capacity(capacity: i64) -> Result<Self, ListError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ListError::InvalidCapacity(capacity))?;

        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| ListError::CapacityTooLarge(capacity))?;
        Ok(Self { items, capacity })
    }

    /// Insert `value` at its sorted position.
    ///
    /// Equal elements keep insertion order: the new value goes after any
    /// element that compares equal to it.
    pub fn add(&mut self, value: T) -> Result<(), ListError> {
        if self.items.len() >= self.capacity {
            debug!("add rejected, list full at capacity {}", self.capacity);
            return Err(ListError::Full {
                capacity: self.capacity,
            });
        }

        let position = self.items.partition_point(|item| *item <= value);
        trace!(
            "inserting at position {} of {}",
            position,
            self.items.len()
        );
        self.items.insert(position, value);
        Ok(())
    }
}

impl<T> OrderedBoundedList<T> {
    /// Bounds-checked read of the element at `position`.
    ///
    /// Valid positions are `0..size()`. Negative positions and positions at or
    /// past the count are rejected.
    pub fn element_at(&self, position: isize) -> Result<&T, ListError> {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.items.get(index))
            .ok_or_else(|| {
                debug!(
                    "read rejected, position {} with count {}",
                    position,
                    self.items.len()
                );
                ListError::IndexOutOfRange {
                    position,
                    count: self.items.len(),
                }
            })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn snapshot(&self) -> ListSnapshot<'_, T> {
        ListSnapshot {
            capacity: self.capacity,
            count: self.items.len(),
            elements: &self.items,
        }
    }

    /// Print `"<label>: <count>"` to stdout.
    pub fn describe<U: Display>(&self, label: U) {
        // stdout going away is not something a diagnostic line can act on
        let _ = self.describe_to(&mut io::stdout().lock(), label);
    }

    pub fn describe_to<W: Write, U: Display>(&self, writer: &mut W, label: U) -> io::Result<()> {
        writeln!(writer, "{}: {}", label, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::AbsentLast;

    fn filled(capacity: usize, values: &[i32]) -> OrderedBoundedList<i32> {
        let mut list = OrderedBoundedList::new(capacity);
        for &value in values {
            list.add(value).unwrap();
        }
        list
    }

    fn is_sorted<T: Ord>(items: &[T]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_three_values_come_back_sorted() {
        let mut list = filled(3, &[5, 1, 3]);

        assert_eq!(list.size(), 3);
        assert_eq!(list.element_at(0), Ok(&1));
        assert_eq!(list.element_at(1), Ok(&3));
        assert_eq!(list.element_at(2), Ok(&5));

        assert_eq!(list.add(4), Err(ListError::Full { capacity: 3 }));
        assert_eq!(list.size(), 3);
        assert_eq!(list.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn test_sorted_after_every_add() {
        let values = [9, -2, 7, 7, 0, 15, -2, 3, 8, 1];
        let mut list = OrderedBoundedList::new(values.len());
        for (added, &value) in values.iter().enumerate() {
            list.add(value).unwrap();
            assert!(is_sorted(list.as_slice()));
            assert_eq!(list.size(), added + 1);
        }

        let mut expected = values.to_vec();
        expected.sort();
        assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = filled(4, &[2, 2, 1, 2]);
        assert_eq!(list.as_slice(), &[1, 2, 2, 2]);
    }

    #[test]
    fn test_equal_elements_keep_insertion_order() {
        // Pairs compare on the first field only
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Keyed(u8, &'static str);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut list = OrderedBoundedList::new(3);
        list.add(Keyed(1, "first")).unwrap();
        list.add(Keyed(0, "zero")).unwrap();
        list.add(Keyed(1, "second")).unwrap();

        let labels: Vec<_> = list.as_slice().iter().map(|k| k.1).collect();
        assert_eq!(labels, vec!["zero", "first", "second"]);
    }

    #[test]
    fn test_failed_add_leaves_list_unchanged() {
        let mut list = filled(2, &[10, 20]);
        let before = list.to_vec();

        for value in [0, 15, 30] {
            assert!(list.add(value).unwrap_err().is_full());
        }
        assert_eq!(list.size(), 2);
        assert_eq!(list.to_vec(), before);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut list: OrderedBoundedList<i32> = OrderedBoundedList::new(0);
        assert!(list.is_full());
        assert_eq!(list.add(1), Err(ListError::Full { capacity: 0 }));
        assert_eq!(list.size(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_negative_position_is_rejected() {
        let list = filled(3, &[1, 2]);
        assert_eq!(
            list.element_at(-1),
            Err(ListError::IndexOutOfRange {
                position: -1,
                count: 2
            })
        );
    }

    #[test]
    fn test_position_equal_to_size_is_rejected() {
        let list = filled(5, &[4, 2]);
        assert_eq!(
            list.element_at(2),
            Err(ListError::IndexOutOfRange {
                position: 2,
                count: 2
            })
        );
        // Spare capacity does not widen the readable range
        assert!(list.element_at(4).is_err());
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_empty_list_has_no_readable_positions() {
        let list: OrderedBoundedList<i32> = OrderedBoundedList::new(1);
        assert!(list.element_at(0).is_err());
    }

    #[test]
    fn test_signed_capacity() {
        assert_eq!(
            OrderedBoundedList::<i32>::with_signed_capacity(-1).unwrap_err(),
            ListError::InvalidCapacity(-1)
        );

        let list = OrderedBoundedList::<i32>::with_signed_capacity(4).unwrap();
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.remaining(), 4);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unallocatable_capacity_is_an_error() {
        assert_eq!(
            OrderedBoundedList::<String>::with_signed_capacity(i64::MAX).unwrap_err(),
            ListError::CapacityTooLarge(i64::MAX as usize)
        );
        assert!(OrderedBoundedList::<i32>::with_signed_capacity(i64::MAX).is_err());
    }

    #[test]
    fn test_capacity_bookkeeping() {
        let list = filled(5, &[3, 1]);
        assert_eq!(list.capacity(), 5);
        assert_eq!(list.remaining(), 3);
        assert!(!list.is_full());
        assert!(!list.is_empty());
    }

    #[test]
    fn test_strings_sort_lexicographically() {
        let mut list = OrderedBoundedList::new(3);
        for word in ["pear", "apple", "fig"] {
            list.add(word.to_string()).unwrap();
        }
        assert_eq!(list.as_slice(), &["apple", "fig", "pear"]);
    }

    #[test]
    fn test_absent_values_sort_last() {
        let mut list = OrderedBoundedList::new(4);
        list.add(AbsentLast::absent()).unwrap();
        list.add(AbsentLast::present(8)).unwrap();
        list.add(AbsentLast::present(-3)).unwrap();

        assert_eq!(list.element_at(0), Ok(&AbsentLast::present(-3)));
        assert_eq!(list.element_at(1), Ok(&AbsentLast::present(8)));
        assert_eq!(list.element_at(2), Ok(&AbsentLast::absent()));
    }

    #[test]
    fn test_describe_format() {
        let list = filled(4, &[7, 3, 9]);
        let mut out = Vec::new();
        list.describe_to(&mut out, "numbers").unwrap();
        list.describe_to(&mut out, 42).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "numbers: 3\n42: 3\n");
    }

    #[test]
    fn test_snapshot_json() {
        let list = filled(3, &[2, 1]);
        let json = serde_json::to_value(list.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "capacity": 3, "count": 2, "elements": [1, 2] })
        );
    }
}
