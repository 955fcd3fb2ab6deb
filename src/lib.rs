//! Fixed-capacity list that keeps its elements sorted.
//!
//! ```
//! use ordered_list::{ListError, OrderedBoundedList};
//!
//! let mut list = OrderedBoundedList::new(3);
//! for value in [5, 1, 3] {
//!     list.add(value)?;
//! }
//! assert_eq!(list.as_slice(), &[1, 3, 5]);
//! assert!(list.add(4).is_err());
//! # Ok::<(), ListError>(())
//! ```

pub mod error;
pub mod ordered_list;
pub mod ordering;

pub use error::ListError;
pub use ordered_list::{ListSnapshot, OrderedBoundedList};
pub use ordering::{compare_absent_last, AbsentLast};
