//! Ordering for payloads that may be absent.
//!
//! [`OrderedBoundedList`](crate::OrderedBoundedList) only needs `T: Ord`, so an
//! element is never missing. Callers that do store optional values wrap them in
//! [`AbsentLast`] to get them sorted with every absent entry at the end.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Text accepted by [`AbsentLast::from_str`] as the absent value.
pub const ABSENT_MARKER: &str = "-";

/// Compare two possibly absent values.
///
/// An absent left operand is greater than anything, otherwise an absent right
/// operand is less than anything. Two absent operands therefore compare as
/// `Greater`; use [`AbsentLast`] where a lawful `Ord` is needed.
pub fn compare_absent_last<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, _) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Optional value ordered with absent entries after all present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AbsentLast<T>(pub Option<T>);

impl<T> AbsentLast<T> {
    pub fn present(value: T) -> Self {
        Self(Some(value))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

impl<T: Ord> Ord for AbsentLast<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0.is_none() && other.0.is_none() {
            return Ordering::Equal;
        }
        compare_absent_last(self.0.as_ref(), other.0.as_ref())
    }
}

impl<T: Ord> PartialOrd for AbsentLast<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: fmt::Display> fmt::Display for AbsentLast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "{}", ABSENT_MARKER),
        }
    }
}

impl<T: FromStr> FromStr for AbsentLast<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ABSENT_MARKER {
            return Ok(Self(None));
        }
        s.parse().map(|value| Self(Some(value)))
    }
}

impl<T> From<Option<T>> for AbsentLast<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}
