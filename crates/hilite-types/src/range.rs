use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Half-open offset range `[start, end)` into a text.
///
/// `start == end` is a legal zero-length marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr")]
pub struct Range {
    start: u64,
    end: u64,
}

impl Range {
    pub const EMPTY: Range = Range { start: 0, end: 0 };

    pub fn new(start: u64, end: u64) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange {
                start: start.into(),
                end: end.into(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn from_len(start: u64, len: u64) -> Result<Self> {
        let end = start.checked_add(len).ok_or(Error::InvalidRange {
            start: start.into(),
            end: i128::from(start) + i128::from(len),
        })?;
        Ok(Self { start, end })
    }

    /// Build a range from signed storage columns (`start`, `len`).
    pub fn from_row(start: i64, len: i64) -> Result<Self> {
        let invalid = || Error::InvalidRange {
            start: start.into(),
            end: i128::from(start) + i128::from(len),
        };
        let start = u64::try_from(start).map_err(|_| invalid())?;
        let len = u64::try_from(len).map_err(|_| invalid())?;
        Self::from_len(start, len)
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[derive(Deserialize)]
struct RangeRepr {
    start: u64,
    end: u64,
}

impl TryFrom<RangeRepr> for Range {
    type Error = Error;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        Range::new(repr.start, repr.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_reversed_bounds() {
        assert!(Range::new(5, 5).is_ok());
        assert_eq!(
            Range::new(6, 5),
            Err(Error::InvalidRange { start: 6, end: 5 })
        );
    }

    #[test]
    fn test_from_row_keeps_length() {
        let range = Range::from_row(10, 4).unwrap();
        assert_eq!(range.start(), 10);
        assert_eq!(range.end(), 14);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_from_row_rejects_negative_values() {
        assert_eq!(
            Range::from_row(-1, 4),
            Err(Error::InvalidRange { start: -1, end: 3 })
        );
        assert_eq!(
            Range::from_row(8, -2),
            Err(Error::InvalidRange { start: 8, end: 6 })
        );
    }

    #[test]
    fn test_from_len_overflow() {
        assert!(Range::from_len(u64::MAX, 1).is_err());
    }

    #[test]
    fn test_empty_marker() {
        let marker = Range::from_len(42, 0).unwrap();
        assert!(marker.is_empty());
        assert_eq!(marker.to_string(), "[42, 42)");
        assert!(Range::EMPTY.is_empty());
    }
}
