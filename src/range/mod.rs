//! Byte-range filtering
//!
//! Parses a user-supplied range expression into a predicate over encoded
//! term bytes. Syntax:
//! - `"<value>"` — point range, exact match on the encoded value
//! - `"<lo>..<hi>"` — half-open range `[lo, hi)`; either side may be empty
//!   for an open end
//! - empty/absent — unrestricted, every term passes

use std::cmp::Ordering;

use crate::encoding::{compare_bytes, TermEncoder};
use crate::error::TermLensError;
use crate::Result;

const RANGE_SEPARATOR: &str = "..";

/// Immutable range predicate over encoded term bytes
///
/// Created once per request from the user's range expression; evaluation
/// is pure and lock-free, so a parsed range is safely shared across
/// concurrent scans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BytesRange {
    /// Every candidate passes
    Unbounded,
    /// Exact byte equality with a single encoded value
    Point(Vec<u8>),
    /// Inclusive lower bound, exclusive upper bound; an absent side is open
    HalfOpen {
        lower: Option<Vec<u8>>,
        upper: Option<Vec<u8>>,
    },
}

impl BytesRange {
    /// Parse a range expression using the field's encoder
    ///
    /// Fails with [`TermLensError::MalformedRange`] when the expression
    /// contains more than one `".."` separator, or propagates the
    /// encoder's error for an unparseable bound value.
    pub fn parse(expr: Option<&str>, encoder: &TermEncoder) -> Result<BytesRange> {
        let expr = match expr {
            Some(e) if !e.is_empty() => e,
            _ => return Ok(BytesRange::Unbounded),
        };

        if !expr.contains(RANGE_SEPARATOR) {
            return Ok(BytesRange::Point(encoder.encode(expr)?));
        }

        let parts: Vec<&str> = expr.split(RANGE_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(TermLensError::MalformedRange(expr.to_string()));
        }

        let encode_bound = |text: &str| -> Result<Option<Vec<u8>>> {
            if text.is_empty() {
                Ok(None)
            } else {
                encoder.encode(text).map(Some)
            }
        };

        Ok(BytesRange::HalfOpen {
            lower: encode_bound(parts[0])?,
            upper: encode_bound(parts[1])?,
        })
    }

    /// Test whether an encoded candidate falls inside this range
    pub fn is_in_range(&self, candidate: &[u8]) -> bool {
        match self {
            BytesRange::Unbounded => true,
            BytesRange::Point(value) => compare_bytes(candidate, value) == Ordering::Equal,
            BytesRange::HalfOpen { lower, upper } => {
                if let Some(lower) = lower {
                    if compare_bytes(candidate, lower) == Ordering::Less {
                        return false;
                    }
                }
                if let Some(upper) = upper {
                    if compare_bytes(candidate, upper) != Ordering::Less {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// Check if every candidate passes this range
    pub fn is_unrestricted(&self) -> bool {
        matches!(
            self,
            BytesRange::Unbounded
                | BytesRange::HalfOpen {
                    lower: None,
                    upper: None,
                }
        )
    }

    /// Check if this range matches exactly one encoded value
    pub fn is_point(&self) -> bool {
        matches!(self, BytesRange::Point(_))
    }
}
