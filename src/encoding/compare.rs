//! Unsigned lexicographic byte comparison
//!
//! The total order used for all encoded-term comparisons: bytes compare as
//! unsigned 8-bit values, and a strict prefix sorts before its extension.

use std::cmp::Ordering;

/// Compare two byte sequences in unsigned lexicographic order.
///
/// The first differing byte decides; if one sequence is a strict prefix of
/// the other, the shorter one sorts first. Equal-length, equal-content
/// sequences are equal. Pure, total, and transitive.
pub fn compare_bytes(x: &[u8], y: &[u8]) -> Ordering {
    for (a, b) in x.iter().zip(y.iter()) {
        match a.cmp(b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    x.len().cmp(&y.len())
}

/// Compare two byte sequences in reversed order.
///
/// `compare_bytes_rev(x, y) == compare_bytes(y, x)`, for descending
/// dictionary iteration.
pub fn compare_bytes_rev(x: &[u8], y: &[u8]) -> Ordering {
    compare_bytes(y, x)
}
