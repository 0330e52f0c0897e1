//! Order-preserving term encoders
//!
//! Converts the textual form of a typed field value into a byte sequence
//! whose unsigned lexicographic order matches the type's natural order,
//! and back (decoding is only needed for diagnostics).

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::TermLensError;
use crate::Result;

const SIGN_BIT: u64 = 1 << 63;

/// Encoder for one field type
///
/// A closed set: the supported types are a design-time decision, and the
/// registry is populated once at startup, so this is an enum rather than
/// trait objects.
///
/// Invariant: for any two values `a`, `b` of the same type,
/// `encode(a)` and `encode(b)` compare (by [`compare_bytes`]) in the same
/// relative order as the type's natural ordering of `a` vs `b`.
///
/// [`compare_bytes`]: crate::encoding::compare_bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermEncoder {
    /// Identity encoding: the UTF-8 bytes of the value.
    ///
    /// UTF-8 byte order matches Unicode code-point order, which is
    /// adequate for lexical ordering. Used for both `keyword` and `text`
    /// fields.
    Keyword,

    /// 64-bit signed integer, 8 bytes big-endian with the sign bit
    /// flipped so that negative values sort before positive ones.
    Long,

    /// 64-bit float in total-order form: all bits flipped for negative
    /// values, only the sign bit flipped for positive ones.
    Double,

    /// Single byte, `0x00` for false and `0x01` for true.
    Boolean,

    /// Date/time, normalized to Unix epoch milliseconds and encoded like
    /// [`TermEncoder::Long`]. Accepts RFC 3339 strings or raw millisecond
    /// timestamps.
    Date,
}

impl TermEncoder {
    /// Get the canonical type name for this encoder
    pub fn type_name(&self) -> &'static str {
        match self {
            TermEncoder::Keyword => "keyword",
            TermEncoder::Long => "long",
            TermEncoder::Double => "double",
            TermEncoder::Boolean => "boolean",
            TermEncoder::Date => "date",
        }
    }

    /// Encode the textual form of a value into its order-preserving bytes
    ///
    /// Fails with [`TermLensError::InvalidValue`] when the text cannot be
    /// parsed as this encoder's type.
    pub fn encode(&self, value: &str) -> Result<Vec<u8>> {
        match self {
            TermEncoder::Keyword => Ok(value.as_bytes().to_vec()),
            TermEncoder::Long => {
                let v: i64 = value
                    .parse()
                    .map_err(|_| self.invalid_value(value))?;
                Ok(encode_i64(v).to_vec())
            }
            TermEncoder::Double => {
                let v: f64 = value
                    .parse()
                    .map_err(|_| self.invalid_value(value))?;
                Ok(encode_f64(v).to_vec())
            }
            TermEncoder::Boolean => match value {
                "false" => Ok(vec![0x00]),
                "true" => Ok(vec![0x01]),
                _ => Err(self.invalid_value(value)),
            },
            TermEncoder::Date => {
                let millis = parse_date_millis(value).ok_or_else(|| self.invalid_value(value))?;
                Ok(encode_i64(millis).to_vec())
            }
        }
    }

    /// Decode encoded bytes back to the textual form of the value
    ///
    /// The inverse of [`TermEncoder::encode`]; used by diagnostic output
    /// only, never on the scan path.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            TermEncoder::Keyword => String::from_utf8(bytes.to_vec())
                .map_err(|_| self.invalid_bytes(bytes)),
            TermEncoder::Long => {
                let v = decode_i64(bytes).ok_or_else(|| self.invalid_bytes(bytes))?;
                Ok(v.to_string())
            }
            TermEncoder::Double => {
                let v = decode_f64(bytes).ok_or_else(|| self.invalid_bytes(bytes))?;
                Ok(v.to_string())
            }
            TermEncoder::Boolean => match bytes {
                [0x00] => Ok("false".to_string()),
                [0x01] => Ok("true".to_string()),
                _ => Err(self.invalid_bytes(bytes)),
            },
            TermEncoder::Date => {
                let millis = decode_i64(bytes).ok_or_else(|| self.invalid_bytes(bytes))?;
                let dt = DateTime::from_timestamp_millis(millis)
                    .ok_or_else(|| self.invalid_bytes(bytes))?;
                Ok(dt.to_rfc3339())
            }
        }
    }

    /// Encoded width in bytes, when fixed
    pub fn encoded_width(&self) -> Option<usize> {
        match self {
            TermEncoder::Keyword => None,
            TermEncoder::Long | TermEncoder::Double | TermEncoder::Date => Some(8),
            TermEncoder::Boolean => Some(1),
        }
    }

    fn invalid_value(&self, value: &str) -> TermLensError {
        TermLensError::InvalidValue {
            field_type: self.type_name().to_string(),
            value: value.to_string(),
        }
    }

    fn invalid_bytes(&self, bytes: &[u8]) -> TermLensError {
        TermLensError::InvalidValue {
            field_type: self.type_name().to_string(),
            value: format!("{:02x?}", bytes),
        }
    }
}

fn encode_i64(v: i64) -> [u8; 8] {
    // Flipping the sign bit maps i64 order onto unsigned byte order
    ((v as u64) ^ SIGN_BIT).to_be_bytes()
}

fn decode_i64(bytes: &[u8]) -> Option<i64> {
    let arr: [u8; 8] = bytes.try_into().ok()?;
    Some((u64::from_be_bytes(arr) ^ SIGN_BIT) as i64)
}

fn encode_f64(v: f64) -> [u8; 8] {
    // IEEE 754 total-order trick: negatives get all bits flipped (reversing
    // their magnitude order), non-negatives get only the sign bit flipped
    let bits = v.to_bits();
    let ordered = if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits ^ SIGN_BIT
    };
    ordered.to_be_bytes()
}

fn decode_f64(bytes: &[u8]) -> Option<f64> {
    let arr: [u8; 8] = bytes.try_into().ok()?;
    let ordered = u64::from_be_bytes(arr);
    let bits = if ordered & SIGN_BIT != 0 {
        ordered ^ SIGN_BIT
    } else {
        !ordered
    };
    Some(f64::from_bits(bits))
}

/// Parse a date value as either raw epoch milliseconds or RFC 3339
fn parse_date_millis(value: &str) -> Option<i64> {
    if let Ok(millis) = value.parse::<i64>() {
        return Some(millis);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.timestamp_millis())
}
