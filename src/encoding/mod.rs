//! Typed byte-encoding layer
//!
//! This module turns textual field values into order-preserving byte
//! sequences and defines the total order over them:
//! - Encoders for the builtin field types (keyword, long, double, boolean, date)
//! - The registry resolving a declared type name to its encoder
//! - Unsigned lexicographic byte comparison

mod compare;
mod encoder;
mod registry;

pub use compare::{compare_bytes, compare_bytes_rev};
pub use encoder::TermEncoder;
pub use registry::EncoderRegistry;
