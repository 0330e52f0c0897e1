//! termlens — term-listing and diagnostics engine for inverted indexes
//!
//! Provides the core a term-listing endpoint needs:
//! - order-preserving byte encoders for typed field values
//! - unsigned lexicographic comparison and half-open/point range filtering
//!   over the encoded bytes
//! - a regex-driven rewrite DSL (`"<regex>/<template>"`, with `$0`–`$9`
//!   capture placeholders) for the reported term keys
//!
//! Everything is pure and synchronous: requests are fully validated at
//! construction time, and the scan itself never fails and never reorders
//! the caller's term stream.

pub mod encoding;
pub mod error;
pub mod range;
pub mod rewrite;
pub mod terms;

pub use encoding::{compare_bytes, compare_bytes_rev, EncoderRegistry, TermEncoder};
pub use error::{Result, TermLensError};
pub use range::BytesRange;
pub use rewrite::{ReplaceStep, ReplaceTemplate, RewriteExpr};
pub use terms::{TermLister, TermsRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
