//! Term-rewriting micro-DSL
//!
//! Two small escaping grammars drive term rewriting:
//! - [`RewriteExpr`] splits the combined `"<regex>/<template>"` expression
//! - [`ReplaceTemplate`] expands `$0`–`$9` placeholders against a match
//!
//! Both are single-pass scanners with one character of lookahead; neither
//! can fail to parse.

mod split;
mod template;

pub use split::RewriteExpr;
pub use template::{ReplaceStep, ReplaceTemplate};
