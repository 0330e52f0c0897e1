//! Combined rewrite-expression splitter
//!
//! A rewrite expression packs a regex and a replacement template into one
//! string, `"<regex>/<template>"`, with a literal `/` escaped by doubling
//! (`//`). Splitting never fails: with no unescaped `/` the whole string
//! is the match expression and the template is empty.

/// Scanner phase: everything before the unescaped `/` belongs to the match
/// expression, everything after to the replacement template.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SplitState {
    InMatch,
    InReplacement,
}

/// The two halves of a combined rewrite expression
///
/// `pattern` is handed to the host regex engine, `template` to
/// [`ReplaceTemplate::parse`]. Immutable once parsed.
///
/// [`ReplaceTemplate::parse`]: crate::rewrite::ReplaceTemplate::parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteExpr {
    pub pattern: String,
    pub template: String,
}

impl RewriteExpr {
    /// Split a combined expression into its regex and template halves
    ///
    /// Single forward scan, one character of lookahead, no backtracking.
    pub fn parse(expr: &str) -> RewriteExpr {
        let chars: Vec<char> = expr.chars().collect();
        let mut pattern = String::new();
        let mut template = String::new();
        let mut state = SplitState::InMatch;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();
            match state {
                SplitState::InMatch => {
                    if ch == '/' && next == Some('/') {
                        // Escaped delimiter, one literal slash
                        pattern.push('/');
                        i += 2;
                    } else if ch == '/' {
                        // The delimiter itself, emits nothing
                        state = SplitState::InReplacement;
                        i += 1;
                    } else {
                        pattern.push(ch);
                        i += 1;
                    }
                }
                SplitState::InReplacement => {
                    if ch == '/' && next == Some('/') {
                        template.push('/');
                        i += 2;
                    } else {
                        // A lone slash is verbatim; no further phase change
                        template.push(ch);
                        i += 1;
                    }
                }
            }
        }

        RewriteExpr { pattern, template }
    }
}
