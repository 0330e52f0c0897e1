//! Replacement templates
//!
//! A template string mixes literal text with `$0`–`$9` capture-group
//! placeholders; `$$` escapes a literal dollar sign. Parsing is a single
//! forward scan with one character of lookahead and never fails.

use regex::Captures;

/// One render step of a parsed template
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplaceStep {
    /// Verbatim text
    Literal(String),
    /// Capture-group reference; 0 is the whole match, 1..=9 the groups
    Group(usize),
}

/// Parsed replacement template
///
/// An empty source parses to the empty-step passthrough state: no
/// substitution happens and the caller echoes its input unchanged.
/// Immutable once parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaceTemplate {
    steps: Vec<ReplaceStep>,
}

impl ReplaceTemplate {
    /// Parse a template string into its render steps
    pub fn parse(source: &str) -> ReplaceTemplate {
        let chars: Vec<char> = source.chars().collect();
        let mut steps = Vec::new();
        let mut buf = String::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if ch != '$' {
                buf.push(ch);
                i += 1;
                continue;
            }
            match chars.get(i + 1).copied() {
                Some('$') => {
                    // Escaped dollar always closes the current literal segment
                    buf.push('$');
                    flush_literal(&mut steps, &mut buf);
                    i += 2;
                }
                Some(d) if d.is_ascii_digit() => {
                    flush_literal(&mut steps, &mut buf);
                    steps.push(ReplaceStep::Group(d as usize - '0' as usize));
                    i += 2;
                }
                Some(other) => {
                    // Not an escape and not a placeholder: both characters are
                    // literal, starting a segment of their own
                    flush_literal(&mut steps, &mut buf);
                    buf.push('$');
                    buf.push(other);
                    i += 2;
                }
                None => {
                    flush_literal(&mut steps, &mut buf);
                    buf.push('$');
                    i += 1;
                }
            }
        }
        flush_literal(&mut steps, &mut buf);

        ReplaceTemplate { steps }
    }

    /// Check for the empty-step passthrough state
    pub fn is_passthrough(&self) -> bool {
        self.steps.is_empty()
    }

    /// The parsed render steps, in order
    pub fn steps(&self) -> &[ReplaceStep] {
        &self.steps
    }

    /// Render this template against a regex match
    ///
    /// Group references resolve to the capture's text, or the empty string
    /// when the group did not participate in the match. The passthrough
    /// state renders the whole matched text unchanged.
    pub fn render(&self, caps: &Captures<'_>) -> String {
        if self.is_passthrough() {
            return caps.get(0).map(|m| m.as_str()).unwrap_or("").to_string();
        }
        let mut out = String::new();
        for step in &self.steps {
            match step {
                ReplaceStep::Literal(text) => out.push_str(text),
                ReplaceStep::Group(i) => {
                    if let Some(m) = caps.get(*i) {
                        out.push_str(m.as_str());
                    }
                }
            }
        }
        out
    }

    /// Render this template against pre-extracted group texts
    ///
    /// `groups[0]` is the whole match; an absent or out-of-range group
    /// renders as the empty string. The passthrough state echoes
    /// `groups[0]`.
    pub fn render_groups(&self, groups: &[Option<&str>]) -> String {
        if self.is_passthrough() {
            return groups.first().copied().flatten().unwrap_or("").to_string();
        }
        let mut out = String::new();
        for step in &self.steps {
            match step {
                ReplaceStep::Literal(text) => out.push_str(text),
                ReplaceStep::Group(i) => {
                    if let Some(text) = groups.get(*i).copied().flatten() {
                        out.push_str(text);
                    }
                }
            }
        }
        out
    }
}

fn flush_literal(steps: &mut Vec<ReplaceStep>, buf: &mut String) {
    if !buf.is_empty() {
        steps.push(ReplaceStep::Literal(std::mem::take(buf)));
    }
}
