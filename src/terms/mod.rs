//! Term-listing scan driver
//!
//! Wires the encoding, range, and rewrite layers together: a request names
//! a field type and optionally a range expression and a rewrite pattern;
//! the lister resolves everything up front and then drives the caller's
//! term-dictionary iteration.
//!
//! All failures surface at construction time. The scan itself never
//! raises, preserves the caller's iteration order, and buffers nothing
//! beyond its output.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::encoding::{EncoderRegistry, TermEncoder};
use crate::range::BytesRange;
use crate::rewrite::{ReplaceTemplate, RewriteExpr};
use crate::Result;

/// Parameters of a term-listing request
///
/// `range` uses the `"<value>"` / `"<lo>..<hi>"` syntax, `pattern` the
/// combined `"<regex>/<template>"` syntax. Both default to no-ops: an
/// absent range is unrestricted and an absent pattern reports terms
/// verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TermsRequest {
    /// Declared field type of the terms being listed
    pub field_type: String,
    /// Range expression restricting the listed terms
    #[serde(default)]
    pub range: Option<String>,
    /// Combined match/replacement expression rewriting each term
    #[serde(default)]
    pub pattern: Option<String>,
    /// Stop after this many reported terms
    #[serde(default)]
    pub limit: Option<usize>,
}

impl TermsRequest {
    /// Create a request listing all terms of a field type
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            range: None,
            pattern: None,
            limit: None,
        }
    }

    /// Restrict the listing to a range expression
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Rewrite each term through a combined match/replacement expression
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Stop the scan after this many reported terms
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Prepared term-listing scan
///
/// Immutable after construction and safely shared across concurrent scans.
#[derive(Debug)]
pub struct TermLister {
    encoder: TermEncoder,
    range: BytesRange,
    rewrite: Option<(Regex, ReplaceTemplate)>,
    limit: Option<usize>,
}

impl TermLister {
    /// Resolve a request against a registry
    ///
    /// Fails with `UnknownFieldType`, `MalformedRange`, `InvalidValue`, or
    /// `InvalidPattern` — always before any term is inspected, so a scan
    /// can never produce a partial result set.
    pub fn new(registry: &EncoderRegistry, request: &TermsRequest) -> Result<TermLister> {
        let encoder = registry.create(&request.field_type)?;
        let range = BytesRange::parse(request.range.as_deref(), &encoder)?;

        let rewrite = match request.pattern.as_deref() {
            Some(expr) if !expr.is_empty() => {
                let RewriteExpr { pattern, template } = RewriteExpr::parse(expr);
                let regex = Regex::new(&pattern)?;
                Some((regex, ReplaceTemplate::parse(&template)))
            }
            _ => None,
        };

        debug!(
            field_type = %request.field_type,
            restricted = !range.is_unrestricted(),
            rewriting = rewrite.is_some(),
            "prepared term lister"
        );

        Ok(TermLister {
            encoder,
            range,
            rewrite,
            limit: request.limit,
        })
    }

    /// The encoder resolved for the request's field type
    pub fn encoder(&self) -> &TermEncoder {
        &self.encoder
    }

    /// The parsed range predicate
    pub fn range(&self) -> &BytesRange {
        &self.range
    }

    /// Scan a term dictionary and report the filtered, rewritten terms
    ///
    /// For each term in caller order: encode it, test the range, then —
    /// when a pattern was given — match the regex and render the template.
    /// Terms the regex does not match are dropped. Terms that fail to
    /// encode are skipped with a warning so the scan stays total.
    pub fn list<'a, I>(&self, terms: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = Vec::new();
        for term in terms {
            if self.limit.is_some_and(|limit| out.len() >= limit) {
                break;
            }

            let encoded = match self.encoder.encode(term) {
                Ok(bytes) => bytes,
                Err(_) => {
                    warn!(term, field_type = self.encoder.type_name(), "skipping unencodable term");
                    continue;
                }
            };
            if !self.range.is_in_range(&encoded) {
                continue;
            }

            match &self.rewrite {
                None => out.push(term.to_string()),
                Some((regex, template)) => {
                    if let Some(caps) = regex.captures(term) {
                        if template.is_passthrough() {
                            out.push(term.to_string());
                        } else {
                            out.push(template.render(&caps));
                        }
                    }
                }
            }
        }
        out
    }
}
