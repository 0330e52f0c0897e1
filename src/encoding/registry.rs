//! Encoder registry
//!
//! Maps declared field-type names to their encoders. Built once at process
//! start, read-only afterwards, and passed by reference to consumers so
//! tests can substitute a custom registry.

use std::collections::HashMap;

use crate::encoding::TermEncoder;
use crate::error::TermLensError;
use crate::Result;

/// Registry of field-type name to encoder
///
/// [`EncoderRegistry::default`] installs the builtin encoders; additional
/// names can be registered during startup. Lookups after that point are
/// lock-free because the map is never mutated again.
#[derive(Clone, Debug)]
pub struct EncoderRegistry {
    encoders: HashMap<String, TermEncoder>,
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        let mut registry = Self {
            encoders: HashMap::new(),
        };
        registry.register("keyword", TermEncoder::Keyword);
        // Analyzed text fields list their terms in raw UTF-8 form as well
        registry.register("text", TermEncoder::Keyword);
        registry.register("long", TermEncoder::Long);
        registry.register("double", TermEncoder::Double);
        registry.register("boolean", TermEncoder::Boolean);
        registry.register("date", TermEncoder::Date);
        registry
    }
}

impl EncoderRegistry {
    /// Create an empty registry with no builtin encoders
    pub fn empty() -> Self {
        Self {
            encoders: HashMap::new(),
        }
    }

    /// Register an encoder under a type name (startup only)
    ///
    /// Later registrations for the same name replace earlier ones.
    pub fn register(&mut self, type_name: impl Into<String>, encoder: TermEncoder) {
        self.encoders.insert(type_name.into(), encoder);
    }

    /// Look up the encoder for a declared field-type name
    ///
    /// Fails with [`TermLensError::UnknownFieldType`] when the name has no
    /// registered encoder.
    pub fn create(&self, type_name: &str) -> Result<TermEncoder> {
        self.encoders
            .get(type_name)
            .copied()
            .ok_or_else(|| TermLensError::UnknownFieldType(type_name.to_string()))
    }

    /// Check whether a type name has a registered encoder
    pub fn contains(&self, type_name: &str) -> bool {
        self.encoders.contains_key(type_name)
    }

    /// Registered type names, for diagnostics
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.encoders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
