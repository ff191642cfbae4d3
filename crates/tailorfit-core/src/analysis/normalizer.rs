//! # Text Normalizer
//!
//! Strips symbols that carry no keyword value and collapses whitespace
//! before text is handed to a tagger.

use regex::Regex;

use crate::error::Result;

/// Removes characters outside word characters, whitespace and `. , ; : ( )`,
/// then collapses whitespace runs to a single space.
#[derive(Debug, Clone)]
pub struct Normalizer {
    re_disallowed: Regex,
    re_whitespace: Regex,
}

impl Normalizer {
    /// Constructs a `Normalizer` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `TailorfitError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_disallowed: Regex::new(r"[^\w\s.,;:()]")?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Normalizes `text`. Total and idempotent; empty input yields an empty string.
    ///
    /// # Examples
    /// ```
    /// use tailorfit_core::analysis::Normalizer;
    ///
    /// let normalizer = Normalizer::new().unwrap();
    /// assert_eq!(normalizer.normalize("  C++ & Rust!\n\n(async)  "), "C Rust (async)");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.re_disallowed.replace_all(text, "");
        self.re_whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}
