//! # ATS Text Optimizer
//!
//! Rebuilds normalized text from tagged tokens, capitalizing nouns,
//! proper nouns and verbs so that applicant tracking systems pick up the
//! terms that matter.

use crate::types::{Category, Token};

/// Punctuation written flush against the preceding token.
const CLOSING: &[&str] = &[",", ".", ";", ":", ")"];

/// Joins `tokens` with single spaces, capitalizing emphasized categories.
///
/// Only the first letter is upper-cased; the rest of the token is kept so
/// acronyms such as `SQL` survive. No space is written before closing
/// punctuation or after an opening parenthesis.
pub fn render_optimized(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut after_open_paren = false;

    for token in tokens {
        if !out.is_empty() && !after_open_paren && !CLOSING.contains(&token.text.as_str()) {
            out.push(' ');
        }

        if Category::EMPHASIZED.contains(&token.category) {
            out.push_str(&capitalize_first(&token.text));
        } else {
            out.push_str(&token.text);
        }
        after_open_paren = token.text == "(";
    }

    out
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, category: Category) -> Token {
        Token {
            text: text.into(),
            category,
            start: 0,
            end: 0,
            index: 0,
        }
    }

    #[test]
    fn capitalizes_emphasized_categories_only() {
        let tokens = [
            token("i", Category::Other),
            token("built", Category::Verb),
            token("scalable", Category::Adjective),
            token("services", Category::Noun),
        ];
        assert_eq!(render_optimized(&tokens), "i Built scalable Services");
    }

    #[test]
    fn acronyms_are_preserved() {
        let tokens = [token("SQL", Category::Noun), token("eBPF", Category::Noun)];
        assert_eq!(render_optimized(&tokens), "SQL EBPF");
    }

    #[test]
    fn punctuation_attaches() {
        let tokens = [
            token("skills", Category::Noun),
            token(":", Category::Other),
            token("rust", Category::Noun),
            token(",", Category::Other),
            token("(", Category::Other),
            token("go", Category::Noun),
            token(")", Category::Other),
            token(".", Category::Other),
        ];
        assert_eq!(render_optimized(&tokens), "Skills: Rust, (Go).");
    }

    #[test]
    fn empty_tokens_render_empty() {
        assert_eq!(render_optimized(&[]), "");
    }
}
