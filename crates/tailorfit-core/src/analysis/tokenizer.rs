//! # Word Tokenizer
//!
//! Splits prose into word and punctuation tokens for the rule-based tagger.
//! Whitespace separates tokens and is never emitted. Apostrophes, hyphens
//! and dots stay inside a word when both neighbours are alphanumeric
//! (`bachelor's`, `full-stack`, `node.js`); every other symbol becomes a
//! token of its own.

use crate::types::{Category, Token};

/// Characters that may join two alphanumeric runs into one word.
const JOINERS: &[char] = &['\'', '-', '.'];

/// Tokenizer for free-form resume and job description text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into words and punctuation with byte offsets.
    ///
    /// Every token starts out as [`Category::Other`]; assigning categories
    /// is the tagger's job.
    ///
    /// # Examples
    /// ```
    /// use tailorfit_core::analysis::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("Requirements: Python, node.js");
    /// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    /// assert_eq!(texts, ["Requirements", ":", "Python", ",", "node.js"]);
    /// ```
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (pos, &(idx, c)) in chars.iter().enumerate() {
            if is_word_char(c) || (word_start.is_some() && self.joins(&chars, pos)) {
                if word_start.is_none() {
                    word_start = Some(idx);
                }
                continue;
            }

            // Emit the word in progress, if any
            if let Some(start) = word_start.take() {
                self.push(&mut tokens, input, start, idx);
            }

            if !c.is_whitespace() {
                self.push(&mut tokens, input, idx, idx + c.len_utf8());
            }
        }

        // Emit final word
        if let Some(start) = word_start {
            self.push(&mut tokens, input, start, input.len());
        }

        tokens
    }

    /// A joiner at `pos` stays in the word when it sits between two word characters.
    fn joins(&self, chars: &[(usize, char)], pos: usize) -> bool {
        let c = chars[pos].1;
        if !JOINERS.contains(&c) || pos == 0 {
            return false;
        }
        let before = chars[pos - 1].1;
        let after = chars.get(pos + 1).map(|&(_, c)| c);
        before.is_alphanumeric() && after.is_some_and(char::is_alphanumeric)
    }

    fn push(&self, tokens: &mut Vec<Token>, input: &str, start: usize, end: usize) {
        tokens.push(Token {
            text: input[start..end].to_string(),
            category: Category::Other,
            start,
            end,
            index: tokens.len(),
        });
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Tokenizer::new()
            .tokenize(input)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = Tokenizer::new().tokenize("I know Python.");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].text, "Python");
        assert_eq!(tokens[2].start, 7);
        assert_eq!(tokens[2].end, 13);
        assert_eq!(tokens[3].text, ".");
        assert_eq!(tokens[3].index, 3);
    }

    #[test]
    fn test_tokenize_keeps_joined_words() {
        assert_eq!(
            texts("Bachelor's in full-stack node.js work"),
            ["Bachelor's", "in", "full-stack", "node.js", "work"]
        );
    }

    #[test]
    fn test_trailing_joiners_split_off() {
        assert_eq!(texts("end. -dash '"), ["end", ".", "-", "dash", "'"]);
    }

    #[test]
    fn test_symbols_are_single_tokens() {
        assert_eq!(texts("C++ (5+)"), ["C", "+", "+", "(", "5", "+", ")"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_multibyte_offsets() {
        let input = "café résumé";
        let tokens = Tokenizer::new().tokenize(input);
        assert_eq!(tokens.len(), 2);
        assert_eq!(&input[tokens[1].start..tokens[1].end], "résumé");
    }
}
