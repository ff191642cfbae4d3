use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category attached to a token by a [`Tagger`].
///
/// [`Tagger`]: crate::analysis::Tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    /// Function words, numerals, adverbs and anything else.
    Other,
}

impl Category {
    /// Categories kept by the keyword extractor unless configured otherwise.
    ///
    /// Proper nouns are left out: names of people and companies make poor
    /// generic keywords.
    pub const KEYWORD_DEFAULT: [Category; 3] = [Category::Noun, Category::Verb, Category::Adjective];

    /// Categories whose first letter the text optimizer capitalizes.
    pub const EMPHASIZED: [Category; 3] = [Category::Noun, Category::ProperNoun, Category::Verb];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun => write!(f, "NOUN"),
            Self::ProperNoun => write!(f, "PROPN"),
            Self::Verb => write!(f, "VERB"),
            Self::Adjective => write!(f, "ADJ"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// A word-like unit of text with its grammatical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appears in the input.
    pub text: String,
    /// Part-of-speech category.
    pub category: Category,
    /// Start byte offset in the tagged string.
    pub start: usize,
    /// End byte offset in the tagged string.
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

impl Token {
    /// Returns `true` if the surface text contains at least one alphanumeric character.
    #[must_use]
    pub fn is_wordlike(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_uses_tag_names() {
        assert_eq!(Category::Noun.to_string(), "NOUN");
        assert_eq!(Category::ProperNoun.to_string(), "PROPN");
        assert_eq!(Category::Adjective.to_string(), "ADJ");
    }

    #[test]
    fn keyword_defaults_exclude_proper_nouns() {
        assert!(!Category::KEYWORD_DEFAULT.contains(&Category::ProperNoun));
        assert!(Category::EMPHASIZED.contains(&Category::ProperNoun));
    }

    #[test]
    fn punctuation_is_not_wordlike() {
        let token = Token {
            text: "(".into(),
            category: Category::Other,
            start: 0,
            end: 1,
            index: 0,
        };
        assert!(!token.is_wordlike());
    }
}
