//! # Part-of-Speech Tagging
//!
//! The analyzer consumes tagging as a capability: anything implementing
//! [`Tagger`] can be injected, whether statistical, rule-based or
//! dictionary-based. [`RuleTagger`] is the built-in implementation.

use crate::analysis::lexicon::{COMPANY_SUFFIXES, HONORIFICS, Lexicon};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::types::{Category, Token};

/// Segments text into word-like tokens annotated with a coarse category.
///
/// Implementations must be safe to share between threads for concurrent
/// read-only use.
pub trait Tagger: Send + Sync {
    /// Tag `text`. Must not fail; unknown words get a best-effort category.
    fn tag(&self, text: &str) -> Vec<Token>;

    /// Reports whether the tagger can serve requests (e.g. its model is loaded).
    ///
    /// Checked once when an analyzer is built.
    ///
    /// # Errors
    ///
    /// Returns `TailorfitError::TaggerUnavailable` when the backing model
    /// or resources are missing.
    fn check_ready(&self) -> Result<()> {
        Ok(())
    }
}

/// Lexicon-and-suffix heuristic tagger.
///
/// Intentionally simple: it looks words up in a [`Lexicon`], recognises a
/// few name patterns ("Dr. Smith", "Acme Inc"), and otherwise guesses from
/// English suffixes, defaulting to noun. Capitalization alone is not taken
/// as evidence of a proper noun, so skill names like "Python" or "Docker"
/// stay nouns.
#[derive(Debug, Clone, Default)]
pub struct RuleTagger {
    tokenizer: Tokenizer,
    lexicon: Lexicon,
}

impl RuleTagger {
    /// Creates a tagger backed by the built-in lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tagger backed by a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon,
        }
    }

    /// Guess the category of a single word from the lexicon and its shape.
    pub fn guess_category(&self, word: &str) -> Category {
        if !word.chars().any(char::is_alphanumeric) {
            return Category::Other;
        }

        let lower = word.to_lowercase();
        if let Some(category) = self.lexicon.lookup(&lower) {
            return category;
        }

        // Numbers and versions
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return Category::Other;
        }

        // Common adverb suffix
        if has_suffix(&lower, "ly") {
            return Category::Other;
        }

        // Common adjective suffixes
        if ["ful", "less", "ous", "ive", "able", "ible", "al", "ic"]
            .iter()
            .any(|suffix| has_suffix(&lower, suffix))
        {
            return Category::Adjective;
        }

        // Common verb suffixes
        if ["ing", "ed", "ize", "ise"]
            .iter()
            .any(|suffix| has_suffix(&lower, suffix))
        {
            return Category::Verb;
        }

        // Default to noun (most content words are nouns)
        Category::Noun
    }

    /// Marks names introduced by an honorific or closed by a company suffix.
    fn mark_names(&self, tokens: &mut [Token]) {
        let words: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_wordlike())
            .map(|(i, _)| i)
            .collect();

        for pair in words.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let prev_lower = tokens[prev].text.to_lowercase();
            let next_lower = tokens[next].text.to_lowercase();

            // "Ms Smith" is a name, "MS Degree" is not
            if HONORIFICS.contains(&prev_lower.as_str())
                && is_title_case(&tokens[prev].text)
                && is_title_case(&tokens[next].text)
            {
                tokens[prev].category = Category::ProperNoun;
                tokens[next].category = Category::ProperNoun;
            }
            if COMPANY_SUFFIXES.contains(&next_lower.as_str()) && is_title_case(&tokens[prev].text)
            {
                tokens[prev].category = Category::ProperNoun;
                tokens[next].category = Category::ProperNoun;
            }
        }
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);
        for token in &mut tokens {
            token.category = self.guess_category(&token.text);
        }
        self.mark_names(&mut tokens);
        tokens
    }
}

/// Suffix match that leaves a stem of at least three characters.
fn has_suffix(lower: &str, suffix: &str) -> bool {
    lower.len() >= suffix.len() + 3 && lower.ends_with(suffix)
}

/// `Smith`, not `SMITH` or `smith`.
fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(|c| !c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(text: &str) -> Vec<(String, Category)> {
        RuleTagger::new()
            .tag(text)
            .into_iter()
            .map(|t| (t.text, t.category))
            .collect()
    }

    #[test]
    fn test_category_guessing() {
        let tagger = RuleTagger::new();

        assert_eq!(tagger.guess_category("scalable"), Category::Adjective);
        assert_eq!(tagger.guess_category("deploying"), Category::Verb);
        assert_eq!(tagger.guess_category("required"), Category::Verb);
        assert_eq!(tagger.guess_category("quickly"), Category::Other);
        assert_eq!(tagger.guess_category("information"), Category::Noun);
        assert_eq!(tagger.guess_category("the"), Category::Other);
        assert_eq!(tagger.guess_category("2024"), Category::Other);
        assert_eq!(tagger.guess_category(","), Category::Other);
    }

    #[test]
    fn test_short_words_skip_suffix_rules() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.guess_category("red"), Category::Noun);
        assert_eq!(tagger.guess_category("ally"), Category::Noun);
    }

    #[test]
    fn test_capitalized_skills_stay_nouns() {
        let tagged = categories("Requirements: Python, SQL");
        assert_eq!(tagged[0], ("Requirements".into(), Category::Noun));
        assert_eq!(tagged[2], ("Python".into(), Category::Noun));
        assert_eq!(tagged[4], ("SQL".into(), Category::Noun));
    }

    #[test]
    fn test_names_are_proper_nouns() {
        let tagged = categories("Reported to Dr. Smith at Acme Inc in March");
        let category_of = |word: &str| {
            tagged
                .iter()
                .find(|(text, _)| text == word)
                .map(|(_, c)| *c)
                .unwrap()
        };
        assert_eq!(category_of("Smith"), Category::ProperNoun);
        assert_eq!(category_of("Acme"), Category::ProperNoun);
        assert_eq!(category_of("Inc"), Category::ProperNoun);
        assert_eq!(category_of("March"), Category::ProperNoun);
        assert_eq!(category_of("Reported"), Category::Verb);
    }

    #[test]
    fn test_degree_abbreviation_is_not_an_honorific() {
        let tagged = categories("MS Degree, Python");
        assert_eq!(tagged[0], ("MS".into(), Category::Noun));
        assert_eq!(tagged[1], ("Degree".into(), Category::Noun));

        let tagged = categories("Ms. Smith");
        assert_eq!(tagged[0], ("Ms".into(), Category::ProperNoun));
        assert_eq!(tagged[2], ("Smith".into(), Category::ProperNoun));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_json(r#"{ "proper_nouns": ["Globex"] }"#).unwrap();
        let tagger = RuleTagger::with_lexicon(lexicon);
        assert_eq!(tagger.guess_category("Globex"), Category::ProperNoun);
    }

    #[test]
    fn test_rule_tagger_is_ready() {
        assert!(RuleTagger::new().check_ready().is_ok());
    }

    #[test]
    fn test_tagger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleTagger>();
    }
}
