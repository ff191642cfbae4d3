//! # Keyword Extractor
//!
//! Normalizes text, tags it, and keeps the lower-cased surface forms of
//! content-bearing tokens.

use std::sync::Arc;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::tagger::Tagger;
use crate::types::{Category, KeywordSet};

/// Extracts a deduplicated keyword set from free text.
#[derive(Clone)]
pub struct KeywordExtractor {
    normalizer: Normalizer,
    tagger: Arc<dyn Tagger>,
    categories: Vec<Category>,
    min_chars: usize,
}

impl KeywordExtractor {
    /// Creates an extractor keeping tokens of the given categories with at
    /// least `min_chars` characters.
    pub fn new(
        normalizer: Normalizer,
        tagger: Arc<dyn Tagger>,
        categories: Vec<Category>,
        min_chars: usize,
    ) -> Self {
        Self {
            normalizer,
            tagger,
            categories,
            min_chars: min_chars.max(1),
        }
    }

    /// Extract keywords from `text`. Empty or whitespace-only input yields an empty set.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return KeywordSet::new();
        }

        self.tagger
            .tag(&normalized)
            .iter()
            .filter(|token| self.categories.contains(&token.category))
            .filter(|token| token.is_wordlike())
            .filter(|token| token.text.chars().count() >= self.min_chars)
            .map(|token| token.text.as_str())
            .collect()
    }

    /// Categories this extractor keeps.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("categories", &self.categories)
            .field("min_chars", &self.min_chars)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::RuleTagger;
    use crate::types::Token;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(
            Normalizer::new().unwrap(),
            Arc::new(RuleTagger::new()),
            Category::KEYWORD_DEFAULT.to_vec(),
            1,
        )
    }

    /// Tags every word with a fixed category.
    struct FixedTagger(Category);

    impl Tagger for FixedTagger {
        fn tag(&self, text: &str) -> Vec<Token> {
            text.split_whitespace()
                .enumerate()
                .map(|(index, word)| Token {
                    text: word.to_string(),
                    category: self.0,
                    start: 0,
                    end: 0,
                    index,
                })
                .collect()
        }
    }

    #[test]
    fn extracts_lowercased_content_words() {
        let keywords = extractor().extract("I know Python and SQL.");
        let words: Vec<_> = keywords.iter().collect();
        assert_eq!(words, ["know", "python", "sql"]);
    }

    #[test]
    fn duplicates_collapse() {
        let keywords = extractor().extract("Rust rust RUST, Rust.");
        assert_eq!(keywords.len(), 1);
        assert!(keywords.contains("rust"));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract(" \n\t").is_empty());
        assert!(extractor().extract("!!! ??? ---").is_empty());
    }

    #[test]
    fn proper_nouns_are_excluded() {
        let keywords = extractor().extract("Worked at Acme Inc since March");
        assert!(keywords.contains("worked"));
        assert!(!keywords.contains("acme"));
        assert!(!keywords.contains("march"));
    }

    #[test]
    fn output_is_subset_of_tagged_surface_forms() {
        let text = "Senior engineers build scalable, reliable services (Rust; Go).";
        let normalized = Normalizer::new().unwrap().normalize(text);
        let surface: KeywordSet = RuleTagger::new()
            .tag(&normalized)
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect();

        let keywords = extractor().extract(text);
        assert!(!keywords.is_empty());
        assert!(keywords.is_subset(&surface));
    }

    #[test]
    fn category_filter_is_configurable() {
        let extractor = KeywordExtractor::new(
            Normalizer::new().unwrap(),
            Arc::new(FixedTagger(Category::ProperNoun)),
            Category::KEYWORD_DEFAULT.to_vec(),
            1,
        );
        assert!(extractor.extract("Alice Bob").is_empty());

        let extractor = KeywordExtractor::new(
            Normalizer::new().unwrap(),
            Arc::new(FixedTagger(Category::ProperNoun)),
            vec![Category::ProperNoun],
            1,
        );
        assert_eq!(extractor.extract("Alice Bob").len(), 2);
    }

    #[test]
    fn short_tokens_are_dropped_below_minimum() {
        let extractor = KeywordExtractor::new(
            Normalizer::new().unwrap(),
            Arc::new(FixedTagger(Category::Noun)),
            Category::KEYWORD_DEFAULT.to_vec(),
            3,
        );
        let keywords = extractor.extract("c go rust");
        assert_eq!(keywords.iter().collect::<Vec<_>>(), ["rust"]);
    }
}
