//! # Tagger Lexicon
//!
//! Closed word lists consulted by [`RuleTagger`] before it falls back to
//! suffix heuristics. The built-in lists cover English function words and
//! a handful of verbs and adjectives common in job postings; hosts extend
//! them with a JSON lexicon file.
//!
//! [`RuleTagger`]: super::RuleTagger

use std::collections::HashSet;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, TailorfitError};
use crate::types::Category;

/// Determiners, conjunctions, prepositions, pronouns, auxiliaries and particles.
const FUNCTION_WORDS: &[&str] = &[
    // Determiners
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "each", "every", "no", "all", "both", "either", "neither",
    // Conjunctions
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "though", "although",
    "when", "unless", "until", "since", "whether", "than",
    // Prepositions
    "of", "to", "in", "for", "on", "with", "at", "from", "by", "about", "as", "into", "like",
    "through", "after", "over", "between", "out", "against", "during", "without", "before",
    "under", "around", "among", "within", "across", "per", "via", "upon",
    // Pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "ourselves", "themselves", "who", "whom", "whose", "which", "what",
    // Auxiliaries and modals
    "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "have",
    "has", "had", "will", "would", "can", "could", "should", "may", "might", "must", "shall",
    // Particles and common adverbs
    "not", "n't", "also", "very", "too", "just", "more", "most", "well", "plus", "etc",
    "there", "here", "how", "why", "where",
];

const VERBS: &[&str] = &[
    "build", "design", "develop", "lead", "manage", "own", "drive", "write", "know", "use",
    "work", "ship", "deliver", "maintain", "mentor", "create", "collaborate", "implement",
    "improve", "support", "run", "test", "deploy", "join", "help", "make", "grow", "scale",
];

const ADJECTIVES: &[&str] = &[
    "strong", "good", "great", "excellent", "senior", "junior", "new", "large", "small",
    "solid", "deep", "fast", "modern", "remote", "hybrid", "proven", "relevant", "agile",
];

/// Months and weekdays: capitalized names that are always proper nouns.
const PROPER_NOUNS: &[&str] = &[
    "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday",
];

/// Titles that mark the following capitalized word as a name when written
/// in title case (`Ms`, not the degree `MS`).
pub(crate) const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "dr", "prof"];

/// Company suffixes that mark the preceding capitalized word as a name.
pub(crate) const COMPANY_SUFFIXES: &[&str] = &["inc", "corp", "llc", "ltd", "gmbh", "plc"];

/// Word lists used by the rule-based tagger. All entries are lower-case.
#[derive(Debug, Clone)]
pub struct Lexicon {
    function_words: HashSet<String>,
    proper_nouns: HashSet<String>,
    verbs: HashSet<String>,
    adjectives: HashSet<String>,
    nouns: HashSet<String>,
}

/// On-disk lexicon extension format.
///
/// ```json
/// { "proper_nouns": ["acme"], "verbs": ["refactor"], "stopwords": ["ideally"] }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LexiconFile {
    proper_nouns: Vec<String>,
    verbs: Vec<String>,
    adjectives: Vec<String>,
    nouns: Vec<String>,
    stopwords: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in English word lists.
    #[must_use]
    pub fn builtin() -> Self {
        fn set(words: &[&str]) -> HashSet<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            function_words: set(FUNCTION_WORDS),
            proper_nouns: set(PROPER_NOUNS),
            verbs: set(VERBS),
            adjectives: set(ADJECTIVES),
            nouns: HashSet::new(),
        }
    }

    /// Built-in lists extended with the entries of a JSON lexicon document.
    ///
    /// # Errors
    ///
    /// Returns `TailorfitError::LexiconLoad` if the document is not valid
    /// lexicon JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile =
            serde_json::from_str(json).map_err(|e| TailorfitError::LexiconLoad(e.to_string()))?;

        let mut lexicon = Self::builtin();
        extend(&mut lexicon.proper_nouns, file.proper_nouns);
        extend(&mut lexicon.verbs, file.verbs);
        extend(&mut lexicon.adjectives, file.adjectives);
        extend(&mut lexicon.nouns, file.nouns);
        extend(&mut lexicon.function_words, file.stopwords);
        lexicon.report_conflicts();
        Ok(lexicon)
    }

    /// Looks up the category of a lower-cased word, if the lexicon knows it.
    ///
    /// Function words take precedence, then proper nouns, verbs, adjectives and nouns.
    #[must_use]
    pub fn lookup(&self, lower: &str) -> Option<Category> {
        if self.function_words.contains(lower) {
            Some(Category::Other)
        } else if self.proper_nouns.contains(lower) {
            Some(Category::ProperNoun)
        } else if self.verbs.contains(lower) {
            Some(Category::Verb)
        } else if self.adjectives.contains(lower) {
            Some(Category::Adjective)
        } else if self.nouns.contains(lower) {
            Some(Category::Noun)
        } else {
            None
        }
    }

    /// Number of distinct entries across all lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.function_words.len()
            + self.proper_nouns.len()
            + self.verbs.len()
            + self.adjectives.len()
            + self.nouns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn report_conflicts(&self) {
        let lists = [
            ("stopwords", &self.function_words),
            ("proper_nouns", &self.proper_nouns),
            ("verbs", &self.verbs),
            ("adjectives", &self.adjectives),
            ("nouns", &self.nouns),
        ];
        for (i, (name, words)) in lists.iter().enumerate() {
            for (other_name, other) in &lists[i + 1..] {
                for word in words.intersection(other) {
                    warn!(word = %word, first = %name, second = %other_name, "lexicon entry listed twice; first list wins");
                }
            }
        }
    }
}

fn extend(set: &mut HashSet<String>, words: Vec<String>) {
    set.extend(
        words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty()),
    );
}
