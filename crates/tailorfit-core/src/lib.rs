//! # Tailorfit Core
//!
//! The analysis engine behind Tailorfit. Extracts keywords and labelled
//! requirements from job descriptions, diffs them against a resume and
//! produces ordered, human-readable tailoring suggestions.
//!
//! ## Quick Start
//!
//! ```rust
//! use tailorfit_core::analysis::Analyzer;
//!
//! let analyzer = Analyzer::default().unwrap();
//! let suggestions = analyzer.get_optimization_suggestions(
//!     "I know Python.",
//!     "Requirements: Python, SQL\nPreferred: Docker",
//! );
//!
//! assert_eq!(suggestions, [
//!     "Consider adding these required skills: sql",
//!     "Consider adding these preferred skills: docker",
//! ]);
//! ```
pub mod analysis;
pub mod error;
pub mod prompts;
pub mod resume;
pub mod types;

// Re-export primary API
pub use analysis::{
    analyze_job_description, get_optimization_suggestions, Analyzer, AnalyzerConfig,
    KeywordExtractor, Lexicon, Normalizer, RuleTagger, SectionPatterns, Tagger, Tokenizer,
};
pub use error::{Result, TailorfitError};
pub use resume::{ApplyOutcome, ResumeDocument, ResumeSection};
pub use types::{Category, KeywordSet, RequirementProfile, Suggestion, Token};
