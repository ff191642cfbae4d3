pub mod analyzer;
pub mod extractor;
pub mod lexicon;
pub mod normalizer;
pub mod optimizer;
pub mod patterns;
pub mod suggest;
pub mod tagger;
pub mod tokenizer;

pub use analyzer::{analyze_job_description, get_optimization_suggestions, Analyzer, AnalyzerConfig};
pub use extractor::KeywordExtractor;
pub use lexicon::Lexicon;
pub use normalizer::Normalizer;
pub use optimizer::render_optimized;
pub use patterns::SectionPatterns;
pub use suggest::build_suggestions;
pub use tagger::{RuleTagger, Tagger};
pub use tokenizer::Tokenizer;
