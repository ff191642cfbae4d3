//! # Job Analyzer
//!
//! Ties normalization, tagging, keyword extraction and section patterns
//! together behind one thread-safe entry point.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::optimizer::render_optimized;
use crate::analysis::patterns::SectionPatterns;
use crate::analysis::suggest::build_suggestions;
use crate::analysis::tagger::{RuleTagger, Tagger};
use crate::error::Result;
use crate::types::{Category, KeywordSet, RequirementProfile, Suggestion};

/// Configuration for the analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Token categories kept as keywords
    pub keyword_categories: Vec<Category>,
    /// Shortest keyword kept, in characters
    pub min_keyword_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keyword_categories: Category::KEYWORD_DEFAULT.to_vec(),
            min_keyword_chars: 1,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new analyzer configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token categories kept as keywords.
    pub fn with_keyword_categories(mut self, categories: &[Category]) -> Self {
        self.keyword_categories = categories.to_vec();
        self
    }

    /// Set the minimum keyword length. Values below one are raised to one.
    pub fn with_min_keyword_chars(mut self, chars: usize) -> Self {
        self.min_keyword_chars = chars.max(1);
        self
    }
}

/// Job description analyzer and resume suggestion engine.
///
/// Holds only immutable state, so one instance can serve many threads.
#[derive(Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    normalizer: Normalizer,
    extractor: KeywordExtractor,
    patterns: SectionPatterns,
    tagger: Arc<dyn Tagger>,
}

impl Analyzer {
    /// Create an analyzer with the given configuration and tagger.
    ///
    /// # Errors
    ///
    /// Returns `TailorfitError::TaggerUnavailable` if the tagger reports it
    /// cannot serve requests.
    pub fn new(config: AnalyzerConfig, tagger: Arc<dyn Tagger>) -> Result<Self> {
        tagger.check_ready()?;

        let normalizer = Normalizer::new()?;
        let extractor = KeywordExtractor::new(
            normalizer.clone(),
            Arc::clone(&tagger),
            config.keyword_categories.clone(),
            config.min_keyword_chars,
        );

        Ok(Self {
            config,
            normalizer,
            extractor,
            patterns: SectionPatterns::new()?,
            tagger,
        })
    }

    /// Create an analyzer with default configuration and the built-in rule tagger.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Result<Self> {
        Self::new(AnalyzerConfig::default(), Arc::new(RuleTagger::new()))
    }

    /// Normalize text the way every analysis step does.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Keywords of `text`.
    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        self.extractor.extract(text)
    }

    /// Extract structured requirements from a job description.
    ///
    /// # Examples
    /// ```
    /// use tailorfit_core::analysis::Analyzer;
    ///
    /// let analyzer = Analyzer::default().unwrap();
    /// let profile = analyzer.analyze_job_description("Requirements: Python, SQL\nPhD preferred");
    ///
    /// assert!(profile.required_skills.contains("python"));
    /// assert!(profile.required_skills.contains("sql"));
    /// assert_eq!(profile.education_requirements, ["PhD", "PhD"]);
    /// ```
    pub fn analyze_job_description(&self, text: &str) -> RequirementProfile {
        let mut profile = RequirementProfile::new();

        for section in self.patterns.required_sections(text) {
            profile
                .required_skills
                .union_with(&self.extractor.extract(section));
        }
        for section in self.patterns.preferred_sections(text) {
            profile
                .preferred_skills
                .union_with(&self.extractor.extract(section));
        }

        profile.experience_level = self.patterns.experience_phrases(text);
        profile.education_requirements = self.patterns.education_phrases(text);
        profile.keywords = self.extractor.extract(text);

        debug!(
            required = profile.required_skills.len(),
            preferred = profile.preferred_skills.len(),
            experience = profile.experience_level.len(),
            education = profile.education_requirements.len(),
            keywords = profile.keywords.len(),
            "analyzed job description"
        );

        profile
    }

    /// Typed suggestions for tailoring `resume_text` to `job_description`.
    pub fn suggest(&self, resume_text: &str, job_description: &str) -> Vec<Suggestion> {
        let profile = self.analyze_job_description(job_description);
        let resume_keywords = self.extractor.extract(resume_text);
        let suggestions = build_suggestions(&resume_keywords, &profile);

        debug!(
            resume_keywords = resume_keywords.len(),
            suggestions = suggestions.len(),
            "built suggestions"
        );

        suggestions
    }

    /// Human-readable suggestions for tailoring `resume_text` to `job_description`.
    pub fn get_optimization_suggestions(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Vec<String> {
        self.suggest(resume_text, job_description)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Rewrite `text` with nouns, proper nouns and verbs capitalized.
    ///
    /// # Examples
    /// ```
    /// use tailorfit_core::analysis::Analyzer;
    ///
    /// let analyzer = Analyzer::default().unwrap();
    /// assert_eq!(analyzer.optimize_text("i manage databases, daily."), "i Manage Databases, daily.");
    /// ```
    pub fn optimize_text(&self, text: &str) -> String {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return normalized;
        }
        render_optimized(&self.tagger.tag(&normalized))
    }

    /// The injected tagger.
    pub fn tagger(&self) -> &Arc<dyn Tagger> {
        &self.tagger
    }

    /// Get the analyzer configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("extractor", &self.extractor)
            .finish_non_exhaustive()
    }
}

/// Convenience function to analyze a job description with default settings.
///
/// # Errors
///
/// Fails only if the default analyzer cannot be built.
pub fn analyze_job_description(text: &str) -> Result<RequirementProfile> {
    let analyzer = Analyzer::default()?;
    Ok(analyzer.analyze_job_description(text))
}

/// Convenience function producing suggestions with default settings.
///
/// # Errors
///
/// Fails only if the default analyzer cannot be built.
pub fn get_optimization_suggestions(resume_text: &str, job_description: &str) -> Result<Vec<String>> {
    let analyzer = Analyzer::default()?;
    Ok(analyzer.get_optimization_suggestions(resume_text, job_description))
}
