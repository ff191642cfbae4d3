use serde::{Deserialize, Serialize};

use super::keywords::KeywordSet;

/// Structured requirements extracted from a job description.
///
/// Built fresh by every analysis call. Phrase lists keep the order in which
/// their matches appear in the source text and may contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Keywords from lines labelled `required:`, `must have:` or `requirements:`.
    pub required_skills: KeywordSet,

    /// Keywords from lines labelled `preferred:`, `nice to have:` or `bonus:`.
    pub preferred_skills: KeywordSet,

    /// Experience phrases such as "5+ years of experience" or "senior level".
    pub experience_level: Vec<String>,

    /// Education phrases such as "Bachelor's", "PhD" or an `education:` line.
    pub education_requirements: Vec<String>,

    /// Keywords of the whole document.
    pub keywords: KeywordSet,
}

impl RequirementProfile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any labelled section, experience or education phrase was found.
    #[must_use]
    pub fn has_requirements(&self) -> bool {
        !self.required_skills.is_empty()
            || !self.preferred_skills.is_empty()
            || !self.experience_level.is_empty()
            || !self.education_requirements.is_empty()
    }
}

impl std::fmt::Display for RequirementProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RequirementProfile(required={}, preferred={}, experience={}, education={}, keywords={})",
            self.required_skills.len(),
            self.preferred_skills.len(),
            self.experience_level.len(),
            self.education_requirements.len(),
            self.keywords.len()
        )
    }
}
