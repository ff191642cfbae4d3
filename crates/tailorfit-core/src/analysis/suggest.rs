//! # Suggestion Engine
//!
//! Turns a resume keyword set and a job requirement profile into ordered,
//! human-readable suggestions.

use crate::types::{KeywordSet, RequirementProfile, Suggestion};

/// Builds suggestions in fixed order: required-skills gap, preferred-skills
/// gap, experience reminder, education reminder. Each entry is present only
/// when its condition holds.
///
/// Missing skills are listed in lexicographic order; experience and
/// education phrases keep their scan order.
pub fn build_suggestions(
    resume_keywords: &KeywordSet,
    profile: &RequirementProfile,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(4);

    let missing_required = profile.required_skills.missing_from(resume_keywords);
    if !missing_required.is_empty() {
        suggestions.push(Suggestion::MissingRequired(missing_required));
    }

    let missing_preferred = profile.preferred_skills.missing_from(resume_keywords);
    if !missing_preferred.is_empty() {
        suggestions.push(Suggestion::MissingPreferred(missing_preferred));
    }

    if !profile.experience_level.is_empty() {
        suggestions.push(Suggestion::ExperienceLevel(profile.experience_level.clone()));
    }

    if !profile.education_requirements.is_empty() {
        suggestions.push(Suggestion::Education(
            profile.education_requirements.clone(),
        ));
    }

    suggestions
}
