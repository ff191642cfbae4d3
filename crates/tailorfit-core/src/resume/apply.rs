//! # Suggestion Application
//!
//! Walks the user through a suggestion, asking a yes/no question per item
//! and updating the resume with what they confirm. The question channel is
//! a plain callback so terminals, tests and scripted front ends can all
//! drive it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::ResumeDocument;
use crate::types::Suggestion;

/// What happened to one item of an applied suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyOutcome {
    /// The confirmed skill was appended to the skill list.
    SkillAdded(String),
    /// The confirmed skill was already listed.
    SkillAlreadyListed(String),
    /// The user does not have the skill.
    SkillDeclined { skill: String, required: bool },
    /// The experience phrase was appended to the professional summary.
    SummaryUpdated(String),
    /// The user does not meet the listed education requirements.
    EducationUnconfirmed(String),
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkillAdded(skill) => write!(f, "Added {skill} to skills."),
            Self::SkillAlreadyListed(skill) => write!(f, "{skill} is already listed."),
            Self::SkillDeclined {
                skill,
                required: true,
            } => write!(
                f,
                "Note: {skill} is listed as required. Consider gaining experience in this area."
            ),
            Self::SkillDeclined {
                skill,
                required: false,
            } => write!(f, "Note: {skill} is listed as preferred but not required."),
            Self::SummaryUpdated(levels) => {
                write!(f, "Highlighted {levels} in the professional summary.")
            }
            Self::EducationUnconfirmed(_) => write!(
                f,
                "Note: You may want to consider how to address this in your application."
            ),
        }
    }
}

impl ResumeDocument {
    /// Applies `suggestion`, asking `confirm` one question per decision.
    ///
    /// Skill gaps ask once per skill; experience and education reminders
    /// ask once for the whole list. Answers of "no" leave the resume
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use tailorfit_core::Suggestion;
    /// use tailorfit_core::resume::{ApplyOutcome, ResumeDocument};
    ///
    /// let mut resume = ResumeDocument::new();
    /// let gap = Suggestion::MissingRequired(vec!["sql".into()]);
    /// let outcomes = resume.apply_suggestion(&gap, &mut |_question: &str| true);
    ///
    /// assert_eq!(outcomes, [ApplyOutcome::SkillAdded("sql".into())]);
    /// assert_eq!(resume.skills, ["sql"]);
    /// ```
    pub fn apply_suggestion(
        &mut self,
        suggestion: &Suggestion,
        confirm: &mut dyn FnMut(&str) -> bool,
    ) -> Vec<ApplyOutcome> {
        let outcomes = match suggestion {
            Suggestion::MissingRequired(skills) => self.offer_skills(skills, true, confirm),
            Suggestion::MissingPreferred(skills) => self.offer_skills(skills, false, confirm),
            Suggestion::ExperienceLevel(_) => {
                let levels = suggestion.joined_items();
                let question =
                    format!("Would you like to highlight your {levels} experience level in your summary?");
                if confirm(&question) && self.highlight_experience(&levels) {
                    vec![ApplyOutcome::SummaryUpdated(levels)]
                } else {
                    Vec::new()
                }
            }
            Suggestion::Education(_) => {
                let requirements = suggestion.joined_items();
                let question = format!("Do you meet these education requirements: {requirements}?");
                if confirm(&question) {
                    Vec::new()
                } else {
                    vec![ApplyOutcome::EducationUnconfirmed(requirements)]
                }
            }
        };

        debug!(outcomes = outcomes.len(), "applied suggestion");
        outcomes
    }

    fn offer_skills(
        &mut self,
        skills: &[String],
        required: bool,
        confirm: &mut dyn FnMut(&str) -> bool,
    ) -> Vec<ApplyOutcome> {
        let mut outcomes = Vec::with_capacity(skills.len());
        for skill in skills {
            if !confirm(&format!("Do you have experience with {skill}?")) {
                outcomes.push(ApplyOutcome::SkillDeclined {
                    skill: skill.clone(),
                    required,
                });
            } else if self.has_skill(skill) {
                outcomes.push(ApplyOutcome::SkillAlreadyListed(skill.clone()));
            } else {
                self.skills.push(skill.clone());
                outcomes.push(ApplyOutcome::SkillAdded(skill.clone()));
            }
        }
        outcomes
    }

    /// Appends the experience phrase unless the summary already mentions it.
    fn highlight_experience(&mut self, levels: &str) -> bool {
        let summary = &mut self.professional_summary;
        if summary.to_lowercase().contains(&levels.to_lowercase()) {
            return false;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(&format!("With {levels} of experience."));
        true
    }
}
