use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TailorfitError;

const MISSING_REQUIRED_PREFIX: &str = "Consider adding these required skills: ";
const MISSING_PREFERRED_PREFIX: &str = "Consider adding these preferred skills: ";
const EXPERIENCE_PREFIX: &str = "Ensure your experience matches the required level: ";
const EDUCATION_PREFIX: &str = "Verify you meet the education requirements: ";

/// An actionable suggestion for tailoring a resume to a job description.
///
/// `Display` renders the human-readable sentence shown to the user; every
/// variant lists its items comma-joined after a fixed lead-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// Required skills that the resume does not mention.
    MissingRequired(Vec<String>),
    /// Preferred skills that the resume does not mention.
    MissingPreferred(Vec<String>),
    /// Experience phrases the user should confirm they match.
    ExperienceLevel(Vec<String>),
    /// Education phrases the user should confirm they meet.
    Education(Vec<String>),
}

impl Suggestion {
    /// The items listed by this suggestion.
    #[must_use]
    pub fn items(&self) -> &[String] {
        match self {
            Self::MissingRequired(items)
            | Self::MissingPreferred(items)
            | Self::ExperienceLevel(items)
            | Self::Education(items) => items,
        }
    }

    /// Items joined the way they appear in the rendered sentence.
    #[must_use]
    pub fn joined_items(&self) -> String {
        self.items().join(", ")
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::MissingRequired(_) => MISSING_REQUIRED_PREFIX,
            Self::MissingPreferred(_) => MISSING_PREFERRED_PREFIX,
            Self::ExperienceLevel(_) => EXPERIENCE_PREFIX,
            Self::Education(_) => EDUCATION_PREFIX,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.joined_items())
    }
}

/// Parses a rendered suggestion back into its typed form.
///
/// Skill lists are split on commas. Experience and education phrases may
/// themselves contain commas (an `education:` line often does), so their
/// remainder is kept as a single item.
impl FromStr for Suggestion {
    type Err = TailorfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split_skills = |rest: &str| -> Vec<String> {
            rest.split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(str::to_string)
                .collect()
        };

        if let Some(rest) = s.strip_prefix(MISSING_REQUIRED_PREFIX.trim_end()) {
            Ok(Self::MissingRequired(split_skills(rest)))
        } else if let Some(rest) = s.strip_prefix(MISSING_PREFERRED_PREFIX.trim_end()) {
            Ok(Self::MissingPreferred(split_skills(rest)))
        } else if let Some(rest) = s.strip_prefix(EXPERIENCE_PREFIX.trim_end()) {
            Ok(Self::ExperienceLevel(vec![rest.trim().to_string()]))
        } else if let Some(rest) = s.strip_prefix(EDUCATION_PREFIX.trim_end()) {
            Ok(Self::Education(vec![rest.trim().to_string()]))
        } else {
            Err(TailorfitError::UnrecognizedSuggestion(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_lead_ins() {
        let s = Suggestion::MissingRequired(vec!["docker".into(), "sql".into()]);
        assert_eq!(s.to_string(), "Consider adding these required skills: docker, sql");

        let s = Suggestion::ExperienceLevel(vec!["5+ years of experience".into()]);
        assert_eq!(
            s.to_string(),
            "Ensure your experience matches the required level: 5+ years of experience"
        );

        let s = Suggestion::Education(vec!["Bachelor's".into(), "degree".into()]);
        assert_eq!(
            s.to_string(),
            "Verify you meet the education requirements: Bachelor's, degree"
        );
    }

    #[test]
    fn parses_skill_lists() {
        let parsed: Suggestion = "Consider adding these preferred skills: aws, docker"
            .parse()
            .unwrap();
        assert_eq!(
            parsed,
            Suggestion::MissingPreferred(vec!["aws".into(), "docker".into()])
        );
    }

    #[test]
    fn parsed_phrases_keep_commas_and_colons() {
        let rendered = "Verify you meet the education requirements: education: BS, MS in CS";
        let parsed: Suggestion = rendered.parse().unwrap();
        assert_eq!(parsed.items(), ["education: BS, MS in CS"]);
        assert_eq!(parsed.to_string(), rendered);
    }

    #[test]
    fn unknown_text_is_rejected() {
        let err = "Add more emojis".parse::<Suggestion>().unwrap_err();
        assert!(matches!(err, TailorfitError::UnrecognizedSuggestion(_)));
    }
}
