use regex::Regex;

use crate::error::Result;

/// Case-insensitive regex set that locates labelled requirement sections,
/// experience phrases and education phrases in raw job description text.
///
/// Patterns run on unnormalized text, so they carry their own label tokens
/// and tolerate raw punctuation and casing. Every pattern is an independent
/// pass over the whole document; a line may match several groups.
#[derive(Debug, Clone)]
pub struct SectionPatterns {
    re_required: Vec<Regex>,
    re_preferred: Vec<Regex>,
    re_experience: Vec<Regex>,
    re_education: Vec<Regex>,
}

impl SectionPatterns {
    /// Constructs `SectionPatterns` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `TailorfitError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_required: compile(&[
                r"(?i)required:[^\n]*",
                r"(?i)must have:[^\n]*",
                r"(?i)requirements:[^\n]*",
            ])?,
            re_preferred: compile(&[
                r"(?i)preferred:[^\n]*",
                r"(?i)nice to have:[^\n]*",
                r"(?i)bonus:[^\n]*",
            ])?,
            re_experience: compile(&[
                r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*of\s*experience",
                r"(?i)experience\s*level:\s*(entry|mid|senior|lead|principal)",
                r"(?i)(entry|mid|senior|lead|principal)\s*level",
            ])?,
            re_education: compile(&[
                r"(?i)bachelor['’]s|master['’]s|phd|degree",
                r"(?i)\b(?:bs|ms|phd)\b",
                r"(?i)education:\s*[^\n]*",
            ])?,
        })
    }

    /// Text following the label of every required-skills line, trimmed.
    pub fn required_sections<'t>(&self, text: &'t str) -> Vec<&'t str> {
        labelled_remainders(&self.re_required, text)
    }

    /// Text following the label of every preferred-skills line, trimmed.
    pub fn preferred_sections<'t>(&self, text: &'t str) -> Vec<&'t str> {
        labelled_remainders(&self.re_preferred, text)
    }

    /// Full experience-level matches in scan order.
    pub fn experience_phrases(&self, text: &str) -> Vec<String> {
        phrases_in_scan_order(&self.re_experience, text)
    }

    /// Full education matches in scan order.
    pub fn education_phrases(&self, text: &str) -> Vec<String> {
        phrases_in_scan_order(&self.re_education, text)
    }
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(Into::into))
        .collect()
}

/// For each pattern in turn, every match split on its first colon.
fn labelled_remainders<'t>(patterns: &[Regex], text: &'t str) -> Vec<&'t str> {
    patterns
        .iter()
        .flat_map(|re| re.find_iter(text))
        .filter_map(|m| m.as_str().split_once(':'))
        .map(|(_, rest)| rest.trim())
        .collect()
}

/// Matches of all patterns ordered by position.
///
/// Ties on start offset keep pattern order. Every pattern contributes its
/// own matches, so a span matched by two patterns appears twice.
fn phrases_in_scan_order(patterns: &[Regex], text: &str) -> Vec<String> {
    let mut found: Vec<(usize, usize, usize)> = patterns
        .iter()
        .enumerate()
        .flat_map(|(idx, re)| re.find_iter(text).map(move |m| (m.start(), idx, m.end())))
        .collect();

    found.sort_unstable();

    found
        .into_iter()
        .map(|(start, _, end)| text[start..end].to_string())
        .collect()
}
