use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TailorfitError;

/// Contact block at the top of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// End date, or `Present`.
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub gpa: String,
}

/// A resume being drafted or tailored.
///
/// Every field defaults to empty so partially filled JSON documents load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

/// Resume sections an assistant prompt can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 5] = [
        ResumeSection::PersonalInfo,
        ResumeSection::Summary,
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal_info",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeSection {
    type Err = TailorfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == key)
            .ok_or_else(|| TailorfitError::UnknownSection(s.to_string()))
    }
}

impl ResumeDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the resume as the plain text that gets analyzed.
    ///
    /// # Examples
    /// ```
    /// use tailorfit_core::resume::ResumeDocument;
    ///
    /// let mut resume = ResumeDocument::new();
    /// resume.personal_info.full_name = "Ada Lovelace".into();
    /// resume.set_skills_from_csv("Rust, SQL");
    ///
    /// let text = resume.to_plain_text();
    /// assert!(text.starts_with("Ada Lovelace\n"));
    /// assert!(text.ends_with("Skills\nRust, SQL"));
    /// ```
    pub fn to_plain_text(&self) -> String {
        let info = &self.personal_info;
        let mut lines = vec![
            info.full_name.clone(),
            format!("{} {} {}", info.email, info.phone, info.location),
            String::new(),
            "Professional Summary".to_string(),
            self.professional_summary.clone(),
            String::new(),
            "Professional Experience".to_string(),
        ];

        for exp in &self.work_experience {
            lines.push(format!("{} - {}", exp.company, exp.position));
            lines.push(format!("{} - {}", exp.start_date, exp.end_date));
            lines.push(exp.description.clone());
        }

        lines.push(String::new());
        lines.push("Education".to_string());
        for edu in &self.education {
            lines.push(format!("{} - {} in {}", edu.institution, edu.degree, edu.field));
            lines.push(edu.graduation_date.clone());
        }

        lines.push(String::new());
        lines.push("Skills".to_string());
        lines.push(self.skills.join(", "));

        lines.join("\n")
    }

    /// Replaces the skill list with the comma-separated entries of `csv`.
    pub fn set_skills_from_csv(&mut self, csv: &str) {
        self.skills = csv
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Whether `skill` is already listed, ignoring case.
    pub fn has_skill(&self, skill: &str) -> bool {
        let skill = skill.trim();
        self.skills.iter().any(|s| s.trim().eq_ignore_ascii_case(skill))
    }

    /// Labelled context block describing one section, for assistant prompts.
    pub fn section_context(&self, section: ResumeSection) -> String {
        match section {
            ResumeSection::PersonalInfo => {
                let info = &self.personal_info;
                format!(
                    "Name: {}\nEmail: {}\nPhone: {}\nLocation: {}\nLinkedIn: {}",
                    info.full_name, info.email, info.phone, info.location, info.linkedin
                )
            }
            ResumeSection::Summary => self.professional_summary.clone(),
            ResumeSection::Experience => self
                .work_experience
                .iter()
                .map(|exp| {
                    format!(
                        "Company: {}\nPosition: {}\nDuration: {} - {}\nDescription: {}\n",
                        exp.company, exp.position, exp.start_date, exp.end_date, exp.description
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ResumeSection::Education => self
                .education
                .iter()
                .map(|edu| {
                    format!(
                        "Institution: {}\nDegree: {} in {}\nGraduation Date: {}\nGPA: {}\n",
                        edu.institution, edu.degree, edu.field, edu.graduation_date, edu.gpa
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ResumeSection::Skills => self.skills.join(", "),
        }
    }
}
