// Prompt templates for an external chat assistant.
// Placeholders: {target_role}, {context}, {job_block}.
// Role-targeted templates tailor one resume section to a position; general
// templates draft a section from free-form background notes.

use crate::error::{Result, TailorfitError};
use crate::resume::ResumeSection;

pub const PERSONAL_INFO_TEMPLATE: &str = "Please help me optimize my personal information for a {target_role} position. Here's my current information:

{context}{job_block}
Please suggest improvements to make my personal information more professional and relevant for this role. Keep all information factual and honest.";

pub const SUMMARY_TEMPLATE: &str = "Please help me write a professional summary for a {target_role} position. Here's my background:

{context}{job_block}
Please write a concise, ATS-friendly professional summary (2-3 sentences) that highlights my key strengths and experience. Make it specific and impactful, but keep it honest and factual based on the information provided.";

pub const EXPERIENCE_TEMPLATE: &str = "Please help me optimize my work experience for a {target_role} position. Here's my experience:

{context}{job_block}
Please suggest improvements to make my work experience descriptions more impactful and relevant for this role. Use action verbs and include specific metrics where possible. Keep all information factual and honest.";

pub const EDUCATION_TEMPLATE: &str = "Please help me optimize my education section for a {target_role} position. Here's my education:

{context}{job_block}
Please suggest improvements to make my education section more relevant for this role. Highlight relevant coursework and achievements. Keep all information factual and honest.";

pub const SKILLS_TEMPLATE: &str = "Please help me optimize my skills section for a {target_role} position. Here's my current skills:

{context}{job_block}
Please suggest relevant skills that I should include, based on my experience and the job requirements. Include both technical and soft skills. Keep it honest and factual based on the information provided.";

pub const GENERAL_SUMMARY_TEMPLATE: &str = "Please help me write a professional summary for my resume. Here's my background:

{context}{job_block}
Please write a concise, ATS-friendly professional summary (2-3 sentences) that highlights my key strengths and experience. Make it specific and impactful, but keep it honest and factual based on the information provided.";

pub const GENERAL_EXPERIENCE_TEMPLATE: &str = "Please help me write a strong job description for my resume. Here's my background:

{context}{job_block}
Please write a clear, ATS-friendly job description that highlights my achievements and responsibilities. Use action verbs and include specific metrics where possible. Keep it honest and factual based on the information provided.";

pub const GENERAL_SKILLS_TEMPLATE: &str = "Please help me create a skills section for my resume. Here's my background:

{context}{job_block}
Please suggest relevant skills that I should include, based on my experience and the job requirements. Include both technical and soft skills. Keep it honest and factual based on the information provided.";

pub const GENERAL_EDUCATION_TEMPLATE: &str = "Please help me write a strong education section for my resume. Here's my background:

{context}{job_block}
Please write a clear, ATS-friendly education description that highlights my academic achievements and relevant coursework. Keep it honest and factual based on the information provided.";

/// Role-free template for `section`. Personal information has none.
pub fn general_template_for(section: ResumeSection) -> Option<&'static str> {
    match section {
        ResumeSection::PersonalInfo => None,
        ResumeSection::Summary => Some(GENERAL_SUMMARY_TEMPLATE),
        ResumeSection::Experience => Some(GENERAL_EXPERIENCE_TEMPLATE),
        ResumeSection::Education => Some(GENERAL_EDUCATION_TEMPLATE),
        ResumeSection::Skills => Some(GENERAL_SKILLS_TEMPLATE),
    }
}

/// Template used for `section`.
pub fn template_for(section: ResumeSection) -> &'static str {
    match section {
        ResumeSection::PersonalInfo => PERSONAL_INFO_TEMPLATE,
        ResumeSection::Summary => SUMMARY_TEMPLATE,
        ResumeSection::Experience => EXPERIENCE_TEMPLATE,
        ResumeSection::Education => EDUCATION_TEMPLATE,
        ResumeSection::Skills => SKILLS_TEMPLATE,
    }
}

/// Builds the copy-paste assistant prompt for one resume section.
///
/// A non-empty `job_description` is embedded under "This is for the
/// following job:".
///
/// The context may be empty, e.g. a resume whose summary is not written
/// yet.
///
/// # Errors
///
/// Returns `TailorfitError::MissingField` when `target_role` is blank.
///
/// # Examples
/// ```
/// use tailorfit_core::prompts::section_prompt;
/// use tailorfit_core::resume::ResumeSection;
///
/// let prompt = section_prompt(ResumeSection::Skills, "Data Engineer", "Rust, SQL", None).unwrap();
/// assert!(prompt.starts_with("Please help me optimize my skills section for a Data Engineer position."));
/// assert!(prompt.contains("\n\nRust, SQL\n"));
/// ```
pub fn section_prompt(
    section: ResumeSection,
    target_role: &str,
    context: &str,
    job_description: Option<&str>,
) -> Result<String> {
    let target_role = target_role.trim();
    if target_role.is_empty() {
        return Err(TailorfitError::MissingField("target_role"));
    }

    Ok(fill(
        &template_for(section).replace("{target_role}", target_role),
        context,
        job_description,
    ))
}

/// Builds a role-free prompt drafting `section` from background notes.
///
/// # Errors
///
/// Returns `TailorfitError::MissingField("context")` when `context` is
/// blank, and `MissingField("target_role")` for personal information,
/// which only has a role-targeted prompt.
///
/// # Examples
/// ```
/// use tailorfit_core::prompts::general_prompt;
/// use tailorfit_core::resume::ResumeSection;
///
/// let prompt = general_prompt(ResumeSection::Summary, "Ten years of Go.", None).unwrap();
/// assert!(prompt.starts_with("Please help me write a professional summary for my resume."));
/// ```
pub fn general_prompt(
    section: ResumeSection,
    context: &str,
    job_description: Option<&str>,
) -> Result<String> {
    let template =
        general_template_for(section).ok_or(TailorfitError::MissingField("target_role"))?;
    if context.trim().is_empty() {
        return Err(TailorfitError::MissingField("context"));
    }

    Ok(fill(template, context, job_description))
}

/// Substitutes the context and the optional job block. Context goes last so
/// braces inside it are left alone.
fn fill(template: &str, context: &str, job_description: Option<&str>) -> String {
    let job_block = match job_description.map(str::trim) {
        Some(job) if !job.is_empty() => format!("\nThis is for the following job:\n{job}\n"),
        _ => String::new(),
    };

    template
        .replace("{job_block}", &job_block)
        .replace("{context}", context.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_placeholders() {
        for section in ResumeSection::ALL {
            let template = template_for(section);
            assert!(template.contains("{target_role}"), "{section}");
            assert!(template.contains("{context}"), "{section}");
            assert!(template.contains("{job_block}"), "{section}");
        }
    }

    #[test]
    fn job_block_is_embedded() {
        let prompt = section_prompt(
            ResumeSection::Summary,
            "Backend Engineer",
            "Five years of Go.",
            Some("Requirements: Go, Kubernetes"),
        )
        .unwrap();
        assert!(prompt.contains(
            "Five years of Go.\nThis is for the following job:\nRequirements: Go, Kubernetes\n\nPlease write"
        ));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn blank_job_description_is_omitted() {
        let prompt =
            section_prompt(ResumeSection::Experience, "SRE", "Ran on-call.", Some("   ")).unwrap();
        assert!(!prompt.contains("following job"));
        assert!(prompt.contains("Ran on-call.\nPlease suggest"));
    }

    #[test]
    fn blank_role_is_rejected() {
        let err = section_prompt(ResumeSection::Skills, "  ", "Rust", None).unwrap_err();
        assert!(matches!(err, TailorfitError::MissingField("target_role")));
    }

    #[test]
    fn role_prompt_accepts_empty_context() {
        let prompt = section_prompt(ResumeSection::Summary, "Engineer", "\n", None).unwrap();
        assert!(prompt.starts_with(
            "Please help me write a professional summary for a Engineer position."
        ));
        assert!(prompt.contains("Here's my background:\n\n\nPlease write"));
    }

    #[test]
    fn general_prompts_use_their_own_wording() {
        let prompt = general_prompt(
            ResumeSection::Experience,
            "Ran the payments team.",
            Some("Requirements: Go"),
        )
        .unwrap();
        assert!(prompt.starts_with("Please help me write a strong job description for my resume."));
        assert!(prompt.contains(
            "Ran the payments team.\nThis is for the following job:\nRequirements: Go\n\nPlease write"
        ));

        let skills = general_prompt(ResumeSection::Skills, "Rust", None).unwrap();
        assert!(skills.starts_with("Please help me create a skills section for my resume."));

        let education = general_prompt(ResumeSection::Education, "BS in CS", None).unwrap();
        assert!(education.contains("relevant coursework"));
        assert!(!education.contains("following job"));
    }

    #[test]
    fn general_prompt_requires_context() {
        let err = general_prompt(ResumeSection::Summary, " \t", None).unwrap_err();
        assert!(matches!(err, TailorfitError::MissingField("context")));
    }

    #[test]
    fn personal_info_has_no_general_prompt() {
        let err = general_prompt(ResumeSection::PersonalInfo, "Jane Doe", None).unwrap_err();
        assert!(matches!(err, TailorfitError::MissingField("target_role")));
    }

    #[test]
    fn general_templates_have_placeholders() {
        for section in ResumeSection::ALL {
            if let Some(template) = general_template_for(section) {
                assert!(template.contains("{context}"), "{section}");
                assert!(template.contains("{job_block}"), "{section}");
                assert!(!template.contains("{target_role}"), "{section}");
            }
        }
    }

    #[test]
    fn braces_in_context_are_left_alone() {
        let prompt =
            section_prompt(ResumeSection::Skills, "Engineer", "Wrote {job_block} docs", None).unwrap();
        assert!(prompt.contains("Wrote {job_block} docs"));
    }
}
