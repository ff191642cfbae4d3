//! Typed resume data and the workflow that applies suggestions to it.

pub mod apply;
pub mod document;

pub use apply::ApplyOutcome;
pub use document::{Education, PersonalInfo, ResumeDocument, ResumeSection, WorkExperience};
