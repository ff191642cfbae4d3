pub mod keywords;
pub mod profile;
pub mod suggestion;
pub mod token;

pub use keywords::KeywordSet;
pub use profile::RequirementProfile;
pub use suggestion::Suggestion;
pub use token::{Category, Token};
