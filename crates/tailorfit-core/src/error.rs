use thiserror::Error;

/// Errors that can occur during Tailorfit core operations.
///
/// Analysis itself is total over its string inputs; these errors surface
/// while wiring up the engine (tagger and pattern construction) or from
/// operations that need caller-supplied fields.
#[derive(Debug, Error)]
pub enum TailorfitError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// No part-of-speech tagger is available to the analyzer.
    #[error("tagger unavailable: {0}")]
    TaggerUnavailable(String),

    /// A tagger lexicon could not be loaded.
    #[error("failed to load lexicon: {0}")]
    LexiconLoad(String),

    /// A suggestion string does not match any known suggestion form.
    #[error("unrecognized suggestion: {0:?}")]
    UnrecognizedSuggestion(String),

    /// A resume section name was not recognized.
    #[error("unknown resume section: {0:?}")]
    UnknownSection(String),

    /// A required caller-supplied field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type alias for Tailorfit operations.
pub type Result<T> = std::result::Result<T, TailorfitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TailorfitError::TaggerUnavailable("no lexicon".into());
        assert_eq!(err.to_string(), "tagger unavailable: no lexicon");

        let err = TailorfitError::LexiconLoad("unexpected token".into());
        assert!(err.to_string().contains("unexpected token"));

        let err = TailorfitError::MissingField("target_role");
        assert_eq!(err.to_string(), "missing required field: target_role");
    }

    #[test]
    fn regex_errors_convert() {
        let err: TailorfitError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, TailorfitError::RegexError(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TailorfitError>();
    }
}
