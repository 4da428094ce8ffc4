use crate::unit::Language;
use thiserror::Error;

/// Errors that can occur during extraction.
///
/// Skip-and-continue is the default recovery: unrecognized declaration
/// candidates never surface here. `TruncatedInput` and `DuplicateSymbol`
/// are recoverable per-unit errors carried inside an `Extraction`;
/// `ConflictingModifiers` indicates a parser bug and fails the unit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Tree-sitter grammar could not be loaded for the unit's language
    #[error("grammar error for {language} unit {origin}: {message}")]
    Grammar {
        language: Language,
        origin: String,
        message: String,
    },

    /// The parser produced no tree at all
    #[error("failed to parse {0}")]
    Parse(String),

    /// A unit was handed to an extractor for a different language
    #[error("unit {origin} is {actual}, extractor handles {expected}")]
    LanguageMismatch {
        origin: String,
        expected: Language,
        actual: Language,
    },

    /// Unit exceeds the configured maximum size
    #[error("unit {0} exceeds maximum size ({1} bytes)")]
    UnitTooLarge(String, usize),

    /// Unterminated literal/comment/brace at end of input; extraction
    /// continued and produced a partial, truncated-flagged result
    #[error("truncated input in {0}")]
    TruncatedInput(String),

    /// Qualified-name collision within one unit; the first registration wins
    #[error("duplicate symbol `{0}`")]
    DuplicateSymbol(String),

    /// Two visibility modifiers on one declaration. Well-formed parser
    /// output never produces this; it is checked defensively.
    #[error("conflicting modifiers `{first}` and `{second}` on `{name}`")]
    ConflictingModifiers {
        name: String,
        first: String,
        second: String,
    },
}

/// Result type for extractor operations
pub type ExtractResult<T> = Result<T, ExtractError>;
