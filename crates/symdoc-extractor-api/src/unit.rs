use serde::{Deserialize, Serialize};
use std::fmt;

/// Source language of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Php,
    Typescript,
    Javascript,
}

impl Language {
    /// Language identifier (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Php => "php",
            Language::Typescript => "typescript",
            Language::Javascript => "javascript",
        }
    }

    /// Infer a language from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "php" | "php5" | "phtml" => Some(Language::Php),
            "ts" | "tsx" => Some(Language::Typescript),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::Javascript),
            _ => None,
        }
    }

    /// Infer a language from an origin identifier (path or file name)
    pub fn from_origin(origin: &str) -> Option<Language> {
        let ext = origin.rsplit('.').next()?;
        Language::from_extension(ext)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input file: language tag, raw text and an origin identifier.
///
/// Immutable once constructed; the caller owns it and extractors borrow it
/// for the duration of extraction. The core never reads the filesystem —
/// text is supplied already loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Source language
    pub language: Language,

    /// Raw source text
    pub text: String,

    /// Origin identifier (path or logical name)
    pub origin: String,
}

impl SourceUnit {
    pub fn new(
        language: Language,
        text: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            language,
            text: text.into(),
            origin: origin.into(),
        }
    }

    /// Construct a unit inferring the language from the origin's extension
    pub fn with_inferred_language(
        text: impl Into<String>,
        origin: impl Into<String>,
    ) -> Option<Self> {
        let origin = origin.into();
        let language = Language::from_origin(&origin)?;
        Some(Self {
            language,
            text: text.into(),
            origin,
        })
    }

    /// Number of lines in the unit
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Unit size in bytes
    pub fn byte_count(&self) -> usize {
        self.text.len()
    }
}
