use crate::symbol::Span;

/// Kind of a raw, language-specific declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    Function,
    Method,
    Class,
    ArrowBinding,
}

/// Raw parameter descriptor as read from the source, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameter {
    pub name: String,
    pub type_text: Option<String>,
    pub nullable: bool,
    pub default_text: Option<String>,
    pub optional: bool,
}

impl RawParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, type_text: impl Into<String>) -> Self {
        self.type_text = Some(type_text.into());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_text = Some(default.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One language-specific parsed declaration.
///
/// This is the bridge between a language crate's signature parser and the
/// normalizer: the parser fills it from the CST, the normalizer consumes it
/// and produces a `Symbol`. Nested declarations (class methods, retained
/// test callbacks) hang off `members`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDeclaration {
    pub kind: RawKind,
    pub name: String,

    /// Raw modifier tokens in source order (`"private"`, `"static"`, …)
    pub modifiers: Vec<String>,

    pub parameters: Vec<RawParameter>,

    /// Return type text as written, `:` prefix already stripped
    pub return_type: Option<String>,

    pub exported: bool,
    pub default_export: bool,

    /// Doc comment attached by the scanner, margin markers stripped
    pub doc: Option<String>,

    pub span: Span,

    /// The declaration's subtree contained an error/missing node
    pub truncated: bool,

    pub members: Vec<RawDeclaration>,
}

impl RawDeclaration {
    pub fn new(kind: RawKind, name: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            exported: false,
            default_export: false,
            doc: None,
            span,
            truncated: false,
            members: Vec::new(),
        }
    }
}

/// Output of one language crate's extraction pass over a unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawUnit {
    pub declarations: Vec<RawDeclaration>,

    /// The unit contained an unterminated literal/comment/brace at EOF
    pub truncated: bool,
}

impl RawUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total declaration count including nested members
    pub fn declaration_count(&self) -> usize {
        fn count(decls: &[RawDeclaration]) -> usize {
            decls.iter().map(|d| 1 + count(&d.members)).sum()
        }
        count(&self.declarations)
    }
}
