use crate::unit::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Byte/line region of a declaration in its source unit (lines 1-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Span {
    pub fn new(start_line: usize, end_line: usize, start_byte: usize, end_byte: usize) -> Self {
        Self {
            start_line,
            end_line,
            start_byte,
            end_byte,
        }
    }
}

/// Kind of a normalized symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Method,
    Class,
    Component,
}

/// Normalized modifier vocabulary shared across languages.
///
/// At most one of `Public`/`Private`/`Protected` may be present on a symbol.
/// PHP declarations default to `Public` when unspecified; TypeScript and
/// JavaScript declarations never carry visibility and use
/// `Exported`/`DefaultExport` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Exported,
    DefaultExport,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Exported => "exported",
            Modifier::DefaultExport => "default-export",
        }
    }

    /// Map a raw source token into the normalized vocabulary.
    ///
    /// Tokens outside the vocabulary (`abstract`, `async`, `readonly`, …)
    /// map to `None` and are dropped by the normalizer.
    pub fn from_raw(token: &str) -> Option<Modifier> {
        match token {
            "public" => Some(Modifier::Public),
            "private" => Some(Modifier::Private),
            "protected" => Some(Modifier::Protected),
            "static" => Some(Modifier::Static),
            "final" => Some(Modifier::Final),
            _ => None,
        }
    }

    /// Is this one of the three mutually exclusive visibility modifiers?
    pub fn is_visibility(&self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Private | Modifier::Protected
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of normalized modifiers attached to one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    entries: BTreeSet<Modifier>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a modifier.
    ///
    /// Returns the already-present visibility modifier as an error when a
    /// second, different visibility modifier is inserted.
    pub fn insert(&mut self, modifier: Modifier) -> Result<(), (Modifier, Modifier)> {
        if modifier.is_visibility() {
            if let Some(existing) = self.visibility() {
                if existing != modifier {
                    return Err((existing, modifier));
                }
            }
        }
        self.entries.insert(modifier);
        Ok(())
    }

    /// The visibility modifier, if one is present
    pub fn visibility(&self) -> Option<Modifier> {
        self.entries.iter().copied().find(Modifier::is_visibility)
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.entries.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = ModifierSet::new();
        for m in iter {
            // Last visibility wins when constructed from an iterator;
            // parser output goes through insert() with the conflict check.
            if m.is_visibility() {
                set.entries.retain(|e| !e.is_visibility());
            }
            set.entries.insert(m);
        }
        set
    }
}

/// One normalized parameter.
///
/// Invariant: `has_default == true` implies `optional == true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name (for destructured patterns, the pattern's literal text)
    pub name: String,

    /// Type annotation text, verbatim and opaque (absent when untyped)
    pub type_text: Option<String>,

    /// PHP `?Type` nullable marker
    pub nullable: bool,

    /// Does the parameter carry a default value?
    pub has_default: bool,

    /// Default value literal text, when present
    pub default_text: Option<String>,

    /// Optional parameter (`?`-suffixed in TypeScript, or default-bearing)
    pub optional: bool,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: None,
            nullable: false,
            has_default: false,
            default_text: None,
            optional: false,
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
        self.has_default = true;
        self.optional = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One normalized, language-agnostic declared entity.
///
/// Created once per declaration during normalization and immutable
/// thereafter; lives for the duration of one unit's processing and is
/// persisted or discarded by the external consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Dot-joined path unique within the unit
    /// (e.g. `MyApp\ExampleClass.exampleFunction`)
    pub qualified_name: String,

    /// Bare declaration name
    pub name: String,

    /// Symbol kind
    pub kind: SymbolKind,

    /// Normalized modifier set
    pub modifiers: ModifierSet,

    /// Ordered parameter list
    pub parameters: Vec<ParameterDescriptor>,

    /// Return type text, verbatim and opaque (absent when undeclared)
    pub return_type: Option<String>,

    /// Attached documentation text; empty string when none was found
    pub doc: String,

    /// Source language of the owning unit
    pub language: Language,

    /// Source region of the declaration
    pub span: Span,

    /// The declaration's subtree contained an unterminated construct
    pub truncated: bool,
}

impl Symbol {
    /// Qualified name of the enclosing symbol, if any
    pub fn parent_qualified_name(&self) -> Option<&str> {
        let prefix_len = self.qualified_name.len().checked_sub(self.name.len() + 1)?;
        if self.qualified_name.ends_with(self.name.as_str())
            && self.qualified_name.as_bytes().get(prefix_len) == Some(&b'.')
        {
            Some(&self.qualified_name[..prefix_len])
        } else {
            None
        }
    }

    pub fn has_doc(&self) -> bool {
        !self.doc.is_empty()
    }
}
