use crate::errors::ExtractError;
use crate::symbol::Symbol;
use serde::Serialize;
use std::collections::HashMap;

/// Append-only collection of normalized symbols for one source unit.
///
/// Preserves declaration order and rejects qualified-name collisions.
/// Nesting is arena-style: a symbol refers to its parent by qualified name
/// only, looked up through the registry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolRegistry {
    symbols: Vec<Symbol>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol, failing on a qualified-name collision.
    ///
    /// On collision the first registration wins and the symbol is dropped.
    pub fn register(&mut self, symbol: Symbol) -> Result<(), ExtractError> {
        if self.index.contains_key(&symbol.qualified_name) {
            return Err(ExtractError::DuplicateSymbol(symbol.qualified_name));
        }
        self.index
            .insert(symbol.qualified_name.clone(), self.symbols.len());
        self.symbols.push(symbol);
        Ok(())
    }

    /// All symbols in declaration order
    pub fn all_symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Look up a symbol by its qualified name
    pub fn by_qualified_name(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    /// Parent symbol of the given symbol, if it is nested
    pub fn parent_of(&self, symbol: &Symbol) -> Option<&Symbol> {
        self.by_qualified_name(symbol.parent_qualified_name()?)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}
