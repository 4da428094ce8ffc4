//! symdoc Extractor API
//!
//! Shared trait and types for building symdoc language extractors.
//!
//! An extractor consumes a [`SourceUnit`] (language tag + raw text +
//! origin) and produces an ordered inventory of normalized [`Symbol`]s —
//! functions, methods, classes and components with their modifiers,
//! parameters, return types and attached doc comments — suitable for any
//! downstream documentation renderer. This crate defines:
//!
//! - **SymbolExtractor trait**: the interface all language extractors implement
//! - **Symbol model**: language-agnostic symbols, modifiers and parameters
//! - **RawDeclaration**: the per-language record signature parsers produce
//! - **Normalizer**: the reconciliation layer mapping raw records to symbols
//! - **SymbolRegistry**: per-unit ordered, collision-checked symbol store
//! - **Doc-comment scanner**: pure preceding-comment extraction
//! - **Configuration, metrics and error handling**
//!
//! # Example
//!
//! ```rust,ignore
//! use symdoc_extractor_api::{SourceUnit, SymbolExtractor};
//! use symdoc_php::PhpExtractor;
//!
//! let unit = SourceUnit::with_inferred_language(text, "src/Example.php").unwrap();
//! let extractor = PhpExtractor::new();
//! let extraction = extractor.extract_unit(&unit)?;
//! for symbol in extraction.registry.all_symbols() {
//!     println!("{} [{:?}]", symbol.qualified_name, symbol.kind);
//! }
//! ```

pub mod config;
pub mod doc_comment;
pub mod errors;
pub mod metrics;
pub mod normalizer;
pub mod raw;
pub mod registry;
pub mod symbol;
pub mod traits;
pub mod unit;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use errors::{ExtractError, ExtractResult};
pub use metrics::ExtractorMetrics;
pub use raw::{RawDeclaration, RawKind, RawParameter, RawUnit};
pub use registry::SymbolRegistry;
pub use symbol::{Modifier, ModifierSet, ParameterDescriptor, Span, Symbol, SymbolKind};
pub use traits::{BatchInfo, Extraction, SymbolExtractor};
pub use unit::{Language, SourceUnit};
