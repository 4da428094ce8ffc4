//! # symdoc-typescript
//!
//! TypeScript and TSX symbol extractor for symdoc - extracts declared
//! symbols and their documentation from TypeScript source text.
//!
//! ## Features
//!
//! - Function and class declarations with methods
//! - Arrow functions bound to `const`/`let`/`var`; capitalized bindings
//!   are classified as components (React convention)
//! - `export` and `export default` in both inline and trailing
//!   (`export default Name;`) form
//! - Typed, optional (`?`) and defaulted parameters, including
//!   destructured patterns
//! - Attached line and block doc comments
//!
//! The TSX grammar is selected for `.tsx`/`.jsx` origins, the plain
//! TypeScript grammar otherwise.
//!
//! ## Quick Start
//!
//! ```rust
//! use symdoc_typescript::TypeScriptExtractor;
//! use symdoc_extractor_api::{Language, SourceUnit, SymbolExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let unit = SourceUnit::new(
//!     Language::Typescript,
//!     "export function greet(name: string): string { return name; }",
//!     "greet.ts",
//! );
//! let extractor = TypeScriptExtractor::new();
//! let extraction = extractor.extract_unit(&unit)?;
//! assert_eq!(extraction.registry.all_symbols()[0].name, "greet");
//! # Ok(())
//! # }
//! ```

mod extractor;
mod extractor_impl;
mod visitor;

// Re-export extractor-api types for convenience
pub use symdoc_extractor_api::{
    BatchInfo, ExtractError, Extraction, ExtractorConfig, ExtractorMetrics, Language,
    SourceUnit, SymbolExtractor,
};

// Export the TypeScript extractor implementation
pub use extractor_impl::TypeScriptExtractor;
