//! # symdoc-php
//!
//! PHP symbol extractor for symdoc - extracts declared symbols and their
//! documentation from PHP source text.
//!
//! ## Features
//!
//! - Functions and classes (including `final` classes) with methods
//! - Visibility, `static` and `final` modifiers; unspecified visibility
//!   normalizes to `public`
//! - Typed, nullable (`?Type`) and defaulted parameters; promoted
//!   constructor parameters
//! - Namespace-qualified symbol names and attached doc blocks
//!
//! ## Quick Start
//!
//! ```rust
//! use symdoc_php::PhpExtractor;
//! use symdoc_extractor_api::{Language, SourceUnit, SymbolExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let unit = SourceUnit::new(
//!     Language::Php,
//!     "<?php\nfunction greet(string $name): string { return $name; }",
//!     "greet.php",
//! );
//! let extractor = PhpExtractor::new();
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

// Export the PHP extractor implementation
pub use extractor_impl::PhpExtractor;
