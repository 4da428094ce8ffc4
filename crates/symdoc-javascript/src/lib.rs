//! # symdoc-javascript
//!
//! JavaScript symbol extractor for symdoc - extracts declared symbols and
//! their documentation from JavaScript source text.
//!
//! ## Features
//!
//! - Function and class declarations with methods
//! - Arrow functions and function expressions bound to `const`/`let`/`var`
//! - `export` and `export default` in both inline and trailing form
//! - Named function expressions inside call arguments
//! - Optional extraction of test-framework callbacks (`describe`/`it`
//!   style), named by their description string and nested by call
//!   structure; off by default
//!
//! ## Quick Start
//!
//! ```rust
//! use symdoc_javascript::JavaScriptExtractor;
//! use symdoc_extractor_api::{Language, SourceUnit, SymbolExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let unit = SourceUnit::new(
//!     Language::Javascript,
//!     "function greet(name) { return name; }",
//!     "greet.js",
//! );
//! let extractor = JavaScriptExtractor::new();
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

// Export the JavaScript extractor implementation
pub use extractor_impl::JavaScriptExtractor;
