//! # symdoc
//!
//! Multi-language symbol and documentation extractor. One facade over the
//! per-language extractor crates: hand it source units tagged PHP,
//! TypeScript/TSX or JavaScript and get back a normalized, ordered
//! inventory of declared symbols with their modifiers, parameters, return
//! types and attached doc comments.
//!
//! Extraction is tolerant by design: malformed declarations are skipped,
//! truncated units produce partial results flagged as such, and one bad
//! unit never blocks the rest of a batch.
//!
//! ## Quick Start
//!
//! ```rust
//! use symdoc::{Symdoc, SourceUnit};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symdoc = Symdoc::new();
//! let unit = SourceUnit::with_inferred_language(
//!     "<?php\nfunction greet(string $name): string { return $name; }",
//!     "greet.php",
//! )
//! .unwrap();
//!
//! let extraction = symdoc.extract_unit(&unit)?;
//! for symbol in extraction.registry.all_symbols() {
//!     println!("{} ({:?})", symbol.qualified_name, symbol.kind);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch extraction
//!
//! [`Symdoc::extract_units`] processes a mixed-language batch, in
//! parallel when [`ExtractorConfig::parallel`] is set. Units are
//! independent; results come back in input order.

use log::info;
use rayon::prelude::*;

use symdoc_javascript::JavaScriptExtractor;
use symdoc_php::PhpExtractor;
use symdoc_typescript::TypeScriptExtractor;

pub use symdoc_extractor_api::{
    BatchInfo, ExtractError, ExtractResult, Extraction, ExtractorConfig, ExtractorMetrics,
    Language, Modifier, ModifierSet, ParameterDescriptor, SourceUnit, Span, Symbol,
    SymbolExtractor, SymbolKind, SymbolRegistry,
};

/// Facade dispatching source units to the per-language extractors.
///
/// Holds one extractor per supported language, all sharing the same
/// configuration. `Send + Sync`; a single instance can serve a whole
/// batch across threads.
pub struct Symdoc {
    config: ExtractorConfig,
    php: PhpExtractor,
    typescript: TypeScriptExtractor,
    javascript: JavaScriptExtractor,
}

impl Symdoc {
    /// Create a facade with default configuration
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create a facade with custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            php: PhpExtractor::with_config(config.clone()),
            typescript: TypeScriptExtractor::with_config(config.clone()),
            javascript: JavaScriptExtractor::with_config(config.clone()),
            config,
        }
    }

    /// The extractor responsible for a language
    pub fn extractor_for(&self, language: Language) -> &dyn SymbolExtractor {
        match language {
            Language::Php => &self.php,
            Language::Typescript => &self.typescript,
            Language::Javascript => &self.javascript,
        }
    }

    /// The extractor responsible for an origin, by extension
    pub fn extractor_for_origin(&self, origin: &str) -> Option<&dyn SymbolExtractor> {
        Language::from_origin(origin).map(|l| self.extractor_for(l))
    }

    /// Extract all symbols from one unit, dispatching on its language tag
    pub fn extract_unit(&self, unit: &SourceUnit) -> ExtractResult<Extraction> {
        self.extractor_for(unit.language).extract_unit(unit)
    }

    /// Extract a mixed-language batch.
    ///
    /// Sequential unless `config.parallel` is set, in which case units are
    /// fanned out over a rayon pool (`config.parallel_workers` threads, or
    /// rayon's default). A failed unit is recorded in
    /// `BatchInfo::failed_units` and never blocks the others; results keep
    /// input order either way.
    pub fn extract_units(&self, units: &[SourceUnit]) -> BatchInfo {
        let results: Vec<ExtractResult<Extraction>> = if self.config.parallel {
            match self.config.parallel_workers {
                Some(workers) => {
                    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                        Ok(pool) => pool.install(|| self.extract_parallel(units)),
                        Err(e) => {
                            // Pool construction is environmental; fall back
                            // to the shared global pool
                            info!("dedicated thread pool unavailable ({}), using default", e);
                            self.extract_parallel(units)
                        }
                    }
                }
                None => self.extract_parallel(units),
            }
        } else {
            units.iter().map(|u| self.extract_unit(u)).collect()
        };

        let mut batch = BatchInfo::default();
        for (unit, result) in units.iter().zip(results) {
            batch.push(&unit.origin, result);
        }
        info!(
            "extracted {}/{} units ({} symbols)",
            batch.extractions.len(),
            batch.total_units(),
            batch.total_symbols
        );
        batch
    }

    /// Aggregate metrics across the three language extractors
    pub fn metrics(&self) -> ExtractorMetrics {
        let mut metrics = self.php.metrics();
        metrics.merge(&self.typescript.metrics());
        metrics.merge(&self.javascript.metrics());
        metrics
    }

    /// Get facade configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn extract_parallel(&self, units: &[SourceUnit]) -> Vec<ExtractResult<Extraction>> {
        units.par_iter().map(|u| self.extract_unit(u)).collect()
    }
}

impl Default for Symdoc {
    fn default() -> Self {
        Self::new()
    }
}
