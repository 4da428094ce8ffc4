use crate::config::ExtractorConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::metrics::ExtractorMetrics;
use crate::registry::SymbolRegistry;
use crate::unit::{Language, SourceUnit};
use std::time::Duration;

/// Result of extracting one source unit
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Origin identifier of the extracted unit
    pub origin: String,

    /// Source language of the unit
    pub language: Language,

    /// The unit's normalized symbols in declaration order
    pub registry: SymbolRegistry,

    /// The unit contained an unterminated construct; the result is partial
    pub truncated: bool,

    /// Recoverable per-unit errors (duplicates, truncation)
    pub errors: Vec<ExtractError>,

    /// Time taken to extract this unit
    pub extract_time: Duration,

    /// Number of lines in the unit
    pub line_count: usize,

    /// Unit size in bytes
    pub byte_count: usize,
}

impl Extraction {
    /// Create an empty extraction for a unit
    pub fn for_unit(unit: &SourceUnit) -> Self {
        Self {
            origin: unit.origin.clone(),
            language: unit.language,
            registry: SymbolRegistry::new(),
            truncated: false,
            errors: Vec::new(),
            extract_time: Duration::ZERO,
            line_count: unit.line_count(),
            byte_count: unit.byte_count(),
        }
    }

    /// Number of symbols extracted
    pub fn symbol_count(&self) -> usize {
        self.registry.len()
    }
}

/// Aggregate information about a batch of extracted units
#[derive(Debug, Clone, Default)]
pub struct BatchInfo {
    /// Successful extractions, one per unit
    pub extractions: Vec<Extraction>,

    /// Units that failed extraction (origin, error message)
    pub failed_units: Vec<(String, String)>,

    /// Total symbols across all successful units
    pub total_symbols: usize,

    /// Total extract time across all successful units
    pub total_extract_time: Duration,
}

impl BatchInfo {
    /// Total number of units processed (success + failure)
    pub fn total_units(&self) -> usize {
        self.extractions.len() + self.failed_units.len()
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total_units() == 0 {
            0.0
        } else {
            self.extractions.len() as f64 / self.total_units() as f64
        }
    }

    /// Average extract time per successful unit
    pub fn avg_extract_time(&self) -> Duration {
        if self.extractions.is_empty() {
            Duration::ZERO
        } else {
            self.total_extract_time / self.extractions.len() as u32
        }
    }

    /// Fold one unit's outcome into the batch
    pub fn push(&mut self, origin: &str, result: ExtractResult<Extraction>) {
        match result {
            Ok(extraction) => {
                self.total_symbols += extraction.symbol_count();
                self.total_extract_time += extraction.extract_time;
                self.extractions.push(extraction);
            }
            Err(e) => {
                self.failed_units.push((origin.to_string(), e.to_string()));
            }
        }
    }
}

/// Core trait that all language extractors implement.
///
/// An extractor consumes borrowed `SourceUnit`s and produces per-unit
/// `Extraction` results; it never reads the filesystem or executes the
/// code it parses.
///
/// # Thread safety
/// Implementations must be `Send + Sync`: units are independent and a
/// batch may be fanned out across worker threads.
pub trait SymbolExtractor: Send + Sync {
    /// The language this extractor handles
    fn language(&self) -> Language;

    /// Supported file extensions (e.g. `[".php"]`)
    fn file_extensions(&self) -> &[&str];

    /// Extract all symbols from one unit.
    ///
    /// Recoverable problems (duplicate symbols, truncated input) are
    /// recorded in `Extraction::errors`; only unit-level failures
    /// (grammar errors, oversized units, internal-invariant violations)
    /// return `Err`.
    fn extract_unit(&self, unit: &SourceUnit) -> ExtractResult<Extraction>;

    /// Extract a batch of units sequentially.
    ///
    /// A failed unit is recorded in `BatchInfo::failed_units` and never
    /// blocks extraction of the remaining units. Override for parallel
    /// extraction.
    fn extract_units(&self, units: &[SourceUnit]) -> BatchInfo {
        let mut batch = BatchInfo::default();
        for unit in units {
            batch.push(&unit.origin, self.extract_unit(unit));
        }
        batch
    }

    /// Check whether this extractor can handle the given origin,
    /// by extension
    fn can_extract(&self, origin: &str) -> bool {
        self.file_extensions()
            .iter()
            .any(|ext| origin.ends_with(ext))
    }

    /// Get extractor configuration
    fn config(&self) -> &ExtractorConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ExtractorMetrics;

    /// Reset accumulated metrics
    fn reset_metrics(&mut self);
}
