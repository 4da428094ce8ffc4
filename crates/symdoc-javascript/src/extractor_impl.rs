//! Implementation of the SymbolExtractor trait for JavaScript

use std::sync::Mutex;
use std::time::{Duration, Instant};

use symdoc_extractor_api::normalizer;
use symdoc_extractor_api::{
    ExtractError, ExtractResult, Extraction, ExtractorConfig, ExtractorMetrics, Language,
    SourceUnit, SymbolExtractor,
};

use crate::extractor;

/// JavaScript language extractor implementing the SymbolExtractor trait
pub struct JavaScriptExtractor {
    config: ExtractorConfig,
    metrics: Mutex<ExtractorMetrics>,
}

impl JavaScriptExtractor {
    /// Create a new JavaScript extractor with default configuration
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig::default(),
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    /// Create a new JavaScript extractor with custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    fn update_metrics(&self, success: bool, truncated: bool, duration: Duration, symbols: usize) {
        let mut metrics = self.metrics.lock().unwrap();
        metrics.units_attempted += 1;
        if success {
            metrics.units_succeeded += 1;
        } else {
            metrics.units_failed += 1;
        }
        if truncated {
            metrics.units_truncated += 1;
        }
        metrics.total_extract_time += duration;
        metrics.total_symbols += symbols;
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolExtractor for JavaScriptExtractor {
    fn language(&self) -> Language {
        Language::Javascript
    }

    fn file_extensions(&self) -> &[&str] {
        &[".js", ".jsx", ".mjs", ".cjs"]
    }

    fn extract_unit(&self, unit: &SourceUnit) -> ExtractResult<Extraction> {
        let start = Instant::now();

        if unit.language != Language::Javascript {
            return Err(ExtractError::LanguageMismatch {
                origin: unit.origin.clone(),
                expected: Language::Javascript,
                actual: unit.language,
            });
        }

        if unit.byte_count() > self.config.max_unit_size {
            return Err(ExtractError::UnitTooLarge(
                unit.origin.clone(),
                unit.byte_count(),
            ));
        }

        let result = extractor::extract(unit, &self.config)
            .and_then(|raw_unit| normalizer::build_extraction(&raw_unit, unit, &self.config));

        let duration = start.elapsed();
        match result {
            Ok(mut extraction) => {
                extraction.extract_time = duration;
                self.update_metrics(true, extraction.truncated, duration, extraction.symbol_count());
                Ok(extraction)
            }
            Err(e) => {
                self.update_metrics(false, false, duration, 0);
                Err(e)
            }
        }
    }

    fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn metrics(&self) -> ExtractorMetrics {
        self.metrics.lock().unwrap().clone()
    }

    fn reset_metrics(&mut self) {
        *self.metrics.lock().unwrap() = ExtractorMetrics::default();
    }
}
