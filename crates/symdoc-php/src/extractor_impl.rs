//! Implementation of the SymbolExtractor trait for PHP

use std::sync::Mutex;
use std::time::{Duration, Instant};

use symdoc_extractor_api::normalizer;
use symdoc_extractor_api::{
    ExtractError, ExtractResult, Extraction, ExtractorConfig, ExtractorMetrics, Language,
    SourceUnit, SymbolExtractor,
};

use crate::extractor;

/// PHP language extractor implementing the SymbolExtractor trait
pub struct PhpExtractor {
    config: ExtractorConfig,
    metrics: Mutex<ExtractorMetrics>,
}

impl PhpExtractor {
    /// Create a new PHP extractor with default configuration
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig::default(),
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    /// Create a new PHP extractor with custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    /// Update metrics after extracting a unit
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

impl Default for PhpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolExtractor for PhpExtractor {
    fn language(&self) -> Language {
        Language::Php
    }

    fn file_extensions(&self) -> &[&str] {
        &[".php", ".php5", ".phtml"]
    }

    fn extract_unit(&self, unit: &SourceUnit) -> ExtractResult<Extraction> {
        let start = Instant::now();

        if unit.language != Language::Php {
            return Err(ExtractError::LanguageMismatch {
                origin: unit.origin.clone(),
                expected: Language::Php,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        let extractor = PhpExtractor::new();
        assert_eq!(extractor.language(), Language::Php);
    }

    #[test]
    fn test_file_extensions() {
        let extractor = PhpExtractor::new();
        assert_eq!(extractor.file_extensions(), &[".php", ".php5", ".phtml"]);
    }

    #[test]
    fn test_can_extract() {
        let extractor = PhpExtractor::new();
        assert!(extractor.can_extract("index.php"));
        assert!(extractor.can_extract("view.phtml"));
        assert!(!extractor.can_extract("app.ts"));
    }

    #[test]
    fn test_language_mismatch_rejected() {
        let extractor = PhpExtractor::new();
        let unit = SourceUnit::new(Language::Typescript, "const x = 1;", "x.ts");
        let err = extractor.extract_unit(&unit).unwrap_err();
        assert!(matches!(err, ExtractError::LanguageMismatch { .. }));
    }

    #[test]
    fn test_unit_too_large_rejected() {
        let config = ExtractorConfig::default().with_max_unit_size(8);
        let extractor = PhpExtractor::with_config(config);
        let unit = SourceUnit::new(Language::Php, "<?php function f() {}", "big.php");
        let err = extractor.extract_unit(&unit).unwrap_err();
        assert!(matches!(err, ExtractError::UnitTooLarge(_, _)));
    }

    #[test]
    fn test_metrics_accumulate() {
        let extractor = PhpExtractor::new();
        let unit = SourceUnit::new(Language::Php, "<?php function f() {}", "f.php");
        extractor.extract_unit(&unit).unwrap();
        extractor.extract_unit(&unit).unwrap();

        let metrics = extractor.metrics();
        assert_eq!(metrics.units_attempted, 2);
        assert_eq!(metrics.units_succeeded, 2);
        assert_eq!(metrics.total_symbols, 2);
    }

    #[test]
    fn test_reset_metrics() {
        let mut extractor = PhpExtractor::new();
        let unit = SourceUnit::new(Language::Php, "<?php function f() {}", "f.php");
        extractor.extract_unit(&unit).unwrap();
        extractor.reset_metrics();
        assert_eq!(extractor.metrics().units_attempted, 0);
    }
}
