//! Implementation of the SymbolExtractor trait for TypeScript/TSX

use std::sync::Mutex;
use std::time::{Duration, Instant};

use symdoc_extractor_api::normalizer;
use symdoc_extractor_api::{
    ExtractError, ExtractResult, Extraction, ExtractorConfig, ExtractorMetrics, Language,
    SourceUnit, SymbolExtractor,
};

use crate::extractor;

/// TypeScript/TSX language extractor implementing the SymbolExtractor trait
pub struct TypeScriptExtractor {
    config: ExtractorConfig,
    metrics: Mutex<ExtractorMetrics>,
}

impl TypeScriptExtractor {
    /// Create a new TypeScript extractor with default configuration
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig::default(),
            metrics: Mutex::new(ExtractorMetrics::default()),
        }
    }

    /// Create a new TypeScript extractor with custom configuration
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

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolExtractor for TypeScriptExtractor {
    fn language(&self) -> Language {
        Language::Typescript
    }

    fn file_extensions(&self) -> &[&str] {
        &[".ts", ".tsx"]
    }

    fn extract_unit(&self, unit: &SourceUnit) -> ExtractResult<Extraction> {
        let start = Instant::now();

        if unit.language != Language::Typescript {
            return Err(ExtractError::LanguageMismatch {
                origin: unit.origin.clone(),
                expected: Language::Typescript,
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
        let extractor = TypeScriptExtractor::new();
        assert_eq!(extractor.language(), Language::Typescript);
    }

    #[test]
    fn test_file_extensions() {
        let extractor = TypeScriptExtractor::new();
        assert_eq!(extractor.file_extensions(), &[".ts", ".tsx"]);
    }

    #[test]
    fn test_can_extract() {
        let extractor = TypeScriptExtractor::new();
        assert!(extractor.can_extract("App.tsx"));
        assert!(extractor.can_extract("src/index.ts"));
        assert!(!extractor.can_extract("index.php"));
    }

    #[test]
    fn test_language_mismatch_rejected() {
        let extractor = TypeScriptExtractor::new();
        let unit = SourceUnit::new(Language::Javascript, "const x = 1;", "x.js");
        let err = extractor.extract_unit(&unit).unwrap_err();
        assert!(matches!(err, ExtractError::LanguageMismatch { .. }));
    }

    #[test]
    fn test_metrics_accumulate() {
        let extractor = TypeScriptExtractor::new();
        let unit = SourceUnit::new(
            Language::Typescript,
            "export function f() {}",
            "f.ts",
        );
        extractor.extract_unit(&unit).unwrap();

        let metrics = extractor.metrics();
        assert_eq!(metrics.units_attempted, 1);
        assert_eq!(metrics.units_succeeded, 1);
        assert_eq!(metrics.total_symbols, 1);
    }
}
