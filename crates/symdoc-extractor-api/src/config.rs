use serde::{Deserialize, Serialize};

/// Configuration for extractor behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Attach doc comments to symbols
    pub include_docs: bool,

    /// Keep parameter/return type text (opaque strings)
    pub extract_types: bool,

    /// Omit private symbols (and their members)
    pub skip_private: bool,

    /// Extract anonymous function literals passed to test-framework call
    /// expressions (`describe`/`it` bodies) as symbols named by the call's
    /// description string. Named function expressions in argument position
    /// are extracted regardless of this flag.
    pub include_test_callbacks: bool,

    /// Maximum unit size in bytes; larger units are rejected
    pub max_unit_size: usize,

    /// Extract batches in parallel
    pub parallel: bool,

    /// Number of parallel workers (None = rayon default)
    pub parallel_workers: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            include_docs: true,
            extract_types: true,
            skip_private: false,
            include_test_callbacks: false,
            max_unit_size: 10 * 1024 * 1024, // 10 MB
            parallel: false,
            parallel_workers: None,
        }
    }
}

impl ExtractorConfig {
    /// Config for fast extraction (skips docs and types)
    pub fn fast() -> Self {
        Self {
            include_docs: false,
            extract_types: false,
            ..Default::default()
        }
    }

    /// Config for comprehensive extraction
    pub fn comprehensive() -> Self {
        Self {
            include_docs: true,
            extract_types: true,
            skip_private: false,
            include_test_callbacks: true,
            ..Default::default()
        }
    }

    /// Enable parallel batch extraction
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the maximum unit size
    pub fn with_max_unit_size(mut self, size: usize) -> Self {
        self.max_unit_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert!(config.include_docs);
        assert!(config.extract_types);
        assert!(!config.include_test_callbacks);
        assert!(!config.parallel);
    }

    #[test]
    fn test_fast_config() {
        let config = ExtractorConfig::fast();
        assert!(!config.include_docs);
        assert!(!config.extract_types);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ExtractorConfig::comprehensive().with_parallel(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: ExtractorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
