use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected during extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorMetrics {
    /// Total units attempted
    pub units_attempted: usize,

    /// Units successfully extracted
    pub units_succeeded: usize,

    /// Units that failed extraction
    pub units_failed: usize,

    /// Units that produced a truncated partial result
    pub units_truncated: usize,

    /// Total time spent extracting
    #[serde(with = "duration_serde")]
    pub total_extract_time: Duration,

    /// Total symbols extracted
    pub total_symbols: usize,
}

// Helper module for serializing Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ExtractorMetrics {
    fn default() -> Self {
        Self {
            units_attempted: 0,
            units_succeeded: 0,
            units_failed: 0,
            units_truncated: 0,
            total_extract_time: Duration::ZERO,
            total_symbols: 0,
        }
    }
}

impl ExtractorMetrics {
    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.units_attempted == 0 {
            0.0
        } else {
            self.units_succeeded as f64 / self.units_attempted as f64
        }
    }

    /// Average extract time per successful unit
    pub fn avg_extract_time(&self) -> Duration {
        if self.units_succeeded == 0 {
            Duration::ZERO
        } else {
            self.total_extract_time / self.units_succeeded as u32
        }
    }

    /// Average symbols per successful unit
    pub fn avg_symbols_per_unit(&self) -> f64 {
        if self.units_succeeded == 0 {
            0.0
        } else {
            self.total_symbols as f64 / self.units_succeeded as f64
        }
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &ExtractorMetrics) {
        self.units_attempted += other.units_attempted;
        self.units_succeeded += other.units_succeeded;
        self.units_failed += other.units_failed;
        self.units_truncated += other.units_truncated;
        self.total_extract_time += other.total_extract_time;
        self.total_symbols += other.total_symbols;
    }
}
