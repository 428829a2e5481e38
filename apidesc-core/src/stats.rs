//! Optimization statistics

use serde::{Deserialize, Serialize};

/// Change statistics for one dictionary, or merged over several
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationStats {
    /// Number of descriptions seen
    pub total: usize,
    /// Number of descriptions whose text changed, compared by content; a
    /// same-length rewrite such as a capitalization counts
    pub optimized: usize,
    /// Bytes removed; negative when optimization lengthened the text
    pub chars_saved: i64,
}

impl OptimizationStats {
    /// Account for one description. Any change of content counts as
    /// optimized, whatever the length difference.
    pub fn record(&mut self, original: &str, optimized: &str) {
        if original != optimized {
            self.optimized += 1;
            self.chars_saved += original.len() as i64 - optimized.len() as i64;
        }
    }

    /// Add another file's statistics to this one
    pub fn merge(&mut self, other: &OptimizationStats) {
        self.total += other.total;
        self.optimized += other.optimized;
        self.chars_saved += other.chars_saved;
    }

    /// Share of descriptions changed, in percent
    pub fn optimization_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| 100.0 * self.optimized as f64 / self.total as f64)
    }

    /// Average bytes saved per changed description
    pub fn average_reduction(&self) -> Option<f64> {
        (self.optimized > 0).then(|| self.chars_saved as f64 / self.optimized as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_changes_only() {
        let mut stats = OptimizationStats::default();
        stats.record("Texto igual", "Texto igual");
        stats.record("Retorna uma lista de usuários", "Usuários.");
        assert_eq!(stats.optimized, 1);
        assert_eq!(stats.chars_saved, 30 - 10);
    }

    #[test]
    fn test_same_length_change_counts() {
        let mut stats = OptimizationStats::default();
        stats.record("texto.", "Texto.");
        assert_eq!(stats.optimized, 1);
        assert_eq!(stats.chars_saved, 0);
        assert_eq!(stats.average_reduction(), Some(0.0));
    }

    #[test]
    fn test_negative_savings_are_kept() {
        let mut stats = OptimizationStats::default();
        stats.record("ID", "ID único do pedido.");
        assert_eq!(stats.optimized, 1);
        assert_eq!(stats.chars_saved, 2 - 20);
    }

    #[test]
    fn test_merge_and_ratios() {
        let mut total = OptimizationStats::default();
        assert_eq!(total.optimization_rate(), None);
        assert_eq!(total.average_reduction(), None);

        total.merge(&OptimizationStats {
            total: 3,
            optimized: 1,
            chars_saved: 10,
        });
        total.merge(&OptimizationStats {
            total: 1,
            optimized: 1,
            chars_saved: 4,
        });

        assert_eq!(total.total, 4);
        assert_eq!(total.optimized, 2);
        assert_eq!(total.optimization_rate(), Some(50.0));
        assert_eq!(total.average_reduction(), Some(7.0));
    }

    #[test]
    fn test_serialized_keys() {
        let stats = OptimizationStats {
            total: 2,
            optimized: 1,
            chars_saved: -3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"total":2,"optimized":1,"chars_saved":-3}"#);
    }
}
