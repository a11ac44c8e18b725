//! Matrix summary statistics — coverage, observation totals and the
//! status breakdown across the whole table.
//!
//! A pure reduction over one finished matrix; no state is carried
//! between generations. All ratios are guarded so an empty matrix yields
//! zeros, never NaN.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CompatibilityMatrix;
use crate::status::CanonicalStatus;

/// Count and share of one canonical status across the whole matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    /// Total observations with this status
    pub count: u64,
    /// Share of all observations, 0–100 (0 for an empty matrix)
    pub percent: f64,
}

/// Derived summary statistics for one matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixStatistics {
    /// Number of rows
    pub row_count: usize,
    /// Number of columns
    pub column_count: usize,
    /// Share of (row, column) pairs with at least one observation, 0–100
    pub coverage_percent: f64,
    /// Sum of all cell totals
    pub total_observations: u64,
    /// Per-status totals over the whole matrix; always carries an entry
    /// for every canonical status
    pub status_breakdown: BTreeMap<CanonicalStatus, StatusShare>,
}

impl MatrixStatistics {
    /// Share of observations that are excellent or good, 0–100
    pub fn success_percent(&self) -> f64 {
        if self.total_observations == 0 {
            return 0.0;
        }
        let successful = self.status_breakdown[&CanonicalStatus::Excellent].count
            + self.status_breakdown[&CanonicalStatus::Good].count;
        100.0 * successful as f64 / self.total_observations as f64
    }
}

/// Summarize a finished matrix in one pass over its cells
pub fn summarize(matrix: &CompatibilityMatrix) -> MatrixStatistics {
    let total_cells = matrix.rows.len() * matrix.columns.len();
    let mut filled_cells = 0usize;
    let mut total_observations = 0u64;
    let mut counts: BTreeMap<CanonicalStatus, u64> =
        CanonicalStatus::ALL.iter().map(|s| (*s, 0)).collect();

    for (_, _, cell) in matrix.cells() {
        if !cell.is_empty() {
            filled_cells += 1;
        }
        total_observations += cell.total;
        for (status, count) in &cell.statuses {
            *counts.entry(*status).or_insert(0) += count;
        }
    }

    let coverage_percent = if total_cells == 0 {
        0.0
    } else {
        100.0 * filled_cells as f64 / total_cells as f64
    };

    let status_breakdown = counts
        .into_iter()
        .map(|(status, count)| {
            let percent = if total_observations == 0 {
                0.0
            } else {
                100.0 * count as f64 / total_observations as f64
            };
            (status, StatusShare { count, percent })
        })
        .collect();

    MatrixStatistics {
        row_count: matrix.rows.len(),
        column_count: matrix.columns.len(),
        coverage_percent,
        total_observations,
        status_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{generate, MatrixType};
    use crate::report::load_reports_from_str;

    #[test]
    fn test_empty_matrix_statistics() {
        let (_, stats) = generate(&[], MatrixType::Distribution, None);
        assert_eq!(stats.row_count, 5);
        assert_eq!(stats.column_count, 0);
        assert_eq!(stats.coverage_percent, 0.0);
        assert_eq!(stats.total_observations, 0);
        assert_eq!(stats.success_percent(), 0.0);
        for share in stats.status_breakdown.values() {
            assert_eq!(share.count, 0);
            assert_eq!(share.percent, 0.0);
        }
    }

    #[test]
    fn test_coverage_forty_percent() {
        // One report covering every category fans out to all known
        // distributions, so the distribution matrix is fully covered
        let reports = load_reports_from_str(
            r#"[{
                "cpu": {"vendor": "Intel", "status": "good"},
                "graphics": [{"vendor": "AMD", "status": "partial"}],
                "memory": {"total_bytes": 1},
                "storage": [{"vendor": "Samsung", "status": "working"}],
                "audio": [{"vendor": "Realtek", "status": "full"}],
                "compatibility": {"overall_status": "good"}
            }]"#,
        )
        .unwrap();
        let (matrix, stats) = generate(&reports, MatrixType::Distribution, None);
        assert_eq!(matrix.columns.len(), 5);
        assert_eq!(stats.coverage_percent, 100.0);

        // A sparse kernel matrix: each kernel row only has observations
        // for two of the five observed categories
        let sparse = load_reports_from_str(
            r#"[
                {"system": {"kernel_version": "6.9.1"},
                 "cpu": {"vendor": "Intel", "status": "good"},
                 "graphics": [{"vendor": "NVIDIA", "status": "partial"}]},
                {"system": {"kernel_version": "6.1.0"},
                 "graphics": [{"vendor": "AMD", "status": "partial"}]},
                {"system": {"kernel_version": "6.1.0"},
                 "memory": {"total_bytes": 1}},
                {"system": {"kernel_version": "5.15.0"},
                 "storage": [{"vendor": "Samsung"}]},
                {"system": {"kernel_version": "5.15.0"},
                 "audio": [{"vendor": "Realtek"}]}
            ]"#,
        )
        .unwrap();
        let (matrix, stats) = generate(&sparse, MatrixType::Kernel, None);
        // 3 kernels x 5 categories = 15 cells, 6 filled
        assert_eq!(matrix.rows.len(), 3);
        assert_eq!(matrix.columns.len(), 5);
        assert!((stats.coverage_percent - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let reports = load_reports_from_str(
            r#"[
                {"system": {"kernel_version": "6.9.1"},
                 "cpu": {"vendor": "Intel", "status": "good"},
                 "network": [{"vendor": "Realtek", "status": "nonsense"}]},
                {"system": {"kernel_version": "6.9.1"},
                 "graphics": [{"vendor": "AMD", "status": "full"}]}
            ]"#,
        )
        .unwrap();
        let (_, stats) = generate(&reports, MatrixType::Kernel, None);
        let sum: u64 = stats.status_breakdown.values().map(|s| s.count).sum();
        assert_eq!(sum, stats.total_observations);
        assert_eq!(stats.status_breakdown[&CanonicalStatus::Unknown].count, 1);
        let percent_sum: f64 = stats.status_breakdown.values().map(|s| s.percent).sum();
        assert!((percent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_success_percent() {
        let reports = load_reports_from_str(
            r#"[{
                "system": {"kernel_version": "6.9.1"},
                "cpu": {"vendor": "Intel", "status": "excellent"},
                "graphics": [{"vendor": "AMD", "status": "good"},
                             {"vendor": "NVIDIA", "status": "poor"},
                             {"vendor": "Intel", "status": "partial"}]
            }]"#,
        )
        .unwrap();
        let (_, stats) = generate(&reports, MatrixType::Kernel, None);
        assert_eq!(stats.total_observations, 4);
        assert!((stats.success_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coverage_bounded() {
        let reports = load_reports_from_str(
            r#"[{"cpu": {"vendor": "Intel", "status": "good"}}]"#,
        )
        .unwrap();
        for matrix_type in [
            MatrixType::Distribution,
            MatrixType::Kernel,
            MatrixType::Vendor,
            MatrixType::Category,
        ] {
            let (_, stats) = generate(&reports, matrix_type, None);
            assert!(stats.coverage_percent >= 0.0);
            assert!(stats.coverage_percent <= 100.0);
        }
    }
}
