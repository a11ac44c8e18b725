//! Compatibility matrix generation — cross-tabulation of hardware
//! compatibility observations along two caller-selected dimensions.
//!
//! The entire engine is a pure function of (report corpus, matrix type,
//! category filter): [`generate`] derives the row/column axes, folds
//! every facet of every report into per-cell histograms, and returns the
//! matrix together with its summary statistics. Nothing is retained
//! between calls and the result is never mutated after construction, so
//! repeated calls over the same corpus are bit-identical and concurrent
//! calls need no coordination.
//!
//! # Examples
//!
//! ```
//! use compatlib::matrix::{self, MatrixType};
//! use compatlib::report::load_reports_from_str;
//!
//! let corpus = load_reports_from_str(r#"[{
//!     "system": {"distribution": "arch", "kernel_version": "6.9.1"},
//!     "cpu": {"vendor": "Intel", "status": "excellent"}
//! }]"#).unwrap();
//!
//! let (matrix, stats) = matrix::generate(&corpus, MatrixType::Distribution, None);
//! assert_eq!(matrix.rows.len(), 5);
//! assert_eq!(matrix.columns, vec!["cpu"]);
//! assert!(stats.total_observations > 0);
//! ```

pub mod dimensions;
pub mod score;
pub mod stats;
pub(crate) mod tabulate;

pub use dimensions::{derive_dimensions, Dimensions, KNOWN_DISTRIBUTIONS};
pub use score::{score_cell, CellScore};
pub use stats::{summarize, MatrixStatistics, StatusShare};

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CompatError;
use crate::facet::HardwareCategory;
use crate::report::HardwareReport;
use crate::status::CanonicalStatus;

/// Which pair of dimensions the matrix cross-tabulates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MatrixType {
    /// Rows: known distributions; columns: observed hardware categories
    Distribution,
    /// Rows: observed kernel versions; columns: observed categories
    Kernel,
    /// Rows: observed vendors; columns: observed categories
    Vendor,
    /// Rows: observed categories; columns: known distributions
    Category,
}

impl MatrixType {
    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixType::Distribution => "distribution",
            MatrixType::Kernel => "kernel",
            MatrixType::Vendor => "vendor",
            MatrixType::Category => "category",
        }
    }

    /// Human-readable matrix title
    pub fn title(&self, category_filter: Option<HardwareCategory>) -> String {
        let base = match self {
            MatrixType::Distribution => "Hardware Compatibility by Distribution",
            MatrixType::Kernel => "Hardware Compatibility by Kernel Version",
            MatrixType::Vendor => "Hardware Compatibility by Vendor",
            MatrixType::Category => "Distribution Support by Hardware Category",
        };
        match category_filter {
            Some(category) => format!("{} ({} only)", base, category),
            None => base.to_string(),
        }
    }
}

impl fmt::Display for MatrixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatrixType {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distribution" | "distro" => Ok(MatrixType::Distribution),
            "kernel" => Ok(MatrixType::Kernel),
            "vendor" => Ok(MatrixType::Vendor),
            "category" => Ok(MatrixType::Category),
            other => Err(CompatError::InvalidParameter(format!(
                "unknown matrix type: {}",
                other
            ))),
        }
    }
}

/// Aggregated observations for one (row, column) intersection.
///
/// Invariant: the status counts sum to `total`. The map holds only
/// nonzero counts; a cell with `total == 0` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Total number of observations in this cell
    pub total: u64,
    /// Observation count per canonical status
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub statuses: BTreeMap<CanonicalStatus, u64>,
}

impl MatrixCell {
    /// Record one observation
    pub(crate) fn record(&mut self, status: CanonicalStatus) {
        self.total += 1;
        *self.statuses.entry(status).or_insert(0) += 1;
    }

    /// Count for one status (0 when absent)
    pub fn count(&self, status: CanonicalStatus) -> u64 {
        self.statuses.get(&status).copied().unwrap_or(0)
    }

    /// Whether the cell received no observations
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// A fully materialized compatibility matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityMatrix {
    /// Dimension pair this matrix cross-tabulates
    #[serde(rename = "type")]
    pub matrix_type: MatrixType,
    /// Row keys, deduplicated, ascending
    pub rows: Vec<String>,
    /// Column keys, deduplicated, ascending
    pub columns: Vec<String>,
    /// Cell data keyed by row then column; every declared (row, column)
    /// pair is present, empty cells included
    pub data: BTreeMap<String, BTreeMap<String, MatrixCell>>,
    /// Human-readable title
    pub title: String,
}

impl CompatibilityMatrix {
    /// Look up one cell
    pub fn cell(&self, row: &str, column: &str) -> Option<&MatrixCell> {
        self.data.get(row).and_then(|cols| cols.get(column))
    }

    /// Iterate all cells in (row, column) order
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, &MatrixCell)> {
        self.data.iter().flat_map(|(row, cols)| {
            cols.iter()
                .map(move |(col, cell)| (row.as_str(), col.as_str(), cell))
        })
    }
}

/// Generate a compatibility matrix and its statistics from a report
/// corpus.
///
/// When `category_filter` is set, only facets of that category
/// contribute, to axis derivation as well as to the cell data. The call
/// never fails: an empty or absent-field corpus produces a matrix of
/// empty cells and zeroed statistics.
pub fn generate(
    reports: &[HardwareReport],
    matrix_type: MatrixType,
    category_filter: Option<HardwareCategory>,
) -> (CompatibilityMatrix, MatrixStatistics) {
    let dims = derive_dimensions(matrix_type, reports, category_filter);
    let data = tabulate::tabulate(matrix_type, reports, category_filter, &dims);

    let matrix = CompatibilityMatrix {
        matrix_type,
        title: matrix_type.title(category_filter),
        rows: dims.rows,
        columns: dims.columns,
        data,
    };
    let statistics = summarize(&matrix);
    debug!(
        "generated {} matrix: {} rows x {} columns, {} observations",
        matrix_type,
        matrix.rows.len(),
        matrix.columns.len(),
        statistics.total_observations
    );
    (matrix, statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::load_reports_from_str;

    fn corpus(json: &str) -> Vec<HardwareReport> {
        load_reports_from_str(json).unwrap()
    }

    #[test]
    fn test_matrix_type_parse_roundtrip() {
        for t in [
            MatrixType::Distribution,
            MatrixType::Kernel,
            MatrixType::Vendor,
            MatrixType::Category,
        ] {
            assert_eq!(t.as_str().parse::<MatrixType>().unwrap(), t);
        }
        assert!("pivot".parse::<MatrixType>().is_err());
    }

    #[test]
    fn test_cell_record_keeps_invariant() {
        let mut cell = MatrixCell::default();
        cell.record(CanonicalStatus::Good);
        cell.record(CanonicalStatus::Good);
        cell.record(CanonicalStatus::Poor);
        assert_eq!(cell.total, 3);
        assert_eq!(cell.statuses.values().sum::<u64>(), cell.total);
        assert_eq!(cell.count(CanonicalStatus::Good), 2);
        assert_eq!(cell.count(CanonicalStatus::Excellent), 0);
    }

    #[test]
    fn test_empty_corpus_distribution_matrix() {
        let (matrix, stats) = generate(&[], MatrixType::Distribution, None);
        assert_eq!(matrix.rows, KNOWN_DISTRIBUTIONS.to_vec());
        assert!(matrix.columns.is_empty());
        assert_eq!(stats.total_observations, 0);
        assert_eq!(stats.coverage_percent, 0.0);
    }

    #[test]
    fn test_single_cpu_report_distribution_matrix() {
        let reports = corpus(
            r#"[{
                "system": {"distribution": "arch", "kernel_version": "6.9.1"},
                "cpu": {"vendor": "Intel", "status": "excellent"}
            }]"#,
        );
        let (matrix, _) = generate(&reports, MatrixType::Distribution, None);
        assert_eq!(matrix.columns, vec!["cpu"]);
        // The facet contributes to every known distribution row, with the
        // overall/facet status standing in where no per-distribution data
        // exists.
        for row in &matrix.rows {
            let cell = matrix.cell(row, "cpu").unwrap();
            assert_eq!(cell.total, 1);
            assert_eq!(cell.count(CanonicalStatus::Excellent), 1);
        }
    }

    #[test]
    fn test_per_distribution_status_overrides_facet_status() {
        let reports = corpus(
            r#"[{
                "system": {"distribution": "arch"},
                "cpu": {"vendor": "AMD", "status": "excellent"},
                "compatibility": {
                    "overall_status": "excellent",
                    "tested_distributions": [
                        {"distribution": "debian", "status": "limited"}
                    ]
                }
            }]"#,
        );
        let (matrix, _) = generate(&reports, MatrixType::Distribution, None);
        let debian = matrix.cell("debian", "cpu").unwrap();
        assert_eq!(debian.count(CanonicalStatus::Poor), 1);
        let arch = matrix.cell("arch", "cpu").unwrap();
        assert_eq!(arch.count(CanonicalStatus::Excellent), 1);
    }

    #[test]
    fn test_kernel_matrix_rows_are_observed_kernels() {
        let reports = corpus(
            r#"[
                {"system": {"kernel_version": "6.9.1"},
                 "cpu": {"vendor": "Intel", "status": "good"}},
                {"system": {"kernel_version": "6.1.0"},
                 "graphics": [{"vendor": "AMD", "status": "partial"}]}
            ]"#,
        );
        let (matrix, stats) = generate(&reports, MatrixType::Kernel, None);
        assert_eq!(matrix.rows, vec!["6.1.0", "6.9.1"]);
        assert_eq!(matrix.columns, vec!["cpu", "gpu"]);
        assert_eq!(stats.total_observations, 2);
        assert_eq!(
            matrix.cell("6.9.1", "cpu").unwrap().count(CanonicalStatus::Good),
            1
        );
        assert!(matrix.cell("6.1.0", "cpu").unwrap().is_empty());
    }

    #[test]
    fn test_vendor_matrix_skips_vendorless_facets() {
        let reports = corpus(
            r#"[{
                "system": {"kernel_version": "6.9.1"},
                "memory": {"total_bytes": 1024},
                "graphics": [{"vendor": "NVIDIA", "status": "partial"}],
                "compatibility": {"overall_status": "good"}
            }]"#,
        );
        let (matrix, stats) = generate(&reports, MatrixType::Vendor, None);
        // The memory facet has no vendor, so only the GPU facet lands
        assert_eq!(matrix.rows, vec!["NVIDIA"]);
        assert_eq!(stats.total_observations, 1);
    }

    #[test]
    fn test_category_matrix_axes() {
        let reports = corpus(
            r#"[{
                "cpu": {"vendor": "Intel", "status": "good"},
                "audio": [{"vendor": "Realtek", "status": "working"}]
            }]"#,
        );
        let (matrix, _) = generate(&reports, MatrixType::Category, None);
        assert_eq!(matrix.rows, vec!["audio", "cpu"]);
        assert_eq!(matrix.columns, KNOWN_DISTRIBUTIONS.to_vec());
        let cell = matrix.cell("audio", "nixos").unwrap();
        assert_eq!(cell.count(CanonicalStatus::Good), 1);
    }

    #[test]
    fn test_category_filter_limits_everything() {
        let reports = corpus(
            r#"[{
                "system": {"kernel_version": "6.9.1"},
                "cpu": {"vendor": "Intel", "status": "good"},
                "graphics": [{"vendor": "NVIDIA", "status": "partial"},
                             {"vendor": "Intel", "status": "good"}]
            }]"#,
        );
        let (matrix, stats) =
            generate(&reports, MatrixType::Kernel, Some(HardwareCategory::Gpu));
        assert_eq!(matrix.columns, vec!["gpu"]);
        // Exactly the two GPU facets, no CPU anywhere
        assert_eq!(stats.total_observations, 2);
        for (_, col, cell) in matrix.cells() {
            assert_eq!(col, "gpu");
            assert_eq!(cell.statuses.values().sum::<u64>(), cell.total);
        }
    }

    #[test]
    fn test_filter_never_increases_observations() {
        let reports = corpus(
            r#"[
                {"system": {"kernel_version": "6.9.1"},
                 "cpu": {"vendor": "Intel", "status": "good"},
                 "graphics": [{"vendor": "AMD", "status": "full"}]},
                {"system": {"kernel_version": "6.9.1"},
                 "storage": [{"vendor": "Samsung", "status": "working"}]}
            ]"#,
        );
        let (_, unfiltered) = generate(&reports, MatrixType::Kernel, None);
        for category in HardwareCategory::ALL {
            let (_, filtered) = generate(&reports, MatrixType::Kernel, Some(category));
            assert!(filtered.total_observations <= unfiltered.total_observations);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let reports = corpus(
            r#"[
                {"system": {"kernel_version": "6.9.1", "distribution": "arch"},
                 "cpu": {"vendor": "Intel", "status": "good"},
                 "network": [{"vendor": "Realtek", "status": "limited"}],
                 "compatibility": {"overall_status": "fair"}},
                {"system": {"kernel_version": "6.1.0"},
                 "graphics": [{"vendor": "AMD"}]}
            ]"#,
        );
        for matrix_type in [
            MatrixType::Distribution,
            MatrixType::Kernel,
            MatrixType::Vendor,
            MatrixType::Category,
        ] {
            let (m1, s1) = generate(&reports, matrix_type, None);
            let (m2, s2) = generate(&reports, matrix_type, None);
            assert_eq!(
                serde_json::to_string(&m1).unwrap(),
                serde_json::to_string(&m2).unwrap()
            );
            assert_eq!(
                serde_json::to_string(&s1).unwrap(),
                serde_json::to_string(&s2).unwrap()
            );
        }
    }

    #[test]
    fn test_rows_and_columns_sorted_unique() {
        let reports = corpus(
            r#"[
                {"system": {"kernel_version": "6.9.1"},
                 "cpu": {"vendor": "Intel", "status": "good"}},
                {"system": {"kernel_version": "6.9.1"},
                 "cpu": {"vendor": "Intel", "status": "good"}}
            ]"#,
        );
        for matrix_type in [MatrixType::Kernel, MatrixType::Vendor] {
            let (matrix, _) = generate(&reports, matrix_type, None);
            let mut sorted = matrix.rows.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(matrix.rows, sorted);
        }
    }

    #[test]
    fn test_unrecognized_status_counts_as_unknown() {
        let reports = corpus(
            r#"[{
                "system": {"kernel_version": "6.9.1"},
                "cpu": {"vendor": "Intel", "status": "mostly-works"}
            }]"#,
        );
        let (matrix, stats) = generate(&reports, MatrixType::Kernel, None);
        let cell = matrix.cell("6.9.1", "cpu").unwrap();
        assert_eq!(cell.count(CanonicalStatus::Unknown), 1);
        assert_eq!(
            stats.status_breakdown[&CanonicalStatus::Unknown].count,
            1
        );
    }
}
