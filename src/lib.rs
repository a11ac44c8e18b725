// SPDX-License-Identifier: AGPL-3.0-or-later

//! Compatibility matrix aggregation and scoring engine for Linux
//! hardware reports.
//!
//! The library folds a corpus of hardware-compatibility reports (one per
//! tested system) into cross-tabulated matrices: normalize the loose
//! status vocabulary into five canonical levels, derive row/column axes
//! for the selected matrix type, accumulate per-cell status histograms,
//! then score cells and derive summary statistics. The whole run is a
//! pure function over an immutable corpus snapshot; nothing is cached or
//! mutated between calls.
//!
//! # Examples
//!
//! ```
//! use compatlib::matrix::{self, score_cell, MatrixType};
//! use compatlib::report::load_reports_from_str;
//!
//! let corpus = load_reports_from_str(r#"[{
//!     "system": {"distribution": "arch", "kernel_version": "6.9.1"},
//!     "cpu": {"vendor": "Intel", "status": "excellent"},
//!     "graphics": [{"vendor": "NVIDIA", "status": "partial"}]
//! }]"#).unwrap();
//!
//! let (matrix, stats) = matrix::generate(&corpus, MatrixType::Kernel, None);
//! let cell = matrix.cell("6.9.1", "cpu").unwrap();
//! let score = score_cell(cell);
//! assert_eq!(score.average, 4.0);
//! assert!(stats.coverage_percent > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod facet;
pub mod matrix;
pub mod report;
pub mod status;

pub use error::{CompatError, Result};
pub use facet::{extract_facets, HardwareCategory, HardwareFacet};
pub use matrix::{
    generate, score_cell, CellScore, CompatibilityMatrix, MatrixCell, MatrixStatistics,
    MatrixType,
};
pub use report::{load_reports, HardwareReport};
pub use status::{normalize, CanonicalStatus};
