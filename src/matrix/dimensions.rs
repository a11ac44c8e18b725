//! Axis derivation for matrix generation.
//!
//! The distribution axis is a fixed, closed vocabulary so coverage is
//! well-defined even for distributions with zero observations. Kernel
//! and vendor axes are the observed distinct values of the (optionally
//! category-filtered) corpus. Axes are always deduplicated and sorted
//! ascending so generation is deterministic.

use std::collections::BTreeSet;

use super::tabulate::matching_facets;
use super::MatrixType;
use crate::facet::HardwareCategory;
use crate::report::HardwareReport;

/// Known distribution identifiers, sorted ascending. Compile-time
/// constant of the engine, not supplied by callers.
pub const KNOWN_DISTRIBUTIONS: [&str; 5] = ["arch", "debian", "fedora", "nixos", "ubuntu"];

/// Row and column keys for one matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions {
    /// Row keys, deduplicated, ascending
    pub rows: Vec<String>,
    /// Column keys, deduplicated, ascending
    pub columns: Vec<String>,
}

/// Derive the row/column axes for a matrix type over a corpus.
///
/// With a `category_filter`, only reports/facets of that category
/// contribute observed values; for the category-valued axes this also
/// narrows the axis itself to at most the filtered category.
pub fn derive_dimensions(
    matrix_type: MatrixType,
    reports: &[HardwareReport],
    category_filter: Option<HardwareCategory>,
) -> Dimensions {
    let fixed_distributions = || KNOWN_DISTRIBUTIONS.iter().map(|d| d.to_string()).collect();

    match matrix_type {
        MatrixType::Distribution => Dimensions {
            rows: fixed_distributions(),
            columns: observed_categories(reports, category_filter),
        },
        MatrixType::Kernel => Dimensions {
            rows: observed_kernels(reports, category_filter),
            columns: observed_categories(reports, category_filter),
        },
        MatrixType::Vendor => Dimensions {
            rows: observed_vendors(reports, category_filter),
            columns: observed_categories(reports, category_filter),
        },
        MatrixType::Category => Dimensions {
            rows: observed_categories(reports, category_filter),
            columns: fixed_distributions(),
        },
    }
}

/// Distinct categories with at least one filter-surviving facet, sorted
fn observed_categories(
    reports: &[HardwareReport],
    category_filter: Option<HardwareCategory>,
) -> Vec<String> {
    let set: BTreeSet<&'static str> = reports
        .iter()
        .flat_map(|r| matching_facets(r, category_filter))
        .map(|f| f.category.as_str())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct kernel versions of reports with at least one filter-surviving
/// facet, sorted. Reports without a kernel version contribute nothing.
fn observed_kernels(
    reports: &[HardwareReport],
    category_filter: Option<HardwareCategory>,
) -> Vec<String> {
    let set: BTreeSet<String> = reports
        .iter()
        .filter(|r| matching_facets(r, category_filter).next().is_some())
        .filter_map(|r| r.system.kernel_version.clone())
        .collect();
    set.into_iter().collect()
}

/// Distinct vendor names of filter-surviving facets, sorted. Facets
/// without a vendor contribute nothing.
fn observed_vendors(
    reports: &[HardwareReport],
    category_filter: Option<HardwareCategory>,
) -> Vec<String> {
    let set: BTreeSet<String> = reports
        .iter()
        .flat_map(|r| matching_facets(r, category_filter))
        .filter_map(|f| f.vendor)
        .collect();
    set.into_iter().collect()
}
