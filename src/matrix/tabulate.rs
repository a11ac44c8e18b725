//! Cross-tabulation — folding facets into the per-cell histograms.
//!
//! Every (row, column) pair of the declared axes starts as an empty
//! cell; each facet then increments the cells it applies to. Addition is
//! commutative, so the result does not depend on iteration order. Status
//! fallback (per-distribution, else component, else report level) is
//! resolved per facet before accumulation.

use std::collections::BTreeMap;

use super::dimensions::{Dimensions, KNOWN_DISTRIBUTIONS};
use super::{MatrixCell, MatrixType};
use crate::facet::{extract_facets, HardwareCategory, HardwareFacet};
use crate::report::HardwareReport;
use crate::status::{normalize, normalize_opt, CanonicalStatus};

/// Facets of a report that survive the category filter
pub(crate) fn matching_facets(
    report: &HardwareReport,
    category_filter: Option<HardwareCategory>,
) -> impl Iterator<Item = HardwareFacet> + '_ {
    extract_facets(report).filter(move |f| category_filter.map_or(true, |c| f.category == c))
}

/// Fold all facets of all reports into the (row, column) cell table
pub(crate) fn tabulate(
    matrix_type: MatrixType,
    reports: &[HardwareReport],
    category_filter: Option<HardwareCategory>,
    dims: &Dimensions,
) -> BTreeMap<String, BTreeMap<String, MatrixCell>> {
    let mut data: BTreeMap<String, BTreeMap<String, MatrixCell>> = dims
        .rows
        .iter()
        .map(|row| {
            let cols = dims
                .columns
                .iter()
                .map(|col| (col.clone(), MatrixCell::default()))
                .collect();
            (row.clone(), cols)
        })
        .collect();

    for report in reports {
        for facet in matching_facets(report, category_filter) {
            for (row, column, status) in contributions(matrix_type, report, &facet) {
                if let Some(cell) = data.get_mut(&row).and_then(|cols| cols.get_mut(&column)) {
                    cell.record(status);
                }
            }
        }
    }
    data
}

/// The (row, column, status) observations one facet contributes.
///
/// Distribution-valued axes receive one observation per known
/// distribution: the per-distribution test result when the report has
/// one, otherwise the facet's own status. Kernel and vendor matrices
/// receive exactly one observation, and none when the report lacks a
/// kernel version or the facet lacks a vendor.
fn contributions(
    matrix_type: MatrixType,
    report: &HardwareReport,
    facet: &HardwareFacet,
) -> Vec<(String, String, CanonicalStatus)> {
    let category = facet.category.as_str().to_string();
    match matrix_type {
        MatrixType::Distribution => KNOWN_DISTRIBUTIONS
            .iter()
            .map(|dist| {
                (
                    dist.to_string(),
                    category.clone(),
                    status_on_distribution(report, facet, dist),
                )
            })
            .collect(),
        MatrixType::Category => KNOWN_DISTRIBUTIONS
            .iter()
            .map(|dist| {
                (
                    category.clone(),
                    dist.to_string(),
                    status_on_distribution(report, facet, dist),
                )
            })
            .collect(),
        MatrixType::Kernel => match report.system.kernel_version.as_deref() {
            Some(kernel) => vec![(
                kernel.to_string(),
                category,
                normalize_opt(facet.status.as_deref()),
            )],
            None => Vec::new(),
        },
        MatrixType::Vendor => match facet.vendor.as_deref() {
            Some(vendor) => vec![(
                vendor.to_string(),
                category,
                normalize_opt(facet.status.as_deref()),
            )],
            None => Vec::new(),
        },
    }
}

/// Status of this facet on one specific distribution: the report's
/// per-distribution result when present, else the facet's own status
fn status_on_distribution(
    report: &HardwareReport,
    facet: &HardwareFacet,
    distribution: &str,
) -> CanonicalStatus {
    match report.status_for_distribution(distribution) {
        Some(raw) => normalize(raw),
        None => normalize_opt(facet.status.as_deref()),
    }
}
