//! Canonical compatibility status levels and status-string normalization.
//!
//! Hardware reports arrive with loosely-typed status vocabulary from
//! several origins (report-level, per-component, per-distribution). This
//! module collapses that open string domain into a closed five-level
//! ordinal enum via a fixed synonym table. Normalization is total: any
//! unrecognized or empty input maps to [`CanonicalStatus::Unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical compatibility level, ordered worst to best.
///
/// The discriminants double as score weights for the weighted cell
/// average (`unknown` contributes zero).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalStatus {
    /// No usable compatibility information
    Unknown = 0,
    /// Major problems, hardware barely or not functional
    Poor = 1,
    /// Works with significant limitations
    Partial = 2,
    /// Works with at most minor issues
    Good = 3,
    /// Fully working out of the box
    Excellent = 4,
}

impl CanonicalStatus {
    /// All levels, best first. Dominant-status ties are broken by this
    /// order: the higher canonical level wins.
    pub const ALL: [CanonicalStatus; 5] = [
        CanonicalStatus::Excellent,
        CanonicalStatus::Good,
        CanonicalStatus::Partial,
        CanonicalStatus::Poor,
        CanonicalStatus::Unknown,
    ];

    /// Score weight used for the weighted cell average
    pub fn weight(&self) -> u32 {
        *self as u32
    }

    /// Lowercase identifier, stable across serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalStatus::Excellent => "excellent",
            CanonicalStatus::Good => "good",
            CanonicalStatus::Partial => "partial",
            CanonicalStatus::Poor => "poor",
            CanonicalStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw, source-supplied status label to a canonical level.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Anything outside the synonym table (including the empty string)
/// yields [`CanonicalStatus::Unknown`]; this function never fails.
pub fn normalize(raw: &str) -> CanonicalStatus {
    match raw.trim().to_ascii_lowercase().as_str() {
        "excellent" | "full" | "perfect" => CanonicalStatus::Excellent,
        "good" | "working" | "works" => CanonicalStatus::Good,
        "partial" | "fair" => CanonicalStatus::Partial,
        "poor" | "limited" | "none" | "broken" => CanonicalStatus::Poor,
        _ => CanonicalStatus::Unknown,
    }
}

/// Normalize an optional status label; `None` means no data.
pub fn normalize_opt(raw: Option<&str>) -> CanonicalStatus {
    raw.map(normalize).unwrap_or(CanonicalStatus::Unknown)
}
