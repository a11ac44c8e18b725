//! Per-cell scoring — dominant status, weighted average, display
//! intensity and tooltip text.
//!
//! The weighted average uses the canonical status ordinals as weights
//! (excellent 4 down to unknown 0), so it always lands in `[0, 4]`.
//! Intensity is a display heuristic, not a statistical measure: cells
//! with ten or more observations render at full weight, and an empty
//! cell sits below the normal floor to signal "no data" rather than
//! "low score".

use serde::{Deserialize, Serialize};

use super::MatrixCell;
use crate::status::CanonicalStatus;

/// Intensity floor for cells that have data
const INTENSITY_FLOOR: f64 = 0.3;
/// Intensity assigned to empty cells, below the normal floor
const INTENSITY_NO_DATA: f64 = 0.2;
/// Observation count at which intensity saturates
const FULL_WEIGHT_OBSERVATIONS: f64 = 10.0;

/// Derived presentation values for one cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellScore {
    /// Status with the highest count; ties go to the higher canonical
    /// level (excellent before good, and so on down to unknown)
    pub dominant: CanonicalStatus,
    /// Weighted average score in `[0, 4]`
    pub average: f64,
    /// Display intensity in `[0.3, 1.0]`, or 0.2 for an empty cell
    pub intensity: f64,
    /// Human-readable cell summary
    pub tooltip: String,
}

/// Score one cell. Total, never fails; an empty cell yields the
/// designated no-data values.
pub fn score_cell(cell: &MatrixCell) -> CellScore {
    if cell.is_empty() {
        return CellScore {
            dominant: CanonicalStatus::Unknown,
            average: 0.0,
            intensity: INTENSITY_NO_DATA,
            tooltip: "No data available".to_string(),
        };
    }

    let weighted: u64 = cell
        .statuses
        .iter()
        .map(|(status, count)| u64::from(status.weight()) * count)
        .sum();
    let average = weighted as f64 / cell.total as f64;

    // Best-first walk; strict comparison keeps the higher level on ties
    let mut dominant = CanonicalStatus::Unknown;
    let mut dominant_count = 0;
    for status in CanonicalStatus::ALL {
        let count = cell.count(status);
        if count > dominant_count {
            dominant = status;
            dominant_count = count;
        }
    }

    let intensity = (cell.total as f64 / FULL_WEIGHT_OBSERVATIONS).clamp(INTENSITY_FLOOR, 1.0);

    CellScore {
        dominant,
        average,
        intensity,
        tooltip: tooltip(cell, average),
    }
}

fn tooltip(cell: &MatrixCell, average: f64) -> String {
    let breakdown: Vec<String> = CanonicalStatus::ALL
        .iter()
        .filter_map(|status| {
            let count = cell.count(*status);
            (count > 0).then(|| format!("{} {}", count, status))
        })
        .collect();
    let noun = if cell.total == 1 {
        "observation"
    } else {
        "observations"
    };
    format!(
        "{} {} (avg {:.1}): {}",
        cell.total,
        noun,
        average,
        breakdown.join(", ")
    )
}
