//! Hardware report corpus — input data model and JSON ingestion.
//!
//! One [`HardwareReport`] describes one tested system: the distribution
//! and kernel it ran, the components that were detected, and the
//! compatibility outcome. Reports are read-only inputs; the engine never
//! mutates them and performs only defensive absent-field handling beyond
//! the parse. A document that does not parse as a report at all is a
//! contract violation of the corpus loader and fails fast here, before
//! any aggregation runs.
//!
//! # Examples
//!
//! ```
//! use compatlib::report::load_reports_from_str;
//!
//! let corpus = load_reports_from_str(
//!     r#"[{"system": {"distribution": "arch", "kernel_version": "6.9.1"}}]"#,
//! ).unwrap();
//! assert_eq!(corpus.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CompatError, Result};

/// Complete hardware report for one tested system
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardwareReport {
    /// Submission metadata; not used for aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReportMetadata>,
    /// System-level information (distribution, kernel, architecture)
    #[serde(default)]
    pub system: SystemInfo,
    /// CPU descriptor, if detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuInfo>,
    /// Memory descriptor, if detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryInfo>,
    /// Graphics devices
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphics: Vec<ComponentDevice>,
    /// Network devices
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network: Vec<ComponentDevice>,
    /// Storage devices
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage: Vec<ComponentDevice>,
    /// Audio devices
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<ComponentDevice>,
    /// Overall compatibility outcome and per-distribution results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityInfo>,
}

/// Report submission metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema/tool version that produced the report
    #[serde(default)]
    pub version: String,
    /// When the report was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// System-level information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Distribution identifier (e.g. "arch", "debian")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    /// Kernel version string (e.g. "6.9.1-arch1-1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_version: Option<String>,
    /// CPU architecture (e.g. "x86_64")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

/// CPU descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuInfo {
    /// CPU vendor (e.g. "Intel", "AMD")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// CPU model string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Component-level compatibility label, overriding the report level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Memory descriptor. Memory carries no per-component compatibility
/// label in the source schema; the report-level status applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Total installed memory in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<u64>,
    /// Memory type (e.g. "DDR5")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
}

/// Generic component descriptor used by the graphics, network, storage
/// and audio arrays
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentDevice {
    /// Manufacturer name as reported by the detection tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Device model string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Kernel driver in use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Component-level compatibility label, overriding the report level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Report-level compatibility outcome
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatibilityInfo {
    /// Overall compatibility label for the whole system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<String>,
    /// Per-distribution test outcomes, where the submitter tried the
    /// same hardware on more than one distribution
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tested_distributions: Vec<DistributionTest>,
}

/// Compatibility outcome of this hardware on one specific distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionTest {
    /// Distribution identifier
    pub distribution: String,
    /// Compatibility label observed on that distribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl HardwareReport {
    /// Report-level compatibility label, if any
    pub fn overall_status(&self) -> Option<&str> {
        self.compatibility
            .as_ref()
            .and_then(|c| c.overall_status.as_deref())
    }

    /// Compatibility label recorded for a specific distribution, if the
    /// submitter tested this hardware there
    pub fn status_for_distribution(&self, distribution: &str) -> Option<&str> {
        self.compatibility.as_ref().and_then(|c| {
            c.tested_distributions
                .iter()
                .find(|t| t.distribution.eq_ignore_ascii_case(distribution))
                .and_then(|t| t.status.as_deref())
        })
    }
}

/// Load a report corpus from a JSON file containing an array of reports.
///
/// Fails fast on unreadable files and malformed documents; a valid but
/// empty array is a valid (empty) corpus.
pub fn load_reports(path: &Path) -> Result<Vec<HardwareReport>> {
    let content = fs::read_to_string(path)?;
    let reports = load_reports_from_str(&content)
        .map_err(|e| CompatError::InvalidCorpus(format!("{}: {}", path.display(), e)))?;
    debug!("loaded {} reports from {}", reports.len(), path.display());
    Ok(reports)
}

/// Parse a report corpus from a JSON string
pub fn load_reports_from_str(content: &str) -> Result<Vec<HardwareReport>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(CompatError::InvalidCorpus(
            "expected a JSON array of hardware reports".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}
