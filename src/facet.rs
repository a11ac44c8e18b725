//! Hardware facet extraction — one observation per detected component.
//!
//! A facet is a (category, vendor, raw status label) triple pulled out of
//! a single report. Extraction walks every populated component field once
//! and yields lazily; a report with no populated component fields yields
//! an empty sequence. Component-level status labels override the
//! report-level one, except for memory which carries no per-component
//! status in the source schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompatError;
use crate::report::HardwareReport;

/// Fixed hardware category vocabulary
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HardwareCategory {
    Cpu,
    Gpu,
    Memory,
    Storage,
    Network,
    Audio,
}

impl HardwareCategory {
    /// All known categories
    pub const ALL: [HardwareCategory; 6] = [
        HardwareCategory::Cpu,
        HardwareCategory::Gpu,
        HardwareCategory::Memory,
        HardwareCategory::Storage,
        HardwareCategory::Network,
        HardwareCategory::Audio,
    ];

    /// Lowercase identifier, used as the axis key in matrices
    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareCategory::Cpu => "cpu",
            HardwareCategory::Gpu => "gpu",
            HardwareCategory::Memory => "memory",
            HardwareCategory::Storage => "storage",
            HardwareCategory::Network => "network",
            HardwareCategory::Audio => "audio",
        }
    }
}

impl fmt::Display for HardwareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HardwareCategory {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(HardwareCategory::Cpu),
            "gpu" | "graphics" => Ok(HardwareCategory::Gpu),
            "memory" | "ram" => Ok(HardwareCategory::Memory),
            "storage" | "disk" => Ok(HardwareCategory::Storage),
            "network" => Ok(HardwareCategory::Network),
            "audio" | "sound" => Ok(HardwareCategory::Audio),
            other => Err(CompatError::InvalidParameter(format!(
                "unknown hardware category: {}",
                other
            ))),
        }
    }
}

/// One compatibility observation extracted from a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareFacet {
    /// Component category
    pub category: HardwareCategory,
    /// Canonicalized vendor name, when the descriptor carries one
    pub vendor: Option<String>,
    /// Raw compatibility label (component-level when present, else the
    /// report-level one); normalized at accumulation time
    pub status: Option<String>,
}

/// Canonicalize well-known vendor spellings so one manufacturer does not
/// split across matrix rows ("Advanced Micro Devices, Inc." vs "AMD").
/// Unrecognized vendors pass through unchanged.
pub fn normalize_vendor(vendor: &str) -> String {
    let lower = vendor.to_lowercase();
    match lower.as_str() {
        name if name.contains("advanced micro devices") || name.contains("amd") => {
            "AMD".to_string()
        }
        name if name.contains("intel") => "Intel".to_string(),
        name if name.contains("nvidia") => "NVIDIA".to_string(),
        name if name.contains("realtek") => "Realtek".to_string(),
        name if name.contains("broadcom") => "Broadcom".to_string(),
        name if name.contains("qualcomm") => "Qualcomm".to_string(),
        name if name.contains("samsung") => "Samsung".to_string(),
        name if name.contains("mediatek") => "MediaTek".to_string(),
        _ => vendor.trim().to_string(),
    }
}

/// Extract every facet a report contributes, lazily.
///
/// The sequence is finite, single-pass and not restartable; callers that
/// need the facets twice re-invoke. Walk order: cpu, graphics, network,
/// storage, audio, memory.
pub fn extract_facets(report: &HardwareReport) -> impl Iterator<Item = HardwareFacet> + '_ {
    let overall = report.overall_status();

    let component_facet = move |category: HardwareCategory,
                                vendor: Option<&str>,
                                status: Option<&str>| {
        HardwareFacet {
            category,
            vendor: vendor.map(normalize_vendor),
            status: status.or(overall).map(str::to_string),
        }
    };

    let cpu = report.cpu.iter().map(move |c| {
        component_facet(
            HardwareCategory::Cpu,
            c.vendor.as_deref(),
            c.status.as_deref(),
        )
    });
    let gpu = report.graphics.iter().map(move |d| {
        component_facet(HardwareCategory::Gpu, d.vendor.as_deref(), d.status.as_deref())
    });
    let network = report.network.iter().map(move |d| {
        component_facet(
            HardwareCategory::Network,
            d.vendor.as_deref(),
            d.status.as_deref(),
        )
    });
    let storage = report.storage.iter().map(move |d| {
        component_facet(
            HardwareCategory::Storage,
            d.vendor.as_deref(),
            d.status.as_deref(),
        )
    });
    let audio = report.audio.iter().map(move |d| {
        component_facet(
            HardwareCategory::Audio,
            d.vendor.as_deref(),
            d.status.as_deref(),
        )
    });
    // Memory descriptors carry no vendor and no per-component status
    let memory = report.memory.iter().map(move |_| HardwareFacet {
        category: HardwareCategory::Memory,
        vendor: None,
        status: overall.map(str::to_string),
    });

    cpu.chain(gpu)
        .chain(network)
        .chain(storage)
        .chain(audio)
        .chain(memory)
}
