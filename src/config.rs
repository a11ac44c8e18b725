// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tool configuration for the CLI front-end.
//!
//! The engine itself takes no configuration (the status table and the
//! distribution vocabulary are compile-time constants); this TOML file
//! only carries CLI defaults so operators do not repeat flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CompatError, Result};

/// Output format for generated matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal table
    Table,
    /// Machine-readable JSON
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// CLI defaults loaded from an optional TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Default corpus file
    pub input: Option<PathBuf>,
    /// Default matrix type name
    pub matrix_type: String,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            input: None,
            matrix_type: "distribution".to_string(),
            format: OutputFormat::Table,
        }
    }
}

impl ToolConfig {
    /// Load from a TOML file
    pub fn from_toml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CompatError::Config(format!("cannot read {}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CompatError::Config(format!("TOML parse error: {}", e)))
    }

    /// Generate sample config
    pub fn sample_toml() -> String {
        r#"# lxcm configuration
# input = "reports.json"
matrix_type = "distribution"
format = "table"
"#
        .into()
    }
}
