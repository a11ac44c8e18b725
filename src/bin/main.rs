// SPDX-License-Identifier: AGPL-3.0-or-later

//! CLI tool for the compatibility matrix engine (lxcm)

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use compatlib::config::{OutputFormat, ToolConfig};
use compatlib::matrix::{self, score_cell, CompatibilityMatrix, MatrixStatistics, MatrixType};
use compatlib::report::load_reports;
use compatlib::status::CanonicalStatus;
use compatlib::{CompatError, HardwareCategory};

#[derive(Parser)]
#[command(name = "lxcm")]
#[command(about = "Aggregate Linux hardware compatibility reports into cross-tabulated matrices", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file with CLI defaults
    #[arg(short, long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a compatibility matrix from a report corpus
    Matrix {
        /// Corpus file (JSON array of hardware reports)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Matrix type: distribution, kernel, vendor, or category
        #[arg(short = 't', long = "type")]
        matrix_type: Option<String>,

        /// Restrict aggregation to one hardware category
        #[arg(long)]
        category: Option<String>,

        /// Output format (table or json)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Show summary statistics only
    Stats {
        /// Corpus file (JSON array of hardware reports)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Matrix type: distribution, kernel, vendor, or category
        #[arg(short = 't', long = "type")]
        matrix_type: Option<String>,

        /// Restrict aggregation to one hardware category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print a sample configuration file
    SampleConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::init();

    let config = match cli.config.as_deref() {
        Some(path) => ToolConfig::from_toml_file(path)?,
        None => ToolConfig::default(),
    };

    match &cli.command {
        Commands::Matrix {
            input,
            matrix_type,
            category,
            format,
        } => {
            let (m, stats) = run_generation(&config, input, matrix_type, category)?;
            let format = resolve_format(&config, format.as_deref())?;
            match format {
                OutputFormat::Json => {
                    let payload = serde_json::json!({ "matrix": m, "statistics": stats });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
                OutputFormat::Table => {
                    print_matrix_table(&m);
                    print_statistics(&stats);
                }
            }
        }
        Commands::Stats {
            input,
            matrix_type,
            category,
        } => {
            let (_, stats) = run_generation(&config, input, matrix_type, category)?;
            print_statistics(&stats);
        }
        Commands::SampleConfig => {
            print!("{}", ToolConfig::sample_toml());
        }
    }

    Ok(())
}

fn run_generation(
    config: &ToolConfig,
    input: &Option<PathBuf>,
    matrix_type: &Option<String>,
    category: &Option<String>,
) -> Result<(CompatibilityMatrix, MatrixStatistics), CompatError> {
    let path = input
        .clone()
        .or_else(|| config.input.clone())
        .ok_or_else(|| {
            CompatError::Config("no corpus file given (use --input or the config file)".into())
        })?;
    let matrix_type: MatrixType = matrix_type
        .as_deref()
        .unwrap_or(&config.matrix_type)
        .parse()?;
    let category_filter = category
        .as_deref()
        .map(str::parse::<HardwareCategory>)
        .transpose()?;

    let reports = load_reports(&path)?;
    Ok(matrix::generate(&reports, matrix_type, category_filter))
}

fn resolve_format(config: &ToolConfig, format: Option<&str>) -> Result<OutputFormat, CompatError> {
    match format {
        None => Ok(config.format),
        Some("table") => Ok(OutputFormat::Table),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => Err(CompatError::InvalidParameter(format!(
            "unknown output format: {}",
            other
        ))),
    }
}

fn print_matrix_table(matrix: &CompatibilityMatrix) {
    println!("\n{}", matrix.title.bold());
    println!("{}", "=".repeat(matrix.title.len()));

    if matrix.columns.is_empty() || matrix.rows.is_empty() {
        println!("{}", "(no observations)".dimmed());
        return;
    }

    let row_width = matrix
        .rows
        .iter()
        .map(|r| r.len())
        .max()
        .unwrap_or(0)
        .max(8);

    print!("{:row_width$}", "");
    for column in &matrix.columns {
        print!("  {:>12}", column.bold());
    }
    println!();

    for row in &matrix.rows {
        print!("{:row_width$}", row);
        for column in &matrix.columns {
            match matrix.cell(row, column) {
                Some(cell) if !cell.is_empty() => {
                    let score = score_cell(cell);
                    let text = format!("{:.1} ({})", score.average, cell.total);
                    print!("  {:>12}", colorize_status(&text, score.dominant));
                }
                _ => print!("  {:>12}", "-".dimmed()),
            }
        }
        println!();
    }
}

fn print_statistics(stats: &MatrixStatistics) {
    println!("\n{}", "Statistics".bold());
    println!("  Dimensions:   {} x {}", stats.row_count, stats.column_count);
    println!("  Coverage:     {:.1}%", stats.coverage_percent);
    println!("  Observations: {}", stats.total_observations);
    println!("  Success rate: {:.1}%", stats.success_percent());
    for status in CanonicalStatus::ALL {
        let share = &stats.status_breakdown[&status];
        if share.count > 0 {
            let label = format!("{:>10}", status.as_str());
            println!(
                "  {}: {} ({:.1}%)",
                colorize_status(&label, status),
                share.count,
                share.percent
            );
        }
    }
}

fn colorize_status(text: &str, status: CanonicalStatus) -> colored::ColoredString {
    match status {
        CanonicalStatus::Excellent => text.green(),
        CanonicalStatus::Good => text.cyan(),
        CanonicalStatus::Partial => text.yellow(),
        CanonicalStatus::Poor => text.red(),
        CanonicalStatus::Unknown => text.dimmed(),
    }
}
