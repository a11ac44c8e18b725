// SPDX-License-Identifier: AGPL-3.0-or-later
//! Benchmark for matrix generation over a synthetic corpus.
//!
//! Measures the full aggregation pass (dimension derivation, facet
//! extraction, cross-tabulation, statistics) for each matrix type.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use compatlib::matrix::{generate, MatrixType};
use compatlib::report::{
    CompatibilityInfo, ComponentDevice, CpuInfo, DistributionTest, HardwareReport, SystemInfo,
};

fn synthetic_corpus(size: usize) -> Vec<HardwareReport> {
    let vendors = ["Intel", "AMD", "NVIDIA", "Realtek", "Samsung"];
    let statuses = ["excellent", "good", "partial", "poor", "working"];
    let kernels = ["6.1.0", "6.6.8", "6.9.1", "6.12.4"];
    let distros = ["arch", "debian", "fedora", "nixos", "ubuntu"];

    (0..size)
        .map(|i| HardwareReport {
            system: SystemInfo {
                distribution: Some(distros[i % distros.len()].to_string()),
                kernel_version: Some(kernels[i % kernels.len()].to_string()),
                architecture: Some("x86_64".to_string()),
            },
            cpu: Some(CpuInfo {
                vendor: Some(vendors[i % 2].to_string()),
                model: None,
                status: Some(statuses[i % statuses.len()].to_string()),
            }),
            graphics: vec![ComponentDevice {
                vendor: Some(vendors[i % 3].to_string()),
                status: Some(statuses[(i + 1) % statuses.len()].to_string()),
                ..Default::default()
            }],
            network: vec![ComponentDevice {
                vendor: Some(vendors[3].to_string()),
                status: None,
                ..Default::default()
            }],
            compatibility: Some(CompatibilityInfo {
                overall_status: Some(statuses[i % statuses.len()].to_string()),
                tested_distributions: vec![DistributionTest {
                    distribution: distros[i % distros.len()].to_string(),
                    status: Some(statuses[(i + 2) % statuses.len()].to_string()),
                }],
            }),
            ..Default::default()
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let corpus = synthetic_corpus(1000);
    for matrix_type in [
        MatrixType::Distribution,
        MatrixType::Kernel,
        MatrixType::Vendor,
        MatrixType::Category,
    ] {
        c.bench_function(&format!("generate_{}", matrix_type), |b| {
            b.iter(|| generate(black_box(&corpus), matrix_type, None));
        });
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
