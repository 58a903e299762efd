//! Lay out a 12-bit sheet and print the assigned codes.
//!
//! Usage: cargo run --example single_page -- [output-dir]

use std::path::PathBuf;

use coded_targets::codes::canonical_code_count;
use coded_targets::{generate, TargetConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    coded_targets::core::init_with_level(log::LevelFilter::Info)?;

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("coded_targets_demo"));

    let cfg = TargetConfig {
        bits: 12,
        markers_total: 30,
        columns: 6,
        dot_radius_mm: 2.5,
        marker_padding_mm: 16.0,
        output_document: out.join("sheet.pdf"),
        output_dir: out.join("targets"),
        manifest_path: Some(out.join("manifest.json")),
        ..TargetConfig::default()
    };

    println!(
        "{} of {} available 12-bit codes requested",
        cfg.markers_total,
        canonical_code_count(cfg.bits)?
    );
    let report = generate(&cfg)?;
    for m in &report.markers {
        println!(
            "#{:<3} code {:>4}  {}  row {} col {}",
            m.index, m.code, m.bit_pattern, m.row, m.column
        );
    }
    Ok(())
}
