//! `coded-targets`: generate a printable sheet of coded targets plus one file
//! per target.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use coded_targets::print::{DocumentFormat, PrintError, TargetConfig};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "coded-targets")]
#[command(about = "Generate photogrammetry targets with calibration references")]
#[command(version)]
struct Cli {
    /// JSON config to start from; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Radius of the centre dot in millimetres [default: 3.0]
    #[arg(long, allow_negative_numbers = true)]
    dot_radius: Option<f64>,

    /// Number of segments in the coded ring (4..=16) [default: 8]
    #[arg(long)]
    bits: Option<u32>,

    /// Markers per row [default: 4]
    #[arg(long)]
    columns: Option<usize>,

    /// Total number of markers to generate [default: 12]
    #[arg(long = "markers")]
    markers_total: Option<usize>,

    /// Raster resolution; never changes physical size [default: 300]
    #[arg(long)]
    dpi: Option<u32>,

    /// Page margin in millimetres [default: 10.0]
    #[arg(long = "margin", allow_negative_numbers = true)]
    page_margin: Option<f64>,

    /// Padding between markers in millimetres [default: 5.0]
    #[arg(long = "padding", allow_negative_numbers = true)]
    marker_padding: Option<f64>,

    /// Calibration dot radius in millimetres [default: 2.0]
    #[arg(long)]
    cal_dot_radius: Option<f64>,

    /// Calibration dot centre-to-centre spacing in millimetres [default: 20.0]
    #[arg(long = "cal-spacing")]
    cal_dot_spacing: Option<f64>,

    /// Calibration reference label text
    #[arg(long)]
    cal_label: Option<String>,

    /// Combined page output; .pdf, .svg or .png [default: coded_markers_6mm.pdf]
    #[arg(long = "output-pdf", visible_alias = "output")]
    output_document: Option<PathBuf>,

    /// Directory for the per-target files [default: targets]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Format of the per-target files [default: svg]
    #[arg(long, value_enum)]
    target_format: Option<TargetFormatArg>,

    /// Inner ring radius in dot radii [default: 1.6]
    #[arg(long)]
    ring_inner: Option<f64>,

    /// Outer ring radius in dot radii [default: 2.4]
    #[arg(long)]
    ring_outer: Option<f64>,

    /// Skip the combined page
    #[arg(long = "skip-pdf")]
    skip_document: bool,

    /// Skip the per-target files
    #[arg(long = "skip-svgs")]
    skip_targets: bool,

    /// Write a JSON manifest of codes and page positions
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Write the effective config as JSON and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,

    /// Log layout details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetFormatArg {
    Svg,
    Pdf,
    Png,
}

impl TargetFormatArg {
    fn to_format(self) -> DocumentFormat {
        match self {
            Self::Svg => DocumentFormat::Svg,
            Self::Pdf => DocumentFormat::Pdf,
            Self::Png => DocumentFormat::Png,
        }
    }
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }

    /// Config file (or defaults) with every given flag applied on top.
    fn to_config(&self) -> Result<TargetConfig, PrintError> {
        let mut cfg = match &self.config {
            Some(path) => TargetConfig::load_json(path)?,
            None => TargetConfig::default(),
        };

        if let Some(v) = self.dot_radius {
            cfg.dot_radius_mm = v;
        }
        if let Some(v) = self.bits {
            cfg.bits = v;
        }
        if let Some(v) = self.columns {
            cfg.columns = v;
        }
        if let Some(v) = self.markers_total {
            cfg.markers_total = v;
        }
        if let Some(v) = self.dpi {
            cfg.dpi = v;
        }
        if let Some(v) = self.page_margin {
            cfg.page_margin_mm = v;
        }
        if let Some(v) = self.marker_padding {
            cfg.marker_padding_mm = v;
        }
        if let Some(v) = self.cal_dot_radius {
            cfg.cal_dot_radius_mm = v;
        }
        if let Some(v) = self.cal_dot_spacing {
            cfg.cal_dot_spacing_mm = v;
        }
        if let Some(v) = &self.cal_label {
            cfg.cal_label = v.clone();
        }
        if let Some(v) = &self.output_document {
            cfg.output_document = v.clone();
        }
        if let Some(v) = &self.output_dir {
            cfg.output_dir = v.clone();
        }
        if let Some(v) = self.target_format {
            cfg.target_format = v.to_format();
        }
        if let Some(v) = self.ring_inner {
            cfg.ring.inner_multiplier = v;
        }
        if let Some(v) = self.ring_outer {
            cfg.ring.outer_multiplier = v;
        }
        if let Some(v) = &self.manifest {
            cfg.manifest_path = Some(v.clone());
        }
        cfg.skip_document |= self.skip_document;
        cfg.skip_targets |= self.skip_targets;
        Ok(cfg)
    }
}

fn run(cli: &Cli) -> Result<(), PrintError> {
    let cfg = cli.to_config()?;

    if let Some(path) = &cli.dump_config {
        cfg.write_json(path)?;
        println!("Wrote config: {}", path.display());
        return Ok(());
    }

    let report = coded_targets::generate(&cfg)?;
    if let Some(document) = &report.document {
        println!("Generated combined page: {}", document.display());
    }
    if !cfg.skip_targets {
        println!(
            "Generated {} individual targets in: {}/",
            report.targets.len(),
            cfg.output_dir.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    #[cfg(feature = "tracing")]
    coded_targets::core::init_tracing(false);
    #[cfg(not(feature = "tracing"))]
    let _ = coded_targets::core::init_with_level(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
