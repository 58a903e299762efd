//! One full run: validate, pick codes, compose, write.

use coded_targets_codes::ring_codes;

use crate::config::TargetConfig;
use crate::error::PrintError;
use crate::export::{export_single_targets, SingleTargetSpec};
use crate::layout::compose_page;
use crate::render::{write_canvas, DocumentFormat};
use crate::report::{GenerationReport, ManifestEntry};

/// Generate the page document, per-marker files and manifest for `cfg`.
///
/// Nothing is written unless the whole config validates and the document
/// extension names a supported format.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(cfg), fields(bits = cfg.bits, markers = cfg.markers_total)))]
pub fn generate(cfg: &TargetConfig) -> Result<GenerationReport, PrintError> {
    cfg.validate()?;
    let document_format = if cfg.skip_document {
        None
    } else {
        Some(DocumentFormat::from_path(&cfg.output_document)?)
    };

    let overlap_warning = cfg.overlap_warning().map(|w| {
        log::warn!("{w}");
        w.to_string()
    });

    let codes = ring_codes(cfg.bits, cfg.markers_total)?;
    if codes.len() < cfg.markers_total {
        log::warn!(
            "only {} distinct rotation-invariant codes exist for {} bits; generating {} of {} requested markers",
            codes.len(),
            cfg.bits,
            codes.len(),
            cfg.markers_total
        );
    }

    let spec = cfg.page_spec();
    let page = compose_page(&codes, &spec)?;

    let document = match document_format {
        Some(format) => {
            write_canvas(&page.canvas, &cfg.output_document, format, cfg.dpi)?;
            log::info!(
                "{} markers saved to {}",
                page.layout.markers.len(),
                cfg.output_document.display()
            );
            Some(cfg.output_document.clone())
        }
        None => None,
    };

    let targets = if cfg.skip_targets {
        Vec::new()
    } else {
        let single = SingleTargetSpec {
            dot_radius_mm: cfg.dot_radius_mm,
            bits: cfg.bits,
            ring: cfg.ring,
            format: cfg.target_format,
            dpi: cfg.dpi,
        };
        let written = export_single_targets(&codes, &single, &cfg.output_dir)?;
        log::info!(
            "{} individual targets saved to {}",
            written.len(),
            cfg.output_dir.display()
        );
        written
    };

    let report = GenerationReport {
        bits: cfg.bits,
        dot_radius_mm: cfg.dot_radius_mm,
        page_width_mm: page.layout.width_mm,
        page_height_mm: page.layout.height_mm,
        requested: cfg.markers_total,
        markers: ManifestEntry::from_layout(&page.layout),
        overlap_warning,
        document,
        targets,
    };

    if let Some(path) = &cfg.manifest_path {
        report.write_json(path)?;
        log::info!("manifest saved to {}", path.display());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::path::Path;

    fn config_in(dir: &Path) -> TargetConfig {
        TargetConfig {
            output_document: dir.join("page.svg"),
            output_dir: dir.join("targets"),
            ..TargetConfig::default()
        }
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = TargetConfig {
            bits: 3,
            ..config_in(dir.path())
        };
        assert!(matches!(
            generate(&cfg),
            Err(PrintError::Config(ConfigError::BitsOutOfRange(3)))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).expect("dir").count(), 0);
    }

    #[test]
    fn unsupported_document_extension_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = TargetConfig {
            output_document: dir.path().join("page.eps"),
            ..config_in(dir.path())
        };
        assert!(matches!(
            generate(&cfg),
            Err(PrintError::UnsupportedFormat(_))
        ));
        assert!(!dir.path().join("targets").exists());
    }

    #[test]
    fn short_code_supply_is_truncated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = TargetConfig {
            bits: 4,
            markers_total: 10,
            ..config_in(dir.path())
        };
        let report = generate(&cfg).expect("generate");
        assert_eq!(report.codes(), vec![1, 3, 5, 7, 15]);
        assert!(report.is_short());
        assert_eq!(report.targets.len(), 5);
    }

    #[test]
    fn overlap_warning_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = TargetConfig {
            markers_total: 2,
            marker_padding_mm: 1.0,
            skip_targets: true,
            ..config_in(dir.path())
        };
        let report = generate(&cfg).expect("generate");
        let warning = report.overlap_warning.expect("warning");
        assert!(warning.contains("may be insufficient"));
        assert!(report.targets.is_empty());
        assert!(!dir.path().join("targets").exists());
    }

    #[test]
    fn skip_document_leaves_only_targets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = TargetConfig {
            markers_total: 2,
            skip_document: true,
            // unsupported, but never looked at
            output_document: dir.path().join("page.eps"),
            ..config_in(dir.path())
        };
        let report = generate(&cfg).expect("generate");
        assert!(report.document.is_none());
        assert!(!dir.path().join("page.eps").exists());
        assert_eq!(report.targets.len(), 2);
    }
}
