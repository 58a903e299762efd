use coded_targets_codes::{canonical_code, rotate_code};
use coded_targets_print::{generate, DocumentFormat, GenerationReport, TargetConfig};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config_in(dir: &Path) -> TargetConfig {
    init_logging();
    TargetConfig {
        bits: 8,
        markers_total: 3,
        columns: 2,
        output_document: dir.join("page.svg"),
        output_dir: dir.join("targets"),
        manifest_path: Some(dir.join("manifest.json")),
        ..TargetConfig::default()
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn three_markers_on_two_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_in(dir.path());
    let report = generate(&cfg).expect("generate");

    assert_eq!(report.codes(), vec![1, 3, 5]);
    assert_eq!(report.markers[2].row, 1);
    assert_eq!(report.markers[2].column, 0);
    // cell = 18 + 5, two rows, 10 mm margins
    assert!((report.page_width_mm - 66.0).abs() < 1e-9);
    assert!((report.page_height_mm - 66.0).abs() < 1e-9);

    assert_eq!(
        file_names(&dir.path().join("targets")),
        vec!["target_1.svg", "target_2.svg", "target_3.svg"]
    );

    let page = fs::read_to_string(dir.path().join("page.svg")).expect("page");
    assert!(page.contains(r#"width="66mm" height="66mm""#));
    for label in ["1", "2", "3"] {
        assert!(page.contains(&format!(">{label}</text>")), "missing label {label}");
    }
    assert!(page.contains(">20.00 mm calibration reference</text>"));

    let saved = GenerationReport::load_json(dir.path().join("manifest.json")).expect("manifest");
    assert_eq!(saved, report);
}

#[test]
fn placed_codes_are_distinct_under_rotation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = TargetConfig {
        bits: 10,
        markers_total: 60,
        columns: 8,
        skip_targets: true,
        manifest_path: None,
        ..config_in(dir.path())
    };
    let report = generate(&cfg).expect("generate");
    assert_eq!(report.markers.len(), 60);

    let mut seen = HashSet::new();
    for code in report.codes() {
        assert_eq!(canonical_code(code, 10), code);
        for k in 0..10 {
            assert_eq!(canonical_code(rotate_code(code, 10, k), 10), code);
        }
        assert!(seen.insert(code));
    }
}

#[test]
fn pdf_page_and_png_targets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = TargetConfig {
        markers_total: 2,
        output_document: dir.path().join("sheet.pdf"),
        target_format: DocumentFormat::Png,
        dpi: 150,
        ..config_in(dir.path())
    };
    let report = generate(&cfg).expect("generate");
    assert_eq!(report.document.as_deref(), Some(dir.path().join("sheet.pdf").as_path()));

    let pdf = fs::read(dir.path().join("sheet.pdf")).expect("pdf");
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(
        file_names(&dir.path().join("targets")),
        vec!["target_1.png", "target_2.png"]
    );
}

#[test]
fn dpi_changes_pixels_not_millimetres() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let sizes: Vec<(u32, u32)> = [150u32, 300]
        .iter()
        .map(|&dpi| {
            let out = dir.path().join(format!("dpi{dpi}"));
            let cfg = TargetConfig {
                markers_total: 1,
                dpi,
                output_document: out.join("page.png"),
                output_dir: out.join("targets"),
                skip_targets: true,
                manifest_path: None,
                ..TargetConfig::default()
            };
            let report = generate(&cfg).expect("generate");
            assert!((report.page_width_mm - (4.0 * 23.0 + 20.0)).abs() < 1e-9);
            let file = fs::File::open(out.join("page.png")).expect("open");
            let reader = png::Decoder::new(std::io::BufReader::new(file))
                .read_info()
                .expect("png info");
            let info = reader.info();
            (info.width, info.height)
        })
        .collect();
    // 112 mm: 661 px at 150 dpi, 1323 px at 300 dpi
    assert!(sizes[1].0.abs_diff(sizes[0].0 * 2) <= 1, "{sizes:?}");
    assert!(sizes[1].1.abs_diff(sizes[0].1 * 2) <= 1, "{sizes:?}");
}
