//! Integration tests for the aoi-calc pipeline.
//!
//! These run profile parsing, geometry resolution, evaluation and rendering
//! together, the same way `main` wires them.

use aoi_cli::application::evaluate::{evaluate, resolve_errors, resolve_geometry, GeometryOverrides};
use aoi_cli::application::render::{render, OutputFormat, TEXT_HEADER};
use aoi_cli::infrastructure::config::{load_config, parse_config, AppConfig};
use aoi_core::AoiError;

#[test]
fn test_default_run_prints_four_blocks() {
    let config = AppConfig::default();
    let geometry = resolve_geometry(&config, &GeometryOverrides::default()).unwrap();
    let errors = resolve_errors(&config, &[]);

    let reports = evaluate(geometry, &errors).unwrap();
    let text = render(&reports, OutputFormat::Text).unwrap();

    assert!(text.contains(TEXT_HEADER));
    let blocks = text.lines().filter(|l| l.starts_with("Calculations for ")).count();
    assert_eq!(blocks, 4);
    for e in ["0.5", "1.0", "1.5", "2.0"] {
        assert!(text.contains(&format!("Calculations for {e}° error:")), "missing {e}");
    }
}

#[test]
fn test_profile_and_overrides_combine() {
    // Profile says a 1440p panel at 750 mm; the command line moves the participant closer.
    let config = parse_config(
        r#"
[display]
width_px = 2560
height_px = 1440
width_mm = 600.0
height_mm = 340.0

[analysis]
error_degrees = [1.0]
"#,
    )
    .unwrap();
    let overrides = GeometryOverrides { distance_mm: Some(600.0), ..GeometryOverrides::default() };

    let geometry = resolve_geometry(&config, &overrides).unwrap();
    let reports = evaluate(geometry, &resolve_errors(&config, &[])).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(geometry.distance_mm(), 600.0);
    assert_eq!(geometry.width_px(), 2560);
    // 2 * 600 * tan(0.5°) * 2560/600 ≈ 44.68 px per side
    let width = reports[0].recommended_aoi_size.width_pixels;
    assert!((width - 89.36).abs() < 0.05, "got {width}");
}

#[test]
fn test_json_output_round_trips_report_fields() {
    let config = AppConfig::default();
    let geometry = resolve_geometry(&config, &GeometryOverrides::default()).unwrap();
    let reports = evaluate(geometry, &[0.0, 1.0]).unwrap();

    let json = render(&reports, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["recommended_aoi_size"]["width_pixels"], 0.0);
    assert_eq!(arr[1]["error_degrees"], 1.0);
}

#[test]
fn test_negative_error_on_command_line_is_rejected() {
    let config = AppConfig::default();
    let geometry = resolve_geometry(&config, &GeometryOverrides::default()).unwrap();
    let errors = resolve_errors(&config, &[1.0, -0.5]);

    assert_eq!(evaluate(geometry, &errors), Err(AoiError::InvalidAngle(-0.5)));
}

#[test]
fn test_invalid_profile_geometry_is_reported_by_field() {
    let config = parse_config("[display]\nwidth_mm = -1.0\n").unwrap();
    let result = resolve_geometry(&config, &GeometryOverrides::default());
    assert!(matches!(result, Err(AoiError::InvalidGeometry { field: "width_mm", .. })));
}

#[test]
fn test_profile_file_on_disk_is_used() {
    let dir = std::env::temp_dir().join(format!("aoi_calc_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("lab.toml");
    std::fs::write(&path, "[analysis]\nerror_degrees = [0.25]\n").unwrap();

    let loaded = load_config(Some(path.as_path())).unwrap();

    assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    assert_eq!(resolve_errors(&loaded.config, &[]), vec![0.25]);
    std::fs::remove_dir_all(&dir).ok();
}
