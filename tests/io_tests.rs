
use std::fs;
use std::path::PathBuf;

use heatmap_lib::{render_to_file, sweep, write_csv_file, HeatmapStyle};
use test_utils::{assert_close, reference_inputs, spot_vol_axes};

/// Per-process path under the system temp dir.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("heatmap_lib_{}_{}", std::process::id(), name))
}

#[cfg(feature = "serde")]
mod config_files {
    use super::*;
    use heatmap_lib::{HeatmapConfig, InputField};

    fn bundled_config() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/heatmap.toml")
    }

    #[test]
    fn test_bundled_config_loads_and_evaluates() {
        let config = HeatmapConfig::from_file(bundled_config()).expect("bundled config should parse");
        assert_eq!(config.x_axis.field, InputField::Underlying);
        assert_eq!(config.y_axis.field, InputField::Volatility);
        assert_eq!(config.thresholds.call, Some(12.0));
        assert_eq!(config.thresholds.put, Some(5.0));

        let out = config.evaluate().unwrap();
        assert_eq!(out.sample_count(), config.sample_count);
        assert_eq!(out.x_samples[0], 20.0);
        assert_eq!(out.y_samples[config.sample_count - 1], 0.9);

        let style = config.style().unwrap();
        assert_eq!(style.call_threshold, Some(12.0));
    }

    #[test]
    fn test_missing_config_names_path() {
        let path = temp_path("does_not_exist.toml");
        let err = HeatmapConfig::from_file(&path).unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.contains("failed to read config"), "{}", text);
        assert!(text.contains(&path.display().to_string()), "{}", text);
    }

    #[test]
    fn test_malformed_config_names_path() {
        let path = temp_path("malformed.toml");
        fs::write(&path, "sample_count = \"ten\"\n").unwrap();
        let err = HeatmapConfig::from_file(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        let text = format!("{:#}", err);
        assert!(text.contains(&path.display().to_string()), "{}", text);
        assert!(text.contains("failed to parse heatmap config"), "{}", text);
    }
}

#[test]
fn test_svg_and_csv_files_round_trip() {
    let (x, y) = spot_vol_axes();
    let out = sweep(&reference_inputs(), &x, &y, 4).unwrap();

    let svg_path = temp_path("heatmap.svg");
    let csv_path = temp_path("heatmap.csv");
    let style = HeatmapStyle {
        call_threshold: Some(12.0),
        ..HeatmapStyle::default()
    };

    render_to_file(&out, &style, &svg_path).expect("render failed");
    write_csv_file(&csv_path, &out).expect("export failed");

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Call Option Price"));
    assert!(svg.contains("Put Option Price"));

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["underlying", "volatility", "call", "put"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 16);
    let last = &records[15];
    assert_close(last[0].parse().unwrap(), x.max, 1e-12, "x");
    assert_close(last[1].parse().unwrap(), y.max, 1e-12, "y");
    assert_close(last[2].parse().unwrap(), out.call.get(3, 3).unwrap(), 1e-12, "call");
    assert_close(last[3].parse().unwrap(), out.put.get(3, 3).unwrap(), 1e-12, "put");

    let _ = fs::remove_file(&svg_path);
    let _ = fs::remove_file(&csv_path);
}

#[test]
fn test_csv_into_missing_directory_fails() {
    let (x, y) = spot_vol_axes();
    let out = sweep(&reference_inputs(), &x, &y, 2).unwrap();
    let path = temp_path("no_such_dir").join("grid.csv");
    let err = write_csv_file(&path, &out).unwrap_err();
    assert!(err.to_string().contains("failed to create"), "{}", err);
}
