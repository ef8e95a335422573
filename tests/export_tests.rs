mod common;

use common::{OPTIMAL_RESULT, missing_config, sample_assignments, sgr, temp_path, write_result};
use predicates::str::contains;
use shiftgrid::config::Config;
use shiftgrid::export::{ExportFormat, ExportLogic, schedule_rows};
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_reads_back() {
    let conf = missing_config("export_csv");
    let input = write_result("export_csv", OPTIMAL_RESULT);
    let out = temp_path("export_csv_out", "csv");

    sgr()
        .args([
            "--config", &conf, "--test", "export", "--input", &input, "--file", &out, "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("day,shift,assigned"));
    assert!(content.contains("Lundi,Garde,Alice"));
    assert!(content.contains("Mardi,Matin,\"Carol, Dan\""));
    // 7 days x 2 shifts
    assert_eq!(content.lines().count(), 15);
}

#[test]
fn test_export_json_reads_back() {
    let conf = missing_config("export_json");
    let input = write_result("export_json", OPTIMAL_RESULT);
    let out = temp_path("export_json_out", "json");

    sgr()
        .args([
            "--config", &conf, "--test", "export", "--input", &input, "--file", &out, "--format",
            "json",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");
    assert_eq!(rows.len(), 14);
    assert_eq!(rows[2]["day"], "Mardi");
    assert_eq!(rows[2]["shift"], "Matin");
    assert_eq!(rows[2]["assigned"], "Carol, Dan");
}

#[test]
fn test_export_format_inferred_from_extension() {
    let conf = missing_config("export_infer");
    let input = write_result("export_infer", OPTIMAL_RESULT);
    let out = temp_path("export_infer_out", "json");

    sgr()
        .args(["--config", &conf, "--test", "export", "--input", &input, "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.trim_start().starts_with('['));
}

#[test]
fn test_export_unknown_extension_fails() {
    let conf = missing_config("export_unknown_ext");
    let input = write_result("export_unknown_ext", OPTIMAL_RESULT);
    let out = temp_path("export_unknown_ext_out", "txt");

    sgr()
        .args(["--config", &conf, "--test", "export", "--input", &input, "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: txt"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_refuses_relative_path() {
    let conf = missing_config("export_relative");
    let input = write_result("export_relative", OPTIMAL_RESULT);

    sgr()
        .args([
            "--config", &conf, "--test", "export", "--input", &input, "--file", "week.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));

    assert!(!Path::new("week.csv").exists());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let conf = missing_config("export_existing");
    let input = write_result("export_existing", OPTIMAL_RESULT);
    let out = temp_path("export_existing_out", "csv");
    fs::write(&out, "keep me").expect("write existing file");

    sgr()
        .args(["--config", &conf, "--test", "export", "--input", &input, "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sgr()
        .args([
            "--config", &conf, "--test", "export", "--input", &input, "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("day,shift,assigned"));
}

#[test]
fn test_export_logic_infers_format() {
    let cfg = Config::default();
    let rows = schedule_rows(&cfg.days, &cfg.shift_table(), &sample_assignments());
    let out = temp_path("export_logic_out", "CSV");

    let used = ExportLogic::export(&rows, None, Path::new(&out), false).unwrap();
    assert_eq!(used, ExportFormat::Csv);

    let mut reader = csv::Reader::from_path(&out).expect("read csv");
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 14);
    assert_eq!(&records[1][2], "Alice");

    let relative = ExportLogic::export(&rows, Some(ExportFormat::Json), Path::new("out.json"), true);
    assert!(relative.is_err());
}
