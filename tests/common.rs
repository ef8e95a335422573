#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftgrid::models::assignment::Assignments;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sgr() -> Command {
    cargo_bin_cmd!("shiftgrid")
}

pub fn week() -> Vec<String> {
    [
        "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

/// The combined map used by most scenarios.
pub fn sample_assignments() -> Assignments {
    Assignments::new()
        .with("Lundi", "Garde", &["Alice"])
        .with("Dimanche", "Garde", &["Bob"])
        .with("Mardi", "Matin", &["Carol", "Dan"])
}

/// Create a temporary path inside tempdir and ensure it does not exist
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("shiftgrid_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A config path that does not exist: the CLI falls back to defaults.
pub fn missing_config(name: &str) -> String {
    temp_path(&format!("{name}_missing_conf"), "conf")
}

pub const OPTIMAL_RESULT: &str = r#"{
    "status": "optimal",
    "assigns": {
        "Lundi_Garde": ["c1"],
        "Dimanche_Garde": ["c2"],
        "Mardi_Matin": ["c3", "c4"]
    },
    "hired": ["c1", "c2", "c3", "c4"],
    "objective": 1234.5,
    "candidates": [
        {"id": "c1", "name": "Alice", "hire_cost": 1200.0},
        {"id": "c2", "name": "Bob"},
        {"id": "c3", "name": "Carol"},
        {"id": "c4", "name": "Dan"}
    ]
}"#;

pub const INFEASIBLE_RESULT: &str = r#"{
    "status": "infeasible",
    "iis": ["demand[Lundi,Garde,medecin] >= 2", "avail[c1,Lundi] = 0"]
}"#;

pub const INTERRUPTED_RESULT: &str = r#"{
    "status": "user_abort"
}"#;

/// Write a solver result to a fresh temp file and return its path.
pub fn write_result(name: &str, json: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, json).expect("write result");
    p
}
