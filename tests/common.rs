#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use classtrack::models::{AttendanceDay, AttendanceRecord, AttendanceStatus};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("classtrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_classtrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    ct().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and mark two days of attendance
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    ct().args([
        "--db",
        db_path,
        "attendance",
        "mark",
        "2024-01-15",
        "--absent",
        "3",
        "--late",
        "5",
    ])
    .assert()
    .success();

    ct().args([
        "--db",
        db_path,
        "attendance",
        "mark",
        "2024-01-16",
        "--all-present",
        "--absent",
        "2",
    ])
    .assert()
    .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn record(id: u32, name: &str, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        id,
        name: name.to_string(),
        roll_no: format!("{:03}", id),
        status,
    }
}

pub fn day(d: &str, records: Vec<AttendanceRecord>) -> AttendanceDay {
    AttendanceDay::new(date(d), records)
}
