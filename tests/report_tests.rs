mod common;
use common::{ct, day, init_db, init_db_with_data, record, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

use classtrack::core::report::ReportLogic;
use classtrack::models::AttendanceStatus;
use classtrack::utils::date::parse_period;
use classtrack::{MemoryStore, RecordStore};

#[test]
fn test_report_daily_stdout() {
    let db_path = setup_test_db("report_daily");
    init_db_with_data(&db_path);

    ct().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("83.3%"))
        .stdout(predicate::str::contains("Days: 2  Total present: 9"));
}

#[test]
fn test_report_students_stdout() {
    let db_path = setup_test_db("report_students");
    init_db_with_data(&db_path);

    // 1, 4 and 6 were present both days; 5 was late once, 2 and 3 absent once
    ct().args(["--db", &db_path, "report", "--students"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mike Johnson"))
        .stdout(predicate::str::contains("Students: 6  Perfect attendance: 4"));
}

#[test]
fn test_report_empty_period() {
    let db_path = setup_test_db("report_empty");
    init_db(&db_path);

    ct().args(["--db", &db_path, "report", "--period", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to report"));
}

#[test]
fn test_report_invalid_period_fails() {
    let db_path = setup_test_db("report_bad_period");
    init_db(&db_path);

    ct().args(["--db", &db_path, "report", "--period", "sometime"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn test_report_csv_files() {
    let db_path = setup_test_db("report_csv");
    let daily = temp_out("report_daily_csv", "csv");
    let students = temp_out("report_students_csv", "csv");
    init_db_with_data(&db_path);

    ct().args(["--db", &db_path, "report", "--file", &daily, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written"));

    let text = fs::read_to_string(&daily).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("date,present,absent,late,total,rate"));
    assert_eq!(lines.next(), Some("2024-01-15,4,1,1,6,83.3"));
    assert_eq!(lines.next(), Some("2024-01-16,5,1,0,6,83.3"));

    ct().args([
        "--db", &db_path, "report", "--students", "--file", &students, "--force",
    ])
    .assert()
    .success();

    let text = fs::read_to_string(&students).unwrap();
    assert!(text.starts_with("id,roll_no,name,present,absent,late,rate"));
    assert!(text.contains("3,003,Mike Johnson,1,1,0,50.0"));
    assert!(text.contains("5,005,David Brown,1,0,1,100.0"));
}

#[test]
fn test_report_logic_respects_period_bounds() {
    let mut store = RecordStore::new(MemoryStore::new());
    store
        .save_attendance(&day("2024-01-31", vec![record(1, "A", AttendanceStatus::Absent)]))
        .unwrap();
    store
        .save_attendance(&day("2024-02-01", vec![record(1, "A", AttendanceStatus::Present)]))
        .unwrap();

    let bounds = parse_period(Some("2024-02")).unwrap();
    let report = ReportLogic::build(&store, bounds).unwrap();

    assert_eq!(report.days.len(), 1);
    assert_eq!(report.totals.present, 1);
    assert_eq!(report.totals.absent, 0);
    assert_eq!(report.perfect_attendance(), 1);
    assert!((report.average_daily_rate() - 100.0).abs() < f64::EPSILON);

    let all = ReportLogic::build(&store, None).unwrap();
    assert_eq!(all.days.len(), 2);
    assert_eq!(all.students[0].counts.total(), 2);
    assert_eq!(all.perfect_attendance(), 0);
}
