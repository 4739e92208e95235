mod common;
use common::{date, day, record};

use classtrack::core::store::{ATTENDANCE_KEY, KNOWN_KEYS, STUDENTS_KEY};
use classtrack::models::{
    AttendanceDay, AttendanceStatus, ClassInfo, Preferences, Student, TeacherInfo,
};
use classtrack::{AppError, KeyValueStore, MemoryStore, RecordStore, SqliteStore};

fn memory() -> RecordStore<MemoryStore> {
    RecordStore::new(MemoryStore::new())
}

fn sqlite() -> RecordStore<SqliteStore> {
    RecordStore::new(SqliteStore::open_in_memory().expect("open in-memory sqlite"))
}

fn stored_days<S: KeyValueStore>(store: &RecordStore<S>) -> Vec<AttendanceDay> {
    let raw = store
        .namespace()
        .get(ATTENDANCE_KEY)
        .expect("read key")
        .expect("attendance key present");
    serde_json::from_str(&raw).expect("stored attendance parses")
}

// ---------------------------
// attendance by date
// ---------------------------

fn check_save_then_load<S: KeyValueStore>(mut store: RecordStore<S>) {
    let d = day(
        "2024-01-15",
        vec![
            record(1, "John Doe", AttendanceStatus::Present),
            record(2, "Jane Smith", AttendanceStatus::Absent),
        ],
    );

    store.save_attendance(&d).expect("save");
    let loaded = store
        .load_attendance(date("2024-01-15"))
        .expect("load")
        .expect("day present");

    assert_eq!(loaded, d);
    assert_eq!(loaded.students[0].id, 1);
    assert_eq!(loaded.students[0].status, AttendanceStatus::Present);
    assert_eq!(loaded.students[1].id, 2);
    assert_eq!(loaded.students[1].status, AttendanceStatus::Absent);
}

#[test]
fn test_save_then_load_attendance_memory() {
    check_save_then_load(memory());
}

#[test]
fn test_save_then_load_attendance_sqlite() {
    check_save_then_load(sqlite());
}

fn check_upsert_keeps_one_record<S: KeyValueStore>(mut store: RecordStore<S>) {
    let first = day("2024-01-15", vec![record(1, "John Doe", AttendanceStatus::Present)]);
    let second = day("2024-01-15", vec![record(1, "John Doe", AttendanceStatus::Late)]);

    store.save_attendance(&first).expect("first save");
    store.save_attendance(&second).expect("second save");

    let loaded = store
        .load_attendance(date("2024-01-15"))
        .expect("load")
        .expect("day present");
    assert_eq!(loaded, second);
    assert_eq!(loaded.students[0].status, AttendanceStatus::Late);

    let days = stored_days(&store);
    assert_eq!(
        days.iter().filter(|d| d.date == date("2024-01-15")).count(),
        1
    );
}

#[test]
fn test_upsert_same_date_memory() {
    check_upsert_keeps_one_record(memory());
}

#[test]
fn test_upsert_same_date_sqlite() {
    check_upsert_keeps_one_record(sqlite());
}

#[test]
fn test_upsert_moves_day_to_end_and_keeps_others() {
    let mut store = memory();
    let a = day("2024-01-15", vec![record(1, "A", AttendanceStatus::Present)]);
    let b = day("2024-01-16", vec![record(1, "A", AttendanceStatus::Absent)]);
    let a2 = day("2024-01-15", vec![record(1, "A", AttendanceStatus::Late)]);

    store.save_attendance(&a).unwrap();
    store.save_attendance(&b).unwrap();
    store.save_attendance(&a2).unwrap();

    let days = stored_days(&store);
    assert_eq!(days, vec![b.clone(), a2.clone()]);

    // sorted view for callers
    let sorted = store.attendance_days().unwrap();
    assert_eq!(sorted, vec![a2, b]);
}

#[test]
fn test_load_unsaved_date_is_none() {
    let mut store = sqlite();
    assert!(store.load_attendance(date("2024-01-15")).unwrap().is_none());

    store
        .save_attendance(&day("2024-01-15", vec![record(1, "A", AttendanceStatus::Present)]))
        .unwrap();
    assert!(store.load_attendance(date("2024-01-14")).unwrap().is_none());
}

#[test]
fn test_delete_attendance() {
    let mut store = memory();
    store
        .save_attendance(&day("2024-01-15", vec![record(1, "A", AttendanceStatus::Present)]))
        .unwrap();

    assert!(store.delete_attendance(date("2024-01-15")).unwrap());
    assert!(!store.delete_attendance(date("2024-01-15")).unwrap());
    assert!(store.load_attendance(date("2024-01-15")).unwrap().is_none());
}

#[test]
fn test_deleting_last_day_removes_attendance_key() {
    let mut store = sqlite();
    store
        .save_attendance(&day("2024-01-15", vec![record(1, "A", AttendanceStatus::Present)]))
        .unwrap();
    assert!(store.namespace().get(ATTENDANCE_KEY).unwrap().is_some());

    assert!(store.delete_attendance(date("2024-01-15")).unwrap());

    assert!(store.namespace().get(ATTENDANCE_KEY).unwrap().is_none());
    assert!(store.attendance_days().unwrap().is_empty());
}

#[test]
fn test_save_fails_when_storage_disabled() {
    let mut kv = MemoryStore::new();
    kv.set_disabled(true);
    let mut store = RecordStore::new(kv);

    let err = store
        .save_attendance(&day("2024-01-15", vec![record(1, "A", AttendanceStatus::Present)]))
        .unwrap_err();
    assert!(matches!(err, AppError::StorageUnavailable(_)));
}

#[test]
fn test_save_fails_when_quota_exceeded_sqlite() {
    let kv = SqliteStore::open_in_memory().unwrap().with_quota(Some(64));
    let mut store = RecordStore::new(kv);

    let err = store
        .save_attendance(&day(
            "2024-01-15",
            vec![record(1, "A very long student name", AttendanceStatus::Present)],
        ))
        .unwrap_err();
    assert!(matches!(err, AppError::StorageUnavailable(_)));
    assert!(store.load_attendance(date("2024-01-15")).unwrap().is_none());
}

#[test]
fn test_corrupt_stored_record_is_parse_error() {
    let mut store = memory();
    store
        .namespace_mut()
        .set(ATTENDANCE_KEY, "{not json".to_string())
        .unwrap();

    let err = store.load_attendance(date("2024-01-15")).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
}

// ---------------------------
// singletons
// ---------------------------

#[test]
fn test_singletons_default_when_absent() {
    let store = sqlite();
    assert!(store.find_singleton::<Preferences>().unwrap().is_none());
    assert_eq!(
        store.load_singleton::<Preferences>().unwrap(),
        Preferences::default()
    );
    assert_eq!(
        store.load_singleton::<TeacherInfo>().unwrap().name,
        "Ms. Sarah Johnson"
    );
    assert_eq!(store.load_singleton::<ClassInfo>().unwrap().main_class, "5A");
}

#[test]
fn test_singleton_save_replaces_whole_record() {
    let mut store = memory();
    let prefs = Preferences {
        notifications: false,
        auto_save: false,
        dark_mode: true,
        email_reports: false,
        backup_reminder: false,
    };
    store.save_singleton(&prefs).unwrap();
    assert_eq!(store.load_singleton::<Preferences>().unwrap(), prefs);

    let teacher = TeacherInfo {
        name: "Mr. Alan Turing".into(),
        email: "alan@school.edu".into(),
        phone: "".into(),
        employee_id: "T-1".into(),
    };
    store.save_singleton(&teacher).unwrap();
    assert_eq!(store.find_singleton::<TeacherInfo>().unwrap(), Some(teacher));
}

#[test]
fn test_reset_then_preferences_are_default() {
    let mut store = sqlite();
    let prefs = Preferences {
        dark_mode: true,
        ..Preferences::default()
    };
    store.save_singleton(&prefs).unwrap();
    store
        .namespace_mut()
        .set("unrelated_key", "\"x\"".to_string())
        .unwrap();

    store.reset_all().unwrap();

    assert_eq!(
        store.load_singleton::<Preferences>().unwrap(),
        Preferences::default()
    );
    assert!(store.namespace().keys().unwrap().is_empty());
}

// ---------------------------
// roster
// ---------------------------

#[test]
fn test_students_round_trip() {
    let mut store = sqlite();
    assert!(store.load_students().unwrap().is_empty());

    let roster = vec![
        Student::new(1, "John Doe", "001", "5A"),
        Student::new(2, "Jane Smith", "002", "5A"),
    ];
    store.save_students(&roster).unwrap();
    assert_eq!(store.load_students().unwrap(), roster);

    let raw = store.namespace().get(STUDENTS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"rollNo\":\"001\""));
    assert!(raw.contains("\"class\":\"5A\""));
}

// ---------------------------
// snapshot
// ---------------------------

fn seed<S: KeyValueStore>(store: &mut RecordStore<S>) {
    store
        .save_attendance(&day(
            "2024-01-15",
            vec![
                record(1, "John Doe", AttendanceStatus::Present),
                record(2, "Jane Smith", AttendanceStatus::Absent),
            ],
        ))
        .unwrap();
    store
        .save_attendance(&day("2024-01-16", vec![record(1, "John Doe", AttendanceStatus::Late)]))
        .unwrap();
    store
        .save_singleton(&ClassInfo {
            main_class: "7C".into(),
            ..ClassInfo::default()
        })
        .unwrap();
    store
        .save_students(&[Student::new(1, "John Doe", "001", "7C")])
        .unwrap();
}

fn check_export_import_round_trip<S: KeyValueStore>(mut store: RecordStore<S>) {
    seed(&mut store);

    let teacher_before: TeacherInfo = store.load_singleton().unwrap();
    let class_before: ClassInfo = store.load_singleton().unwrap();
    let prefs_before: Preferences = store.load_singleton().unwrap();
    let students_before = store.load_students().unwrap();
    let days_before = stored_days(&store);

    let bundle = store.export_snapshot().unwrap();
    let text = bundle.to_pretty_json().unwrap();
    store.import_snapshot(&text).unwrap();

    assert_eq!(store.load_singleton::<TeacherInfo>().unwrap(), teacher_before);
    assert_eq!(store.load_singleton::<ClassInfo>().unwrap(), class_before);
    assert_eq!(store.load_singleton::<Preferences>().unwrap(), prefs_before);
    assert_eq!(store.load_students().unwrap(), students_before);
    assert_eq!(stored_days(&store), days_before);
}

#[test]
fn test_export_import_round_trip_memory() {
    check_export_import_round_trip(memory());
}

#[test]
fn test_export_import_round_trip_sqlite() {
    check_export_import_round_trip(sqlite());
}

#[test]
fn test_export_on_empty_store_uses_defaults() {
    let store = memory();
    let bundle = store.export_snapshot().unwrap();

    assert_eq!(bundle.version, Some(1));
    assert_eq!(bundle.teacher_info, Some(TeacherInfo::default()));
    assert_eq!(bundle.preferences, Some(Preferences::default()));
    assert_eq!(bundle.students, Some(vec![]));
    assert_eq!(bundle.attendance, Some(vec![]));
    assert!(bundle.timestamp.is_some());
}

#[test]
fn test_import_invalid_text_changes_nothing() {
    let mut store = sqlite();
    seed(&mut store);
    let keys_before = store.namespace().keys().unwrap();
    let values_before: Vec<_> = keys_before
        .iter()
        .map(|k| store.namespace().get(k).unwrap())
        .collect();

    for bad in ["{ this is not json", "[1, 2, 3]", "\"just a string\""] {
        let err = store.import_snapshot(bad).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)), "input {bad:?} gave {err:?}");
    }

    let values_after: Vec<_> = keys_before
        .iter()
        .map(|k| store.namespace().get(k).unwrap())
        .collect();
    assert_eq!(store.namespace().keys().unwrap(), keys_before);
    assert_eq!(values_after, values_before);
}

#[test]
fn test_import_rejects_unknown_status() {
    let mut store = memory();
    let text = r#"{
        "attendance": [
            { "date": "2024-01-15", "timestamp": "2024-01-15T09:00:00.000Z",
              "students": [ { "id": 1, "name": "A", "rollNo": "001", "status": "excused" } ] }
        ]
    }"#;

    let err = store.import_snapshot(text).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    assert!(store.namespace().keys().unwrap().is_empty());
}

#[test]
fn test_import_partial_bundle_leaves_other_keys() {
    let mut store = memory();
    seed(&mut store);
    let days_before = stored_days(&store);
    let class_before: ClassInfo = store.load_singleton().unwrap();

    let summary = store
        .import_snapshot(r#"{ "preferences": { "notifications": false, "autoSave": true, "darkMode": true, "emailReports": false, "backupReminder": true } }"#)
        .unwrap();

    assert_eq!(summary.sections, vec!["preferences"]);
    assert_eq!(summary.version, 0);
    assert!(store.load_singleton::<Preferences>().unwrap().dark_mode);
    assert_eq!(stored_days(&store), days_before);
    assert_eq!(store.load_singleton::<ClassInfo>().unwrap(), class_before);
}

#[test]
fn test_import_legacy_bundle_from_browser_export() {
    let mut store = sqlite();
    let text = r#"{
      "teacherInfo": { "name": "Ms. Sarah Johnson", "email": "sarah.johnson@school.edu", "phone": "+1 (555) 123-4567", "employeeId": "T-2024-001" },
      "classInfo": { "mainClass": "5A", "otherClasses": "6B, 7C", "subject": "Mathematics", "academicYear": "2024-2025" },
      "preferences": { "notifications": true, "autoSave": true, "darkMode": false, "emailReports": true, "backupReminder": true },
      "students": [],
      "attendance": [
        { "date": "2024-01-15",
          "students": [
            { "id": 1, "name": "John Doe", "rollNo": "001", "status": "present" },
            { "id": 2, "name": "Jane Smith", "rollNo": "002", "status": "absent" }
          ],
          "timestamp": "2024-01-15T10:30:00.000Z" }
      ],
      "timestamp": "2024-01-20T08:00:00.000Z"
    }"#;

    let summary = store.import_snapshot(text).unwrap();
    assert_eq!(summary.version, 0);
    assert_eq!(summary.attendance_days, 1);
    assert_eq!(summary.sections.len(), 5);

    let d = store.load_attendance(date("2024-01-15")).unwrap().unwrap();
    assert_eq!(d.students.len(), 2);
    assert_eq!(d.students[1].status, AttendanceStatus::Absent);
}

#[test]
fn test_import_rejects_newer_version_before_writing() {
    let mut store = memory();
    let err = store
        .import_snapshot(r#"{ "version": 99, "preferences": { "notifications": false, "autoSave": false, "darkMode": true, "emailReports": false, "backupReminder": false } }"#)
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::UnsupportedBundleVersion {
            found: 99,
            supported: 1
        }
    ));
    assert!(store.namespace().keys().unwrap().is_empty());
}

#[test]
fn test_import_collapses_duplicate_dates() {
    let mut store = memory();
    let text = r#"{ "attendance": [
        { "date": "2024-01-15", "timestamp": "2024-01-15T09:00:00Z",
          "students": [ { "id": 1, "name": "A", "rollNo": "001", "status": "present" } ] },
        { "date": "2024-01-15", "timestamp": "2024-01-15T10:00:00Z",
          "students": [ { "id": 1, "name": "A", "rollNo": "001", "status": "late" } ] }
    ] }"#;

    let summary = store.import_snapshot(text).unwrap();
    assert_eq!(summary.attendance_days, 1);

    let days = stored_days(&store);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].students[0].status, AttendanceStatus::Late);
}

fn check_import_is_atomic_under_quota<S: KeyValueStore>(mut store: RecordStore<S>) {
    let prefs = Preferences {
        dark_mode: true,
        ..Preferences::default()
    };
    store.save_singleton(&prefs).unwrap();
    let before: Vec<_> = KNOWN_KEYS
        .iter()
        .map(|k| store.namespace().get(k).unwrap())
        .collect();

    // small sections first, then a roster too large for the quota
    let big_roster: Vec<Student> = (0..200)
        .map(|i| Student::new(i, "Somebody With A Long Name", "000", "5A"))
        .collect();
    let bundle = classtrack::models::BackupBundle {
        version: Some(1),
        teacher_info: Some(TeacherInfo::default()),
        preferences: Some(Preferences::default()),
        students: Some(big_roster),
        ..Default::default()
    };
    let text = bundle.to_pretty_json().unwrap();

    let err = store.import_snapshot(&text).unwrap_err();
    assert!(matches!(err, AppError::StorageUnavailable(_)));

    let after: Vec<_> = KNOWN_KEYS
        .iter()
        .map(|k| store.namespace().get(k).unwrap())
        .collect();
    assert_eq!(after, before);
    assert!(store.load_singleton::<Preferences>().unwrap().dark_mode);
}

#[test]
fn test_import_is_atomic_under_quota_memory() {
    check_import_is_atomic_under_quota(RecordStore::new(
        MemoryStore::new().with_quota(Some(2_000)),
    ));
}

#[test]
fn test_import_is_atomic_under_quota_sqlite() {
    check_import_is_atomic_under_quota(RecordStore::new(
        SqliteStore::open_in_memory()
            .unwrap()
            .with_quota(Some(2_000)),
    ));
}
