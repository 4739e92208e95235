//! The local record store: typed read/modify/write access to the classroom
//! records kept in a [`KeyValueStore`] namespace, plus whole-state
//! export/import and reset.
//!
//! Absence is reported explicitly everywhere (`Option`); the one defaulting
//! helper is [`RecordStore::load_singleton`].

use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceDay, BUNDLE_VERSION, BackupBundle, ClassInfo, Preferences, Singleton, Student,
    TeacherInfo,
};
use crate::storage::{KeyValueStore, WriteBatch};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub const STUDENTS_KEY: &str = "classtrack_students";
pub const ATTENDANCE_KEY: &str = "classtrack_attendance";

/// Every key the store reads or writes.
pub const KNOWN_KEYS: [&str; 5] = [
    TeacherInfo::KEY,
    ClassInfo::KEY,
    Preferences::KEY,
    STUDENTS_KEY,
    ATTENDANCE_KEY,
];

/// What an import changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub version: u32,
    pub sections: Vec<&'static str>,
    pub attendance_days: usize,
    pub students: usize,
}

pub struct RecordStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn namespace(&self) -> &S {
        &self.kv
    }

    pub fn namespace_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.kv.get(key)? {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| AppError::Parse(format!("stored record '{key}' is corrupt: {e}"))),
        }
    }

    fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> AppResult<String> {
        serde_json::to_string(value)
            .map_err(|e| AppError::Parse(format!("cannot serialize '{key}': {e}")))
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let text = Self::encode(key, value)?;
        self.kv.set(key, text)
    }

    /// Audit lines are best effort; a failure never fails the operation.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.kv.audit(operation, target, message) {
            warn!(operation, error = %e, "failed to write audit log");
        }
    }

    // ---------------------------
    // Attendance by date
    // ---------------------------

    fn attendance_collection(&self) -> AppResult<Vec<AttendanceDay>> {
        Ok(self.read(ATTENDANCE_KEY)?.unwrap_or_default())
    }

    /// Exact-date lookup. `None` means nothing was saved for that date.
    pub fn load_attendance(&self, date: NaiveDate) -> AppResult<Option<AttendanceDay>> {
        let found = self
            .attendance_collection()?
            .into_iter()
            .rev()
            .find(|d| d.date == date);
        debug!(%date, found = found.is_some(), "attendance lookup");
        Ok(found)
    }

    /// Upsert keyed by date: drop any record for `day.date`, then append `day`.
    pub fn save_attendance(&mut self, day: &AttendanceDay) -> AppResult<()> {
        let mut days = self.attendance_collection()?;
        days.retain(|d| d.date != day.date);
        days.push(day.clone());
        self.write(ATTENDANCE_KEY, &days)?;

        let counts = day.counts();
        self.audit(
            "attendance",
            &day.date_str(),
            &format!(
                "Saved {} records ({} present, {} absent, {} late)",
                day.students.len(),
                counts.present,
                counts.absent,
                counts.late
            ),
        );
        info!(date = %day.date, records = day.students.len(), "attendance saved");
        Ok(())
    }

    /// Remove the record for `date`. Returns false when there was none.
    pub fn delete_attendance(&mut self, date: NaiveDate) -> AppResult<bool> {
        let mut days = self.attendance_collection()?;
        let before = days.len();
        days.retain(|d| d.date != date);
        if days.len() == before {
            return Ok(false);
        }

        if days.is_empty() {
            self.kv.remove(ATTENDANCE_KEY)?;
        } else {
            self.write(ATTENDANCE_KEY, &days)?;
        }
        self.audit("attendance_del", &date.format("%Y-%m-%d").to_string(), "Deleted attendance");
        Ok(true)
    }

    /// The whole collection, sorted by date.
    pub fn attendance_days(&self) -> AppResult<Vec<AttendanceDay>> {
        let mut days = self.attendance_collection()?;
        days.sort_by_key(|d| d.date);
        Ok(days)
    }

    // ---------------------------
    // Singletons
    // ---------------------------

    pub fn find_singleton<T: Singleton>(&self) -> AppResult<Option<T>> {
        self.read(T::KEY)
    }

    /// The stored record, or `T`'s built-in default when nothing is stored.
    pub fn load_singleton<T: Singleton>(&self) -> AppResult<T> {
        Ok(self.find_singleton::<T>()?.unwrap_or_default())
    }

    /// Replace the whole record.
    pub fn save_singleton<T: Singleton>(&mut self, record: &T) -> AppResult<()> {
        self.write(T::KEY, record)?;
        self.audit("settings", T::KEY, &format!("Saved {}", T::LABEL));
        Ok(())
    }

    // ---------------------------
    // Roster
    // ---------------------------

    pub fn find_students(&self) -> AppResult<Option<Vec<Student>>> {
        self.read(STUDENTS_KEY)
    }

    pub fn load_students(&self) -> AppResult<Vec<Student>> {
        Ok(self.find_students()?.unwrap_or_default())
    }

    pub fn save_students(&mut self, students: &[Student]) -> AppResult<()> {
        self.write(STUDENTS_KEY, students)?;
        self.audit(
            "students",
            STUDENTS_KEY,
            &format!("Saved roster of {} students", students.len()),
        );
        Ok(())
    }

    // ---------------------------
    // Snapshot
    // ---------------------------

    /// Assemble the whole state. Missing records become defaults or empty collections.
    pub fn export_snapshot(&self) -> AppResult<BackupBundle> {
        let bundle = BackupBundle {
            version: Some(BUNDLE_VERSION),
            teacher_info: Some(self.load_singleton()?),
            class_info: Some(self.load_singleton()?),
            preferences: Some(self.load_singleton()?),
            students: Some(self.load_students()?),
            attendance: Some(self.attendance_collection()?),
            timestamp: Some(Utc::now()),
        };

        debug!(
            students = bundle.students.as_ref().map_or(0, Vec::len),
            days = bundle.attendance.as_ref().map_or(0, Vec::len),
            "snapshot exported"
        );
        Ok(bundle)
    }

    /// Parse `text` as a bundle and apply every present section in one atomic
    /// write. Nothing is written when parsing, version checks or staging fail.
    pub fn import_snapshot(&mut self, text: &str) -> AppResult<ImportSummary> {
        let bundle = BackupBundle::parse(text)?;
        self.import_bundle(bundle)
    }

    pub fn import_bundle(&mut self, bundle: BackupBundle) -> AppResult<ImportSummary> {
        let version = bundle.effective_version();
        if version > BUNDLE_VERSION {
            return Err(AppError::UnsupportedBundleVersion {
                found: version,
                supported: BUNDLE_VERSION,
            });
        }

        let sections = bundle.present_sections();
        let mut batch = WriteBatch::new();

        if let Some(t) = &bundle.teacher_info {
            batch.put(TeacherInfo::KEY, Self::encode(TeacherInfo::KEY, t)?);
        }
        if let Some(c) = &bundle.class_info {
            batch.put(ClassInfo::KEY, Self::encode(ClassInfo::KEY, c)?);
        }
        if let Some(p) = &bundle.preferences {
            batch.put(Preferences::KEY, Self::encode(Preferences::KEY, p)?);
        }
        if let Some(s) = &bundle.students {
            batch.put(STUDENTS_KEY, Self::encode(STUDENTS_KEY, s)?);
        }

        let mut attendance_days = 0;
        if let Some(days) = bundle.attendance {
            let days = collapse_duplicate_dates(days);
            attendance_days = days.len();
            batch.put(ATTENDANCE_KEY, Self::encode(ATTENDANCE_KEY, &days)?);
        }

        self.kv.apply(batch)?;

        let summary = ImportSummary {
            version,
            sections,
            attendance_days,
            students: bundle.students.as_ref().map_or(0, Vec::len),
        };
        self.audit(
            "import",
            &summary.sections.join(","),
            &format!("Imported bundle version {version}"),
        );
        info!(version, sections = ?summary.sections, "snapshot imported");
        Ok(summary)
    }

    /// Clear the whole namespace, including keys this store does not own.
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.kv.clear()?;
        self.audit("reset", "*", "Cleared all stored data");
        info!("namespace reset");
        Ok(())
    }
}

/// Keep one day per date; the later occurrence wins, at the later position.
fn collapse_duplicate_dates(days: Vec<AttendanceDay>) -> Vec<AttendanceDay> {
    let mut out: Vec<AttendanceDay> = Vec::with_capacity(days.len());
    for day in days {
        out.retain(|d| d.date != day.date);
        out.push(day);
    }
    out
}
