use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceDay, AttendanceStatus, Student, builtin_roster};
use crate::storage::KeyValueStore;
use chrono::{NaiveDate, Utc};

/// Where a working copy came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingSource {
    Stored,
    DefaultRoster,
}

/// Requested changes for one `attendance mark` call.
#[derive(Debug, Clone, Default)]
pub struct MarkRequest {
    pub all: Option<AttendanceStatus>,
    pub present: Vec<u32>,
    pub absent: Vec<u32>,
    pub late: Vec<u32>,
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// The stored roster's active students, or the built-in roster when none is stored.
    /// A stored roster that is empty stays empty.
    pub fn roster<S: KeyValueStore>(store: &RecordStore<S>) -> AppResult<Vec<Student>> {
        match store.find_students()? {
            None => Ok(builtin_roster()),
            Some(stored) => Ok(stored.into_iter().filter(Student::is_active).collect()),
        }
    }

    /// Default day for a date nobody has saved: everyone present.
    pub fn default_day<S: KeyValueStore>(
        store: &RecordStore<S>,
        date: NaiveDate,
    ) -> AppResult<AttendanceDay> {
        let students = Self::roster(store)?
            .iter()
            .map(|s| s.to_record(AttendanceStatus::Present))
            .collect();
        Ok(AttendanceDay::new(date, students))
    }

    /// Stored day for `date`, or the default roster when nothing is stored.
    pub fn working_copy<S: KeyValueStore>(
        store: &RecordStore<S>,
        date: NaiveDate,
    ) -> AppResult<(AttendanceDay, WorkingSource)> {
        match store.load_attendance(date)? {
            Some(day) => Ok((day, WorkingSource::Stored)),
            None => Ok((Self::default_day(store, date)?, WorkingSource::DefaultRoster)),
        }
    }

    /// Read, modify the working copy, save. Unknown ids abort before any write.
    pub fn mark<S: KeyValueStore>(
        store: &mut RecordStore<S>,
        date: NaiveDate,
        req: &MarkRequest,
    ) -> AppResult<AttendanceDay> {
        let (mut day, _) = Self::working_copy(store, date)?;

        if let Some(status) = req.all {
            day.mark_all(status);
        }

        let changes = req
            .present
            .iter()
            .map(|id| (*id, AttendanceStatus::Present))
            .chain(req.absent.iter().map(|id| (*id, AttendanceStatus::Absent)))
            .chain(req.late.iter().map(|id| (*id, AttendanceStatus::Late)));

        for (id, status) in changes {
            if !day.mark(id, status) {
                return Err(AppError::StudentNotFound(id));
            }
        }

        day.timestamp = Utc::now();
        store.save_attendance(&day)?;
        Ok(day)
    }
}
