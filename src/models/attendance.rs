use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attendance mark for one student on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" => Ok(AttendanceStatus::Present),
            "absent" | "a" => Ok(AttendanceStatus::Absent),
            "late" | "l" => Ok(AttendanceStatus::Late),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }
}

/// Denormalized copy of a student inside an [`AttendanceDay`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: u32,
    pub name: String,
    pub roll_no: String,
    pub status: AttendanceStatus,
}

/// Attendance for one calendar date. The date is the record's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub students: Vec<AttendanceRecord>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

impl StatusCounts {
    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.late
    }

    /// Share of attended marks (present + late), in percent.
    pub fn rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.present + self.late) as f64 * 100.0 / self.total() as f64
    }
}

impl AttendanceDay {
    pub fn new(date: NaiveDate, students: Vec<AttendanceRecord>) -> Self {
        Self {
            date,
            students,
            timestamp: Utc::now(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn counts(&self) -> StatusCounts {
        let mut c = StatusCounts::default();
        for s in &self.students {
            c.add(s.status);
        }
        c
    }

    /// Set the status of one student. Returns false when the id is not on this day.
    pub fn mark(&mut self, student_id: u32, status: AttendanceStatus) -> bool {
        match self.students.iter_mut().find(|s| s.id == student_id) {
            Some(s) => {
                s.status = status;
                true
            }
            None => false,
        }
    }

    pub fn mark_all(&mut self, status: AttendanceStatus) {
        for s in &mut self.students {
            s.status = status;
        }
    }
}
