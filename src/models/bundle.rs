use super::attendance::AttendanceDay;
use super::settings::{ClassInfo, Preferences, TeacherInfo};
use super::student::Student;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version written by this build. Bundles without a version field are
/// version 0 (written before versioning existed) and read the same way.
pub const BUNDLE_VERSION: u32 = 1;

/// Whole-state snapshot used for export/import. Never persisted as a record.
///
/// Every field is optional on the way in: an absent field means "leave that
/// key alone" on import. Export always fills every field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_info: Option<TeacherInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_info: Option<ClassInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<Student>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<Vec<AttendanceDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl BackupBundle {
    /// Parse bundle text. Only a JSON object is accepted at the top level.
    pub fn parse(text: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| AppError::Parse(format!("backup is not valid JSON: {e}")))?;

        if !value.is_object() {
            return Err(AppError::Parse(
                "backup must be a JSON object at the top level".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::Parse(format!("backup has an unexpected shape: {e}")))
    }

    pub fn to_pretty_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Export(e.to_string()))
    }

    pub fn effective_version(&self) -> u32 {
        self.version.unwrap_or(0)
    }

    /// Names of the top-level record fields this bundle carries.
    pub fn present_sections(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.teacher_info.is_some() {
            out.push("teacherInfo");
        }
        if self.class_info.is_some() {
            out.push("classInfo");
        }
        if self.preferences.is_some() {
            out.push("preferences");
        }
        if self.students.is_some() {
            out.push("students");
        }
        if self.attendance.is_some() {
            out.push("attendance");
        }
        out
    }
}
