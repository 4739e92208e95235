use super::attendance::{AttendanceRecord, AttendanceStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Inactive => "Inactive",
        }
    }
}

/// Roster entry (`classtrack_students`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub roll_no: String,
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub status: StudentStatus,
    /// Percentage carried by bundles written by older front ends; never computed here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<f64>,
}

impl Student {
    pub fn new(id: u32, name: &str, roll_no: &str, class_name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            class_name: class_name.to_string(),
            status: StudentStatus::Active,
            attendance: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }

    pub fn to_record(&self, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: self.id,
            name: self.name.clone(),
            roll_no: self.roll_no.clone(),
            status,
        }
    }
}

/// Roster used when nothing has been saved yet.
pub fn builtin_roster() -> Vec<Student> {
    [
        (1, "John Doe", "001"),
        (2, "Jane Smith", "002"),
        (3, "Mike Johnson", "003"),
        (4, "Sarah Wilson", "004"),
        (5, "David Brown", "005"),
        (6, "Emily Davis", "006"),
    ]
    .into_iter()
    .map(|(id, name, roll)| Student::new(id, name, roll, "5A"))
    .collect()
}
