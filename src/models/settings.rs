//! Singleton records: at most one instance each, identified only by its key.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record stored whole under one fixed key, with a built-in default.
pub trait Singleton: Serialize + DeserializeOwned + Default {
    const KEY: &'static str;
    const LABEL: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub employee_id: String,
}

impl Default for TeacherInfo {
    fn default() -> Self {
        Self {
            name: "Ms. Sarah Johnson".to_string(),
            email: "sarah.johnson@school.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            employee_id: "T-2024-001".to_string(),
        }
    }
}

impl Singleton for TeacherInfo {
    const KEY: &'static str = "classtrack_teacher_info";
    const LABEL: &'static str = "teacher info";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub main_class: String,
    pub other_classes: String,
    pub subject: String,
    pub academic_year: String,
}

impl Default for ClassInfo {
    fn default() -> Self {
        Self {
            main_class: "5A".to_string(),
            other_classes: "6B, 7C".to_string(),
            subject: "Mathematics".to_string(),
            academic_year: "2024-2025".to_string(),
        }
    }
}

impl Singleton for ClassInfo {
    const KEY: &'static str = "classtrack_class_info";
    const LABEL: &'static str = "class info";
}

/// Independent boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications: bool,
    pub auto_save: bool,
    pub dark_mode: bool,
    pub email_reports: bool,
    pub backup_reminder: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_save: true,
            dark_mode: false,
            email_reports: true,
            backup_reminder: true,
        }
    }
}

impl Singleton for Preferences {
    const KEY: &'static str = "classtrack_preferences";
    const LABEL: &'static str = "preferences";
}
