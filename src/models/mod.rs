pub mod attendance;
pub mod bundle;
pub mod settings;
pub mod student;

pub use attendance::{AttendanceDay, AttendanceRecord, AttendanceStatus, StatusCounts};
pub use bundle::{BUNDLE_VERSION, BackupBundle};
pub use settings::{ClassInfo, Preferences, Singleton, TeacherInfo};
pub use student::{Student, StudentStatus, builtin_roster};
