pub mod attendance;
pub mod backup;
pub mod log;
pub mod report;
pub mod store;

pub use store::RecordStore;
