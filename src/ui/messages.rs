//! User-facing notifications (the CLI's equivalent of toasts).

use crate::errors::AppError;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    if level == Level::Error {
        eprintln!("{color}{BOLD}{icon} {RESET}{msg}");
    } else {
        println!("{color}{BOLD}{icon} {RESET}{msg}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", "\x1b[34m", BOLD, msg, RESET);
}

/// Title + hint shown for a failed action, by error kind.
pub fn describe_failure(err: &AppError) -> (&'static str, &'static str) {
    match err {
        AppError::StorageUnavailable(_) => (
            "Save failed",
            "Local storage is full or unavailable; nothing was retried.",
        ),
        AppError::Parse(_) | AppError::UnsupportedBundleVersion { .. } => (
            "Import failed",
            "Please check the backup file format; no data was changed.",
        ),
        AppError::InvalidDate(_) | AppError::InvalidStatus(_) | AppError::InvalidPeriod(_) => {
            ("Invalid input", "Check the command arguments.")
        }
        AppError::Cancelled(_) => ("Cancelled", "Nothing was changed."),
        _ => ("Error", ""),
    }
}

/// Print a failure notification for `err`.
pub fn failure(err: &AppError) {
    let (title, hint) = describe_failure(err);
    error(format!("{title}: {err}"));
    if !hint.is_empty() {
        eprintln!("   {hint}");
    }
}
