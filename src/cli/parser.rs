use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for classtrack
/// Local classroom records: attendance by date, roster, settings, backups
#[derive(Parser)]
#[command(
    name = "classtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local classroom record store: attendance, roster, settings and backups on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (overrides $EDITOR/$VISUAL)")]
        editor: Option<String>,
    },

    /// Show, mark, list or delete daily attendance
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Manage the student roster
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Show or change teacher, class and preference settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Export all data to a JSON backup file
    Export {
        /// Output file (default: <backup_dir>/classtrack_backup_YYYY-MM-DD.json)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Write a .zip archive holding the JSON backup
        #[arg(long)]
        compress: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON (or zipped JSON) backup file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only parse and describe the backup, do not write anything
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Delete ALL stored data
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Attendance statistics computed from stored days
    Report {
        /// Filter by period: YYYY, YYYY-MM, YYYY-MM-DD, ranges like YYYY-MM:YYYY-MM, or all
        #[arg(long, short)]
        period: Option<String>,

        /// Per-student rates instead of daily rows
        #[arg(long)]
        students: bool,

        /// Write the selected table as CSV
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "info", help = "Show stored keys, sizes and quota")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Show attendance for a date (default roster if nothing saved)
    Show {
        /// Date (YYYY-MM-DD, today, yesterday)
        date: String,
    },

    /// Mark attendance for a date and save it
    Mark {
        /// Date (YYYY-MM-DD, today, yesterday)
        date: String,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// List saved dates with daily counts
    List {
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Delete the saved attendance for a date
    Delete { date: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct MarkArgs {
    /// Mark everybody present first
    #[arg(long = "all-present", conflicts_with_all = ["all_absent", "all"])]
    pub all_present: bool,

    /// Mark everybody absent first
    #[arg(long = "all-absent", conflicts_with = "all")]
    pub all_absent: bool,

    /// Mark everybody with STATUS first (present, absent, late or p/a/l)
    #[arg(long, value_name = "STATUS")]
    pub all: Option<String>,

    /// Student ids to mark present (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub present: Vec<u32>,

    /// Student ids to mark absent (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub absent: Vec<u32>,

    /// Student ids to mark late (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub late: Vec<u32>,
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// List the roster
    List,

    /// Add a student
    Add {
        #[arg(long)]
        id: u32,

        #[arg(long)]
        name: String,

        #[arg(long = "roll-no")]
        roll_no: String,

        /// Class (default: configured default_class)
        #[arg(long = "class")]
        class_name: Option<String>,
    },

    /// Remove a student by id
    Remove { id: u32 },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print teacher info, class info and preferences
    Show,

    /// Replace teacher info (unspecified fields keep their shown value)
    Teacher {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "employee-id")]
        employee_id: Option<String>,
    },

    /// Replace class info (unspecified fields keep their shown value)
    Class {
        #[arg(long = "main-class")]
        main_class: Option<String>,
        #[arg(long = "other-classes")]
        other_classes: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long = "academic-year")]
        academic_year: Option<String>,
    },

    /// Replace preferences (unspecified flags keep their shown value)
    Prefs {
        #[arg(long)]
        notifications: Option<bool>,
        #[arg(long = "auto-save")]
        auto_save: Option<bool>,
        #[arg(long = "dark-mode")]
        dark_mode: Option<bool>,
        #[arg(long = "email-reports")]
        email_reports: Option<bool>,
        #[arg(long = "backup-reminder")]
        backup_reminder: Option<bool>,
    },
}
