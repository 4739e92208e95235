use super::open_store;
use crate::cli::parser::{Commands, SettingsAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{ClassInfo, Preferences, TeacherInfo};
use crate::ui::messages::{header, success};
use crate::utils::colors::colorize_flag;

/// Each change starts from the currently shown record (stored or default)
/// and saves the whole record back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Settings { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    match action {
        SettingsAction::Show => {
            let t: TeacherInfo = store.load_singleton()?;
            let c: ClassInfo = store.load_singleton()?;
            let p: Preferences = store.load_singleton()?;

            header("Teacher");
            println!("  Name        : {}", t.name);
            println!("  Email       : {}", t.email);
            println!("  Phone       : {}", t.phone);
            println!("  Employee ID : {}", t.employee_id);
            println!();

            header("Class");
            println!("  Main class    : {}", c.main_class);
            println!("  Other classes : {}", c.other_classes);
            println!("  Subject       : {}", c.subject);
            println!("  Academic year : {}", c.academic_year);
            println!();

            header("Preferences");
            println!("  notifications   : {}", colorize_flag(p.notifications));
            println!("  autoSave        : {}", colorize_flag(p.auto_save));
            println!("  darkMode        : {}", colorize_flag(p.dark_mode));
            println!("  emailReports    : {}", colorize_flag(p.email_reports));
            println!("  backupReminder  : {}", colorize_flag(p.backup_reminder));
        }

        SettingsAction::Teacher {
            name,
            email,
            phone,
            employee_id,
        } => {
            let current: TeacherInfo = store.load_singleton()?;
            let updated = TeacherInfo {
                name: name.clone().unwrap_or(current.name),
                email: email.clone().unwrap_or(current.email),
                phone: phone.clone().unwrap_or(current.phone),
                employee_id: employee_id.clone().unwrap_or(current.employee_id),
            };
            store.save_singleton(&updated)?;
            success("Teacher info saved.");
        }

        SettingsAction::Class {
            main_class,
            other_classes,
            subject,
            academic_year,
        } => {
            let current: ClassInfo = store.load_singleton()?;
            let updated = ClassInfo {
                main_class: main_class.clone().unwrap_or(current.main_class),
                other_classes: other_classes.clone().unwrap_or(current.other_classes),
                subject: subject.clone().unwrap_or(current.subject),
                academic_year: academic_year.clone().unwrap_or(current.academic_year),
            };
            store.save_singleton(&updated)?;
            success("Class info saved.");
        }

        SettingsAction::Prefs {
            notifications,
            auto_save,
            dark_mode,
            email_reports,
            backup_reminder,
        } => {
            let current: Preferences = store.load_singleton()?;
            let updated = Preferences {
                notifications: notifications.unwrap_or(current.notifications),
                auto_save: auto_save.unwrap_or(current.auto_save),
                dark_mode: dark_mode.unwrap_or(current.dark_mode),
                email_reports: email_reports.unwrap_or(current.email_reports),
                backup_reminder: backup_reminder.unwrap_or(current.backup_reminder),
            };
            store.save_singleton(&updated)?;
            success("Preferences saved.");
        }
    }

    Ok(())
}
