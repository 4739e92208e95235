use super::open_store;
use crate::cli::parser::{Commands, StudentAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Student { action } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    match action {
        StudentAction::List => {
            let Some(students) = store.find_students()? else {
                info("No roster saved yet; attendance uses the built-in roster.");
                return Ok(());
            };
            if students.is_empty() {
                info("The roster is empty.");
                return Ok(());
            }

            let mut table = Table::new(&["id", "roll", "name", "class", "status"]);
            for s in &students {
                table.add_row(vec![
                    s.id.to_string(),
                    s.roll_no.clone(),
                    s.name.clone(),
                    s.class_name.clone(),
                    s.status.as_str().to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        StudentAction::Add {
            id,
            name,
            roll_no,
            class_name,
        } => {
            let mut students = store.load_students()?;
            if students.iter().any(|s| s.id == *id) {
                return Err(AppError::DuplicateStudent(*id));
            }

            let class_name = class_name.as_deref().unwrap_or(&cfg.default_class);
            students.push(Student::new(*id, name, roll_no, class_name));
            store.save_students(&students)?;
            success(format!("Student {} ({}) added.", name, id));
        }

        StudentAction::Remove { id } => {
            let mut students = store.load_students()?;
            let before = students.len();
            students.retain(|s| s.id != *id);
            if students.len() == before {
                return Err(AppError::StudentNotFound(*id));
            }

            store.save_students(&students)?;
            success(format!("Student {} removed.", id));
        }
    }

    Ok(())
}
