use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::storage::log::read_log;
use crate::utils::colors::{display_width, strip_ansi};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "attendance" => Colour::Green,
        "attendance_del" | "reset" => Colour::Red,
        "settings" | "students" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" | "import" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &SqliteStore) -> AppResult<()> {
        let entries = read_log(&store.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(e.date);

            let color = color_for_operation(&e.operation);
            let mut label = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                label.push_str(&format!(" ({})", e.target));
            }

            // truncate on the visible text, then recolor the first word only
            let visible = strip_ansi(&label);
            let label = if visible.chars().count() > MAX_OP_WIDTH {
                let cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                let cut = format!("{cut}...");
                match cut.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(cut.as_str()).to_string(),
                }
            } else {
                label
            };

            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(display_width(&label)));

            println!(
                "{:>id_w$}: {:<25} | {}{} => {}",
                e.id,
                date,
                label,
                padding,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
