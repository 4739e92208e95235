use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::prompt::confirm;

/// The store clears unconditionally; asking is this handler's job.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes {
            warning("This deletes ALL stored data: attendance, roster and settings.");
            if !confirm("Are you sure?")? {
                return Err(AppError::Cancelled("reset not confirmed".to_string()));
            }
        }

        let mut store = open_store(cfg)?;
        store.reset_all()?;
        success("All data has been reset.");
    }
    Ok(())
}
