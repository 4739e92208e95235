use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        compress,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let dest = BackupLogic::export_path(cfg, file.as_deref(), *compress);
        let written = BackupLogic::export(&store, &dest, *compress, *force)?;
        success(format!(
            "Your data has been exported as a backup file: {}",
            written.display()
        ));
    }
    Ok(())
}
