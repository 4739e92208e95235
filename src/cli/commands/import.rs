use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, dry_run } = cmd {
        let path = expand_tilde(file);

        if *dry_run {
            let bundle = BackupLogic::inspect(&path)?;
            let sections = bundle.present_sections();
            info(format!(
                "Backup version {} with sections: {}",
                bundle.effective_version(),
                if sections.is_empty() {
                    "(none)".to_string()
                } else {
                    sections.join(", ")
                }
            ));
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        let summary = BackupLogic::import(&mut store, &path)?;

        if summary.sections.is_empty() {
            warning("The backup contained no known sections; nothing was changed.");
        } else {
            success(format!(
                "Your backup has been restored successfully ({}).",
                summary.sections.join(", ")
            ));
            if summary.version == 0 {
                info("The backup has no version tag; it was read as a legacy backup.");
            }
        }
    }
    Ok(())
}
