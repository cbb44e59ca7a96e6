use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Bulk-import events from a CSV export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, dental } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let imported = if *dental {
            ImportLogic::import_dental(&mut pool, file)?
        } else {
            ImportLogic::import_bathroom(&mut pool, cfg, file)?
        };

        let family = if *dental { "dental" } else { "bathroom" };
        success(format!("Imported {imported} {family} events from {file}"));

        if let Err(e) = ttlog(
            &pool.conn,
            "import",
            file,
            &format!("{imported} {family} rows imported"),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
