use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::events::EventLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, dental, yes } = cmd {
        let family = if *dental { "dental" } else { "bathroom" };

        if !*yes
            && !ask_confirmation(&format!(
                "Delete {family} event #{id}? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        if *dental {
            EventLogic::delete_dental(&pool, *id)?;
        } else {
            EventLogic::delete_bathroom(&pool, *id)?;
        }
        success(format!("{family} event #{id} has been deleted."));

        if let Err(e) = ttlog(&pool.conn, "del", family, &format!("deleted event #{id}")) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
