use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::events::{DentalInput, EventLogic};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time;

/// Log a toothbrushing, or rewrite one with `--edit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Brush {
        at,
        flosser,
        duration,
        edit,
    } = cmd
    {
        let input = DentalInput {
            timestamp: at.clone().unwrap_or_else(time::now_iso),
            used_flosser: *flosser,
            duration: *duration,
        };

        let pool = DbPool::new(&cfg.database)?;

        match edit {
            Some(id) => {
                EventLogic::edit_dental(&pool, *id, &input)?;
                success(format!("Brushing #{id} updated"));
                audit(&pool, "edit", *id);
            }
            None => {
                let id = EventLogic::add_dental(&pool, &input)?;
                success(format!("Brushing #{id} logged at {}", input.timestamp));
                audit(&pool, "brush", id);
            }
        }
    }

    Ok(())
}

fn audit(pool: &DbPool, op: &str, id: i64) {
    if let Err(e) = ttlog(&pool.conn, op, "brush", &format!("dental event #{id}")) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
