use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::events::{BathroomInput, EventLogic};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time;

/// Log a bathroom-family event, or rewrite one with `--edit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        event_type,
        at,
        location,
        who,
        who2,
        vr,
        edit,
    } = cmd
    {
        let input = BathroomInput {
            event_type: event_type.clone(),
            timestamp: at.clone().unwrap_or_else(time::now_iso),
            location: location.clone(),
            in_vr: *vr,
            person1: who.clone(),
            person2: who2.clone(),
        };

        let pool = DbPool::new(&cfg.database)?;

        match edit {
            Some(id) => {
                EventLogic::edit_bathroom(&pool, cfg, *id, &input)?;
                success(format!("Event #{id} updated ({})", input.event_type));
                audit(&pool, "edit", &input.event_type, *id);
            }
            None => {
                let id = EventLogic::add_bathroom(&pool, cfg, &input)?;
                success(format!(
                    "Event #{id} logged: {} at {}",
                    input.event_type, input.timestamp
                ));
                audit(&pool, "add", &input.event_type, id);
            }
        }
    }

    Ok(())
}

fn audit(pool: &DbPool, op: &str, event_type: &str, id: i64) {
    if let Err(e) = ttlog(&pool.conn, op, event_type, &format!("bathroom event #{id}")) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
