use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Standalone leaderboard summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Top { limit, event_type } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let event_type = event_type.as_deref().unwrap_or(cfg.leaderboard_type.as_str());
        let limit = limit.unwrap_or(cfg.leaderboard_limit);

        let rows = StatsLogic::leaderboard(&pool, event_type, limit)?;

        if rows.is_empty() {
            println!("No named {event_type} events yet.");
            return Ok(());
        }

        println!("🏆 Top names ({event_type}):");
        for (rank, row) in rows.iter().enumerate() {
            println!("  {:>2}. {:<20} {:>4}", rank + 1, row.person, row.count);
        }
    }

    Ok(())
}
