//! Statistic views over the event log.
//!
//! Every view is recomputed from the store on each call; nothing is cached
//! because the alias table can change between requests (affecting future
//! writes) while past events keep their frozen canonical snapshot. Grouping
//! happens on the stored `person1` canonical column, so nothing here touches
//! the resolver.

use crate::config::Config;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::stats::{Dashboard, PersonCount};

/// Participant leaderboard size on the full dashboard.
pub const DASHBOARD_TOP_LIMIT: u32 = 10;
/// Participant leaderboard size of the standalone summary view.
pub const LEADERBOARD_LIMIT: u32 = 3;
/// Cap of the per-family "recent events" lists.
pub const RECENT_LIMIT: u32 = 50;

pub struct StatsLogic;

impl StatsLogic {
    /// Assemble the combined dashboard payload.
    ///
    /// The grouped sub-queries run inside a single transaction so a concurrent
    /// write cannot be observed by only some of them.
    pub fn dashboard(pool: &mut DbPool, cfg: &Config) -> AppResult<Dashboard> {
        let tx = pool.conn.transaction()?;
        let dashboard = Dashboard {
            bathroom_stats: db::bathroom_counts_by_day(&tx)?,
            location_stats: db::bathroom_counts_by_location(&tx)?,
            person_stats: db::top_people(&tx, &cfg.leaderboard_type, DASHBOARD_TOP_LIMIT)?,
            dental_stats: db::dental_counts_by_day(&tx)?,
            recent_bathroom: db::recent_bathroom(&tx, cfg.recent_limit)?,
            recent_dental: db::recent_dental(&tx, cfg.recent_limit)?,
        };
        tx.commit()?;
        Ok(dashboard)
    }

    /// Standalone top-names summary, count descending. Events without a
    /// canonical participant never appear here.
    pub fn leaderboard(
        pool: &DbPool,
        event_type: &str,
        limit: u32,
    ) -> AppResult<Vec<PersonCount>> {
        Ok(db::top_people(&pool.conn, event_type, limit)?)
    }
}
