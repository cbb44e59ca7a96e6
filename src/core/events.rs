//! Write-path logic for single events: validate input, resolve participant
//! names against a fresh alias-table snapshot, then hit the store.

use crate::config::Config;
use crate::core::aliases::AliasTable;
use crate::core::resolver;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::bathroom::NewBathroomEvent;
use crate::models::dental::NewDentalEvent;
use crate::utils::time;
use std::path::Path;

/// User-level payload for a bathroom event, raw names as typed.
#[derive(Debug, Clone)]
pub struct BathroomInput {
    pub event_type: String,
    pub timestamp: String,
    pub location: Option<String>,
    pub in_vr: bool,
    pub person1: Option<String>,
    pub person2: Option<String>,
}

/// User-level payload for a dental event.
#[derive(Debug, Clone)]
pub struct DentalInput {
    pub timestamp: String,
    pub used_flosser: bool,
    pub duration: Option<i64>,
}

pub struct EventLogic;

impl EventLogic {
    /// Reject bad input before any store mutation.
    fn check_required(event_type: Option<&str>, timestamp: &str) -> AppResult<()> {
        if let Some(et) = event_type
            && et.trim().is_empty()
        {
            return Err(AppError::MissingField("event type"));
        }
        if timestamp.trim().is_empty() {
            return Err(AppError::MissingField("timestamp"));
        }
        if !time::is_iso_timestamp(timestamp.trim()) {
            return Err(AppError::InvalidTimestamp(timestamp.to_string()));
        }
        Ok(())
    }

    /// Insert a bathroom event. Names are resolved here, against the table as
    /// it exists right now; the canonical result is frozen into the row.
    pub fn add_bathroom(pool: &DbPool, cfg: &Config, input: &BathroomInput) -> AppResult<i64> {
        Self::check_required(Some(&input.event_type), &input.timestamp)?;

        let table = AliasTable::load(Path::new(&cfg.aliases));
        let ev = Self::to_record(input, &table);
        let id = db::insert_bathroom(&pool.conn, &ev)?;
        Ok(id)
    }

    /// Rewrite a bathroom event in place. Canonical names are recomputed from
    /// the then-current alias table, exactly as an insert would.
    pub fn edit_bathroom(
        pool: &DbPool,
        cfg: &Config,
        id: i64,
        input: &BathroomInput,
    ) -> AppResult<()> {
        Self::check_required(Some(&input.event_type), &input.timestamp)?;

        let table = AliasTable::load(Path::new(&cfg.aliases));
        let ev = Self::to_record(input, &table);
        if db::update_bathroom(&pool.conn, id, &ev)? == 0 {
            return Err(AppError::NotFound("bathroom", id));
        }
        Ok(())
    }

    pub fn delete_bathroom(pool: &DbPool, id: i64) -> AppResult<()> {
        if db::delete_bathroom(&pool.conn, id)? == 0 {
            return Err(AppError::NotFound("bathroom", id));
        }
        Ok(())
    }

    pub fn add_dental(pool: &DbPool, input: &DentalInput) -> AppResult<i64> {
        Self::check_required(None, &input.timestamp)?;
        let id = db::insert_dental(&pool.conn, &Self::to_dental_record(input))?;
        Ok(id)
    }

    pub fn edit_dental(pool: &DbPool, id: i64, input: &DentalInput) -> AppResult<()> {
        Self::check_required(None, &input.timestamp)?;
        if db::update_dental(&pool.conn, id, &Self::to_dental_record(input))? == 0 {
            return Err(AppError::NotFound("dental", id));
        }
        Ok(())
    }

    pub fn delete_dental(pool: &DbPool, id: i64) -> AppResult<()> {
        if db::delete_dental(&pool.conn, id)? == 0 {
            return Err(AppError::NotFound("dental", id));
        }
        Ok(())
    }

    /// Build the store payload. Whitespace-only participant slots count as
    /// absent: both the raw and the canonical columns stay NULL.
    fn to_record(input: &BathroomInput, table: &AliasTable) -> NewBathroomEvent {
        let person1_raw = input
            .person1
            .clone()
            .filter(|s| !s.trim().is_empty());
        let person2_raw = input
            .person2
            .clone()
            .filter(|s| !s.trim().is_empty());

        NewBathroomEvent {
            event_type: input.event_type.trim().to_string(),
            timestamp: input.timestamp.trim().to_string(),
            location: input.location.clone().filter(|s| !s.trim().is_empty()),
            in_vr: input.in_vr,
            person1: resolver::resolve_optional(person1_raw.as_deref(), table),
            person1_raw,
            person2: resolver::resolve_optional(person2_raw.as_deref(), table),
            person2_raw,
        }
    }

    fn to_dental_record(input: &DentalInput) -> NewDentalEvent {
        NewDentalEvent {
            timestamp: input.timestamp.trim().to_string(),
            used_flosser: input.used_flosser,
            duration: input.duration,
        }
    }
}
