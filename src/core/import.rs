//! Bulk import of historical data from tabular exports (Google Forms CSV).
//!
//! Each row is coerced and inserted independently; names go through the same
//! resolver as live writes, against the alias table snapshot taken once at
//! import start. No deduplication is performed: re-running an import against
//! the same file re-inserts every row.

use crate::config::Config;
use crate::core::aliases::AliasTable;
use crate::core::resolver;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::bathroom::NewBathroomEvent;
use crate::models::dental::NewDentalEvent;
use crate::utils::time;
use csv::StringRecord;
use std::path::Path;

/// Header names as they appear in the export.
const COL_TIMESTAMP: &str = "Timestamp";
const COL_EVENT_TYPE: &str = "Event Type";
const COL_LOCATION: &str = "Location";
const COL_WHO: &str = "Who";
const COL_WHO2: &str = "Who 2";
const COL_IN_VR: &str = "In VR";
const COL_FLOSSER: &str = "Used Flosser";
const COL_DURATION: &str = "Duration";

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn field<'r>(record: &'r StringRecord, idx: Option<usize>) -> Option<&'r str> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn truthy(value: &str) -> bool {
    matches!(value, "1") || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import bathroom-family rows. Rows missing a timestamp or event type are
    /// skipped, never fatal. Returns the number of rows inserted; the whole
    /// call is one transaction.
    pub fn import_bathroom(pool: &mut DbPool, cfg: &Config, path: &str) -> AppResult<u32> {
        let table = AliasTable::load(Path::new(&cfg.aliases));
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let ts_idx = column(&headers, COL_TIMESTAMP);
        let type_idx = column(&headers, COL_EVENT_TYPE);
        let loc_idx = column(&headers, COL_LOCATION);
        let who_idx = column(&headers, COL_WHO);
        let who2_idx = column(&headers, COL_WHO2);
        let vr_idx = column(&headers, COL_IN_VR);

        let tx = pool.conn.transaction()?;
        let mut imported: u32 = 0;

        for record in reader.records() {
            let record = record?;

            let Some(raw_ts) = field(&record, ts_idx) else {
                continue;
            };
            let Some(raw_type) = field(&record, type_idx) else {
                continue;
            };

            let person1_raw = field(&record, who_idx).map(str::to_string);
            let person2_raw = field(&record, who2_idx).map(str::to_string);

            let ev = NewBathroomEvent {
                event_type: raw_type.to_lowercase(),
                timestamp: time::coerce_timestamp(raw_ts),
                location: field(&record, loc_idx).map(str::to_string),
                in_vr: field(&record, vr_idx).map(truthy).unwrap_or(false),
                person1: resolver::resolve_optional(person1_raw.as_deref(), &table),
                person1_raw,
                person2: resolver::resolve_optional(person2_raw.as_deref(), &table),
                person2_raw,
            };
            db::insert_bathroom(&tx, &ev)?;
            imported += 1;
        }

        tx.commit()?;
        Ok(imported)
    }

    /// Import dental-family rows. Same row independence and transaction scope
    /// as the bathroom import.
    pub fn import_dental(pool: &mut DbPool, path: &str) -> AppResult<u32> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let ts_idx = column(&headers, COL_TIMESTAMP);
        let flosser_idx = column(&headers, COL_FLOSSER);
        let duration_idx = column(&headers, COL_DURATION);

        let tx = pool.conn.transaction()?;
        let mut imported: u32 = 0;

        for record in reader.records() {
            let record = record?;

            let Some(raw_ts) = field(&record, ts_idx) else {
                continue;
            };

            let ev = NewDentalEvent {
                timestamp: time::coerce_timestamp(raw_ts),
                used_flosser: field(&record, flosser_idx).map(truthy).unwrap_or(false),
                duration: field(&record, duration_idx).and_then(|d| d.parse::<i64>().ok()),
            };
            db::insert_dental(&tx, &ev)?;
            imported += 1;
        }

        tx.commit()?;
        Ok(imported)
    }
}
