//! Event store: schema and every query the tool runs against SQLite.
//!
//! Timestamps are stored as ISO 8601 TEXT exactly as the producer supplied
//! them; `DATE(timestamp)` truncates them for per-day grouping. Boolean flags
//! (`in_vr`, `used_flosser`) live as INTEGER 0/1 in the tables and are
//! converted at this boundary only.

use crate::models::bathroom::{BathroomEvent, NewBathroomEvent};
use crate::models::dental::{DentalEvent, NewDentalEvent};
use crate::models::stats::{DentalDayCount, PersonCount, TypeDayCount, TypeLocationCount};
use chrono::Utc;
use rusqlite::{Connection, Result, params};

pub mod log;
pub mod pool;

/// Initialize the database schema.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS bathroom_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            event_type  TEXT NOT NULL,
            timestamp   TEXT NOT NULL,       -- ISO 8601, stored verbatim
            location    TEXT,
            in_vr       INTEGER NOT NULL DEFAULT 0,
            person1_raw TEXT,
            person1     TEXT,                -- canonical snapshot
            person2_raw TEXT,
            person2     TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS dental_events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp    TEXT NOT NULL,      -- ISO 8601, stored verbatim
            used_flosser INTEGER NOT NULL DEFAULT 0,
            duration     INTEGER,            -- seconds
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            operation TEXT NOT NULL,
            target TEXT DEFAULT '',
            message TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

fn row_to_bathroom(row: &rusqlite::Row) -> Result<BathroomEvent> {
    Ok(BathroomEvent {
        id: row.get("id")?,
        event_type: row.get("event_type")?,
        timestamp: row.get("timestamp")?,
        location: row.get("location")?,
        in_vr: row.get("in_vr")?,
        person1_raw: row.get("person1_raw")?,
        person1: row.get("person1")?,
        person2_raw: row.get("person2_raw")?,
        person2: row.get("person2")?,
        created_at: row.get("created_at")?,
    })
}

fn row_to_dental(row: &rusqlite::Row) -> Result<DentalEvent> {
    Ok(DentalEvent {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        used_flosser: row.get("used_flosser")?,
        duration: row.get("duration")?,
        created_at: row.get("created_at")?,
    })
}

const BATHROOM_COLS: &str = "id, event_type, timestamp, location, in_vr, \
     person1_raw, person1, person2_raw, person2, created_at";

const DENTAL_COLS: &str = "id, timestamp, used_flosser, duration, created_at";

// ---------------------------
// Writes
// ---------------------------

/// Insert a bathroom event, returning the assigned id.
pub fn insert_bathroom(conn: &Connection, ev: &NewBathroomEvent) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO bathroom_events \
         (event_type, timestamp, location, in_vr, person1_raw, person1, person2_raw, person2, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;
    stmt.execute(params![
        ev.event_type,
        ev.timestamp,
        ev.location,
        ev.in_vr,
        ev.person1_raw,
        ev.person1,
        ev.person2_raw,
        ev.person2,
        Utc::now().to_rfc3339(),
    ])?;
    Ok(conn.last_insert_rowid())
}

/// Rewrite every mutable field of a bathroom event. Returns rows affected
/// (0 when the id does not exist).
pub fn update_bathroom(conn: &Connection, id: i64, ev: &NewBathroomEvent) -> Result<usize> {
    let mut stmt = conn.prepare_cached(
        "UPDATE bathroom_events \
         SET event_type = ?1, timestamp = ?2, location = ?3, in_vr = ?4, \
             person1_raw = ?5, person1 = ?6, person2_raw = ?7, person2 = ?8 \
         WHERE id = ?9",
    )?;
    stmt.execute(params![
        ev.event_type,
        ev.timestamp,
        ev.location,
        ev.in_vr,
        ev.person1_raw,
        ev.person1,
        ev.person2_raw,
        ev.person2,
        id,
    ])
}

pub fn delete_bathroom(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM bathroom_events WHERE id = ?1", [id])
}

pub fn insert_dental(conn: &Connection, ev: &NewDentalEvent) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO dental_events (timestamp, used_flosser, duration, created_at) \
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![
        ev.timestamp,
        ev.used_flosser,
        ev.duration,
        Utc::now().to_rfc3339(),
    ])?;
    Ok(conn.last_insert_rowid())
}

pub fn update_dental(conn: &Connection, id: i64, ev: &NewDentalEvent) -> Result<usize> {
    let mut stmt = conn.prepare_cached(
        "UPDATE dental_events SET timestamp = ?1, used_flosser = ?2, duration = ?3 \
         WHERE id = ?4",
    )?;
    stmt.execute(params![ev.timestamp, ev.used_flosser, ev.duration, id])
}

pub fn delete_dental(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM dental_events WHERE id = ?1", [id])
}

// ---------------------------
// Grouped reads
// ---------------------------

/// Per-day, per-type bathroom counts, newest date first.
pub fn bathroom_counts_by_day(conn: &Connection) -> Result<Vec<TypeDayCount>> {
    let mut stmt = conn.prepare_cached(
        "SELECT event_type, DATE(timestamp) AS date, COUNT(*) AS count \
         FROM bathroom_events \
         GROUP BY event_type, DATE(timestamp) \
         ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(TypeDayCount {
            event_type: row.get("event_type")?,
            date: row.get("date")?,
            count: row.get("count")?,
        })
    })?;
    rows.collect()
}

/// Per-type, per-location counts over events that carry a location.
pub fn bathroom_counts_by_location(conn: &Connection) -> Result<Vec<TypeLocationCount>> {
    let mut stmt = conn.prepare_cached(
        "SELECT event_type, location, COUNT(*) AS count \
         FROM bathroom_events \
         WHERE location IS NOT NULL \
         GROUP BY event_type, location",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(TypeLocationCount {
            event_type: row.get("event_type")?,
            location: row.get("location")?,
            count: row.get("count")?,
        })
    })?;
    rows.collect()
}

/// Top canonical participants for one event type, count descending. Ties keep
/// SQLite's native group enumeration order, which is stable within one query.
pub fn top_people(conn: &Connection, event_type: &str, limit: u32) -> Result<Vec<PersonCount>> {
    let mut stmt = conn.prepare_cached(
        "SELECT person1 AS person, COUNT(*) AS count \
         FROM bathroom_events \
         WHERE event_type = ?1 AND person1 IS NOT NULL \
         GROUP BY person1 \
         ORDER BY count DESC \
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![event_type, limit], |row| {
        Ok(PersonCount {
            person: row.get("person")?,
            count: row.get("count")?,
        })
    })?;
    rows.collect()
}

/// Per-day brushing count plus summed flosser flag, newest date first.
pub fn dental_counts_by_day(conn: &Connection) -> Result<Vec<DentalDayCount>> {
    let mut stmt = conn.prepare_cached(
        "SELECT DATE(timestamp) AS date, \
                COUNT(*) AS brush_count, \
                COALESCE(SUM(used_flosser), 0) AS floss_count \
         FROM dental_events \
         GROUP BY DATE(timestamp) \
         ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(DentalDayCount {
            date: row.get("date")?,
            brush_count: row.get("brush_count")?,
            floss_count: row.get("floss_count")?,
        })
    })?;
    rows.collect()
}

// ---------------------------
// Ordered/limited reads
// ---------------------------

/// Most recent bathroom events with full field detail, newest first.
pub fn recent_bathroom(conn: &Connection, limit: u32) -> Result<Vec<BathroomEvent>> {
    let sql = format!(
        "SELECT {BATHROOM_COLS} FROM bathroom_events ORDER BY timestamp DESC LIMIT ?1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([limit], row_to_bathroom)?;
    rows.collect()
}

/// Most recent dental events, newest first.
pub fn recent_dental(conn: &Connection, limit: u32) -> Result<Vec<DentalEvent>> {
    let sql = format!("SELECT {DENTAL_COLS} FROM dental_events ORDER BY timestamp DESC LIMIT ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([limit], row_to_dental)?;
    rows.collect()
}

// ---------------------------
// Totals and ranges
// ---------------------------

pub fn count_bathroom(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM bathroom_events", [], |r| r.get(0))
}

pub fn count_dental(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM dental_events", [], |r| r.get(0))
}

/// Oldest and newest stored timestamp of a family's table, None when empty.
pub fn bathroom_timestamp_range(conn: &Connection) -> Result<(Option<String>, Option<String>)> {
    conn.query_row(
        "SELECT MIN(timestamp), MAX(timestamp) FROM bathroom_events",
        [],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )
}

pub fn dental_timestamp_range(conn: &Connection) -> Result<(Option<String>, Option<String>)> {
    conn.query_row(
        "SELECT MIN(timestamp), MAX(timestamp) FROM dental_events",
        [],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )
}
