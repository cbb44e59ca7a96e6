#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lst() -> Command {
    cargo_bin_cmd!("lifestats")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lifestats.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a fixture file (alias document, CSV, ...) into the temp dir
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lifestats.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// Path for an alias document that must not exist (empty-table case)
pub fn missing_aliases(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lifestats_missing.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema for a test DB via the CLI
pub fn init_db(db_path: &str) {
    lst()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open a test DB directly through the library, creating the schema
pub fn open_db(db_path: &str) -> rusqlite::Connection {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    lifestats::db::init_db(&conn).expect("init schema");
    conn
}
