use lifestats::core::aliases::AliasTable;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{lst, missing_aliases, setup_test_db, write_fixture};

#[test]
fn test_load_missing_document_yields_empty_table() {
    let path = missing_aliases("load_missing");
    let table = AliasTable::load(Path::new(&path));
    assert!(table.is_empty());
}

#[test]
fn test_load_malformed_document_yields_empty_table() {
    let path = write_fixture("load_malformed", "json", "this is not json");
    let table = AliasTable::load(Path::new(&path));
    assert!(table.is_empty());
}

#[test]
fn test_from_json_rejects_non_object_root() {
    assert!(AliasTable::from_json(r#"["Alice"]"#).is_err());
    assert!(AliasTable::from_json("42").is_err());
}

#[test]
fn test_from_json_skips_non_array_values() {
    let table =
        AliasTable::from_json(r#"{"Alice": ["Al"], "weird": 3, "Bob": ["bobby"]}"#).unwrap();
    let names: Vec<&str> = table.entries().map(|e| e.canonical.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_save_load_roundtrip_preserves_declared_order() {
    // Declared order is not alphabetical; it must survive a disk roundtrip
    let table = AliasTable::from_json(r#"{"Zed": ["z"], "Alice": ["Al"]}"#).unwrap();
    let path = write_fixture("roundtrip", "json", "");
    table.save(Path::new(&path)).unwrap();

    let loaded = AliasTable::load(Path::new(&path));
    let names: Vec<&str> = loaded.entries().map(|e| e.canonical.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Alice"]);
    assert_eq!(loaded, table);
}

#[test]
fn test_cli_replace_and_print() {
    let db_path = setup_test_db("alias_replace");
    common::init_db(&db_path);

    let doc = write_fixture("alias_replace_doc", "json", r#"{"Alice": ["Al", "ali"]}"#);
    let store = missing_aliases("alias_replace_store");

    lst()
        .args([
            "--db",
            &db_path,
            "--aliases-file",
            &store,
            "aliases",
            "--replace",
            &doc,
        ])
        .assert()
        .success()
        .stdout(contains("Alias table replaced (1 canonical names)"));

    lst()
        .args(["--db", &db_path, "--aliases-file", &store, "aliases", "--print"])
        .assert()
        .success()
        .stdout(contains("\"Alice\""))
        .stdout(contains("\"ali\""));
}

#[test]
fn test_cli_replace_rejects_invalid_document() {
    let db_path = setup_test_db("alias_replace_invalid");
    common::init_db(&db_path);

    let doc = write_fixture("alias_invalid_doc", "json", r#"["not", "a", "mapping"]"#);
    let store = write_fixture("alias_keep_store", "json", r#"{"Keep": []}"#);

    lst()
        .args([
            "--db",
            &db_path,
            "--aliases-file",
            &store,
            "aliases",
            "--replace",
            &doc,
        ])
        .assert()
        .failure()
        .stderr(contains("Alias table error"));

    // The existing table must not have been clobbered
    let table = AliasTable::load(Path::new(&store));
    assert_eq!(table.len(), 1);
}
