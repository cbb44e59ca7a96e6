use predicates::str::contains;

mod common;
use common::{init_db, lst, missing_aliases, setup_test_db, write_fixture};

fn bathroom_csv(name: &str) -> String {
    write_fixture(
        name,
        "csv",
        "Timestamp,Event Type,Location,Who\n\
         01/05/2024 13:30:00,Cum,Home,AL\n\
         2024-02-01T09:15:00,pee,,\n",
    )
}

#[test]
fn test_import_coerces_legacy_timestamps_and_resolves_names() {
    let db_path = setup_test_db("import_legacy");
    init_db(&db_path);
    let csv = bathroom_csv("import_legacy");
    let aliases = write_fixture("import_legacy_aliases", "json", r#"{"Alice": ["al"]}"#);

    lst()
        .args([
            "--db",
            &db_path,
            "--aliases-file",
            &aliases,
            "import",
            &csv,
        ])
        .assert()
        .success()
        .stdout(contains("Imported 2 bathroom events"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();

    let (ts, et, person1): (String, String, Option<String>) = conn
        .query_row(
            "SELECT timestamp, event_type, person1 FROM bathroom_events WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    assert_eq!(ts, "2024-01-05T13:30:00"); // legacy format coerced
    assert_eq!(et, "cum"); // type lowercased
    assert_eq!(person1.as_deref(), Some("Alice"));

    let (ts2, person2): (String, Option<String>) = conn
        .query_row(
            "SELECT timestamp, person1 FROM bathroom_events WHERE id = 2",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(ts2, "2024-02-01T09:15:00"); // already ISO, untouched
    assert_eq!(person2, None);
}

#[test]
fn test_reimport_duplicates_every_row() {
    let db_path = setup_test_db("import_twice");
    init_db(&db_path);
    let csv = bathroom_csv("import_twice");
    let aliases = missing_aliases("import_twice");

    for _ in 0..2 {
        lst()
            .args([
                "--db",
                &db_path,
                "--aliases-file",
                &aliases,
                "import",
                &csv,
            ])
            .assert()
            .success()
            .stdout(contains("Imported 2 bathroom events"));
    }

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM bathroom_events", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 4); // no deduplication, by design
}

#[test]
fn test_import_skips_rows_missing_required_fields() {
    let db_path = setup_test_db("import_skips");
    init_db(&db_path);
    let csv = write_fixture(
        "import_skips",
        "csv",
        "Timestamp,Event Type,Location,Who\n\
         01/05/2024 13:30:00,,Home,\n\
         ,pee,Home,\n\
         01/06/2024 08:00:00,pee,,\n",
    );
    let aliases = missing_aliases("import_skips");

    lst()
        .args([
            "--db",
            &db_path,
            "--aliases-file",
            &aliases,
            "import",
            &csv,
        ])
        .assert()
        .success()
        .stdout(contains("Imported 1 bathroom events"));
}

#[test]
fn test_unparseable_timestamp_stored_verbatim() {
    let db_path = setup_test_db("import_bad_ts");
    init_db(&db_path);
    let csv = write_fixture(
        "import_bad_ts",
        "csv",
        "Timestamp,Event Type,Location,Who\n\
         13/45/2024 99:99:99,pee,,\n",
    );
    let aliases = missing_aliases("import_bad_ts");

    lst()
        .args([
            "--db",
            &db_path,
            "--aliases-file",
            &aliases,
            "import",
            &csv,
        ])
        .assert()
        .success()
        .stdout(contains("Imported 1 bathroom events"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let ts: String = conn
        .query_row("SELECT timestamp FROM bathroom_events WHERE id = 1", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(ts, "13/45/2024 99:99:99");
}

#[test]
fn test_import_dental_family() {
    let db_path = setup_test_db("import_dental");
    init_db(&db_path);
    let csv = write_fixture(
        "import_dental",
        "csv",
        "Timestamp,Used Flosser,Duration\n\
         01/05/2024 08:00:00,1,120\n\
         01/05/2024 21:00:00,0,\n",
    );

    lst()
        .args(["--db", &db_path, "import", &csv, "--dental"])
        .assert()
        .success()
        .stdout(contains("Imported 2 dental events"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let (flosser, duration): (bool, Option<i64>) = conn
        .query_row(
            "SELECT used_flosser, duration FROM dental_events WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert!(flosser);
    assert_eq!(duration, Some(120));

    let floss_total: i64 = conn
        .query_row("SELECT SUM(used_flosser) FROM dental_events", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(floss_total, 1);
}
