use lifestats::db;
use lifestats::models::bathroom::NewBathroomEvent;
use lifestats::models::stats::PersonCount;
use predicates::str::{contains, is_match};
use std::collections::HashMap;

mod common;
use common::{lst, open_db, setup_test_db};

fn bathroom(event_type: &str, timestamp: &str, person: Option<&str>) -> NewBathroomEvent {
    NewBathroomEvent {
        event_type: event_type.to_string(),
        timestamp: timestamp.to_string(),
        location: None,
        in_vr: false,
        person1_raw: person.map(str::to_string),
        person1: person.map(str::to_string),
        person2_raw: None,
        person2: None,
    }
}

#[test]
fn test_top_people_order_and_limit() {
    let db_path = setup_test_db("top_order");
    let conn = open_db(&db_path);

    for ts in [
        "2025-01-01T10:00:00",
        "2025-01-02T10:00:00",
        "2025-01-03T10:00:00",
    ] {
        db::insert_bathroom(&conn, &bathroom("cum", ts, Some("Alice"))).unwrap();
    }
    db::insert_bathroom(&conn, &bathroom("cum", "2025-01-04T10:00:00", Some("Bob"))).unwrap();

    let rows = db::top_people(&conn, "cum", 2).unwrap();
    assert_eq!(
        rows,
        vec![
            PersonCount {
                person: "Alice".to_string(),
                count: 3
            },
            PersonCount {
                person: "Bob".to_string(),
                count: 1
            },
        ]
    );

    // Same view through the CLI summary
    lst()
        .args(["--db", &db_path, "top", "--limit", "2", "--event-type", "cum"])
        .assert()
        .success()
        .stdout(is_match(r"(?s)Alice\s+3.*Bob\s+1").expect("valid regex"));
}

#[test]
fn test_leaderboard_excludes_events_without_canonical_person() {
    let db_path = setup_test_db("top_null_person");
    let conn = open_db(&db_path);

    db::insert_bathroom(&conn, &bathroom("cum", "2025-01-01T10:00:00", Some("Alice"))).unwrap();
    db::insert_bathroom(&conn, &bathroom("cum", "2025-01-02T10:00:00", None)).unwrap();
    db::insert_bathroom(&conn, &bathroom("pee", "2025-01-03T10:00:00", Some("Bob"))).unwrap();

    // The anonymous event and the other event type never show up
    let rows = db::top_people(&conn, "cum", 10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].person, "Alice");
    assert_eq!(rows[0].count, 1);
}

#[test]
fn test_per_day_counts_sum_to_totals() {
    let db_path = setup_test_db("per_day_sums");
    let conn = open_db(&db_path);

    let data = [
        ("pee", "2025-02-01T08:00:00"),
        ("pee", "2025-02-01T12:00:00"),
        ("poop", "2025-02-01T18:00:00"),
        ("pee", "2025-02-02T09:00:00"),
        ("cum", "2025-02-02T22:00:00"),
    ];
    for (et, ts) in data {
        db::insert_bathroom(&conn, &bathroom(et, ts, None)).unwrap();
    }

    let rows = db::bathroom_counts_by_day(&conn).unwrap();

    // Per-day sums across all types equal the day totals
    let mut per_day: HashMap<String, i64> = HashMap::new();
    let mut per_type: HashMap<String, i64> = HashMap::new();
    for row in &rows {
        *per_day.entry(row.date.clone()).or_default() += row.count;
        *per_type.entry(row.event_type.clone()).or_default() += row.count;
    }
    assert_eq!(per_day["2025-02-01"], 3);
    assert_eq!(per_day["2025-02-02"], 2);
    assert_eq!(per_type["pee"], 3);
    assert_eq!(per_type["poop"], 1);
    assert_eq!(per_type["cum"], 1);

    // Newest date first
    assert_eq!(rows.first().unwrap().date, "2025-02-02");
}

#[test]
fn test_location_counts_skip_unlocated_events() {
    let db_path = setup_test_db("location_counts");
    let conn = open_db(&db_path);

    let mut ev = bathroom("pee", "2025-02-01T08:00:00", None);
    ev.location = Some("Home".to_string());
    db::insert_bathroom(&conn, &ev).unwrap();
    db::insert_bathroom(&conn, &bathroom("pee", "2025-02-01T09:00:00", None)).unwrap();

    let rows = db::bathroom_counts_by_location(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].location, "Home");
    assert_eq!(rows[0].count, 1);
}

#[test]
fn test_recent_events_capped_and_newest_first() {
    let db_path = setup_test_db("recent_cap");
    let conn = open_db(&db_path);

    for day in 1..=5 {
        let ts = format!("2025-02-{day:02}T10:00:00");
        db::insert_bathroom(&conn, &bathroom("pee", &ts, None)).unwrap();
    }

    let rows = db::recent_bathroom(&conn, 3).unwrap();
    let dates: Vec<&str> = rows.iter().map(|e| e.timestamp.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "2025-02-05T10:00:00",
            "2025-02-04T10:00:00",
            "2025-02-03T10:00:00",
        ]
    );
}

#[test]
fn test_dashboard_reports_all_sections() {
    let db_path = setup_test_db("dashboard_sections");
    let conn = open_db(&db_path);
    db::insert_bathroom(&conn, &bathroom("cum", "2025-02-01T10:00:00", Some("Alice"))).unwrap();
    drop(conn);

    lst()
        .args(["--db", &db_path, "stats", "--json"])
        .assert()
        .success()
        .stdout(contains("\"bathroom_stats\""))
        .stdout(contains("\"location_stats\""))
        .stdout(contains("\"person_stats\""))
        .stdout(contains("\"dental_stats\""))
        .stdout(contains("\"recent_bathroom\""))
        .stdout(contains("\"recent_dental\""));
}
