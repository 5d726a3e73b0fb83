use chrono::NaiveDate;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{init_bare_db, make_session, setup_test_db, surf};

use surfsync::core::stats::{board_usage, mood_trend, most_surfed_spot};
use surfsync::models::board::default_boards;
use surfsync::models::mood::Mood;

#[test]
fn test_stats_lists_every_board_with_explicit_zero_counts() {
    let db_path = setup_test_db("stats_zero_boards");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--board",
            "Shortboard",
        ])
        .assert()
        .success();

    surf()
        .args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(contains("Shortboard: 1 session(s)"))
        .stdout(contains("Longboard: 0 sessions"))
        .stdout(contains("Fish: 0 sessions"))
        .stdout(contains("Funboard: 0 sessions"));
}

#[test]
fn test_stats_most_surfed_tie_breaks_by_name_not_insertion_order() {
    // Same tie, both insertion orders: the winner must not change.
    for (name, first, second) in [
        ("stats_tie_a", "Trestles", "Mavericks"),
        ("stats_tie_b", "Mavericks", "Trestles"),
    ] {
        let db_path = setup_test_db(name);

        init_bare_db(&db_path);

        for spot in [first, second] {
            surf()
                .args(["--db", &db_path, "--test", "add", spot, "--date", "2025-06-01"])
                .assert()
                .success();
        }

        surf()
            .args(["--db", &db_path, "--test", "stats"])
            .assert()
            .success()
            .stdout(contains("Mavericks"))
            .stdout(contains("Trestles").not());
    }
}

#[test]
fn test_stats_mood_trend_keeps_best_mood_per_day() {
    let db_path = setup_test_db("stats_trend_peak");

    init_bare_db(&db_path);

    for mood in ["5", "3"] {
        surf()
            .args([
                "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--mood",
                mood,
            ])
            .assert()
            .success();
    }

    surf()
        .args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(contains("Stoked"))
        .stdout(contains("Meh").not());
}

#[test]
fn test_stats_mood_trend_is_date_ascending() {
    let db_path = setup_test_db("stats_trend_order");

    init_bare_db(&db_path);

    // Logged newest-first on purpose.
    for date in ["2025-06-10", "2025-06-02"] {
        surf()
            .args(["--db", &db_path, "--test", "add", "Pipeline", "--date", date])
            .assert()
            .success();
    }

    surf()
        .args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(is_match("(?s)2025-06-02.*2025-06-10").unwrap());
}

#[test]
fn test_stats_on_empty_logbook() {
    let db_path = setup_test_db("stats_empty");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(contains("Shortboard: 0 sessions"))
        .stdout(contains("No sessions logged yet."));
}

// ---------------------------------------------------------------------------
// Aggregation functions, without the CLI round trip
// ---------------------------------------------------------------------------

#[test]
fn board_usage_counts_in_catalog_order() {
    let sessions = vec![
        make_session(1, "2025-06-01", "Pipeline", "Shortboard", 10, 4),
        make_session(2, "2025-06-02", "Trestles", "Fish", 5, 3),
        make_session(3, "2025-06-03", "Pipeline", "Shortboard", 8, 5),
    ];

    let usage = board_usage(&sessions, &default_boards());
    assert_eq!(
        usage,
        vec![
            ("Shortboard".to_string(), 2),
            ("Longboard".to_string(), 0),
            ("Fish".to_string(), 1),
            ("Funboard".to_string(), 0),
        ]
    );
}

#[test]
fn board_usage_skips_sessions_on_retired_boards() {
    let sessions = vec![make_session(1, "2025-06-01", "Pipeline", "Gun", 10, 4)];

    let usage = board_usage(&sessions, &default_boards());
    assert!(usage.iter().all(|(_, count)| *count == 0));
    assert!(!usage.iter().any(|(name, _)| name == "Gun"));
}

#[test]
fn most_surfed_spot_is_none_without_sessions() {
    assert_eq!(most_surfed_spot(&[]), None);
}

#[test]
fn most_surfed_spot_picks_the_highest_count() {
    let sessions = vec![
        make_session(1, "2025-06-01", "Trestles", "Shortboard", 1, 3),
        make_session(2, "2025-06-02", "Pipeline", "Shortboard", 1, 3),
        make_session(3, "2025-06-03", "Pipeline", "Shortboard", 1, 3),
    ];

    assert_eq!(
        most_surfed_spot(&sessions),
        Some(("Pipeline".to_string(), 2))
    );
}

#[test]
fn most_surfed_spot_tie_breaks_lexicographically() {
    let mut sessions = vec![
        make_session(1, "2025-06-01", "Trestles", "Shortboard", 1, 3),
        make_session(2, "2025-06-02", "Mavericks", "Shortboard", 1, 3),
    ];

    assert_eq!(
        most_surfed_spot(&sessions),
        Some(("Mavericks".to_string(), 1))
    );

    // Reversing the collection must not flip the winner.
    sessions.reverse();
    assert_eq!(
        most_surfed_spot(&sessions),
        Some(("Mavericks".to_string(), 1))
    );
}

#[test]
fn mood_trend_collapses_each_date_to_its_peak() {
    let sessions = vec![
        make_session(1, "2025-06-01", "Pipeline", "Shortboard", 10, 2),
        make_session(2, "2025-06-01", "Pipeline", "Shortboard", 12, 5),
        make_session(3, "2025-06-01", "Trestles", "Fish", 3, 3),
    ];

    let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    assert_eq!(mood_trend(&sessions), vec![(d, Mood::Stoked)]);
}

#[test]
fn mood_trend_orders_dates_ascending_regardless_of_input_order() {
    let sessions = vec![
        make_session(1, "2025-06-10", "Pipeline", "Shortboard", 10, 4),
        make_session(2, "2025-06-02", "Trestles", "Fish", 5, 2),
        make_session(3, "2025-06-05", "Pipeline", "Shortboard", 8, 5),
    ];

    let dates: Vec<NaiveDate> = mood_trend(&sessions).into_iter().map(|(d, _)| d).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        ]
    );
}
