use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_bare_db, setup_test_db, surf};

use surfsync::core::editor::SessionDraft;
use surfsync::models::board::default_boards;

#[test]
fn test_wave_count_above_range_is_rejected() {
    let db_path = setup_test_db("waves_above");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--waves",
            "201",
        ])
        .assert()
        .failure()
        .stderr(contains("waveCount"))
        .stderr(contains("between 0 and 200"));

    // Nothing was persisted.
    surf()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Pipeline").not());
}

#[test]
fn test_negative_wave_count_is_rejected_not_clamped() {
    let db_path = setup_test_db("waves_negative");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--waves",
            "-1",
        ])
        .assert()
        .failure()
        .stderr(contains("waveCount"))
        .stderr(contains("got -1"));
}

#[test]
fn test_wave_count_boundaries_are_accepted() {
    let db_path = setup_test_db("waves_bounds");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--waves",
            "0",
        ])
        .assert()
        .success();

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Trestles", "--date", "2025-06-02", "--waves",
            "200",
        ])
        .assert()
        .success();

    surf()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("200"));
}

#[test]
fn test_unknown_board_is_rejected() {
    let db_path = setup_test_db("unknown_board");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--board",
            "Gun",
        ])
        .assert()
        .failure()
        .stderr(contains("board"))
        .stderr(contains("not in the board catalog"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("invalid_date");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "add", "Pipeline", "--date", "June 1st"])
        .assert()
        .failure()
        .stderr(contains("date"))
        .stderr(contains("YYYY-MM-DD"));
}

#[test]
fn test_blank_spot_is_rejected() {
    let db_path = setup_test_db("blank_spot");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "add", "   ", "--date", "2025-06-01"])
        .assert()
        .failure()
        .stderr(contains("spot"))
        .stderr(contains("required"));
}

#[test]
fn test_invalid_condition_values_are_rejected_with_allowed_sets() {
    let db_path = setup_test_db("invalid_conditions");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--swell",
            "huge",
        ])
        .assert()
        .failure()
        .stderr(contains("swell"))
        .stderr(contains("<1m, 1-2m, 2-3m, 3m+"));

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--tide",
            "Slack",
        ])
        .assert()
        .failure()
        .stderr(contains("tide"))
        .stderr(contains("High, Mid, Low, Rising, Dropping"));
}

#[test]
fn test_notes_over_limit_are_rejected_not_truncated() {
    let db_path = setup_test_db("notes_limit");

    init_bare_db(&db_path);

    let too_long = "x".repeat(161);
    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--notes",
            &too_long,
        ])
        .assert()
        .failure()
        .stderr(contains("notes"))
        .stderr(contains("at most 160 characters"));

    // Exactly at the limit is fine.
    let at_limit = "y".repeat(160);
    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--notes",
            &at_limit,
        ])
        .assert()
        .success();
}

#[test]
fn test_every_failing_field_is_reported_at_once() {
    let db_path = setup_test_db("multi_errors");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "not-a-date", "--waves",
            "999", "--mood", "9", "--board", "Gun",
        ])
        .assert()
        .failure()
        .stderr(contains("date"))
        .stderr(contains("waveCount"))
        .stderr(contains("mood"))
        .stderr(contains("board"));
}

#[test]
fn test_condition_input_is_case_insensitive() {
    let db_path = setup_test_db("conditions_case");

    init_bare_db(&db_path);

    surf()
        .args([
            "--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01", "--swell",
            "3M+", "--wind", "offshore", "--tide", "rising",
        ])
        .assert()
        .success();

    // Stored canonically, regardless of the input casing.
    surf()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("3m+"))
        .stdout(contains("Offshore"))
        .stdout(contains("Rising"));
}

// ---------------------------------------------------------------------------
// Editor-level coverage (no CLI round trip)
// ---------------------------------------------------------------------------

fn full_draft() -> SessionDraft {
    SessionDraft {
        id: None,
        date: Some("2025-06-01".to_string()),
        spot: Some("Pipeline".to_string()),
        board: Some("Shortboard".to_string()),
        wave_count: Some(10),
        mood: Some(4),
        swell: Some("<1m".to_string()),
        wind: Some("Offshore".to_string()),
        tide: Some("Mid".to_string()),
        notes: Some("ok".to_string()),
    }
}

#[test]
fn editor_accepts_a_complete_draft() {
    let record = full_draft().validate(&default_boards()).expect("valid");
    assert_eq!(record.spot, "Pipeline");
    assert_eq!(record.wave_count, 10);
}

#[test]
fn editor_defaults_board_to_first_catalog_entry() {
    let mut draft = full_draft();
    draft.board = None;

    let record = draft.validate(&default_boards()).expect("valid");
    assert_eq!(record.board, "Shortboard");
}

#[test]
fn editor_trims_spot_and_notes() {
    let mut draft = full_draft();
    draft.spot = Some("  Ocean Beach  ".to_string());
    draft.notes = Some("  windy afternoon  ".to_string());

    let record = draft.validate(&default_boards()).expect("valid");
    assert_eq!(record.spot, "Ocean Beach");
    assert_eq!(record.notes, "windy afternoon");
}

#[test]
fn editor_measures_notes_after_trimming() {
    let mut draft = full_draft();
    // 160 meaningful characters surrounded by whitespace must pass.
    draft.notes = Some(format!("  {}  ", "z".repeat(160)));

    assert!(draft.validate(&default_boards()).is_ok());
}

#[test]
fn editor_collects_every_failing_field() {
    let draft = SessionDraft {
        id: None,
        date: Some("nope".to_string()),
        spot: Some("  ".to_string()),
        board: Some("Gun".to_string()),
        wave_count: Some(-5),
        mood: Some(0),
        swell: Some("flat".to_string()),
        wind: Some("sideways".to_string()),
        tide: Some("slack".to_string()),
        notes: Some("n".repeat(200)),
    };

    let errors = draft.validate(&default_boards()).unwrap_err();
    for field in [
        "date",
        "spot",
        "board",
        "waveCount",
        "mood",
        "swell",
        "wind",
        "tide",
        "notes",
    ] {
        assert!(errors.has(field), "missing error for field {field}");
    }
}

#[test]
fn editor_rejects_mood_outside_scale() {
    for bad in [0, 6, -1, 100] {
        let mut draft = full_draft();
        draft.mood = Some(bad);
        let errors = draft.validate(&default_boards()).unwrap_err();
        assert!(errors.has("mood"), "mood {bad} must be rejected");
    }
}

#[test]
fn editor_prefills_from_an_existing_record() {
    let session = common::make_session(42, "2025-03-04", "Mavericks", "Fish", 9, 2);
    let draft = SessionDraft::from_session(&session);

    assert_eq!(draft.id, Some(42));
    assert_eq!(draft.date.as_deref(), Some("2025-03-04"));
    assert_eq!(draft.spot.as_deref(), Some("Mavericks"));
    assert_eq!(draft.board.as_deref(), Some("Fish"));
    assert_eq!(draft.wave_count, Some(9));
    assert_eq!(draft.mood, Some(2));

    // Round-tripping through validate reproduces the record.
    let rebuilt = draft.validate(&default_boards()).expect("valid");
    assert_eq!(rebuilt, session);
}
