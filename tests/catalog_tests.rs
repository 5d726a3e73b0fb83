use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{init_bare_db, setup_test_db, surf};

#[test]
fn test_boards_lists_the_default_catalog() {
    let db_path = setup_test_db("boards_defaults");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "boards"])
        .assert()
        .success()
        .stdout(contains("Board catalog"))
        .stdout(contains("Shortboard"))
        .stdout(contains("Longboard"))
        .stdout(contains("Fish"))
        .stdout(contains("Funboard"));
}

#[test]
fn test_boards_add_extends_the_catalog() {
    let db_path = setup_test_db("boards_add");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "boards", "--add", "Gun", "--icon", "🔫"])
        .assert()
        .success()
        .stdout(contains("Board 'Gun' added to the catalog."))
        .stdout(contains("Gun"));

    // The new board is immediately usable for sessions.
    surf()
        .args([
            "--db", &db_path, "--test", "add", "Mavericks", "--date", "2025-06-01", "--board",
            "Gun",
        ])
        .assert()
        .success();

    // And it survives into later invocations.
    surf()
        .args(["--db", &db_path, "--test", "boards"])
        .assert()
        .success()
        .stdout(contains("Gun"));
}

#[test]
fn test_boards_add_rejects_duplicates() {
    let db_path = setup_test_db("boards_duplicate");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "boards", "--add", "Fish"])
        .assert()
        .failure()
        .stderr(contains("already in catalog"));
}

#[test]
fn test_boards_add_rejects_a_blank_name() {
    let db_path = setup_test_db("boards_blank");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "boards", "--add", "   "])
        .assert()
        .failure()
        .stderr(contains("board name is required"));
}

#[test]
fn test_boards_icon_flag_requires_add() {
    let db_path = setup_test_db("boards_icon_alone");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "boards", "--icon", "🔫"])
        .assert()
        .failure();
}

#[test]
fn test_spots_lists_the_presets_on_an_empty_logbook() {
    let db_path = setup_test_db("spots_presets");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "spots"])
        .assert()
        .success()
        .stdout(contains("Known spots"))
        .stdout(
            is_match("(?s)Pipeline.*Trestles.*Mavericks.*Ocean Beach.*Snapper Rocks").unwrap(),
        );
}

#[test]
fn test_spots_appends_logged_spots_after_the_presets() {
    let db_path = setup_test_db("spots_logged");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "add", "Secret Cove", "--date", "2025-06-01"])
        .assert()
        .success();

    surf()
        .args(["--db", &db_path, "--test", "spots"])
        .assert()
        .success()
        .stdout(is_match("(?s)Snapper Rocks.*Secret Cove").unwrap())
        .stdout(contains("Secret Cove (1 session(s))"));
}

#[test]
fn test_spots_does_not_duplicate_a_logged_preset() {
    let db_path = setup_test_db("spots_dedup");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "add", "Pipeline", "--date", "2025-06-01"])
        .assert()
        .success();

    surf()
        .args(["--db", &db_path, "--test", "spots"])
        .assert()
        .success()
        .stdout(contains("Pipeline").count(1))
        .stdout(contains("Pipeline (1 session(s))"));
}

#[test]
fn test_reminder_defaults_to_six_pm() {
    let db_path = setup_test_db("reminder_default");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "reminder"])
        .assert()
        .success()
        .stdout(contains("Daily surf reminder: 18:00"));
}

#[test]
fn test_reminder_set_and_read_back() {
    let db_path = setup_test_db("reminder_roundtrip");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "reminder", "07:15"])
        .assert()
        .success()
        .stdout(contains("Daily surf reminder set to 07:15"));

    surf()
        .args(["--db", &db_path, "--test", "reminder"])
        .assert()
        .success()
        .stdout(contains("Daily surf reminder: 07:15"))
        .stdout(contains("18:00").not());
}

#[test]
fn test_reminder_zero_pads_a_single_digit_hour() {
    let db_path = setup_test_db("reminder_padding");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "reminder", "7:15"])
        .assert()
        .success()
        .stdout(contains("07:15"));
}

#[test]
fn test_reminder_rejects_an_invalid_time() {
    let db_path = setup_test_db("reminder_invalid");

    init_bare_db(&db_path);

    surf()
        .args(["--db", &db_path, "--test", "reminder", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    // The stored value is untouched.
    surf()
        .args(["--db", &db_path, "--test", "reminder"])
        .assert()
        .success()
        .stdout(contains("18:00"));
}
