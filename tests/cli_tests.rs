use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_via_cli, rhb, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rhb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // running it again is harmless
    init_via_cli(&db_path);
}

#[test]
fn test_habit_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", " Run ", "--type", "start"])
        .assert()
        .success()
        .stdout(contains("Added habit #1 'Run' (start)"));

    rhb()
        .args(["--db", &db_path, "habit", "add", "Sugar", "--type", "cut"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(contains("Run").and(contains("Sugar")).and(contains("cut")));
}

#[test]
fn test_habit_add_rejection_is_reported_not_fatal() {
    let db_path = setup_test_db("cli_reject");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "jog"])
        .assert()
        .success()
        .stdout(contains("Habit not added").and(contains("jog")));

    rhb()
        .args(["--db", &db_path, "habit", "add", "   ", "--type", "start"])
        .assert()
        .success()
        .stdout(contains("name is empty"));

    let output = rhb()
        .args(["--db", &db_path, "habit", "list", "--json"])
        .output()
        .expect("run habit list");
    assert!(output.status.success());

    let habits: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("habit list is JSON");
    assert_eq!(habits.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_toggle_flips_state() {
    let db_path = setup_test_db("cli_toggle");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "toggle", "1", "2024-06-11"])
        .assert()
        .success()
        .stdout(contains("Habit #1 on 2024-06-11: done"));

    rhb()
        .args(["--db", &db_path, "toggle", "1", "2024-06-11"])
        .assert()
        .success()
        .stdout(contains("Habit #1 on 2024-06-11: not done"));
}

#[test]
fn test_toggle_rejects_bad_input() {
    let db_path = setup_test_db("cli_toggle_bad");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "toggle", "7", "2024-06-11"])
        .assert()
        .failure()
        .stderr(contains("No habit found with id 7"));

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "toggle", "1", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_table_json_reflects_toggles() {
    let db_path = setup_test_db("cli_table_json");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "toggle", "1", "2024-06-11"])
        .assert()
        .success();

    let output = rhb()
        .args(["--db", &db_path, "table", "--week", "2024-06-13", "--json"])
        .output()
        .expect("run table");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("table is JSON");

    assert_eq!(v["week"]["week_start"], "2024-06-10");
    assert_eq!(v["week"]["prev_week"], "2024-06-03");
    assert_eq!(v["week"]["next_week"], "2024-06-17");
    assert_eq!(v["week"]["days"][0]["label"], "Mon Jun 10");
    assert_eq!(v["habits"][0]["name"], "Run");
    assert_eq!(
        v["habits"][0]["done"],
        serde_json::json!([false, true, false, false, false, false, false])
    );
}

#[test]
fn test_table_text_output() {
    let db_path = setup_test_db("cli_table_text");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "table", "--week", "2024-06-10"])
        .assert()
        .success()
        .stdout(
            contains("Week of 2024-06-10")
                .and(contains("Sun Jun 16"))
                .and(contains("#1 Run"))
                .and(contains("0/7")),
        );
}

#[test]
fn test_habit_del_removes_checks() {
    let db_path = setup_test_db("cli_del");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "toggle", "1", "2024-06-11"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "habit", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Habit #1 deleted (1 check(s) removed)"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let checks: i64 = conn
        .query_row("SELECT COUNT(*) FROM checks", [], |row| row.get(0))
        .expect("count checks");
    assert_eq!(checks, 0);
}

#[test]
fn test_habit_del_can_be_cancelled() {
    let db_path = setup_test_db("cli_del_cancel");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "habit", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rhb()
        .args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(contains("Run"));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    rhb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Added habit 'Run' (start)"));
}

#[test]
fn test_db_check() {
    let db_path = setup_test_db("cli_db_check");
    init_via_cli(&db_path);

    rhb()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("Habits:")));
}

#[test]
fn test_table_survives_calendar_edge_week() {
    let db_path = setup_test_db("cli_table_edge");
    init_via_cli(&db_path);

    let output = rhb()
        .args(["--db", &db_path, "table", "--week", "+262142-12-31", "--json"])
        .output()
        .expect("run table");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("table is JSON");
    assert_eq!(v["week"]["week_start"], v["week"]["this_week"]);
    assert_eq!(v["week"]["days"].as_array().map(Vec::len), Some(7));
}

/// A legacy file: no unique key, no foreign key, an orphan and a duplicate.
fn write_legacy_db(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        CREATE TABLE habits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            type TEXT NOT NULL
        );
        CREATE TABLE checks (
            habit_id INTEGER NOT NULL,
            check_date TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0
        );
        INSERT INTO habits (name, type) VALUES ('Run', 'start');
        INSERT INTO checks VALUES (1, '2024-06-11', 1);
        INSERT INTO checks VALUES (1, '2024-06-11', 0);
        INSERT INTO checks VALUES (9, '2024-06-12', 1);
        "#,
    )
    .expect("write legacy schema");
}

#[test]
fn test_db_check_reports_orphan_and_duplicate_checks() {
    let db_path = setup_test_db("cli_db_check_legacy");
    write_legacy_db(&db_path);

    rhb()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(
            contains("1 check(s) point to a missing habit")
                .and(contains("1 duplicated (habit, day) check row(s)")),
        );

    rhb()
        .args(["--db", &db_path, "db", "--migrate", "--check"])
        .assert()
        .success()
        .stdout(
            contains("1 check(s) point to a missing habit")
                .and(contains("duplicated (habit, day)").not()),
        );
}

#[test]
fn test_failed_audit_write_during_bootstrap_is_reported() {
    let db_path = setup_test_db("cli_bootstrap_log_fail");
    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute_batch(
            r#"
            CREATE TABLE log (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                date      TEXT NOT NULL,
                operation TEXT NOT NULL,
                target    TEXT DEFAULT '',
                message   TEXT NOT NULL
            );
            CREATE TRIGGER refuse_init BEFORE INSERT ON log
            WHEN NEW.operation = 'init'
            BEGIN
                SELECT RAISE(ABORT, 'init entries refused');
            END;
            "#,
        )
        .expect("prepare log table");
    }

    rhb()
        .args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(contains("Failed to write internal log").and(contains("init entries refused")));
}

#[test]
fn test_relative_db_resolves_against_current_dir_everywhere() {
    let root = std::env::temp_dir().join("rhabits_relative_db");
    let home = root.join("home");
    let work = root.join("work");
    std::fs::remove_dir_all(&root).ok();
    std::fs::create_dir_all(&home).expect("create home");
    std::fs::create_dir_all(&work).expect("create work dir");

    rhb()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--db", "habits.sqlite", "init"])
        .assert()
        .success();

    let work = work.canonicalize().expect("canonical work dir");
    assert!(work.join("habits.sqlite").exists());
    assert!(!home.join(".rhabits").join("habits.sqlite").exists());

    let conf = std::fs::read_to_string(home.join(".rhabits").join("rhabits.conf"))
        .expect("config written");
    assert!(conf.contains(&work.join("habits.sqlite").to_string_lossy().to_string()));

    rhb()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--db", "habits.sqlite", "habit", "add", "Run", "--type", "start"])
        .assert()
        .success();

    // the configured path points at the same file
    rhb()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["habit", "list"])
        .assert()
        .success()
        .stdout(contains("Run"));
}
