use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn migrate_db_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_migrate_db"))
}

/// 外部の .env や環境変数に影響されないように実行する
fn run_in(tmp: &TempDir, args: &[&str]) -> Output {
    Command::new(migrate_db_bin())
        .args(args)
        .current_dir(tmp.path())
        .env("DB_MIGRATE_ENV_PATH", tmp.path().join("no.env"))
        .env_remove("DB_MIGRATE_DATABASE_PATH")
        .env("XDG_DATA_HOME", tmp.path().join("xdg"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run migrate_db")
}

fn run_with_path(tmp: &TempDir, path: &Path, extra: &[&str]) -> Output {
    let path = path.to_string_lossy().into_owned();
    let mut args = vec!["--path", path.as_str()];
    args.extend_from_slice(extra);
    run_in(tmp, &args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn migrates_legacy_file_and_prints_success() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("database.json");
    fs::write(&path, r#"[{"id":1,"title":"hello"}]"#).unwrap();

    let output = run_with_path(&tmp, &path, &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Database migrated to object structure"), "got: {out}");
    assert_eq!(out.lines().count(), 1);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"posts":[{"id":1,"title":"hello"}],"services":[],"metrics":[],"process":[]})
    );
}

#[test]
fn second_run_prints_already_migrated() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("database.json");
    fs::write(&path, "[1,2,3]").unwrap();

    assert!(run_with_path(&tmp, &path, &[]).status.success());
    let after_first = fs::read(&path).unwrap();

    let output = run_with_path(&tmp, &path, &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Database already in object structure"));
    assert_eq!(fs::read(&path).unwrap(), after_first);
}

#[test]
fn missing_file_prints_not_found_and_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("database.json");

    let output = run_with_path(&tmp, &path, &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Database file not found"));
    assert!(!path.exists());
}

#[test]
fn malformed_file_exits_non_zero() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("database.json");
    fs::write(&path, "not json").unwrap();

    let output = run_with_path(&tmp, &path, &[]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse"), "{stderr}");
    assert!(stderr.contains("Hint:"), "{stderr}");
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}

#[test]
fn dry_run_reports_without_writing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("database.json");
    fs::write(&path, "[1,2]").unwrap();

    let output = run_with_path(&tmp, &path, &["--dry-run"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("would be migrated"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,2]");
}

#[test]
fn env_var_selects_database_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("from_env.json");
    fs::write(&path, "[]").unwrap();

    let output = Command::new(migrate_db_bin())
        .current_dir(tmp.path())
        .env("DB_MIGRATE_ENV_PATH", tmp.path().join("no.env"))
        .env("DB_MIGRATE_DATABASE_PATH", &path)
        .output()
        .expect("run migrate_db");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Database migrated"));
    assert!(fs::read_to_string(&path).unwrap().contains("\"posts\""));
}

#[test]
fn env_file_selects_database_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("from_env_file.json");
    fs::write(&path, "[]").unwrap();
    let env_file = tmp.path().join("migrate.env");
    fs::write(
        &env_file,
        format!("DB_MIGRATE_DATABASE_PATH={}\n", path.display()),
    )
    .unwrap();

    let output = Command::new(migrate_db_bin())
        .current_dir(tmp.path())
        .env("DB_MIGRATE_ENV_PATH", &env_file)
        .env_remove("DB_MIGRATE_DATABASE_PATH")
        .output()
        .expect("run migrate_db");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Database migrated"));
    assert!(fs::read_to_string(&path).unwrap().contains("\"posts\""));
}

#[test]
fn default_path_lives_under_xdg_data_home() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("xdg").join("db_migrate");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("database.json"), "[]").unwrap();

    let output = run_in(&tmp, &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Database migrated"));
}

#[test]
fn help_lists_flags() {
    let tmp = TempDir::new().unwrap();
    let output = run_in(&tmp, &["--help"]);
    let out = stdout(&output);
    assert!(out.contains("--path"));
    assert!(out.contains("--dry-run"));
}
