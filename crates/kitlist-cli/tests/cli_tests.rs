use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TASKS_YAML: &str = r#"
wash-windows:
  required:
    - glass-cleaner
  optional:
    - microfiber-cloth
  relatedTasks:
    - wipe-sills
wipe-sills:
  required:
    - microfiber-cloth
mop-floors:
  required:
    - bucket
"#;

const ITEMS_YAML: &str = r#"
glass-cleaner:
  slug: glass-cleaner
  title: Glass cleaner
  type: product
  shops:
    - supermarket
microfiber-cloth:
  slug: microfiber-cloth
  title: Microfiber cloth
  type: equipment
  shops:
    - supermarket
bucket:
  slug: bucket
  title: Bucket
  type: equipment
  shops:
    - hardware-store
"#;

const SHOPS_YAML: &str = "- supermarket\n- hardware-store\n";

/// Helper creating a temp directory holding the data files and an empty
/// spot for the state store.
fn create_cli_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).expect("Failed to create data dir");
    fs::write(data_dir.join("tasks.yaml"), TASKS_YAML).expect("Failed to write tasks.yaml");
    fs::write(data_dir.join("items.yaml"), ITEMS_YAML).expect("Failed to write items.yaml");
    fs::write(data_dir.join("shops.yaml"), SHOPS_YAML).expect("Failed to write shops.yaml");
    let db_path = temp_dir.path().join("kitlist.db");
    (temp_dir, db_path)
}

/// Helper building a `kl` command pointed at the test environment.
fn kl_cmd(temp_dir: &TempDir, db_path: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("kl").expect("Failed to find kl binary");
    cmd.args([
        "--no-color",
        "--data-dir",
        temp_dir.path().join("data").to_str().unwrap(),
        "--database-file",
        db_path.to_str().unwrap(),
    ]);
    cmd
}

#[test]
fn test_cli_tasks_lists_catalog() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Available Tasks"))
        .stdout(predicate::str::contains("wash-windows"))
        .stdout(predicate::str::contains("(related: wipe-sills)"));
}

#[test]
fn test_cli_show_without_checklist() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved checklist."));
}

#[test]
fn test_cli_start_prompts_for_related() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["start", "wash-windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Related Tasks"))
        .stdout(predicate::str::contains("- wipe-sills"))
        .stdout(predicate::str::contains("--skip-related"));

    // Nothing was persisted yet.
    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved checklist."));
}

#[test]
fn test_cli_start_requires_name_to_save() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["start", "mop-floors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"));

    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved checklist."));
}

#[test]
fn test_cli_start_with_name_saves_checklist() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["start", "mop-floors", "--name", "Floors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Floors"))
        .stdout(predicate::str::contains("- [ ] Bucket"));
}

#[test]
fn test_cli_start_takes_related_along() {
    let (temp_dir, db_path) = create_cli_test_environment();

    // The cloth is optional for wash-windows but required by wipe-sills, so
    // it must not carry the optional badge once both are selected.
    kl_cmd(&temp_dir, &db_path)
        .args([
            "start",
            "wash-windows",
            "--with",
            "wipe-sills",
            "--name",
            "Windows",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] Microfiber cloth"))
        .stdout(predicate::str::contains("- [ ] Glass cleaner"))
        .stdout(predicate::str::contains("(optional)").not());
}

#[test]
fn test_cli_start_skip_related_keeps_optional_badge() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args([
            "start",
            "wash-windows",
            "--skip-related",
            "--name",
            "Windows",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Microfiber cloth *(optional)*"));
}

#[test]
fn test_cli_check_toggles_item() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["start", "mop-floors", "--name", "Floors"])
        .assert()
        .success();

    kl_cmd(&temp_dir, &db_path)
        .args(["check", "bucket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 'bucket'."));

    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] Bucket"))
        .stdout(predicate::str::contains("- Progress: 1/1"));

    kl_cmd(&temp_dir, &db_path)
        .args(["check", "bucket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchecked 'bucket'."));

    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] Bucket"));
}

#[test]
fn test_cli_check_without_checklist() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["check", "bucket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved checklist."));
}

#[test]
fn test_cli_reset_requires_confirmation() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["start", "mop-floors", "--name", "Floors"])
        .assert()
        .success();

    kl_cmd(&temp_dir, &db_path)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmed"));

    // The checklist is still there.
    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Floors"));
}

#[test]
fn test_cli_reset_clears_checklist() {
    let (temp_dir, db_path) = create_cli_test_environment();

    kl_cmd(&temp_dir, &db_path)
        .args(["start", "mop-floors", "--name", "Floors"])
        .assert()
        .success();

    kl_cmd(&temp_dir, &db_path)
        .args(["reset", "--confirmed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checklist cleared."));

    kl_cmd(&temp_dir, &db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved checklist."));
}

#[test]
fn test_cli_missing_data_dir_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("kitlist.db");

    let mut cmd = Command::cargo_bin("kl").expect("Failed to find kl binary");
    cmd.args([
        "--no-color",
        "--data-dir",
        temp_dir.path().join("missing").to_str().unwrap(),
        "--database-file",
        db_path.to_str().unwrap(),
        "tasks",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load catalogs"));
}
