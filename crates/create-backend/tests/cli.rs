use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("create-backend").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn creates_untyped_project_from_positional_name() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("cd demo"))
        .stdout(predicate::str::contains("npm run dev"));

    let root = dir.path().join("demo");
    assert!(root.join("src/index.js").is_file());
    assert!(!root.join("tsconfig.json").exists());
    assert_eq!(
        fs::read_to_string(root.join(".env")).unwrap(),
        "PORT=5000\nNODE_ENV=development\n"
    );
}

#[test]
fn creates_full_typed_project_from_flags() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["demo", "--ts", "--db=mongo", "--cloudinary"])
        .assert()
        .success();

    let root = dir.path().join("demo");
    for file in [
        "tsconfig.json",
        "src/config/db.ts",
        "src/config/cloudinary.ts",
        "src/interfaces/MessageResponse.ts",
        "src/interfaces/ErrorResponse.ts",
    ] {
        assert!(root.join(file).is_file(), "{}", file);
    }
}

#[test]
fn accepts_legacy_single_dash_ts() {
    let dir = TempDir::new().unwrap();
    cli(&dir).args(["demo", "-ts"]).assert().success();
    assert!(dir.path().join("demo/src/app.ts").is_file());
}

#[test]
fn fails_when_target_exists() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("demo")).unwrap();

    cli(&dir)
        .arg("demo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_dir(dir.path().join("demo")).unwrap().count(), 0);
}

#[test]
fn fails_on_blank_name() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn yes_uses_default_name() {
    let dir = TempDir::new().unwrap();
    cli(&dir).arg("--yes").assert().success();
    assert!(dir.path().join("backend/package.json").is_file());
}

#[test]
fn preset_supplies_answers_and_flags_override() {
    let dir = TempDir::new().unwrap();
    let preset = dir.path().join("preset.yaml");
    fs::write(
        &preset,
        "name: shop\nvariant: js\ndatabase: mongo\nmedia_cloud: true\n",
    )
    .unwrap();

    cli(&dir)
        .args(["--preset", "preset.yaml", "--ts", "--db", "none"])
        .assert()
        .success();

    let root = dir.path().join("shop");
    // Flags win over the preset
    assert!(root.join("src/app.ts").is_file());
    assert!(!root.join("src/app.js").exists());
    assert!(!root.join("src/config/db.ts").exists());
    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(!manifest.contains("mongoose"));
    // Keys no flag touched come from the preset
    assert!(root.join("src/config/cloudinary.ts").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/app.js").or(predicate::str::contains("src\\app.js")));

    assert!(!dir.path().join("demo").exists());
}

#[test]
fn dir_option_selects_invocation_root() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    cli(&dir).args(["api", "--dir", "out"]).assert().success();
    assert!(dir.path().join("out/api/package.json").is_file());
}

#[test]
fn rejects_unknown_database() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["demo", "--db=postgres"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown database"));
}
