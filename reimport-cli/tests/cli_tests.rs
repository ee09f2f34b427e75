use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn reimport() -> Command {
    let mut cmd = Command::cargo_bin("reimport").unwrap();
    cmd.env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_command() {
    reimport()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rewrite stale `use` paths after modules move into shared crates",
        ));
}

#[test]
fn test_version_command() {
    reimport()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reimport"));
}

#[test]
fn test_version_subcommand() {
    reimport()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reimport 0.1.0"));
}

#[test]
fn test_migrate_rewrites_imports() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.child("src");
    src.child("main.rs")
        .write_str("use crate::ui::radix::Dialog;\nuse crate::store::posts;\n")
        .unwrap();
    src.child("lib.rs").write_str("fn unrelated() {}\n").unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .args(["migrate", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting Import Migration"))
        .stdout(predicate::str::contains("✓ Updated:"))
        .stdout(predicate::str::contains("main.rs"))
        .stdout(predicate::str::contains("  use crate::ui::radix:: -> use oxui::radix::"))
        .stdout(predicate::str::contains("Found 2 .rs files"))
        .stdout(predicate::str::contains("Updated 1 out of 2 files"))
        .stdout(predicate::str::contains("Next steps:"));

    src.child("main.rs")
        .assert("use oxui::radix::Dialog;\nuse ruxlog_shared::store::posts;\n");
    src.child("lib.rs").assert("fn unrelated() {}\n");
}

#[test]
fn test_migrate_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("main.rs")
        .write_str("use crate::store::posts;\n")
        .unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .args(["migrate", ".", "--dry-run", "--diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Would update:"))
        .stdout(predicate::str::contains("-use crate::store::posts;"))
        .stdout(predicate::str::contains("+use ruxlog_shared::store::posts;"))
        .stdout(predicate::str::contains("Dry Run Complete!"))
        .stdout(predicate::str::contains("Next steps").not());

    temp_dir.child("main.rs").assert("use crate::store::posts;\n");
}

#[test]
fn test_missing_root_exits_with_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .args(["migrate", "admin/src"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: source directory not found"))
        .stderr(predicate::str::contains("admin"));
}

#[test]
fn test_invalid_utf8_file_is_reported_and_run_continues() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("bad.rs").write_binary(&[0xff, 0xfe, 0x0a]).unwrap();
    temp_dir
        .child("good.rs")
        .write_str("use crate::ui::shadcn::Button;\n")
        .unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .args(["migrate", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Error processing"))
        .stdout(predicate::str::contains("bad.rs: not valid UTF-8"))
        .stdout(predicate::str::contains("Updated 1 out of 2 files"))
        .stdout(predicate::str::contains("Failed to process 1 files"));

    temp_dir.child("good.rs").assert("use oxui::shadcn::Button;\n");
}

#[test]
fn test_excluded_directories_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let source = "use crate::store::posts;\n";
    temp_dir.child("target/gen.rs").write_str(source).unwrap();
    temp_dir.child(".hidden/gen.rs").write_str(source).unwrap();
    temp_dir.child("vendor/gen.rs").write_str(source).unwrap();
    temp_dir.child("app/main.rs").write_str(source).unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .args(["migrate", ".", "--exclude-dir", "target,vendor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 .rs files"));

    temp_dir.child("target/gen.rs").assert(source);
    temp_dir.child(".hidden/gen.rs").assert(source);
    temp_dir.child("vendor/gen.rs").assert(source);
    temp_dir
        .child("app/main.rs")
        .assert("use ruxlog_shared::store::posts;\n");
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child(".reimport/config.toml")
        .write_str(
            r#"[defaults]
root = "admin"
extension = "rsx"
log_file = "logs/migrate.log"
"#,
        )
        .unwrap();
    temp_dir
        .child("admin/view.rsx")
        .write_str("use crate::ui::custom::Card;\n")
        .unwrap();
    temp_dir
        .child("admin/main.rs")
        .write_str("use crate::ui::custom::Card;\n")
        .unwrap();

    reimport()
        .arg("-C")
        .arg(temp_dir.path())
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 .rsx files"));

    temp_dir
        .child("admin/view.rsx")
        .assert("use oxui::custom::Card;\n");
    temp_dir
        .child("admin/main.rs")
        .assert("use crate::ui::custom::Card;\n");
    temp_dir
        .child("logs/migrate.log")
        .assert(predicate::str::contains("Migration complete: 1 scanned, 1 updated, 0 failed"));
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child(".reimport/config.toml")
        .write_str("[defaults\nroot = ")
        .unwrap();
    temp_dir
        .child("main.rs")
        .write_str("use crate::store::posts;\n")
        .unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .arg("migrate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: ignoring .reimport/config.toml"))
        .stdout(predicate::str::contains("Updated 1 out of 1 files"));
}

#[test]
fn test_empty_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    reimport()
        .current_dir(temp_dir.path())
        .args(["migrate", ".", "--extension", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_rules_lists_builtin_table() {
    reimport()
        .args(["rules", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category"))
        .stdout(predicate::str::contains("use crate::ui::components::user_avatar"))
        .stdout(predicate::str::contains("use ruxlog_shared::components::user_avatar"))
        .stdout(predicate::str::contains("Retired modules: ui, store"));
}
