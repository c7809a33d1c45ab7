//! Contract tests for restoring modinfo.ini after a failed build.

use crate::common::*;

/// CONTRACT: When packaging fails after stamping, modinfo.ini is restored.
#[test]
fn contract_failed_build_restores_modinfo() {
    let env = TestEnv::builder().without_script().build();

    let result = env.run_with_version("1.2.3", &[]);

    assert_eq!(result.exit_code, 3, "output:\n{}", result.combined_output());
    assert!(
        result.stderr.contains("better_hunter_highlights.lua"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stdout.contains("Restored modinfo.ini to its previous content"));
    assert_eq!(env.read_project_file(MODINFO_PATH), MODINFO);
    assert!(!env.project_path(ARCHIVE_PATH).exists());
    assert!(list_dir(&env.project_path("dist")).is_empty());
}

/// CONTRACT: `--no-rollback` leaves the stamped modinfo.ini in place.
#[test]
fn contract_no_rollback_keeps_stamp() {
    let env = TestEnv::builder().without_script().build();

    let result = env.run_with_version("1.2.3", &["build", "--no-rollback"]);

    assert_eq!(result.exit_code, 3);
    assert!(env.read_project_file(MODINFO_PATH).contains("version=1.2.3"));
    assert!(!result.stdout.contains("Restored"));
}

/// CONTRACT: MODPACK_ROLLBACK=0 disables rollback like `--no-rollback`.
#[test]
fn contract_rollback_env_override() {
    let env = TestEnv::builder().without_script().build();

    let result = env.run_with_env(&[], &[("VERSION", "1.2.3"), ("MODPACK_ROLLBACK", "0")]);

    assert_eq!(result.exit_code, 3);
    assert!(env.read_project_file(MODINFO_PATH).contains("version=1.2.3"));
}

/// CONTRACT: A failed build never replaces a previously built archive.
#[test]
fn contract_failed_build_keeps_previous_archive() {
    let env = TestEnv::builder().build();
    assert!(env.run_with_version("1.0.0", &[]).success);

    std::fs::remove_file(env.project_path(SCRIPT_PATH)).unwrap();
    let result = env.run_with_version("2.0.0", &[]);
    assert!(!result.success);

    let archive = env.project_path(ARCHIVE_PATH);
    assert!(read_archive_entry(&archive, MODINFO_PATH).contains("version=1.0.0"));
    assert!(env.read_project_file(MODINFO_PATH).contains("version=1.0.0"));
    assert_eq!(list_dir(&env.project_path("dist")).len(), 1);
}
