//! Contract tests for modpack.toml and MODPACK_* overrides.

use crate::common::*;

/// CONTRACT: modpack.toml can rename the archive and move the script.
#[test]
fn contract_config_file_layout() {
    let env = TestEnv::builder()
        .without_script()
        .with_file("scripts/main.lua", SCRIPT)
        .with_file(
            "modpack.toml",
            r#"name = "Other Mod"

[layout]
asset = "scripts/main.lua"
dist_dir = "out"
archive = "Other.zip"
"#,
        )
        .build();

    let result = env.run_with_version("0.9.0", &[]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Building Other Mod mod version 0.9.0"));

    let archive = env.project_path("out/Other.zip");
    assert_eq!(
        archive_entry_names(&archive),
        vec![MODINFO_PATH.to_string(), "scripts/main.lua".to_string()]
    );
}

/// CONTRACT: Unknown keys warn with a suggestion but do not fail the build.
#[test]
fn contract_unknown_key_warns() {
    let env = TestEnv::builder()
        .with_file("modpack.toml", "[build]\nrolback = false\n")
        .build();

    let result = env.run_with_version("1.0.0", &[]);
    assert!(result.success, "{}", result.combined_output());

    assert!(
        result
            .stderr
            .contains("Unknown config key 'rolback' in"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("Did you mean 'rollback'?"));
}

/// CONTRACT: Malformed modpack.toml is a configuration error.
#[test]
fn contract_malformed_config_exits_1() {
    let env = TestEnv::builder()
        .with_file("modpack.toml", "[layout\nasset = \n")
        .build();

    let result = env.run_with_version("1.0.0", &[]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert_eq!(env.read_project_file(MODINFO_PATH), MODINFO);
}

/// CONTRACT: An asset path escaping the project is rejected before stamping.
#[test]
fn contract_escaping_asset_rejected() {
    let env = TestEnv::builder()
        .with_file("modpack.toml", "[layout]\nasset = \"../outside.lua\"\n")
        .build();

    let result = env.run_with_version("1.0.0", &[]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert_eq!(env.read_project_file(MODINFO_PATH), MODINFO);
}

/// CONTRACT: MODPACK_DIST_DIR overrides the output directory.
#[test]
fn contract_dist_dir_env_override() {
    let env = TestEnv::builder().build();

    let result = env.run_with_env(&[], &[("VERSION", "1.0.0"), ("MODPACK_DIST_DIR", "release")]);
    assert!(result.success, "{}", result.combined_output());

    assert!(env
        .project_path("release/Better-Hunter-Highlights.zip")
        .exists());
    assert!(!env.project_path("dist").exists());
}

/// CONTRACT: An invalid MODPACK_COMPRESSION warns and falls back.
#[test]
fn contract_invalid_compression_falls_back() {
    let env = TestEnv::builder().build();

    let result = env.run_with_env(
        &[],
        &[("VERSION", "1.0.0"), ("MODPACK_COMPRESSION", "stord")],
    );
    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stderr
        .contains("Warning: Invalid MODPACK_COMPRESSION value 'stord'"));
    assert!(result.stderr.contains("Did you mean 'stored'?"));
}

/// CONTRACT: version_env selects the variable the version is read from.
#[test]
fn contract_custom_version_env() {
    let env = TestEnv::builder()
        .with_file("modpack.toml", "version_env = \"MOD_RELEASE\"\n")
        .build();

    let missing = env.run_with_version("1.0.0", &[]);
    assert_eq!(missing.exit_code, 1);
    assert!(missing
        .stderr
        .contains("MOD_RELEASE environment variable is not set."));

    let result = env.run_with_env(&[], &[("MOD_RELEASE", "5.0.0")]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.read_project_file(MODINFO_PATH).contains("version=5.0.0"));
}

/// CONTRACT: An empty version_env is a configuration error naming the file.
#[test]
fn contract_empty_version_env_rejected() {
    let env = TestEnv::builder()
        .with_file("modpack.toml", "version_env = \"\"\n")
        .build();

    let result = env.run_with_version("1.0.0", &[]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(
        result.stderr.contains("version_env must not be empty"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("modpack.toml"), "stderr:\n{}", result.stderr);
    assert!(!result.stderr.contains(" environment variable is not set."));
    assert_eq!(env.read_project_file(MODINFO_PATH), MODINFO);
}
