//! Contract tests for the inspect command.

use std::io::Write;

use crate::common::*;

/// CONTRACT: Inspecting a fresh build lists both entries and exits 0.
#[test]
fn contract_inspect_after_build() {
    let env = TestEnv::builder().build();
    assert!(env.run_with_version("1.0.0", &[]).success);

    let result = env.run(&["inspect"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains(MODINFO_PATH));
    assert!(result.stdout.contains(SCRIPT_PATH));
    assert!(result.stdout.contains("2 entries match the layout"));
}

/// CONTRACT: Inspecting without an archive is an I/O failure.
#[test]
fn contract_inspect_missing_archive() {
    let env = TestEnv::builder().build();

    let result = env.run(&["inspect"]);

    assert_eq!(result.exit_code, 3, "{}", result.combined_output());
}

/// CONTRACT: An archive with the wrong layout exits 1 and names the differences.
#[test]
fn contract_inspect_layout_mismatch() {
    let env = TestEnv::builder().build();

    let path = env.project_path("other.zip");
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("modinfo.ini", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(MODINFO.as_bytes()).unwrap();
    zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"hi").unwrap();
    zip.finish().unwrap();

    let result = env.run(&["inspect", "other.zip", "--json"]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());

    let report = &result.json_lines()[0];
    assert_eq!(report["event"], "inspect");
    assert_eq!(report["matches_layout"], false);
    assert_eq!(report["missing"][0], SCRIPT_PATH);
    assert_eq!(report["unexpected"][0], "readme.txt");
}
