use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use icumsg_lint::cli::{run_cli, Arguments, ExitStatus, OutputFormat};
use icumsg_lint::{check_catalog_file, check_catalog_source, check_files, find_catalog_files};
use tempfile::TempDir;

fn write_catalog(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write catalog file");
    path
}

const CLEAN: &str = r#"{"GREETING": "Hello {NAME}"}"#;
const BROKEN: &str = r#"{"ITEMS": "{COUNT, plural, =1 {one item}}"}"#;

#[test]
fn discovers_catalogs_recursively() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let nested = dir.path().join("strings").join("generated");
    fs::create_dir_all(&nested).expect("failed to create nested dirs");
    write_catalog(dir.path(), "en-US.messages.json", CLEAN);
    write_catalog(&nested, "fr.messages.json", CLEAN);
    write_catalog(dir.path(), "notes.json", "{}");
    write_catalog(&nested, "readme.md", "hello");

    let found = find_catalog_files(&[dir.path().to_path_buf()]);
    assert_eq!(found.len(), 2);
    assert!(found
        .iter()
        .all(|path| path.to_string_lossy().ends_with(".messages.json")));
    // Sorted for stable runs.
    assert!(found[0] < found[1]);
}

#[test]
fn explicit_files_mix_with_directories_without_duplicates() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let catalog = write_catalog(dir.path(), "ja.messages.json", CLEAN);
    write_catalog(dir.path(), "ko.messages.json", CLEAN);

    // The explicit file is also inside the scanned directory.
    let found = find_catalog_files(&[catalog.clone(), dir.path().to_path_buf()]);
    assert_eq!(found.len(), 2);

    // A file that does not follow the naming convention is not picked up
    // even when named explicitly.
    let stray = write_catalog(dir.path(), "extra.json", CLEAN);
    let found = find_catalog_files(&[stray]);
    assert!(found.is_empty());
}

#[test]
fn checks_files_in_parallel_and_reports_sorted() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let files = vec![
        write_catalog(dir.path(), "c.messages.json", CLEAN),
        write_catalog(dir.path(), "a.messages.json", BROKEN),
        write_catalog(dir.path(), "b.messages.json", "this is not json"),
    ];

    let reports = check_files(files, Some(2));
    assert_eq!(reports.len(), 3);
    assert!(reports[0].file.ends_with("a.messages.json"));
    assert!(reports[1].file.ends_with("b.messages.json"));
    assert!(reports[2].file.ends_with("c.messages.json"));

    assert_eq!(reports[0].diagnostics.len(), 1);
    assert_eq!(reports[0].locale, "a");
    assert!(reports[1].error.is_some());
    assert!(!reports[2].has_findings());
}

#[test]
fn unreadable_catalog_is_reported_not_fatal() {
    let report = check_catalog_file(Path::new("/definitely/missing/xx.messages.json"));
    assert!(report.error.is_some());
    assert_eq!(report.checked, 0);
    assert!(report.has_findings());
}

#[test]
fn report_serializes_for_tooling() {
    let report = check_catalog_source("en-US.messages.json", BROKEN);
    let value = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(value["file"], "en-US.messages.json");
    assert_eq!(value["locale"], "en-US");
    assert_eq!(value["checked"], 1);
    assert_eq!(value["error"], serde_json::Value::Null);

    let diagnostic = &value["diagnostics"][0];
    assert_eq!(diagnostic["id"], "ITEMS");
    assert_eq!(diagnostic["severity"], "warning");
    assert_eq!(diagnostic["name"], "MissingRequiredVariants");
    assert_eq!(diagnostic["description"], "Required variants missing: other");
    assert_eq!(diagnostic["line"], 1);
    // The span is message-relative and covers the whole broken construct.
    assert_eq!(diagnostic["span"][0], 0);
}

#[test]
fn cli_run_reports_failure_when_findings_exist() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_catalog(dir.path(), "en-US.messages.json", BROKEN);

    let args = Arguments::try_parse_from([OsStr::new("icumsg"), dir.path().as_os_str()])
        .expect("arguments should parse");
    assert_eq!(args.format, OutputFormat::Human);
    assert_eq!(args.jobs, None);

    let status = run_cli(args).expect("run should complete");
    assert_eq!(status, ExitStatus::Failure);
}

#[test]
fn cli_run_succeeds_on_clean_catalogs() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_catalog(dir.path(), "da.messages.json", CLEAN);

    let args = Arguments::try_parse_from([
        OsStr::new("icumsg"),
        dir.path().as_os_str(),
        OsStr::new("--format"),
        OsStr::new("json"),
    ])
    .expect("arguments should parse");
    assert_eq!(args.format, OutputFormat::Json);

    let status = run_cli(args).expect("run should complete");
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn cli_run_succeeds_when_no_catalogs_match() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let args = Arguments {
        paths: vec![dir.path().to_path_buf()],
        format: OutputFormat::Human,
        jobs: None,
        verbose: false,
    };

    let status = run_cli(args).expect("run should complete");
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn cli_run_rejects_a_path_that_does_not_exist() {
    let args = Arguments {
        paths: vec![PathBuf::from("/definitely/missing/catalog-dir")],
        format: OutputFormat::Human,
        jobs: None,
        verbose: false,
    };

    let error = run_cli(args).expect_err("a missing path should be an error");
    assert!(error.to_string().contains("does not exist"));
}
