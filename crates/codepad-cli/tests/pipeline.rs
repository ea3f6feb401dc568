//! Integration tests for the CLI file plumbing.

use std::path::{Path, PathBuf};

use codepad_cli::pipeline::{check_files, compose_from_paths, display_name, role_for_path};
use codepad_model::LanguageRole;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("codepad-cli-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn role_is_inferred_from_extension() {
    assert_eq!(
        role_for_path(Path::new("index.html")).unwrap(),
        LanguageRole::Markup
    );
    assert_eq!(
        role_for_path(Path::new("app.TS")).unwrap(),
        LanguageRole::ScriptTs
    );
    assert!(role_for_path(Path::new("README")).is_err());
}

#[test]
fn display_name_is_the_file_name_component() {
    assert_eq!(display_name(Path::new("/tmp/project/index.html")), "index.html");
}

#[test]
fn compose_embeds_file_contents_and_defaults_missing_to_empty() {
    let dir = scratch_dir("compose");
    let html = write_file(&dir, "page.html", "<h1>composed</h1>");

    let document = compose_from_paths(Some(&html), None, None).unwrap();

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<h1>composed</h1>"));
    assert!(document.contains("window.onerror"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn compose_fails_with_context_for_missing_file() {
    let error = compose_from_paths(Some(Path::new("/no/such/file.html")), None, None)
        .unwrap_err()
        .to_string();
    assert!(error.contains("/no/such/file.html"));
}

#[test]
fn check_reports_one_report_per_file() {
    let dir = scratch_dir("check");
    let html = write_file(&dir, "index.html", r#"<img src="a.png">"#);
    let css = write_file(&dir, "styles.css", "body { margin: 0; }");

    let reports = check_files(&[html, css]).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].file_name, "index.html");
    assert_eq!(reports[0].role, LanguageRole::Markup);
    let alt = reports[0]
        .results
        .iter()
        .find(|result| result.rule_id == "images-have-alt")
        .unwrap();
    assert!(!alt.passed);
    assert!(reports[0].has_errors());
    assert!(!reports[1].has_errors());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn check_rejects_unrecognized_extension() {
    let dir = scratch_dir("reject");
    let other = write_file(&dir, "notes.txt", "hello");
    assert!(check_files(&[other]).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}
