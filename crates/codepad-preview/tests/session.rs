//! Integration tests for the preview session.
//!
//! Quiet periods are shortened to tens of milliseconds; waits leave a wide
//! margin so the assertions hold on slow machines.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use codepad_buffers::BufferSet;
use codepad_model::{LanguageRole, Result, ViewportMode};
use codepad_preview::{PreviewSession, PreviewSurface, SessionConfig};

const QUIET: Duration = Duration::from_millis(50);
const SETTLE: Duration = Duration::from_millis(400);

/// Surface that records every presented document.
#[derive(Clone, Default)]
struct RecordingSurface {
    documents: Arc<Mutex<Vec<String>>>,
}

impl RecordingSurface {
    fn presented(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

impl PreviewSurface for RecordingSurface {
    fn present(&mut self, document: &str) -> Result<()> {
        self.documents.lock().unwrap().push(document.to_string());
        Ok(())
    }
}

fn test_config() -> SessionConfig {
    SessionConfig {
        preview_quiet: QUIET,
        validate_quiet: QUIET,
        auto_run: true,
    }
}

fn session_with_surface(config: SessionConfig) -> (PreviewSession, RecordingSurface) {
    let surface = RecordingSurface::default();
    let session = PreviewSession::new(BufferSet::seeded(), surface.clone(), config);
    (session, surface)
}

#[test]
fn burst_of_edits_rebuilds_once_with_last_content() {
    let (session, surface) = session_with_surface(test_config());
    let markup_id = session.files()[0].id;

    for n in 0..5 {
        session
            .update_content(markup_id, format!("<h1>draft {n}</h1>"))
            .unwrap();
        std::thread::sleep(Duration::from_millis(5));
    }
    std::thread::sleep(SETTLE);

    let documents = surface.presented();
    assert_eq!(documents.len(), 1, "burst must coalesce into one rebuild");
    assert!(documents[0].contains("<h1>draft 4</h1>"));
    assert!(!documents[0].contains("<h1>draft 0</h1>"));
}

#[test]
fn spaced_edits_rebuild_separately() {
    let (session, surface) = session_with_surface(test_config());
    let markup_id = session.files()[0].id;

    session.update_content(markup_id, "<p>one</p>").unwrap();
    std::thread::sleep(SETTLE);
    session.update_content(markup_id, "<p>two</p>").unwrap();
    std::thread::sleep(SETTLE);

    assert_eq!(surface.presented().len(), 2);
}

#[test]
fn auto_run_off_suppresses_rebuilds_until_manual_run() {
    let config = SessionConfig {
        auto_run: false,
        ..test_config()
    };
    let (session, surface) = session_with_surface(config);
    let markup_id = session.files()[0].id;

    session.update_content(markup_id, "<p>draft</p>").unwrap();
    std::thread::sleep(SETTLE);
    assert!(surface.presented().is_empty());

    session.run_now();
    let documents = surface.presented();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].contains("<p>draft</p>"));
}

#[test]
fn manual_run_cancels_pending_countdown() {
    let (session, surface) = session_with_surface(test_config());
    let markup_id = session.files()[0].id;

    session.update_content(markup_id, "<p>now</p>").unwrap();
    session.run_now();
    std::thread::sleep(SETTLE);

    // The pending countdown must not fire a second rebuild
    assert_eq!(surface.presented().len(), 1);
}

#[test]
fn disabling_auto_run_cancels_pending_countdown() {
    let (session, surface) = session_with_surface(test_config());
    let markup_id = session.files()[0].id;

    session.update_content(markup_id, "<p>pending</p>").unwrap();
    session.set_auto_run(false);
    std::thread::sleep(SETTLE);

    assert!(surface.presented().is_empty());
}

#[test]
fn teardown_with_pending_countdown_never_fires() {
    let (session, surface) = session_with_surface(test_config());
    let markup_id = session.files()[0].id;

    session.update_content(markup_id, "<p>stale</p>").unwrap();
    drop(session);
    std::thread::sleep(SETTLE);

    assert!(surface.presented().is_empty());
}

#[test]
fn viewport_change_never_triggers_a_rebuild() {
    let (mut session, surface) = session_with_surface(test_config());

    session.set_viewport(ViewportMode::Mobile);
    session.set_viewport(ViewportMode::Tablet);
    std::thread::sleep(SETTLE);

    assert!(surface.presented().is_empty());
    assert_eq!(session.viewport(), ViewportMode::Tablet);
}

#[test]
fn rebuild_embeds_all_three_role_buffers() {
    let buffers = BufferSet::from_files(vec![
        ("index.html", LanguageRole::Markup, "<h1>page</h1>"),
        ("styles.css", LanguageRole::Style, "h1 { color: teal; }"),
        ("script.js", LanguageRole::ScriptJs, "console.log('hi');"),
    ])
    .unwrap();
    let surface = RecordingSurface::default();
    let session = PreviewSession::new(buffers, surface.clone(), test_config());

    session.run_now();

    let documents = surface.presented();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].contains("<h1>page</h1>"));
    assert!(documents[0].contains("h1 { color: teal; }"));
    assert!(documents[0].contains("console.log('hi');"));
    // The composed document always carries the error trap
    assert!(documents[0].contains("window.onerror"));
}

#[test]
fn missing_role_buffers_compose_as_empty() {
    let buffers =
        BufferSet::from_files(vec![("index.html", LanguageRole::Markup, "<h1>solo</h1>")])
            .unwrap();
    let surface = RecordingSurface::default();
    let session = PreviewSession::new(buffers, surface.clone(), test_config());

    session.run_now();

    let documents = surface.presented();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].starts_with("<!DOCTYPE html>"));
    assert!(documents[0].contains("<h1>solo</h1>"));
}

#[test]
fn validation_arm_fills_latest_report_after_quiet_period() {
    let (session, _surface) = session_with_surface(test_config());
    let markup_id = session.files()[0].id;
    assert!(session.latest_report().is_none());

    session
        .update_content(markup_id, "<img src=\"a.png\">")
        .unwrap();
    std::thread::sleep(SETTLE);

    let report = session.latest_report().expect("validation pass completed");
    assert_eq!(report.file_name, "index.html");
    let alt = report
        .results
        .iter()
        .find(|result| result.rule_id == "images-have-alt")
        .unwrap();
    assert!(!alt.passed);
}

#[test]
fn validation_runs_even_with_auto_run_off() {
    let config = SessionConfig {
        auto_run: false,
        ..test_config()
    };
    let (session, surface) = session_with_surface(config);
    let markup_id = session.files()[0].id;

    session.update_content(markup_id, "<p>draft</p>").unwrap();
    std::thread::sleep(SETTLE);

    // Validator cadence is independent of the preview auto-run toggle
    assert!(session.latest_report().is_some());
    assert!(surface.presented().is_empty());
}

#[test]
fn validate_now_reports_the_active_file() {
    let (session, _surface) = session_with_surface(test_config());
    let script_id = session.files()[2].id;
    session.set_active(script_id).unwrap();
    session.update_content(script_id, "var x = 1;").unwrap();

    let report = session.validate_now();

    assert_eq!(report.file_name, "script.js");
    let var_rule = report
        .results
        .iter()
        .find(|result| result.rule_id == "no-var-keyword")
        .unwrap();
    assert!(!var_rule.passed);
}
