//! Integration tests for the source buffer manager.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use codepad_buffers::{BufferEvent, BufferSet};
use codepad_model::{CodepadError, FileId, LanguageRole};

fn two_file_set() -> BufferSet {
    BufferSet::from_files(vec![
        ("index.html", LanguageRole::Markup, "<h1>a</h1>"),
        ("styles.css", LanguageRole::Style, "h1 { color: red; }"),
    ])
    .unwrap()
}

#[test]
fn delete_last_file_is_refused_and_set_unchanged() {
    let mut set =
        BufferSet::from_files(vec![("index.html", LanguageRole::Markup, "<h1>a</h1>")]).unwrap();
    let id = set.files()[0].id;

    let result = set.delete_file(id);

    assert!(matches!(result, Err(CodepadError::MinimumFileCount)));
    assert_eq!(set.len(), 1);
    assert_eq!(set.files()[0].content, "<h1>a</h1>");
    assert_eq!(set.active_id(), id);
}

#[test]
fn deleting_active_file_activates_first_remaining() {
    let mut set = BufferSet::from_files(vec![
        ("index.html", LanguageRole::Markup, ""),
        ("styles.css", LanguageRole::Style, ""),
        ("script.js", LanguageRole::ScriptJs, ""),
    ])
    .unwrap();
    let second = set.files()[1].id;
    set.set_active(second).unwrap();

    set.delete_file(second).unwrap();

    // First remaining file in insertion order becomes active
    assert_eq!(set.active_file().name, "index.html");
    assert_eq!(set.len(), 2);
}

#[test]
fn deleting_inactive_file_keeps_active() {
    let mut set = two_file_set();
    let active = set.active_id();
    let other = set.files()[1].id;

    set.delete_file(other).unwrap();

    assert_eq!(set.active_id(), active);
}

#[test]
fn insertion_order_is_preserved_through_add_and_delete() {
    let mut set = two_file_set();
    let added = set.add_file("script.js", LanguageRole::ScriptJs);
    set.delete_file(set.files()[1].id).unwrap();

    let names: Vec<&str> = set.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["index.html", "script.js"]);
    assert_eq!(set.files()[1].id, added);
}

#[test]
fn add_file_does_not_change_active() {
    let mut set = two_file_set();
    let active = set.active_id();

    let id = set.add_file("extra.js", LanguageRole::ScriptJs);

    assert_eq!(set.active_id(), active);
    assert_eq!(set.file(id).unwrap().content, "");
}

#[test]
fn update_content_replaces_exactly_one_file() {
    let mut set = two_file_set();
    let first = set.files()[0].id;

    set.update_content(first, "<h1>b</h1>").unwrap();

    assert_eq!(set.files()[0].content, "<h1>b</h1>");
    assert_eq!(set.files()[1].content, "h1 { color: red; }");
}

#[test]
fn unknown_file_id_is_an_error() {
    let mut set = two_file_set();
    let bogus = FileId::new(999);

    assert!(matches!(
        set.update_content(bogus, "x"),
        Err(CodepadError::UnknownFile(_))
    ));
    assert!(matches!(
        set.delete_file(bogus),
        Err(CodepadError::UnknownFile(_))
    ));
    assert!(matches!(
        set.set_active(bogus),
        Err(CodepadError::UnknownFile(_))
    ));
}

#[test]
fn listeners_observe_content_changes() {
    let mut set = two_file_set();
    let changes = Arc::new(AtomicUsize::new(0));
    let observed = Arc::clone(&changes);
    set.subscribe(Arc::new(move |event| {
        if matches!(event, BufferEvent::ContentChanged { .. }) {
            observed.fetch_add(1, Ordering::SeqCst);
        }
    }));

    let first = set.files()[0].id;
    set.update_content(first, "one").unwrap();
    set.update_content(first, "two").unwrap();
    // A failed update must not notify
    let _ = set.update_content(FileId::new(999), "three");

    assert_eq!(changes.load(Ordering::SeqCst), 2);
}
