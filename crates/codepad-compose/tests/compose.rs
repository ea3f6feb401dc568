//! Integration tests for the document composer.

use codepad_compose::{ERROR_TRAP, compose_document};
use proptest::prelude::*;

#[test]
fn empty_buffers_snapshot() {
    let document = compose_document("", "", "");
    insta::assert_snapshot!(document, @r#"
    <!DOCTYPE html>
    <html>
    <head>
    <meta charset="utf-8">
    <style>

    </style>
    </head>
    <body>

    <script>
    window.onerror = function (message, source, line, column) {
      console.error('[preview] ' + message + ' (line ' + line + ':' + column + ')');
      return true;
    };
    window.addEventListener('unhandledrejection', function (event) {
      console.error('[preview] unhandled rejection: ' + event.reason);
      event.preventDefault();
    });
    </script>
    <script>

    </script>
    </body>
    </html>
    "#);
}

#[test]
fn trap_is_always_embedded() {
    let document = compose_document("<p>x</p>", "p {}", "throw new Error('boom');");
    assert!(document.contains(ERROR_TRAP));
}

proptest! {
    #[test]
    fn composition_is_deterministic(markup in ".*", style in ".*", script in ".*") {
        let first = compose_document(&markup, &style, &script);
        let second = compose_document(&markup, &style, &script);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn composition_is_total_over_empty_subsets(
        markup in prop_oneof![Just(String::new()), ".*"],
        style in prop_oneof![Just(String::new()), ".*"],
        script in prop_oneof![Just(String::new()), ".*"],
    ) {
        let document = compose_document(&markup, &style, &script);
        prop_assert!(document.starts_with("<!DOCTYPE html>"));
        prop_assert!(document.contains("<head>"));
        prop_assert!(document.contains("</body>"));
        prop_assert!(document.ends_with("</html>\n"));
    }

    #[test]
    fn buffers_are_embedded_verbatim(markup in "[a-z]{1,20}", script in "[a-z]{1,20}") {
        let document = compose_document(&markup, "", &script);
        prop_assert!(document.contains(&markup));
        prop_assert!(document.contains(&script));
    }
}
