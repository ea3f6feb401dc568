//! Starter content for a fresh session.

use codepad_model::LanguageRole;

const STARTER_MARKUP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>My Page</title>
</head>
<body>
  <main>
    <h1>Hello, world!</h1>
    <p>Edit the files to see the preview update.</p>
  </main>
</body>
</html>
"#;

const STARTER_STYLE: &str = "body {\n  font-family: sans-serif;\n  margin: 2rem;\n}\n";

const STARTER_SCRIPT: &str = "console.log('preview ready');\n";

/// The default three-file template: name, role, and starter content.
pub fn seeded_files() -> Vec<(&'static str, LanguageRole, &'static str)> {
    vec![
        ("index.html", LanguageRole::Markup, STARTER_MARKUP),
        ("styles.css", LanguageRole::Style, STARTER_STYLE),
        ("script.js", LanguageRole::ScriptJs, STARTER_SCRIPT),
    ]
}
