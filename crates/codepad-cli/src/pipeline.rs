//! File-level plumbing shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use codepad_buffers::BufferSet;
use codepad_model::{FileId, LanguageRole, ValidationReport};

/// Infer the language role from a file extension.
pub fn role_for_path(path: &Path) -> Result<LanguageRole> {
    let name = display_name(path);
    match LanguageRole::from_file_name(&name) {
        Some(role) => Ok(role),
        None => bail!(
            "cannot infer a language role for {name}: \
             recognized extensions are .html, .css, .js, .ts, .py"
        ),
    }
}

/// The display name used in reports: the file name component of the path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn read_optional(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_source(path),
        None => Ok(String::new()),
    }
}

/// Validate each file against the rule library, inferring roles from
/// extensions.
pub fn check_files(paths: &[PathBuf]) -> Result<Vec<ValidationReport>> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let role = role_for_path(path)?;
        let text = read_source(path)?;
        let report = codepad_validate::evaluate(&display_name(path), role, &text);
        debug!(
            file = %path.display(),
            passed = report.passed_count(),
            total = report.total(),
            "checked"
        );
        reports.push(report);
    }
    Ok(reports)
}

/// Compose a preview document from optional per-role files; a missing file
/// contributes an empty buffer.
pub fn compose_from_paths(
    html: Option<&Path>,
    css: Option<&Path>,
    js: Option<&Path>,
) -> Result<String> {
    let markup = read_optional(html)?;
    let style = read_optional(css)?;
    let script = read_optional(js)?;
    Ok(codepad_compose::compose_document(&markup, &style, &script))
}

/// Build a buffer set for watch mode, remembering which file id backs which
/// path so edits on disk can be routed to the right buffer.
pub fn buffer_set_from_paths(
    html: Option<&Path>,
    css: Option<&Path>,
    js: Option<&Path>,
) -> Result<(BufferSet, Vec<(FileId, PathBuf)>)> {
    let mut seeds = Vec::new();
    let mut paths = Vec::new();
    for (path, role) in [
        (html, LanguageRole::Markup),
        (css, LanguageRole::Style),
        (js, LanguageRole::ScriptJs),
    ] {
        let Some(path) = path else { continue };
        let content = read_source(path)?;
        seeds.push((display_name(path), role, content));
        paths.push(path.to_path_buf());
    }
    if seeds.is_empty() {
        bail!("watch needs at least one of --html, --css, --js");
    }
    let set = BufferSet::from_files(seeds)?;
    let mapping = set
        .files()
        .iter()
        .map(|file| file.id)
        .zip(paths)
        .collect();
    Ok((set, mapping))
}
