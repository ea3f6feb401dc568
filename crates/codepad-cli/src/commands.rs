use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use codepad_model::FileId;
use codepad_preview::{FileSurface, PreviewSession, PreviewSurface, SessionConfig};
use codepad_validate::write_validation_report_json;

use crate::cli::{CheckArgs, PreviewArgs, WatchArgs};
use crate::pipeline::{buffer_set_from_paths, check_files, compose_from_paths, read_source};
use crate::summary::print_rules_table;
use crate::types::{CheckResult, PreviewResult};

pub fn run_preview(args: &PreviewArgs) -> Result<PreviewResult> {
    let document = compose_from_paths(
        args.html.as_deref(),
        args.css.as_deref(),
        args.js.as_deref(),
    )?;
    let mut surface = FileSurface::new(&args.out);
    surface
        .present(&document)
        .with_context(|| format!("write {}", args.out.display()))?;
    Ok(PreviewResult {
        out: args.out.clone(),
        bytes: document.len(),
        viewport: args.viewport.into(),
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let reports = check_files(&args.files)?;
    let report_path = match &args.report_dir {
        Some(dir) => Some(
            write_validation_report_json(dir, &reports)
                .with_context(|| format!("write report into {}", dir.display()))?,
        ),
        None => None,
    };
    Ok(CheckResult {
        reports,
        report_path,
    })
}

pub fn run_rules() -> Result<()> {
    print_rules_table();
    Ok(())
}

/// Poll the watched files and route edits through the debounced session.
/// Runs until interrupted.
pub fn run_watch(args: &WatchArgs) -> Result<()> {
    let (buffers, watched) = buffer_set_from_paths(
        args.html.as_deref(),
        args.css.as_deref(),
        args.js.as_deref(),
    )?;
    let span = info_span!("watch", out = %args.out.display());
    let _guard = span.enter();

    let mut last_seen: BTreeMap<FileId, String> = buffers
        .files()
        .iter()
        .map(|file| (file.id, file.content.clone()))
        .collect();

    let config = SessionConfig {
        preview_quiet: Duration::from_millis(args.quiet_ms),
        validate_quiet: Duration::from_millis(args.quiet_ms),
        auto_run: true,
    };
    let session = PreviewSession::new(buffers, FileSurface::new(&args.out), config);
    session.run_now();
    let report = session.validate_now();
    info!(
        files = watched.len(),
        score = report.score(),
        "watching; open {} in a browser",
        args.out.display()
    );

    let interval = Duration::from_millis(args.interval_ms);
    loop {
        std::thread::sleep(interval);
        for (id, path) in &watched {
            let Ok(content) = read_source(path) else {
                // Editors briefly remove files mid-save; skip this round
                continue;
            };
            if last_seen.get(id).is_some_and(|seen| seen == &content) {
                continue;
            }
            info!(file = %path.display(), bytes = content.len(), "change detected");
            last_seen.insert(*id, content.clone());
            session.update_content(*id, content)?;
        }
    }
}
