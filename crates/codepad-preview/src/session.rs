//! The preview session: buffers → debounce → compose → surface, plus an
//! independent debounced validation arm.
//!
//! The two arms share nothing but the buffer set and may fire in either
//! order; both read only the raw buffer text. Debouncer callbacks hold weak
//! references to session state, so a countdown that races session teardown
//! upgrades to nothing and quietly does not fire.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, warn};

use codepad_buffers::{BufferEvent, BufferSet};
use codepad_compose::compose_document;
use codepad_model::{FileId, LanguageRole, Result, SourceFile, ValidationReport, ViewportMode};

use crate::debounce::{Debouncer, lock_unpoisoned};
use crate::surface::PreviewSurface;

/// Tunables for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quiet period before a preview rebuild after the last edit.
    pub preview_quiet: Duration,
    /// Quiet period before a validation pass after the last edit.
    /// Independent of the preview arm.
    pub validate_quiet: Duration,
    /// Whether edits schedule rebuilds at all; manual runs always work.
    pub auto_run: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preview_quiet: Duration::from_millis(1000),
            validate_quiet: Duration::from_millis(1000),
            auto_run: true,
        }
    }
}

pub struct PreviewSession {
    buffers: Arc<Mutex<BufferSet>>,
    surface: Arc<Mutex<dyn PreviewSurface>>,
    preview_arm: Arc<Debouncer>,
    validate_arm: Arc<Debouncer>,
    auto_run: Arc<AtomicBool>,
    latest_report: Arc<Mutex<Option<ValidationReport>>>,
    viewport: ViewportMode,
}

impl PreviewSession {
    pub fn new(
        buffers: BufferSet,
        surface: impl PreviewSurface + 'static,
        config: SessionConfig,
    ) -> Self {
        let buffers = Arc::new(Mutex::new(buffers));
        let surface: Arc<Mutex<dyn PreviewSurface>> = Arc::new(Mutex::new(surface));
        let latest_report = Arc::new(Mutex::new(None));
        let auto_run = Arc::new(AtomicBool::new(config.auto_run));

        let preview_arm = {
            let buffers = Arc::downgrade(&buffers);
            let surface = Arc::downgrade(&surface);
            Arc::new(Debouncer::new(config.preview_quiet, move || {
                if let (Some(buffers), Some(surface)) = (buffers.upgrade(), surface.upgrade()) {
                    rebuild(&buffers, &surface);
                }
            }))
        };
        let validate_arm = {
            let buffers = Arc::downgrade(&buffers);
            let latest = Arc::downgrade(&latest_report);
            Arc::new(Debouncer::new(config.validate_quiet, move || {
                if let (Some(buffers), Some(latest)) = (buffers.upgrade(), latest.upgrade()) {
                    revalidate(&buffers, &latest);
                }
            }))
        };

        {
            let mut set = lock_unpoisoned(&buffers);
            let arm = Arc::downgrade(&preview_arm);
            let enabled = Arc::clone(&auto_run);
            set.subscribe(Arc::new(move |event| {
                if matches!(event, BufferEvent::ContentChanged { .. })
                    && enabled.load(Ordering::SeqCst)
                    && let Some(arm) = arm.upgrade()
                {
                    arm.schedule();
                }
            }));
            let arm = Arc::downgrade(&validate_arm);
            set.subscribe(Arc::new(move |event| {
                if matches!(event, BufferEvent::ContentChanged { .. })
                    && let Some(arm) = arm.upgrade()
                {
                    arm.schedule();
                }
            }));
        }

        Self {
            buffers,
            surface,
            preview_arm,
            validate_arm,
            auto_run,
            latest_report,
            viewport: ViewportMode::default(),
        }
    }

    /// Route one edit through the buffer manager. Scheduling of the two arms
    /// happens via the manager's change listeners.
    pub fn update_content(&self, id: FileId, content: impl Into<String>) -> Result<()> {
        lock_unpoisoned(&self.buffers).update_content(id, content)
    }

    pub fn add_file(&self, name: impl Into<String>, role: LanguageRole) -> FileId {
        lock_unpoisoned(&self.buffers).add_file(name, role)
    }

    pub fn delete_file(&self, id: FileId) -> Result<()> {
        lock_unpoisoned(&self.buffers).delete_file(id)
    }

    pub fn set_active(&self, id: FileId) -> Result<()> {
        lock_unpoisoned(&self.buffers).set_active(id)
    }

    /// Snapshot of the current files in insertion order.
    pub fn files(&self) -> Vec<SourceFile> {
        lock_unpoisoned(&self.buffers).files().to_vec()
    }

    pub fn active_file(&self) -> SourceFile {
        lock_unpoisoned(&self.buffers).active_file().clone()
    }

    pub fn auto_run(&self) -> bool {
        self.auto_run.load(Ordering::SeqCst)
    }

    /// Toggle auto-run. Turning it off cancels any pending preview
    /// countdown; the validation arm keeps its own cadence.
    pub fn set_auto_run(&self, enabled: bool) {
        self.auto_run.store(enabled, Ordering::SeqCst);
        if !enabled {
            self.preview_arm.cancel();
        }
        debug!(enabled, "auto-run toggled");
    }

    /// Manual run: cancel the pending countdown so it cannot double-fire,
    /// then rebuild immediately on the caller's thread.
    pub fn run_now(&self) {
        self.preview_arm.cancel();
        rebuild(&self.buffers, &self.surface);
    }

    /// Immediate validation pass over the active buffer.
    pub fn validate_now(&self) -> ValidationReport {
        self.validate_arm.cancel();
        revalidate(&self.buffers, &self.latest_report)
    }

    /// The most recent validation pass, if one has completed.
    pub fn latest_report(&self) -> Option<ValidationReport> {
        lock_unpoisoned(&self.latest_report).clone()
    }

    pub fn viewport(&self) -> ViewportMode {
        self.viewport
    }

    /// Resize the preview container. Only the viewport dimensions change;
    /// the composed document is untouched and no rebuild is triggered.
    pub fn set_viewport(&mut self, mode: ViewportMode) {
        self.viewport = mode;
        debug!(viewport = %mode, width_px = mode.width_px(), "viewport resized");
    }
}

/// Compose the current buffers and hand the document to the surface.
fn rebuild(buffers: &Mutex<BufferSet>, surface: &Mutex<dyn PreviewSurface>) {
    let document = {
        let set = lock_unpoisoned(buffers);
        let markup = set.content_for_role(LanguageRole::Markup).unwrap_or("");
        let style = set.content_for_role(LanguageRole::Style).unwrap_or("");
        let script = set.content_for_role(LanguageRole::ScriptJs).unwrap_or("");
        compose_document(markup, style, script)
    };
    if let Err(error) = lock_unpoisoned(surface).present(&document) {
        // A surface failure never propagates out of the pipeline
        warn!(%error, "preview surface rejected the document");
    }
}

/// Run the rule library against the active buffer and store the report.
fn revalidate(
    buffers: &Mutex<BufferSet>,
    latest: &Mutex<Option<ValidationReport>>,
) -> ValidationReport {
    let report = {
        let set = lock_unpoisoned(buffers);
        let active = set.active_file();
        codepad_validate::evaluate(&active.name, active.role, &active.content)
    };
    *lock_unpoisoned(latest) = Some(report.clone());
    report
}
