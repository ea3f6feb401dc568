//! The sandboxed renderer seam.
//!
//! The pipeline never executes the composed document itself; it hands the
//! document to a [`PreviewSurface`] whose implementation guarantees the
//! isolation contract: the document's scripts share no cookies, storage, or
//! global state with the host process, and nothing the document does can
//! crash or freeze it. Presentation is fire-and-forget; every call fully
//! replaces the prior rendered content.

use std::path::PathBuf;

use tracing::debug;

use codepad_model::Result;

pub trait PreviewSurface: Send {
    /// Replace the rendered content with `document`. No completion is
    /// awaited; the surface owns everything that happens after handoff.
    fn present(&mut self, document: &str) -> Result<()>;
}

/// Surface that writes the composed document to a path on disk.
///
/// Isolation is process-level: the document only ever executes inside
/// whatever browser the user points at the file, never in this process. The
/// write goes through a temp file and an atomic rename so an observer never
/// sees a half-written document.
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreviewSurface for FileSurface {
    fn present(&mut self, document: &str) -> Result<()> {
        let staging = self.path.with_extension("tmp");
        std::fs::write(&staging, document)?;
        std::fs::rename(&staging, &self.path)?;
        debug!(
            path = %self.path.display(),
            bytes = document.len(),
            "preview document written"
        );
        Ok(())
    }
}
