//! Debounced preview pipeline.
//!
//! Wires the buffer manager to the document composer and the presentation
//! surface through a cancel-and-rearm debouncer, with an independent
//! debounced validation arm. See [`PreviewSession`] for the whole assembly.

mod debounce;
mod session;
mod surface;

pub use debounce::Debouncer;
pub use session::{PreviewSession, SessionConfig};
pub use surface::{FileSurface, PreviewSurface};
