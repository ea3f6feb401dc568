//! Source buffer manager.
//!
//! The [`BufferSet`] owns the authoritative text of every open file, tracks
//! which file is active, and notifies subscribers after every successful
//! mutation. It is the single writer for buffer content; downstream pipeline
//! stages only ever read from it.

mod seed;
mod set;

pub use seed::seeded_files;
pub use set::{BufferEvent, BufferSet, ChangeListener};
