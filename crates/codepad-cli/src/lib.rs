//! CLI library components for codepad.

pub mod logging;
pub mod pipeline;
