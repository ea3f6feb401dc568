use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::LanguageRole;

/// Opaque identity of a source file within one buffer set.
///
/// Ids are handed out by the buffer manager's monotonic counter and are never
/// reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FileId(u64);

impl FileId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// One editable source buffer: a display name, a declared language role, and
/// the current text content.
///
/// Content is owned exclusively by the buffer manager; collaborators read it
/// through the manager and mutate it only via `update_content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub id: FileId,
    pub name: String,
    pub role: LanguageRole,
    pub content: String,
}

impl SourceFile {
    pub fn new(id: FileId, name: impl Into<String>, role: LanguageRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
