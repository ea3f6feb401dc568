use std::fmt;
use std::sync::Arc;

use tracing::debug;

use codepad_model::{CodepadError, FileId, LanguageRole, Result, SourceFile};

use crate::seed::seeded_files;

/// Notification emitted after a successful buffer mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferEvent {
    ContentChanged { id: FileId },
    FileAdded { id: FileId },
    FileRemoved { id: FileId },
    ActiveChanged { id: FileId },
}

/// Subscriber callback, fired synchronously after the mutation it observes.
pub type ChangeListener = Arc<dyn Fn(&BufferEvent) + Send + Sync>;

/// Insertion-ordered set of source files with a designated active file.
///
/// Invariants:
/// - the set always holds at least one file (deletion below the floor is
///   refused with [`CodepadError::MinimumFileCount`]);
/// - ids are unique, assigned from a monotonic counter, never reused;
/// - `active` always names a file in the set.
pub struct BufferSet {
    files: Vec<SourceFile>,
    active: FileId,
    next_id: u64,
    listeners: Vec<ChangeListener>,
}

impl BufferSet {
    /// Build a set from (name, role, content) triples, first file active.
    ///
    /// # Errors
    ///
    /// Returns [`CodepadError::MinimumFileCount`] when `files` is empty; the
    /// one-file floor holds from construction onward.
    pub fn from_files<N, C>(files: Vec<(N, LanguageRole, C)>) -> Result<Self>
    where
        N: Into<String>,
        C: Into<String>,
    {
        if files.is_empty() {
            return Err(CodepadError::MinimumFileCount);
        }
        let mut set = Self {
            files: Vec::with_capacity(files.len()),
            active: FileId::new(0),
            next_id: 0,
            listeners: Vec::new(),
        };
        for (name, role, content) in files {
            let id = set.allocate_id();
            set.files
                .push(SourceFile::new(id, name, role).with_content(content));
        }
        set.active = set.files[0].id;
        Ok(set)
    }

    /// The default three-file session template (index.html, styles.css,
    /// script.js), first file active.
    pub fn seeded() -> Self {
        // seeded_files() is non-empty by construction
        match Self::from_files(seeded_files()) {
            Ok(set) => set,
            Err(_) => unreachable!("seed template is never empty"),
        }
    }

    fn allocate_id(&mut self) -> FileId {
        let id = FileId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn notify(&self, event: &BufferEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    fn position(&self, id: FileId) -> Option<usize> {
        self.files.iter().position(|file| file.id == id)
    }

    /// Register a change listener. Listeners fire synchronously, in
    /// registration order, after each successful mutation.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// All files in insertion order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        // The one-file floor makes this permanently false; kept for the
        // conventional len/is_empty pairing.
        self.files.is_empty()
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.iter().find(|file| file.id == id)
    }

    pub fn active_id(&self) -> FileId {
        self.active
    }

    pub fn active_file(&self) -> &SourceFile {
        self.file(self.active)
            .unwrap_or_else(|| unreachable!("active id always names a file in the set"))
    }

    /// Make `id` the active file.
    ///
    /// # Errors
    ///
    /// Returns [`CodepadError::UnknownFile`] when `id` is not in the set.
    pub fn set_active(&mut self, id: FileId) -> Result<()> {
        if self.position(id).is_none() {
            return Err(CodepadError::UnknownFile(id));
        }
        if self.active != id {
            self.active = id;
            self.notify(&BufferEvent::ActiveChanged { id });
        }
        Ok(())
    }

    /// Replace the content of exactly one file.
    ///
    /// # Errors
    ///
    /// Returns [`CodepadError::UnknownFile`] when `id` is not in the set.
    pub fn update_content(&mut self, id: FileId, content: impl Into<String>) -> Result<()> {
        let Some(index) = self.position(id) else {
            return Err(CodepadError::UnknownFile(id));
        };
        self.files[index].content = content.into();
        self.notify(&BufferEvent::ContentChanged { id });
        Ok(())
    }

    /// Append a new empty file. The active file is unchanged.
    pub fn add_file(&mut self, name: impl Into<String>, role: LanguageRole) -> FileId {
        let id = self.allocate_id();
        self.files.push(SourceFile::new(id, name, role));
        debug!(file = %id, "file added");
        self.notify(&BufferEvent::FileAdded { id });
        id
    }

    /// Remove a file. Refused when only one file remains; when the deleted
    /// file was active, activation moves to the first remaining file in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// [`CodepadError::MinimumFileCount`] at the one-file floor,
    /// [`CodepadError::UnknownFile`] for an id not in the set. Both leave the
    /// set unchanged.
    pub fn delete_file(&mut self, id: FileId) -> Result<()> {
        let Some(index) = self.position(id) else {
            return Err(CodepadError::UnknownFile(id));
        };
        if self.files.len() == 1 {
            return Err(CodepadError::MinimumFileCount);
        }
        self.files.remove(index);
        debug!(file = %id, "file removed");
        if self.active == id {
            let new_active = self.files[0].id;
            self.active = new_active;
            self.notify(&BufferEvent::FileRemoved { id });
            self.notify(&BufferEvent::ActiveChanged { id: new_active });
        } else {
            self.notify(&BufferEvent::FileRemoved { id });
        }
        Ok(())
    }

    /// Content of the first file (insertion order) filling the given
    /// composition slot. Script roles share one slot: a `script-ts` buffer
    /// fills the script slot when no earlier script file exists.
    pub fn content_for_role(&self, role: LanguageRole) -> Option<&str> {
        let wanted = role.category();
        self.files
            .iter()
            .find(|file| file.role.category() == wanted)
            .map(|file| file.content.as_str())
    }
}

impl fmt::Debug for BufferSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferSet")
            .field("files", &self.files)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_set_has_three_files_first_active() {
        let set = BufferSet::seeded();
        assert_eq!(set.len(), 3);
        assert_eq!(set.active_file().name, "index.html");
    }

    #[test]
    fn content_for_role_matches_script_variants() {
        let set = BufferSet::from_files(vec![
            ("index.html", LanguageRole::Markup, "<p>hi</p>"),
            ("app.ts", LanguageRole::ScriptTs, "let x = 1;"),
        ])
        .unwrap();
        assert_eq!(
            set.content_for_role(LanguageRole::ScriptJs),
            Some("let x = 1;")
        );
        assert_eq!(set.content_for_role(LanguageRole::Style), None);
    }

    #[test]
    fn empty_construction_is_refused() {
        let files: Vec<(&str, LanguageRole, &str)> = vec![];
        assert!(matches!(
            BufferSet::from_files(files),
            Err(CodepadError::MinimumFileCount)
        ));
    }
}
