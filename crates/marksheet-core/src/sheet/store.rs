use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{Evaluation, evaluate_all};
use crate::error::{Error, Result};
use crate::sheet::SubjectEntry;

/// Stable identity of a row in an `EntryStore`.
///
/// Handles are never reused by the store that issued them, so a handle kept
/// after its row is removed can never reach a newer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryHandle(u64);

impl std::fmt::Display for EntryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Insertion-ordered subject rows.
///
/// The store does not enforce a minimum row count; keeping at least one row
/// on screen is up to the presenter.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<(EntryHandle, SubjectEntry)>,
    next_id: u64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `rows` empty entries.
    pub fn with_rows(rows: usize) -> Self {
        let mut store = Self::new();
        for _ in 0..rows {
            store.add();
        }
        store
    }

    /// Load rows from a sheet file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a sheet: one row per line, tab separated, either
    /// `subject<TAB>mark<TAB>out of` or `mark<TAB>out of`.
    /// Blank lines and lines starting with `#` are skipped. Field text is kept
    /// as written, so malformed numbers surface at evaluation time.
    pub fn parse(content: &str) -> Result<Self> {
        let mut store = Self::new();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
            let entry = match columns.as_slice() {
                [subject, mark, out_of] => SubjectEntry::with_text(*subject, mark, out_of),
                [mark, out_of] => SubjectEntry::with_text("", mark, out_of),
                _ => {
                    return Err(Error::SheetParseError {
                        line: index + 1,
                        message: format!(
                            "expected 2 or 3 tab-separated columns, got {}",
                            columns.len()
                        ),
                    });
                }
            };
            store.push(entry);
        }

        Ok(store)
    }

    /// Append an empty row.
    pub fn add(&mut self) -> EntryHandle {
        self.push(SubjectEntry::new())
    }

    /// Append a pre-filled row.
    pub fn push(&mut self, entry: SubjectEntry) -> EntryHandle {
        let handle = EntryHandle(self.next_id);
        self.next_id += 1;
        self.entries.push((handle, entry));
        debug!("Added entry {}", handle);
        handle
    }

    /// Remove a row, returning its last contents.
    pub fn remove(&mut self, handle: EntryHandle) -> Result<SubjectEntry> {
        let index = self.position(handle).ok_or(Error::EntryNotFound(handle))?;
        let (_, entry) = self.entries.remove(index);
        debug!("Removed entry {}", handle);
        Ok(entry)
    }

    /// Live handles in insertion order.
    pub fn list(&self) -> Vec<EntryHandle> {
        self.entries.iter().map(|(handle, _)| *handle).collect()
    }

    pub fn get(&self, handle: EntryHandle) -> Option<&SubjectEntry> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, entry)| entry)
    }

    pub fn get_mut(&mut self, handle: EntryHandle) -> Option<&mut SubjectEntry> {
        self.entries
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, entry)| entry)
    }

    /// Zero-based display position of a live handle.
    pub fn position(&self, handle: EntryHandle) -> Option<usize> {
        self.entries.iter().position(|(h, _)| *h == handle)
    }

    /// Handle shown at a zero-based display position.
    pub fn handle_at(&self, position: usize) -> Option<EntryHandle> {
        self.entries.get(position).map(|(handle, _)| *handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryHandle, &SubjectEntry)> {
        self.entries.iter().map(|(handle, entry)| (*handle, entry))
    }

    pub fn entries(&self) -> impl Iterator<Item = &SubjectEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Grade the current rows in display order.
    pub fn evaluate(&self) -> Evaluation {
        evaluate_all(self.entries())
    }
}
