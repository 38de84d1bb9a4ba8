//! Free-text reading notes, keyed by book title.
//!
//! Notes are joined to books by exact title, not by id. Two books sharing a
//! title would share a note; the store logs that case but does not prevent it.

use std::collections::BTreeMap;

/// Fixed mapping from title to note text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteLookup {
    notes: BTreeMap<String, String>,
}

impl NoteLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The note for `title`, if there is one. Matching is exact.
    #[must_use]
    pub fn note_for(&self, title: &str) -> Option<&str> {
        let note = self.notes.get(title).map(String::as_str);
        if note.is_none() {
            log::debug!("no note for {:?}", title);
        }
        note
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Titles that have a note, in sorted order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.notes.keys().map(String::as_str)
    }
}

impl<T, N> FromIterator<(T, N)> for NoteLookup
where
    T: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, N)>>(iter: I) -> Self {
        Self {
            notes: iter
                .into_iter()
                .map(|(title, note)| (title.into(), note.into()))
                .collect(),
        }
    }
}
