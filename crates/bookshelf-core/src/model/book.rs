use serde::{Deserialize, Serialize};

use crate::model::ids::BookId;
use crate::model::status::ReadingStatus;

/// A single title on the shelf.
///
/// Only `status` changes during a session, and only through
/// [`BookStore::set_status`](crate::store::BookStore::set_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,

    /// Display title. Also the key for note lookup, so it should be unique
    /// on a shelf.
    pub title: String,

    pub author: String,

    /// Reference to the cover image. Never dereferenced by the core.
    pub cover_url: String,

    pub status: ReadingStatus,
}

impl Book {
    #[must_use]
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        cover_url: impl Into<String>,
        status: ReadingStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            cover_url: cover_url.into(),
            status,
        }
    }

    /// A copy of this book with a different status.
    #[must_use]
    pub fn with_status(&self, status: ReadingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
