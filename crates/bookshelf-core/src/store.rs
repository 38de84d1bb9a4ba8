//! The in-memory shelf.
//!
//! `BookStore` is the single owner of the book list for a session. Reads
//! hand out a borrowed snapshot; the only mutation is [`BookStore::set_status`],
//! which swaps in a freshly built list and tells the notification sink.

use std::collections::HashSet;
use std::fmt;
use std::sync::mpsc::Sender;

use crate::model::{Book, BookId, ReadingStatus};
use crate::seed;
use crate::status::with_status;

/// An event emitted by the store after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    StatusUpdated { id: BookId, status: ReadingStatus },
}

impl Notification {
    /// Stable name of the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StatusUpdated { .. } => "status-updated",
        }
    }
}

/// Receiver of store events.
///
/// Delivery is fire-and-forget: the store never looks at what the sink does
/// with an event and never retries.
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

/// Sink that writes every event to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::StatusUpdated { id, status } => {
                log::info!("{}: book {} is now {}", notification.kind(), id, status);
            }
        }
    }
}

impl NotificationSink for Sender<Notification> {
    fn notify(&self, notification: &Notification) {
        if self.send(notification.clone()).is_err() {
            log::debug!("notification receiver gone, dropping {}", notification.kind());
        }
    }
}

/// Owner of the ordered book list.
pub struct BookStore {
    books: Vec<Book>,
    sink: Box<dyn NotificationSink>,
}

impl fmt::Debug for BookStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}

impl BookStore {
    /// Create a store over `books`, in display order.
    ///
    /// Titles are not required to be unique, but duplicates make note
    /// lookup ambiguous, so each one is logged.
    pub fn new(books: Vec<Book>, sink: impl NotificationSink + 'static) -> Self {
        let store = Self {
            books,
            sink: Box::new(sink),
        };
        for title in store.duplicate_titles() {
            log::warn!("title {:?} appears more than once; its note is ambiguous", title);
        }
        log::debug!("book store ready with {} books", store.books.len());
        store
    }

    /// Create a store holding the seed shelf.
    pub fn seeded(sink: impl NotificationSink + 'static) -> Self {
        Self::new(seed::books(), sink)
    }

    /// Read-only snapshot of every book, in display order.
    #[must_use]
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Set the status of the book with `id` and return the new snapshot.
    ///
    /// An unknown id leaves the list untouched and emits nothing. A known id
    /// always emits [`Notification::StatusUpdated`], even when the book
    /// already had `status`.
    pub fn set_status(&mut self, id: &BookId, status: ReadingStatus) -> &[Book] {
        if self.get(id).is_none() {
            log::debug!("ignoring status change for unknown book {}", id);
            return &self.books;
        }

        self.books = with_status(&self.books, id, status);
        log::debug!("book {} set to {}", id, status);
        self.sink.notify(&Notification::StatusUpdated {
            id: id.clone(),
            status,
        });
        &self.books
    }

    /// Titles that occur on more than one book, each reported once.
    #[must_use]
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.books
            .iter()
            .map(|book| book.title.as_str())
            .filter(|title| !seen.insert(*title) && reported.insert(*title))
            .collect()
    }
}
