//! Reading-status transitions.
//!
//! Transitions are unrestricted: a caller names the exact target status and
//! any status may follow any other. Setting the same target twice is a no-op
//! after the first time.

use crate::model::{Book, BookId, ReadingStatus};
use crate::store::BookStore;

/// Build a new list equal to `books` except that the book with `id` has
/// `status`.
///
/// If no book has `id` the result is a plain copy of the input.
#[must_use]
pub fn with_status(books: &[Book], id: &BookId, status: ReadingStatus) -> Vec<Book> {
    books
        .iter()
        .map(|book| {
            if &book.id == id {
                book.with_status(status)
            } else {
                book.clone()
            }
        })
        .collect()
}

/// The three explicit status affordances, applied through a store.
#[derive(Debug)]
pub struct StatusController<'a> {
    store: &'a mut BookStore,
}

impl<'a> StatusController<'a> {
    pub fn new(store: &'a mut BookStore) -> Self {
        Self { store }
    }

    pub fn set(&mut self, id: &BookId, status: ReadingStatus) -> &[Book] {
        self.store.set_status(id, status)
    }

    pub fn set_not_started(&mut self, id: &BookId) -> &[Book] {
        self.set(id, ReadingStatus::NotStarted)
    }

    pub fn set_reading(&mut self, id: &BookId) -> &[Book] {
        self.set(id, ReadingStatus::Reading)
    }

    pub fn set_completed(&mut self, id: &BookId) -> &[Book] {
        self.set(id, ReadingStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::LogSink;

    #[test]
    fn test_with_status_replaces_one_record() {
        let books = seed::books();
        let updated = with_status(&books, &BookId::from("6"), ReadingStatus::Reading);

        assert_eq!(updated.len(), books.len());
        for (before, after) in books.iter().zip(&updated) {
            if before.id.as_str() == "6" {
                assert_eq!(after.status, ReadingStatus::Reading);
                assert_eq!(after.title, before.title);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_with_status_unknown_id_copies_input() {
        let books = seed::books();
        let updated = with_status(&books, &BookId::from("11"), ReadingStatus::Completed);
        assert_eq!(updated, books);
    }

    #[test]
    fn test_controller_affordances() {
        let mut store = BookStore::seeded(LogSink);
        let id = BookId::from("9");
        let mut controller = StatusController::new(&mut store);

        let status_of = |books: &[Book]| {
            books
                .iter()
                .find(|b| b.id.as_str() == "9")
                .map(|b| b.status)
        };

        assert_eq!(status_of(controller.set_reading(&id)), Some(ReadingStatus::Reading));
        assert_eq!(
            status_of(controller.set_completed(&id)),
            Some(ReadingStatus::Completed)
        );
        assert_eq!(
            status_of(controller.set_not_started(&id)),
            Some(ReadingStatus::NotStarted)
        );
    }

    #[test]
    fn test_controller_is_idempotent() {
        let mut store = BookStore::seeded(LogSink);
        let id = BookId::from("1");
        let mut controller = StatusController::new(&mut store);

        let once = controller.set_reading(&id).to_vec();
        let twice = controller.set_reading(&id).to_vec();
        assert_eq!(once, twice);
    }
}
