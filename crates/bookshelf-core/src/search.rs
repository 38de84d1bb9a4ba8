//! Case-insensitive title/author search.

use crate::model::Book;

/// The books matching `query`, in their original order.
///
/// A match is literal substring containment of the lower-cased query in the
/// lower-cased title or author. The empty query matches everything.
#[must_use]
pub fn filter<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    books.iter().filter(|book| contains(book, &needle)).collect()
}

fn contains(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle) || book.author.to_lowercase().contains(needle)
}
