use anyhow::{Context, Result};
use bookshelf_core::{search, Book, BookStore, LogSink, ReadingStatus};

/// Print the seed shelf, optionally narrowed by a search query and status.
pub fn run_list(query: Option<String>, status: Option<ReadingStatus>, json: bool) -> Result<()> {
    let store = BookStore::seeded(LogSink);
    let books = select(store.all(), query.as_deref().unwrap_or(""), status);

    if json {
        let out = serde_json::to_string_pretty(&books).context("Failed to serialize books")?;
        println!("{}", out);
    } else if books.is_empty() {
        println!("No books match.");
    } else {
        print!("{}", format_table(&books));
    }

    Ok(())
}

fn select<'a>(books: &'a [Book], query: &str, status: Option<ReadingStatus>) -> Vec<&'a Book> {
    search::filter(books, query)
        .into_iter()
        .filter(|book| status.map_or(true, |s| book.status == s))
        .collect()
}

fn format_table(books: &[&Book]) -> String {
    let header = format!("{:>3}  {:<32} {:<22} Status", "#", "Title", "Author");
    let rows = books.iter().map(|book| {
        format!(
            "{:>3}  {:<32} {:<22} {}",
            book.id,
            book.title,
            book.author,
            book.status.label()
        )
    });
    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
