use anyhow::Result;
use bookshelf_core::{seed, NoteLookup};

/// Print the note for `title`.
pub fn show_note(title: &str) -> Result<()> {
    println!("{}", note_text(&seed::notes(), title)?);
    Ok(())
}

fn note_text<'a>(notes: &'a NoteLookup, title: &str) -> Result<&'a str> {
    notes
        .note_for(title)
        .ok_or_else(|| anyhow::anyhow!("no note for {:?}", title))
}
