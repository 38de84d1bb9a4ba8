use bookshelf_core::{Book, BookId};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::{status_icon, App};

const NO_NOTE: &str = "No notes for this book yet.";

/// Render the note panel for one book.
pub fn render(frame: &mut Frame, app: &App, id: &BookId) {
    let area = frame.area();

    let Some(book) = app.store.get(id) else {
        let msg = Paragraph::new("Book not found").style(Style::default().fg(Color::Red));
        frame.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Cover and note
            Constraint::Length(4), // Signature
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    render_title(frame, book, chunks[0]);
    render_cover(frame, book, body[0]);
    render_note(frame, app.notes.note_for(&book.title), body[1]);
    render_signature(frame, app, chunks[2]);
    render_help(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, book: &Book, area: Rect) {
    let header = Paragraph::new(format!("{} by {}", book.title, book.author))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_cover(frame: &mut Frame, book: &Book, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            book.cover_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!("{} {}", status_icon(book.status), book.status.label())),
    ];
    let cover = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Cover"));
    frame.render_widget(cover, area);
}

fn render_note(frame: &mut Frame, note: Option<&str>, area: Rect) {
    let paragraph = match note {
        Some(text) => Paragraph::new(text).style(Style::default().add_modifier(Modifier::ITALIC)),
        None => Paragraph::new(NO_NOTE).style(Style::default().fg(Color::Yellow)),
    };
    let note = paragraph
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Reading Notes"));
    frame.render_widget(note, area);
}

fn render_signature(frame: &mut Frame, app: &App, area: Rect) {
    let signature = Paragraph::new(vec![
        Line::from(app.settings.signature.clone()),
        Line::from(Span::styled(
            app.today.format("%B %-d, %Y").to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(signature, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("  b/Esc Back  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
