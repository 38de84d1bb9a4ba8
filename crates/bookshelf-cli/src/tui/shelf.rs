use bookshelf_core::Book;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{status_icon, App};

/// Rows taken by one book card, borders included.
const CARD_HEIGHT: u16 = 6;

/// Render the shelf grid view.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Heading
            Constraint::Length(3), // Search box
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(3), // Help bar or toast
        ])
        .split(area);

    render_heading(frame, app, chunks[0]);
    render_search(frame, app, chunks[1]);
    render_grid(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.settings.heading.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                app.settings.subheading.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(app.month_label(), Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let heading = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(heading, area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.query.is_empty() && !app.searching {
        (
            String::from("Search books..."),
            Style::default().fg(Color::DarkGray),
        )
    } else if app.searching {
        (format!("{}_", app.query), Style::default().fg(Color::Yellow))
    } else {
        (app.query.clone(), Style::default())
    };

    let border = if app.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("/ Search"),
    );
    frame.render_widget(search, area);
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let books = app.visible();

    if books.is_empty() {
        let empty = Paragraph::new(format!("  No books match \"{}\"", app.query))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(empty, area);
        return;
    }

    let columns = app.columns();
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected / columns;
    // Keep the selected row on screen.
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_area, (row_index, row)) in row_areas
        .iter()
        .zip(books.chunks(columns).enumerate().skip(first_row))
    {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (column, (cell, book)) in cells.iter().zip(row).enumerate() {
            let selected = row_index * columns + column == app.selected;
            render_card(frame, book, selected, *cell);
        }
    }
}

fn render_card(frame: &mut Frame, book: &Book, selected: bool, area: Rect) {
    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            book.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            book.author.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(status_icon(book.status), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(book.status.label(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(card, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = if let Some(toast) = &app.toast {
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("  {}: ", toast.title),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(toast.body),
        ]))
    } else if app.searching {
        Paragraph::new("  Type to filter  Enter/Esc Done")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(
            "  \u{2190}\u{2191}\u{2192}\u{2193}/hjkl Move  1 Not started  2 Reading  3 Completed  Enter Note  / Search  q Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(footer.block(Block::default().borders(Borders::ALL)), area);
}
