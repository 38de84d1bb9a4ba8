use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use anyhow::Result;
use bookshelf_core::{
    search, seed, Book, BookId, BookStore, NoteLookup, Notification, ReadingStatus,
    StatusController,
};
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use crate::config::ShelfConfig;

pub mod note_panel;
pub mod shelf;

const TOAST_TITLE: &str = "Status Updated";
const TOAST_BODY: &str = "Your book's reading status has been updated.";

/// How long the event loop waits for a key before redrawing.
const TICK: Duration = Duration::from_millis(100);

/// Which view the TUI is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Shelf,
    /// Note panel for the book with the given id.
    Note(BookId),
}

/// A transient message shown in the footer.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: &'static str,
    pub body: &'static str,
    pub shown_at: Instant,
}

/// Application state for the shelf TUI.
#[derive(Debug)]
pub struct App {
    pub view: View,
    pub store: BookStore,
    pub notes: NoteLookup,
    notifications: Receiver<Notification>,
    pub settings: ShelfConfig,
    pub query: String,
    pub searching: bool,
    /// Index into the filtered book list.
    pub selected: usize,
    pub toast: Option<Toast>,
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl App {
    /// Create an `App` over the seed shelf.
    pub fn new(settings: ShelfConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            view: View::Shelf,
            store: BookStore::seeded(tx),
            notes: seed::notes(),
            notifications: rx,
            settings,
            query: String::new(),
            searching: false,
            selected: 0,
            toast: None,
            today: Local::now().date_naive(),
            should_quit: false,
        }
    }

    /// Books matching the current query, in shelf order.
    pub fn visible(&self) -> Vec<&Book> {
        search::filter(self.store.all(), &self.query)
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.visible().get(self.selected).copied()
    }

    pub fn columns(&self) -> usize {
        usize::from(self.settings.columns.max(1))
    }

    /// Month shown next to the subheading.
    pub fn month_label(&self) -> String {
        self.settings
            .month
            .clone()
            .unwrap_or_else(|| self.today.format("%B").to_string())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match &self.view {
            View::Shelf if self.searching => self.handle_search_key(key),
            View::Shelf => self.handle_shelf_key(key),
            View::Note(_) => self.handle_note_key(key),
        }
    }

    fn handle_shelf_key(&mut self, key: KeyCode) {
        let count = self.visible().len();
        let columns = self.columns();

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('h') | KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected >= columns {
                    self.selected -= columns;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + columns < count {
                    self.selected += columns;
                }
            }
            KeyCode::Char('1') => self.set_selected_status(ReadingStatus::NotStarted),
            KeyCode::Char('2') => self.set_selected_status(ReadingStatus::Reading),
            KeyCode::Char('3') => self.set_selected_status(ReadingStatus::Completed),
            KeyCode::Enter => {
                if let Some(book) = self.selected_book() {
                    self.view = View::Note(book.id.clone());
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => self.searching = false,
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => self.query.push(c),
            _ => {}
        }
        self.clamp_selection();
    }

    fn handle_note_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.view = View::Shelf,
            _ => {}
        }
    }

    fn set_selected_status(&mut self, status: ReadingStatus) {
        let Some(id) = self.selected_book().map(|book| book.id.clone()) else {
            return;
        };
        let mut controller = StatusController::new(&mut self.store);
        match status {
            ReadingStatus::NotStarted => controller.set_not_started(&id),
            ReadingStatus::Reading => controller.set_reading(&id),
            ReadingStatus::Completed => controller.set_completed(&id),
        };
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// Pick up store notifications and expire an old toast.
    fn tick(&mut self, now: Instant) {
        for notification in self.notifications.try_iter() {
            log::debug!("toast for {}", notification.kind());
            self.toast = Some(Toast {
                title: TOAST_TITLE,
                body: TOAST_BODY,
                shown_at: now,
            });
        }

        let lifetime = Duration::from_millis(self.settings.toast_millis);
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now.duration_since(toast.shown_at) >= lifetime)
        {
            self.toast = None;
        }
    }
}

/// Run the shelf TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_tui(settings: ShelfConfig) -> Result<()> {
    let app = App::new(settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    match &app.view {
        View::Shelf => shelf::render(frame, app),
        View::Note(id) => note_panel::render(frame, app, id),
    }
}

/// Single-width glyph for a status.
pub fn status_icon(status: ReadingStatus) -> &'static str {
    match status {
        ReadingStatus::NotStarted => "\u{25cb}",
        ReadingStatus::Reading => "\u{25d0}",
        ReadingStatus::Completed => "\u{2713}",
    }
}
