//! Core domain model for bookshelf.
//!
//! This crate defines the `Book` record, the in-memory `BookStore` that owns
//! the shelf for a session, the search filter, the status controller and the
//! title-keyed note lookup. Everything here is synchronous and allocation-light;
//! the shelf is seeded once and only reading status ever changes.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod notes;
pub mod search;
pub mod seed;
pub mod status;
pub mod store;

pub use error::{Error, Result};
pub use model::{Book, BookId, ReadingStatus};
pub use notes::NoteLookup;
pub use status::StatusController;
pub use store::{BookStore, LogSink, Notification, NotificationSink};
