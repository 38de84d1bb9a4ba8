pub mod book;
pub mod ids;
pub mod status;

pub use book::Book;
pub use ids::BookId;
pub use status::ReadingStatus;
