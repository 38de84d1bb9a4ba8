pub mod config;
pub mod list;
pub mod note;
pub mod shelf;

pub use list::run_list;
pub use note::show_note;
pub use shelf::run_shelf;
