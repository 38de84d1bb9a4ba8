use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown reading status: {0} (expected not-started, reading or completed)")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, Error>;
