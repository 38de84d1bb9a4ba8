use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Where a reader is with a book.
///
/// Any status may move to any other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    NotStarted,
    Reading,
    Completed,
}

impl ReadingStatus {
    /// All statuses, in the order the shelf offers them.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::Reading, Self::Completed];

    /// The wire form (`not-started`, `reading`, `completed`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::Reading => "reading",
            Self::Completed => "completed",
        }
    }

    /// Human-facing label, e.g. "Not started".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::Reading => "Reading",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not-started" | "not_started" | "not started" => Ok(Self::NotStarted),
            "reading" => Ok(Self::Reading),
            "completed" => Ok(Self::Completed),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}
