use thiserror::Error;

use crate::sheet::{EntryHandle, Field};

/// Problem with a single subject row.
///
/// Both kinds are recovered per entry: the row reports its own problem and
/// evaluation carries on with the rows after it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid number")]
    InvalidNumber { field: Field, input: String },

    #[error("Invalid range")]
    InvalidRange { mark: f64, out_of: f64 },
}

impl ValidationError {
    /// Detailed message for logs; `Display` stays the short row label.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidNumber { field, input } => {
                format!("{} is not a number: {:?}", field, input)
            }
            Self::InvalidRange { mark, out_of } => {
                format!("expected 0 <= mark <= out of and out of > 0, got {}/{}", mark, out_of)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryHandle),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Sheet parse error on line {line}: {message}")]
    SheetParseError { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
