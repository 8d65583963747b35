use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // A required input field was missing or empty.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // An operation received something that is not a book.
    InvalidType {
        message: String,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn invalid_type(message: &str) -> LibraryError {
        LibraryError::InvalidType { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => { message }
            LibraryError::InvalidType { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
            LibraryError::InvalidType { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
        }
    }
}

fn write_with_reason(f: &mut Formatter<'_>, message: &str, reason_code: &Option<String>) -> fmt::Result {
    match reason_code {
        Some(reason) => write!(f, "{} ({})", message, reason),
        None => write!(f, "{}", message),
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookKind tags a catalog entry as a printed book or an e-book; only an e-book carries a file format.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookKind {
    Book,
    EBook {
        file_format: Option<String>,
    },
}

impl BookKind {
    pub fn file_format(&self) -> Option<&str> {
        match self {
            BookKind::Book => None,
            BookKind::EBook { file_format } => file_format.as_deref(),
        }
    }

    pub fn is_ebook(&self) -> bool {
        matches!(self, BookKind::EBook { .. })
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Book => write!(f, "Book"),
            BookKind::EBook { .. } => write!(f, "EBook"),
        }
    }
}
