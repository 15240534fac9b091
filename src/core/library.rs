use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book exists but is already checked out, so it cannot be issued again.
    AlreadyIssued {
        message: String,
    },
    // The book exists but is on the shelf, so there is nothing to return.
    NotIssued {
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
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_issued(message: &str) -> LibraryError {
        LibraryError::AlreadyIssued { message: message.to_string() }
    }

    pub fn not_issued(message: &str) -> LibraryError {
        LibraryError::NotIssued { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyIssued { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotIssued { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog and repository operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Issued => write!(f, "issued"),
        }
    }
}
