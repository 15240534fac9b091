use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    InvalidState {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    pub fn validation(message: &str) -> CommandError {
        CommandError::Validation { message: message.to_string() }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, CommandError::Runtime { .. } | CommandError::Serialization { .. })
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyIssued { message } => {
                CommandError::InvalidState { message }
            }
            LibraryError::NotIssued { message } => {
                CommandError::InvalidState { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::from(LibraryError::from(err))
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message }
            | CommandError::NotFound { message }
            | CommandError::InvalidState { message }
            | CommandError::Serialization { message }
            | CommandError::Validation { message } => {
                write!(f, "{}", message)
            }
            CommandError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CommandError {}
