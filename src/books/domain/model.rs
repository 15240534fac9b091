use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is the record owned by the catalog and written to the catalog file.
// The isbn is the identifier; a record can only change status through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookEntity {
    title: String,
    author: String,
    isbn: String,
    #[serde(default)]
    status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self::with_status(title, author, isbn, BookStatus::Available)
    }

    // used when reloading a book that was saved while issued
    pub fn with_status(title: &str, author: &str, isbn: &str, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status,
        }
    }

    pub(crate) fn issue(&mut self) -> bool {
        if self.status == BookStatus::Available {
            self.status = BookStatus::Issued;
            return true;
        }
        false
    }

    pub(crate) fn return_book(&mut self) -> bool {
        if self.status == BookStatus::Issued {
            self.status = BookStatus::Available;
            return true;
        }
        false
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        self.status
    }
}
