use serde::Serialize;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a detached copy of a catalog record handed out to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Book for BookDto {
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

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title().to_string(),
            author: other.author().to_string(),
            isbn: other.id().to_string(),
            status: other.status(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::with_status(other.title.as_str(), other.author.as_str(),
                                other.isbn.as_str(), other.status)
    }
}
