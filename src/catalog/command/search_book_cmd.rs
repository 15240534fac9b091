use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub enum SearchBookCommandRequest {
    // case-insensitive substring of the title
    Title(String),
    // exact isbn
    Isbn(String),
}

impl SearchBookCommandRequest {
    pub fn by_title(title: &str) -> Self {
        SearchBookCommandRequest::Title(title.to_string())
    }

    pub fn by_isbn(isbn: &str) -> Self {
        SearchBookCommandRequest::Isbn(isbn.to_string())
    }
}


#[derive(Debug)]
pub struct SearchBookCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBookCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand<'_> {
    fn execute(&mut self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        let books = match req {
            SearchBookCommandRequest::Title(title) => {
                if title.is_empty() {
                    return Err(CommandError::validation("Title cannot be empty."));
                }
                self.catalog_service.find_books_by_title(title.as_str())
            }
            SearchBookCommandRequest::Isbn(isbn) => {
                if isbn.is_empty() {
                    return Err(CommandError::validation("ISBN cannot be empty."));
                }
                self.catalog_service.find_book_by_isbn(isbn.as_str())
            }
        };
        Ok(SearchBookCommandResponse::new(books))
    }
}
