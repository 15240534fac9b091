use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ReturnBookCommandRequest {
    isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        if req.isbn.is_empty() {
            return Err(CommandError::validation("ISBN cannot be empty."));
        }
        self.catalog_service.return_book(req.isbn.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
