use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct IssueBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> IssueBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct IssueBookCommandRequest {
    isbn: String,
}

impl IssueBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'_> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        if req.isbn.is_empty() {
            return Err(CommandError::validation("ISBN cannot be empty."));
        }
        self.catalog_service.issue_book(req.isbn.as_str())
            .map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}
