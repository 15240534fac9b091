use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }

    // the catalog stores whatever it is given, so blank fields stop here
    pub fn validate(&self) -> Result<(), CommandError> {
        if self.title.is_empty() {
            return Err(CommandError::validation("Title cannot be empty."));
        }
        if self.author.is_empty() {
            return Err(CommandError::validation("Author cannot be empty."));
        }
        if self.isbn.is_empty() {
            return Err(CommandError::validation("ISBN cannot be empty."));
        }
        Ok(())
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str())
    }
}


#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.add_book(&req.build_book())
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
