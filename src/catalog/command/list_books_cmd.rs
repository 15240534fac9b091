use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { books: self.catalog_service.list_books() })
    }
}
