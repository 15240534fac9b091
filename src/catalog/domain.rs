pub mod model;
pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::core::repository::LoadOutcome;

// CatalogService is the only way callers reach the books held in memory.
pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn find_book_by_isbn(&self, isbn: &str) -> Vec<BookDto>;
    fn find_books_by_title(&self, title: &str) -> Vec<BookDto>;
    fn issue_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
    // how the catalog file looked when the service was opened
    fn load_outcome(&self) -> &LoadOutcome;
    // flushes every book to the repository, replacing what was stored
    fn save(&self) -> LibraryResult<usize>;
}
