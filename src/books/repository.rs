pub mod json_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // where the books live, used in log lines
    fn location(&self) -> String;
}
