use tracing::{debug, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog owns the books in insertion order and guarantees that no two of them
// share an isbn. Books only enter through `add`, so lookups by isbn find at most one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<BookEntity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from stored records. Records repeating an earlier isbn
    /// are dropped; the number of dropped records is returned with the catalog.
    pub fn hydrate(records: Vec<BookEntity>) -> (Self, usize) {
        let mut catalog = Catalog::new();
        let mut skipped = 0;
        for record in records {
            if let Err(err) = catalog.add(record) {
                warn!("skipping stored book: {}", err);
                skipped += 1;
            }
        }
        (catalog, skipped)
    }

    pub fn add(&mut self, book: BookEntity) -> LibraryResult<&BookEntity> {
        if self.books.iter().any(|b| b.id() == book.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", book.id()).as_str()));
        }
        debug!("adding book {}", book.id());
        self.books.push(book);
        Ok(&self.books[self.books.len() - 1])
    }

    pub fn find_by_identifier(&self, isbn: &str) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| b.id() == isbn).collect()
    }

    pub fn find_by_title_substring(&self, text: &str) -> Vec<&BookEntity> {
        let needle = text.to_lowercase();
        self.books.iter()
            .filter(|b| b.title().to_lowercase().contains(needle.as_str()))
            .collect()
    }

    pub fn issue(&mut self, isbn: &str) -> LibraryResult<&BookEntity> {
        let book = self.find_mut(isbn)?;
        if !book.issue() {
            return Err(LibraryError::already_issued(
                format!("book with isbn {} is already issued", isbn).as_str()));
        }
        Ok(&*book)
    }

    pub fn return_item(&mut self, isbn: &str) -> LibraryResult<&BookEntity> {
        let book = self.find_mut(isbn)?;
        if !book.return_book() {
            return Err(LibraryError::not_issued(
                format!("book with isbn {} is not issued", isbn).as_str()));
        }
        Ok(&*book)
    }

    pub fn list_all(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn find_mut(&mut self, isbn: &str) -> LibraryResult<&mut BookEntity> {
        self.books.iter_mut()
            .find(|b| b.id() == isbn)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", isbn).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::Catalog;
    use crate::core::domain::Identifiable;
    use crate::core::library::{BookStatus, LibraryError};

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(BookEntity::new("The Lord of the Rings", "Tolkien", "222")).unwrap();
        catalog.add(BookEntity::new("Dune", "Herbert", "111")).unwrap();
        catalog.add(BookEntity::new("The Hobbit", "Tolkien", "333")).unwrap();
        catalog
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut catalog = sample();
        let res = catalog.add(BookEntity::new("Dune Messiah", "Herbert", "111"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(3, catalog.len());
        assert_eq!("Dune", catalog.find_by_identifier("111")[0].title());
    }

    #[test]
    fn test_should_preserve_insertion_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.list_all().iter().map(|b| b.id()).collect();
        assert_eq!(vec!["222", "111", "333"], ids);
    }

    #[test]
    fn test_should_find_by_title_ignoring_case() {
        let catalog = sample();
        let found = catalog.find_by_title_substring("lord");
        assert_eq!(1, found.len());
        assert_eq!("222", found[0].id());

        let found = catalog.find_by_title_substring("THE");
        let ids: Vec<&str> = found.iter().map(|b| b.id()).collect();
        assert_eq!(vec!["222", "333"], ids);
        assert!(catalog.find_by_title_substring("emma").is_empty());
    }

    #[test]
    fn test_should_find_by_exact_identifier() {
        let catalog = sample();
        assert_eq!(1, catalog.find_by_identifier("111").len());
        assert!(catalog.find_by_identifier("11").is_empty());
    }

    #[test]
    fn test_should_issue_once() {
        let mut catalog = sample();
        let issued = catalog.issue("111").expect("should issue");
        assert_eq!(BookStatus::Issued, issued.status());
        assert!(matches!(catalog.issue("111"), Err(LibraryError::AlreadyIssued { .. })));
        assert_eq!(BookStatus::Issued, catalog.find_by_identifier("111")[0].status());
    }

    #[test]
    fn test_should_return_after_issue() {
        let mut catalog = sample();
        assert!(matches!(catalog.return_item("111"), Err(LibraryError::NotIssued { .. })));
        catalog.issue("111").unwrap();
        let returned = catalog.return_item("111").expect("should return");
        assert_eq!(BookStatus::Available, returned.status());
        assert!(matches!(catalog.return_item("111"), Err(LibraryError::NotIssued { .. })));
    }

    #[test]
    fn test_should_report_unknown_isbn() {
        let mut catalog = sample();
        assert!(matches!(catalog.issue("999"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.return_item("999"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(Catalog::new().return_item("999"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_hydrate_and_skip_repeated_isbn() {
        let (catalog, skipped) = Catalog::hydrate(vec![
            BookEntity::with_status("Dune", "Herbert", "111", BookStatus::Issued),
            BookEntity::new("Dune (copy)", "Herbert", "111"),
            BookEntity::new("Emma", "Austen", "333"),
        ]);
        assert_eq!(1, skipped);
        assert_eq!(2, catalog.len());
        assert_eq!(BookStatus::Issued, catalog.find_by_identifier("111")[0].status());
        assert_eq!("Dune", catalog.find_by_identifier("111")[0].title());
    }
}
