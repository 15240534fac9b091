use tracing::{info, warn};
use crate::books::dto::BookDto;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Catalog;
use crate::core::library::LibraryResult;
use crate::core::repository::{LoadOutcome, Repository};

pub struct CatalogServiceImpl {
    catalog: Catalog,
    book_repository: Box<dyn BookRepository>,
    load_outcome: LoadOutcome,
}

impl CatalogServiceImpl {
    // loads whatever the repository holds; only file-system failures are errors
    pub fn open(book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let loaded = book_repository.load()?;
        let (catalog, skipped) = Catalog::hydrate(loaded.records);
        if skipped > 0 {
            warn!("dropped {} books with repeated isbn from {}", skipped, book_repository.location());
        }
        info!("opened catalog with {} books", catalog.len());
        Ok(Self {
            catalog,
            book_repository,
            load_outcome: loaded.outcome,
        })
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        self.catalog.add(BookEntity::from(book)).map(BookDto::from)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Vec<BookDto> {
        self.catalog.find_by_identifier(isbn).into_iter().map(BookDto::from).collect()
    }

    fn find_books_by_title(&self, title: &str) -> Vec<BookDto> {
        self.catalog.find_by_title_substring(title).into_iter().map(BookDto::from).collect()
    }

    fn issue_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.catalog.issue(isbn).map(BookDto::from)?;
        info!("issued book {}", isbn);
        Ok(book)
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.catalog.return_item(isbn).map(BookDto::from)?;
        info!("returned book {}", isbn);
        Ok(book)
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.catalog.list_all().iter().map(BookDto::from).collect()
    }

    fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    fn save(&self) -> LibraryResult<usize> {
        self.book_repository.save(self.catalog.list_all())
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::books::repository::json_book_repository::JsonBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::{LoadOutcome, Repository};

    fn open(path: &std::path::Path) -> CatalogServiceImpl {
        CatalogServiceImpl::open(Box::new(JsonBookRepository::new(path))).expect("should open catalog")
    }

    #[test]
    fn test_should_add_and_find_book() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = open(dir.path().join("library.json").as_path());
        assert_eq!(&LoadOutcome::Missing, svc.load_outcome());

        let book = BookDto::new("Dune", "Herbert", "111");
        let added = svc.add_book(&book).expect("should add book");
        assert_eq!(book, added);

        let res = svc.find_book_by_isbn("111");
        assert_eq!(1, res.len());
        assert!(matches!(svc.add_book(&BookDto::new("Other", "Someone", "111")),
            Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, svc.list_books().len());
    }

    #[test]
    fn test_should_issue_and_return_book() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = open(dir.path().join("library.json").as_path());
        svc.add_book(&BookDto::new("Dune", "Herbert", "111")).unwrap();

        assert_eq!(BookStatus::Issued, svc.issue_book("111").expect("should issue").status);
        assert!(matches!(svc.issue_book("111"), Err(LibraryError::AlreadyIssued { .. })));
        assert_eq!(BookStatus::Available, svc.return_book("111").expect("should return").status);
        assert!(matches!(svc.return_book("111"), Err(LibraryError::NotIssued { .. })));
        assert!(matches!(svc.return_book("999"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_hand_out_detached_copies() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = open(dir.path().join("library.json").as_path());
        svc.add_book(&BookDto::new("Dune", "Herbert", "111")).unwrap();

        let mut listed = svc.list_books();
        listed[0].status = BookStatus::Issued;
        assert_eq!(BookStatus::Available, svc.find_book_by_isbn("111")[0].status);
    }

    #[test]
    fn test_should_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        let mut svc = open(path.as_path());
        svc.add_book(&BookDto::new("The Lord of the Rings", "Tolkien", "222")).unwrap();
        svc.add_book(&BookDto::new("Dune", "Herbert", "111")).unwrap();
        svc.issue_book("111").unwrap();
        assert_eq!(2, svc.save().expect("should save"));

        let reopened = open(path.as_path());
        assert_eq!(&LoadOutcome::Loaded(2), reopened.load_outcome());
        assert_eq!(svc.list_books(), reopened.list_books());
        assert_eq!(1, reopened.find_books_by_title("lord").len());
    }

    #[test]
    fn test_should_open_malformed_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "not json").unwrap();
        let svc = open(path.as_path());
        assert!(matches!(svc.load_outcome(), LoadOutcome::Malformed(_)));
        assert!(svc.list_books().is_empty());
    }

    #[test]
    fn test_should_drop_repeated_isbn_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        JsonBookRepository::new(path.as_path()).save(&[
            BookEntity::new("Dune", "Herbert", "111"),
            BookEntity::new("Dune again", "Herbert", "111"),
        ]).unwrap();
        let svc = open(path.as_path());
        assert_eq!(1, svc.list_books().len());
        assert_eq!("Dune", svc.list_books()[0].title);
    }
}
