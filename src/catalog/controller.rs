use std::io::{BufRead, Write};
use tracing::{debug, error};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::core::repository::LoadOutcome;

pub const MENU: &str = "1. Add Book\n2. Issue Book\n3. Return Book\n4. Search Book\n5. Display All\n6. Exit";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    Add,
    Issue,
    Return,
    Search,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    pub fn parse(choice: &str) -> Option<MenuChoice> {
        match choice {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Issue),
            "3" => Some(MenuChoice::Return),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::DisplayAll),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

// ConsoleController drives the numbered menu over any line-based input and output.
// Everything the user can get wrong is printed and the loop goes on; only
// failures to read, write or save end the run with an error.
pub struct ConsoleController<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until Exit is chosen or the input ends, then saves the catalog.
    pub fn run(&mut self, catalog_service: &mut dyn CatalogService) -> Result<(), CommandError> {
        if let LoadOutcome::Malformed(_) = catalog_service.load_outcome() {
            writeln!(self.output, "Error: Invalid JSON in catalog file. Starting with empty catalog.")?;
        }
        loop {
            writeln!(self.output, "{}", MENU)?;
            let choice = match self.prompt("Enter choice: ")? {
                Some(choice) => MenuChoice::parse(choice.as_str()),
                None => Some(MenuChoice::Exit),
            };
            debug!("menu choice {:?}", choice);
            let res = match choice {
                Some(MenuChoice::Add) => self.add_book(catalog_service),
                Some(MenuChoice::Issue) => self.issue_book(catalog_service),
                Some(MenuChoice::Return) => self.return_book(catalog_service),
                Some(MenuChoice::Search) => self.search_book(catalog_service),
                Some(MenuChoice::DisplayAll) => self.display_all(catalog_service),
                Some(MenuChoice::Exit) => {
                    SaveCatalogCommand::new(catalog_service).execute(SaveCatalogCommandRequest::default())?;
                    writeln!(self.output, "Catalog saved. Exiting.")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please enter 1-6.")?;
                    Ok(())
                }
            };
            if let Err(err) = res {
                if err.is_fatal() {
                    error!("console stopped: {}", err);
                    return Err(err);
                }
                writeln!(self.output, "{}", err)?;
            }
        }
    }

    fn add_book(&mut self, catalog_service: &mut dyn CatalogService) -> Result<(), CommandError> {
        let title = self.prompt_required("Title: ", "Title cannot be empty.")?;
        let author = self.prompt_required("Author: ", "Author cannot be empty.")?;
        let isbn = self.prompt_required("ISBN: ", "ISBN cannot be empty.")?;
        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
        match AddBookCommand::new(catalog_service).execute(req) {
            Ok(_) => writeln!(self.output, "Book added.")?,
            Err(CommandError::DuplicateKey { .. }) => {
                writeln!(self.output, "Book with this ISBN already exists.")?
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn issue_book(&mut self, catalog_service: &mut dyn CatalogService) -> Result<(), CommandError> {
        let isbn = self.prompt_field("ISBN to issue: ")?;
        match IssueBookCommand::new(catalog_service).execute(IssueBookCommandRequest::new(isbn.as_str())) {
            Ok(_) => writeln!(self.output, "Book issued.")?,
            Err(CommandError::InvalidState { .. }) => writeln!(self.output, "Book is already issued.")?,
            Err(CommandError::NotFound { .. }) => writeln!(self.output, "Book not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn return_book(&mut self, catalog_service: &mut dyn CatalogService) -> Result<(), CommandError> {
        let isbn = self.prompt_field("ISBN to return: ")?;
        match ReturnBookCommand::new(catalog_service).execute(ReturnBookCommandRequest::new(isbn.as_str())) {
            Ok(_) => writeln!(self.output, "Book returned.")?,
            Err(CommandError::InvalidState { .. }) => writeln!(self.output, "Book is not issued.")?,
            Err(CommandError::NotFound { .. }) => writeln!(self.output, "Book not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn search_book(&mut self, catalog_service: &dyn CatalogService) -> Result<(), CommandError> {
        let title = self.prompt_field("Title to search: ")?;
        let res = SearchBookCommand::new(catalog_service)
            .execute(SearchBookCommandRequest::by_title(title.as_str()))?;
        if res.books.is_empty() {
            writeln!(self.output, "No books found with that title.")?;
        }
        self.print_books(&res.books)
    }

    fn display_all(&mut self, catalog_service: &dyn CatalogService) -> Result<(), CommandError> {
        let res = ListBooksCommand::new(catalog_service).execute(ListBooksCommandRequest::default())?;
        if res.books.is_empty() {
            writeln!(self.output, "No books in catalog.")?;
        }
        self.print_books(&res.books)
    }

    fn print_books(&mut self, books: &[BookDto]) -> Result<(), CommandError> {
        for book in books {
            let line = serde_json::to_string(book).map_err(LibraryError::from)?;
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    // stops the current action at the first blank answer
    fn prompt_required(&mut self, label: &str, empty_message: &str) -> Result<String, CommandError> {
        let value = self.prompt_field(label)?;
        if value.is_empty() {
            return Err(CommandError::validation(empty_message));
        }
        Ok(value)
    }

    // a missing line reads as an empty answer
    fn prompt_field(&mut self, label: &str) -> Result<String, CommandError> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    // returns None once the input is exhausted
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CommandError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
