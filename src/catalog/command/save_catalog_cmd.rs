use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SaveCatalogCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SaveCatalogCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct SaveCatalogCommandRequest {}

#[derive(Debug)]
pub struct SaveCatalogCommandResponse {
    pub saved: usize,
}

impl Command<SaveCatalogCommandRequest, SaveCatalogCommandResponse> for SaveCatalogCommand<'_> {
    fn execute(&mut self, _req: SaveCatalogCommandRequest) -> Result<SaveCatalogCommandResponse, CommandError> {
        self.catalog_service.save()
            .map_err(CommandError::from).map(|saved| SaveCatalogCommandResponse { saved })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_save_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = Configuration::new(dir.path().join("library.json"));
        let mut svc = factory::create_catalog_service(&config).expect("should open");
        svc.add_book(&BookDto::new("Dune", "Herbert", "111")).expect("should add book");

        let res = SaveCatalogCommand::new(svc.as_ref())
            .execute(SaveCatalogCommandRequest::default()).expect("should save");
        assert_eq!(1, res.saved);

        let reopened = factory::create_catalog_service(&config).expect("should reopen");
        assert_eq!(svc.list_books(), reopened.list_books());
    }

    #[test]
    fn test_should_surface_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        let svc = factory::create_catalog_service(&Configuration::new(&path)).expect("should open");
        // a directory cannot be overwritten as a file
        std::fs::create_dir(&path).unwrap();
        let res = SaveCatalogCommand::new(svc.as_ref()).execute(SaveCatalogCommandRequest::default());
        assert!(matches!(res, Err(CommandError::Runtime { .. })));
    }
}
