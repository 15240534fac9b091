use std::path::{Path, PathBuf};
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::{Loaded, Repository};
use crate::utils::file::{read_json_array, write_json_array};

// JsonBookRepository keeps the catalog as a single json array of book objects.
// Every save rewrites the whole file.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Repository<BookEntity> for JsonBookRepository {
    fn load(&self) -> LibraryResult<Loaded<BookEntity>> {
        let loaded = read_json_array(self.path.as_path())?;
        info!("catalog file {} {}", self.path.display(), loaded.outcome);
        Ok(loaded)
    }

    fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let saved = write_json_array(self.path.as_path(), entities)?;
        info!("saved {} books to {}", saved, self.path.display());
        Ok(saved)
    }
}

impl BookRepository for JsonBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
