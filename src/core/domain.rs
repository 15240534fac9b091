use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_FILE: &str = "library.json";

// Identifiable defines the key shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> &str;
}


// Configuration abstracts config options for the inventory
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub catalog_path: PathBuf,
    pub log_level: String,
}

impl Configuration {
    pub fn new(catalog_path: impl AsRef<Path>) -> Self {
        Configuration {
            catalog_path: catalog_path.as_ref().to_path_buf(),
            log_level: "warn".to_string(),
        }
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!(Path::new("library.json"), config.catalog_path.as_path());
        assert_eq!(tracing::Level::WARN, config.tracing_level());
    }

    #[test]
    fn test_should_fallback_on_bad_level() {
        let mut config = Configuration::new("books.json");
        config.log_level = "debug".to_string();
        assert_eq!(tracing::Level::DEBUG, config.tracing_level());
        config.log_level = "loud".to_string();
        assert_eq!(tracing::Level::WARN, config.tracing_level());
    }
}
