use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryResult;

// Repository persists a whole ordered collection of entities at once
pub trait Repository<Entity> {
    // reads every entity, a missing or unreadable document yields an empty collection
    fn load(&self) -> LibraryResult<Loaded<Entity>>;

    // replaces the stored collection with the given entities
    fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LoadOutcome {
    // nothing stored yet, same as a first run
    Missing,
    Loaded(usize),
    // the document could not be decoded and was ignored
    Malformed(String),
}

impl Display for LoadOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::Missing => write!(f, "missing"),
            LoadOutcome::Loaded(count) => write!(f, "loaded {}", count),
            LoadOutcome::Malformed(reason) => write!(f, "malformed {}", reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Loaded<Entity> {
    pub outcome: LoadOutcome,
    pub records: Vec<Entity>,
}

impl<Entity> Loaded<Entity> {
    pub fn missing() -> Self {
        Loaded { outcome: LoadOutcome::Missing, records: vec![] }
    }

    pub fn malformed(reason: &str) -> Self {
        Loaded { outcome: LoadOutcome::Malformed(reason.to_string()), records: vec![] }
    }

    pub fn records(records: Vec<Entity>) -> Self {
        Loaded { outcome: LoadOutcome::Loaded(records.len()), records }
    }
}
