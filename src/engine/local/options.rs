use super::LocalEngine;
use crate::{database, reader::ReadingStrategy, RomDatabase};
use std::{mem, path::PathBuf, sync::Arc};

/// Where `LocalEngine` takes the ROM database from.
#[derive(Debug, Clone, Default)]
pub enum DatabaseSource {
    /// JSON file at `RomDatabase::default_path()`.
    #[default]
    Default,
    /// JSON file at the given path. Read on each fetch.
    File(PathBuf),
    /// Database kept in memory.
    Memory(Arc<RomDatabase>),
}

impl DatabaseSource {
    pub(crate) fn fetch(&self) -> Result<Arc<RomDatabase>, database::E> {
        match self {
            Self::Default => Ok(Arc::new(RomDatabase::load(RomDatabase::default_path()?)?)),
            Self::File(path) => Ok(Arc::new(RomDatabase::load(path)?)),
            Self::Memory(db) => Ok(db.clone()),
        }
    }
}

/// Settings of `LocalEngine`.
///
/// # Example
///
/// ```
/// use romhasher::{engine::local::EngineOptions, ReadingStrategy, RomDatabase};
///
/// let engine = EngineOptions::new()
///     .reading_strategy(ReadingStrategy::MemoryMapped)
///     .memory(RomDatabase::new())
///     .engine();
/// ```
#[derive(Debug, Default)]
pub struct EngineOptions {
    pub(crate) reading_strategy: ReadingStrategy,
    pub(crate) database: DatabaseSource,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading_strategy(&mut self, reading_strategy: ReadingStrategy) -> &mut Self {
        self.reading_strategy = reading_strategy;
        self
    }

    /// Reads the ROM database from the given JSON file.
    pub fn database<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.database = DatabaseSource::File(path.into());
        self
    }

    /// Uses an in-memory ROM database.
    pub fn memory(&mut self, db: RomDatabase) -> &mut Self {
        self.database = DatabaseSource::Memory(Arc::new(db));
        self
    }

    pub fn engine(&mut self) -> LocalEngine {
        LocalEngine::new(EngineOptions {
            reading_strategy: mem::take(&mut self.reading_strategy),
            database: mem::take(&mut self.database),
        })
    }
}
