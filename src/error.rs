use crate::{database, engine::local, hasher};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Hasher engine failure: {0}")]
    EngineFailure(String),
    #[error("Fail to fetch ROM database: {0}")]
    DatabaseFetchFailure(String),
    #[error("Unrecognized match status tag \"{0}\"")]
    UnrecognizedTag(String),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
}

impl From<database::E> for E {
    fn from(err: database::E) -> Self {
        E::DatabaseFetchFailure(err.to_string())
    }
}

impl From<local::E> for E {
    fn from(err: local::E) -> Self {
        E::EngineFailure(err.to_string())
    }
}

impl From<hasher::E> for E {
    fn from(err: hasher::E) -> Self {
        E::EngineFailure(err.to_string())
    }
}
