use crate::engine::local;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to read {0}: {1}")]
    IOError(PathBuf, io::Error),
    #[error("Fail to parse ROM database: {0}")]
    Parsing(serde_json::Error),
    #[error("Key \"{0}\" isn't a hex encoded hash")]
    InvalidHash(String),
    #[error("No location for ROM database; data directory isn't available")]
    NoLocation,
}

impl From<serde_json::Error> for E {
    fn from(err: serde_json::Error) -> Self {
        E::Parsing(err)
    }
}

impl From<(PathBuf, io::Error)> for E {
    fn from(err: (PathBuf, io::Error)) -> Self {
        E::IOError(err.0, err.1)
    }
}

impl From<E> for local::E {
    fn from(val: E) -> Self {
        local::E::Database(val.to_string())
    }
}
