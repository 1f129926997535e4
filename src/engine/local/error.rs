use crate::hasher;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Operation has been aborted")]
    Aborted,
    #[error("No hashing algorithms have been requested")]
    NoAlgorithms,
    #[error("Reader error: {0}")]
    Reader(String),
    #[error("Hasher error: {0}")]
    Hasher(String),
    #[error("ROM database error: {0}")]
    Database(String),
    #[error("Reading IO error: {0}")]
    ReadingIOError(io::Error),
    #[error("Fail to spawn hashing thread: {0}")]
    Spawn(io::Error),
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::ReadingIOError(err)
    }
}

impl From<hasher::E> for E {
    fn from(err: hasher::E) -> Self {
        E::Hasher(err.to_string())
    }
}
