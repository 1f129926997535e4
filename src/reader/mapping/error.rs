use crate::engine::local;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to map file: {0}")]
    IOError(io::Error),
    #[error("File is too big to be mapped into memory")]
    FileIsTooBig,
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::IOError(err)
    }
}

impl From<E> for local::E {
    fn from(val: E) -> Self {
        local::E::Reader(val.to_string())
    }
}
