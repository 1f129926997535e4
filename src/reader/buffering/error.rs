use crate::engine::local;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to read: {0}")]
    IOError(io::Error),
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
