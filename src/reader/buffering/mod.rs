mod error;

use super::{Reader, CHUNK_SIZE};
pub use error::E;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

/// Reads the file through a fixed buffer.
pub struct Buffering {
    path: PathBuf,
    file: Option<File>,
    buffer: Vec<u8>,
}

impl Reader for Buffering {
    type Error = E;
    fn bind<P: AsRef<Path>>(path: P) -> Self
    where
        Self: Sized,
    {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
            buffer: vec![0u8; CHUNK_SIZE],
        }
    }

    fn next_chunk(&mut self) -> Result<Option<&[u8]>, E> {
        if self.file.is_none() {
            self.file = Some(File::open(&self.path)?);
        }
        let Some(file) = self.file.as_mut() else {
            return Ok(None);
        };
        let bytes_read = file.read(&mut self.buffer)?;
        if bytes_read == 0 {
            Ok(None)
        } else {
            Ok(Some(&self.buffer[..bytes_read]))
        }
    }
}
