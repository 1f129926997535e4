pub mod buffering;
pub mod mapping;

use crate::engine::local;
use std::{error, path::Path};

/// Size of the chunks a reader hands out.
pub const CHUNK_SIZE: usize = 1024 * 32;

/// A trait of a source of file content for hashing. Implementers of this trait must also
/// implement `Send`, because reading happens on the job's thread.
///
/// A job binds one reader to the submitted file, pulls chunks until the file is over and drops
/// the reader when the job is over. Chunks are at most `CHUNK_SIZE` bytes long.
pub trait Reader: Send {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<local::E>;

    /// Binds the reader to the specified file path. The file is opened lazily, on first read.
    fn bind<P: AsRef<Path>>(path: P) -> Self
    where
        Self: Sized;

    /// Returns the next chunk of the file, or `None` once the whole file has been read.
    fn next_chunk(&mut self) -> Result<Option<&[u8]>, Self::Error>;
}

/// How a job pulls the bytes of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReadingStrategy {
    /// Read the file chunk by chunk through a fixed buffer.
    #[default]
    Buffer,
    /// Map the file into memory and feed the hashers slice by slice.
    MemoryMapped,
}
