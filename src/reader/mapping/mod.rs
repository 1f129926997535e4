mod error;

use super::{Reader, CHUNK_SIZE};
pub use error::E;
use memmap2::{Mmap, MmapOptions};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Maps the file into memory and hands out slices of the mapping.
pub struct Mapping {
    path: PathBuf,
    mapped: bool,
    mmap: Option<Mmap>,
    offset: usize,
}

impl Mapping {
    fn map(&mut self) -> Result<(), E> {
        let file = File::open(&self.path)?;
        let len = usize::try_from(file.metadata()?.len()).map_err(|_| E::FileIsTooBig)?;
        // Mapping of an empty file fails on some platforms
        if len > 0 {
            self.mmap = Some(unsafe { MmapOptions::new().len(len).map(&file) }?);
        }
        self.mapped = true;
        Ok(())
    }
}

impl Reader for Mapping {
    type Error = E;
    fn bind<P: AsRef<Path>>(path: P) -> Self
    where
        Self: Sized,
    {
        Self {
            path: path.as_ref().to_path_buf(),
            mapped: false,
            mmap: None,
            offset: 0,
        }
    }

    fn next_chunk(&mut self) -> Result<Option<&[u8]>, E> {
        if !self.mapped {
            self.map()?;
        }
        let Some(mmap) = self.mmap.as_ref() else {
            return Ok(None);
        };
        if self.offset >= mmap.len() {
            return Ok(None);
        }
        let end = mmap.len().min(self.offset + CHUNK_SIZE);
        let chunk = &mmap[self.offset..end];
        self.offset = end;
        Ok(Some(chunk))
    }
}
