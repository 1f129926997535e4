use crate::E;
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Handle to a submitted ROM file. Creating a `RomFile` checks that the path names a regular,
/// readable file; the bytes themselves are only read by the engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl RomFile {
    /// Validates the path and captures its name and size.
    ///
    /// # Errors
    ///
    /// Returns `E::InvalidInput` if the path is empty, doesn't exist, isn't a file or cannot be
    /// opened for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, E> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(E::InvalidInput(String::from("no file has been given")));
        }
        let md = path
            .metadata()
            .map_err(|err| E::InvalidInput(format!("{}: {err}", path.display())))?;
        if !md.is_file() {
            return Err(E::InvalidInput(format!(
                "{} isn't a file",
                path.display()
            )));
        }
        File::open(path).map_err(|err| E::InvalidInput(format!("{}: {err}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            size: md.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the user as the game name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}
