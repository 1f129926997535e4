use log::debug;
use rand::Rng;
use std::{
    env::temp_dir,
    fs::{create_dir, remove_dir_all, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};
use uuid::Uuid;

/// Temporary folder with ROM files of random content.
pub struct RomCase {
    pub files: Vec<PathBuf>,
    pub root: PathBuf,
}

impl RomCase {
    /// Creates the folder and one file per `(name, size)`.
    pub fn new(files: &[(&str, usize)]) -> Result<Self, io::Error> {
        let now = Instant::now();
        let root = temp_dir().join(Uuid::new_v4().to_string());
        if root.exists() {
            remove_dir_all(&root)?;
        }
        create_dir(&root)?;
        let mut case = Self {
            files: Vec::new(),
            root,
        };
        let mut rng = rand::thread_rng();
        for (name, size) in files.iter() {
            let mut content = vec![0u8; *size];
            rng.fill(&mut content[..]);
            case.add(name, &content)?;
        }
        debug!(
            "in \"{}\" created {} files in {}µs / {}ms / {}s",
            case.root.display(),
            case.files.len(),
            now.elapsed().as_micros(),
            now.elapsed().as_millis(),
            now.elapsed().as_secs()
        );
        Ok(case)
    }

    /// Adds a file with the given content.
    pub fn add(&mut self, name: &str, content: &[u8]) -> Result<PathBuf, io::Error> {
        let filename = self.root.join(name);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&filename)?;
        file.write_all(content)?;
        file.flush()?;
        self.files.push(filename.clone());
        Ok(filename)
    }

    /// Writes a ROM database file (not listed in `files`).
    pub fn database(&self, json: &str) -> Result<PathBuf, io::Error> {
        let filename = self.root.join("db.json");
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&filename)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(filename)
    }

    pub fn clean(&self) -> Result<(), io::Error> {
        if !self.root.exists() {
            return Ok(());
        }
        let Some(parent) = self.root.parent() else {
            return Ok(());
        };
        if !parent.starts_with(temp_dir()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("parent of root isn't belong to {}", temp_dir().display()),
            ));
        }
        remove_dir_all(&self.root)?;
        debug!("Removed {}", self.root.display());
        Ok(())
    }
}
