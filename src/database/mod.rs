mod error;

pub use error::E;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashMap},
    fmt, fs,
    path::{Path, PathBuf},
};

/// Media/format vocabulary used by database entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Cartridge,
    Optical,
    Digital,
    Debug,
    Beta,
    Builtin,
    Hotel,
}

impl FormatTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cartridge => "cartridge",
            Self::Optical => "optical",
            Self::Digital => "digital",
            Self::Debug => "debug",
            Self::Beta => "beta",
            Self::Builtin => "builtin",
            Self::Hotel => "hotel",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One known ROM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbEntry {
    /// Short display name.
    pub name: String,
    pub supported: bool,
    pub region: String,
    #[serde(default)]
    pub formats: BTreeSet<FormatTag>,
    /// "Master Quest" style variant of a game.
    #[serde(default, rename = "mq")]
    pub master_quest: bool,
}

/// Known ROMs keyed by the lowercase hex of their hash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RomDatabase {
    entries: HashMap<String, DbEntry>,
}

impl RomDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping hex hashes to entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the content isn't valid JSON of the expected shape or if a key isn't a
    /// hex string.
    pub fn from_json(content: &str) -> Result<Self, E> {
        let raw: HashMap<String, DbEntry> = serde_json::from_str(content)?;
        let mut db = Self::new();
        for (hash, entry) in raw.into_iter() {
            db.insert(&hash, entry)?;
        }
        Ok(db)
    }

    /// Reads and parses the database file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, E> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|err| E::from((path.to_path_buf(), err)))?;
        let db = Self::from_json(&content)?;
        debug!("loaded {} ROM entries from {}", db.len(), path.display());
        Ok(db)
    }

    /// Default location of the database file: `<data dir>/romhasher/db.json`.
    pub fn default_path() -> Result<PathBuf, E> {
        dirs::data_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| dir.join("romhasher").join("db.json"))
            .ok_or(E::NoLocation)
    }

    /// Adds an entry. The key is normalized to lowercase hex.
    pub fn insert(&mut self, hash: &str, entry: DbEntry) -> Result<&mut Self, E> {
        let key = hash.trim().to_ascii_lowercase();
        if key.is_empty() || hex::decode(&key).is_err() {
            return Err(E::InvalidHash(hash.to_owned()));
        }
        self.entries.insert(key, entry);
        Ok(self)
    }

    /// Looks up the entry for a raw digest.
    pub fn lookup(&self, digest: &[u8]) -> Option<&DbEntry> {
        self.entries.get(&hex::encode(digest))
    }

    /// Looks up the entry for a hex encoded hash, in any letter case.
    pub fn get(&self, hash: &str) -> Option<&DbEntry> {
        self.entries.get(&hash.trim().to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DbEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
