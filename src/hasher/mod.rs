pub mod blake;
mod error;
pub mod sha1;
#[cfg(feature = "use_sha2")]
pub mod sha256;

pub use error::E;
use std::fmt;

/// A trait that defines the behavior of a hasher, which is used to compute the digest of a ROM
/// file. Implementers of this trait must also implement `Send`, because the digest is computed on
/// the job's thread.
///
/// For each requested `Algorithm` a job creates one instance and uses it as follows:
/// - Add file's content during reading (with method `absorb(..)`).
/// - Finalize hash calculation (with method `finish()`).
/// - Request the digest (with method `hash()`).
/// - Drop the instance.
pub trait Hasher: Send {
    /// Creates a fresh instance ready to absorb data.
    fn new() -> Self
    where
        Self: Sized;

    /// Absorbs data into the hasher. This method might be called multiple times during the
    /// reading of a file.
    ///
    /// # Parameters
    ///
    /// - `data`: A reference to a slice of bytes to be absorbed by the hasher.
    fn absorb(&mut self, data: &[u8]) -> Result<(), E>;

    /// Finalizes the hashing process. Must be called once, after all data has been absorbed.
    fn finish(&mut self) -> Result<(), E>;

    /// Retrieves the computed digest. Available only after `finish`.
    fn hash(&self) -> Result<&[u8], E>;
}

/// Digest algorithms a hashing job can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Blake3,
    #[cfg(feature = "use_sha2")]
    Sha256,
}

impl Algorithm {
    /// Creates a fresh hasher for this algorithm.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            Self::Sha1 => Box::new(<sha1::Sha1 as Hasher>::new()),
            Self::Blake3 => Box::new(<blake::Blake as Hasher>::new()),
            #[cfg(feature = "use_sha2")]
            Self::Sha256 => Box::new(<sha256::Sha256 as Hasher>::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Blake3 => "blake3",
            #[cfg(feature = "use_sha2")]
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
