use super::{Hasher, E};
use sha2::{Digest, Sha256 as Origin};

/// Hasher based on `sha2` crate.
pub struct Sha256 {
    hasher: Option<Origin>,
    hash: Option<Vec<u8>>,
}

impl Default for Sha256 {
    fn default() -> Self {
        Sha256 {
            hasher: Some(Origin::new()),
            hash: None,
        }
    }
}

impl Hasher for Sha256 {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    fn hash(&self) -> Result<&[u8], E> {
        Ok(self.hash.as_ref().ok_or(E::NotFinished)?)
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        if let Some(h) = self.hasher.as_mut() {
            h.update(data)
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), E> {
        let Some(hasher) = self.hasher.take() else {
            return Err(E::AlreadyFinished);
        };
        self.hash = Some(hasher.finalize().to_vec());
        Ok(())
    }
}
