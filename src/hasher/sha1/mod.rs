use super::{Hasher, E};
use ::sha1::{Digest, Sha1 as Origin};

/// SHA-1 hasher. ROM databases key their entries by the SHA-1 of the file, so this is the
/// default algorithm of a session.
pub struct Sha1 {
    hasher: Option<Origin>,
    hash: Option<Vec<u8>>,
}

impl Default for Sha1 {
    fn default() -> Self {
        Sha1 {
            hasher: Some(Origin::new()),
            hash: None,
        }
    }
}

impl Hasher for Sha1 {
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
        let Some(hasher) = self.hasher.as_mut() else {
            return Err(E::AlreadyFinished);
        };
        hasher.update(data);
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
