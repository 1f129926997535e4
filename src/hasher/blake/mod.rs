use super::{Hasher, E};
use blake3::{Hash, Hasher as BlakeHasher};

pub struct Blake {
    hasher: BlakeHasher,
    hash: Option<Hash>,
}

impl Default for Blake {
    fn default() -> Self {
        Blake {
            hasher: BlakeHasher::new(),
            hash: None,
        }
    }
}

impl Hasher for Blake {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }
    fn hash(&self) -> Result<&[u8], E> {
        Ok(self.hash.as_ref().ok_or(E::NotFinished)?.as_bytes())
    }
    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        self.hasher.update(data);
        Ok(())
    }
    fn finish(&mut self) -> Result<(), E> {
        if self.hash.is_some() {
            return Err(E::AlreadyFinished);
        }
        self.hash = Some(self.hasher.finalize());
        Ok(())
    }
}
