pub mod local;
mod reporter;

use crate::{database::DbEntry, file::RomFile, hasher::Algorithm, RomDatabase, E};
pub use reporter::{Envelope, JobEvent, Reporter};

/// The collaborator that hashes a ROM file and identifies it against a ROM database.
///
/// `compute_hash` must return right away: the work happens elsewhere (a thread, an event loop)
/// and is reported back through the given `Reporter`. A job reports zero or more progress
/// fractions in non-decreasing order and then exactly one terminal outcome.
pub trait Engine {
    /// Handle of a running job.
    type Job: Job;

    /// Starts hashing `file` with each of `algorithms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the job cannot be started at all. Errors happening after the start are
    /// reported with `Reporter::failed`.
    fn compute_hash(
        &self,
        file: &RomFile,
        algorithms: &[Algorithm],
        reporter: Reporter,
    ) -> Result<Self::Job, E>;

    /// Returns the whole ROM database. Independent of any running job.
    fn list_rom_database(&self) -> Result<RomDatabase, E>;
}

/// Handle of a running hashing job.
pub trait Job {
    /// Asks the job to stop. Cooperative: the job confirms with `Reporter::cancelled` (or still
    /// finishes with another outcome if it was already done).
    fn request_cancel(&self);
}

/// Digest of the file computed with one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub algorithm: Algorithm,
    pub bytes: Vec<u8>,
}

impl Digest {
    pub fn hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Result of a completed job.
#[derive(Debug, Clone, PartialEq)]
pub struct HashReport {
    /// Raw `matchStatus` tag: `unknown`, `supported` or `unsupported`.
    pub status: String,
    pub file_name: String,
    pub size: u64,
    pub digests: Vec<Digest>,
    /// Database entry the ROM matched, if any.
    pub entry: Option<DbEntry>,
}

impl HashReport {
    /// Digest computed with the given algorithm, if it was requested.
    pub fn digest(&self, algorithm: Algorithm) -> Option<&Digest> {
        self.digests.iter().find(|d| d.algorithm == algorithm)
    }
}
