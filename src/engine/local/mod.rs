mod error;
mod options;
mod worker;

use super::{Digest, Engine, HashReport, Job, Reporter};
use crate::{
    classify::MatchStatus,
    file::RomFile,
    hasher::{Algorithm, Hasher},
    reader::{buffering::Buffering, mapping::Mapping, Reader, ReadingStrategy},
    Breaker, RomDatabase,
};
pub use error::E;
use log::{debug, error, warn};
pub use options::{DatabaseSource, EngineOptions};
use std::{
    path::PathBuf,
    thread::{self, JoinHandle},
    time::Instant,
};

/// Engine hashing files on this machine, one thread per job.
///
/// A job reads the file according to the `ReadingStrategy`, feeds every requested hasher, then
/// looks up the digests (in the order the algorithms were requested) in the ROM database. The
/// first hit decides the status; no hit means `unknown`.
///
/// Cancelling a job aborts its `Breaker`; the thread notices it before the next chunk and reports
/// `Cancelled`.
#[derive(Debug)]
pub struct LocalEngine {
    opt: EngineOptions,
}

impl LocalEngine {
    pub fn new(opt: EngineOptions) -> Self {
        Self { opt }
    }
}

/// Handle of a job started by `LocalEngine`.
#[derive(Debug)]
pub struct LocalJob {
    breaker: Breaker,
    handle: Option<JoinHandle<()>>,
}

impl LocalJob {
    /// Returns the `Breaker` of the job.
    pub fn breaker(&self) -> Breaker {
        self.breaker.clone()
    }

    /// Blocks until the job's thread is over.
    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("hashing thread has panicked");
            }
        }
    }
}

impl Job for LocalJob {
    fn request_cancel(&self) {
        self.breaker.abort();
    }
}

struct Task {
    path: PathBuf,
    name: String,
    size: u64,
    algorithms: Vec<Algorithm>,
    reading_strategy: ReadingStrategy,
    database: DatabaseSource,
}

impl Engine for LocalEngine {
    type Job = LocalJob;

    fn compute_hash(
        &self,
        file: &RomFile,
        algorithms: &[Algorithm],
        reporter: Reporter,
    ) -> Result<LocalJob, crate::E> {
        if algorithms.is_empty() {
            return Err(E::NoAlgorithms.into());
        }
        let task = Task {
            path: file.path().to_path_buf(),
            name: file.name().to_owned(),
            size: file.size(),
            algorithms: algorithms.to_vec(),
            reading_strategy: self.opt.reading_strategy.clone(),
            database: self.opt.database.clone(),
        };
        let breaker = Breaker::new();
        let inner = breaker.clone();
        let handle = thread::Builder::new()
            .name(format!("romhasher-job-{}", reporter.session()))
            .spawn(move || run(task, inner, reporter))
            .map_err(E::Spawn)?;
        Ok(LocalJob {
            breaker,
            handle: Some(handle),
        })
    }

    fn list_rom_database(&self) -> Result<RomDatabase, crate::E> {
        Ok(self.opt.database.fetch()?.as_ref().clone())
    }
}

fn run(task: Task, breaker: Breaker, reporter: Reporter) {
    let now = Instant::now();
    reporter.progress(0.0);
    match process(&task, &breaker, &reporter) {
        Ok(report) => {
            debug!(
                "session {}: hashed {} ({} bytes) in {}µs / {}ms / {}s",
                reporter.session(),
                task.path.display(),
                task.size,
                now.elapsed().as_micros(),
                now.elapsed().as_millis(),
                now.elapsed().as_secs()
            );
            reporter.progress(1.0);
            reporter.completed(report);
        }
        Err(E::Aborted) => {
            debug!(
                "session {}: hashing of {} aborted after {}ms",
                reporter.session(),
                task.path.display(),
                now.elapsed().as_millis()
            );
            reporter.cancelled();
        }
        Err(err) => {
            error!(
                "session {}: fail to hash {}: {err}",
                reporter.session(),
                task.path.display()
            );
            reporter.failed(err.to_string());
        }
    }
}

fn process(task: &Task, breaker: &Breaker, reporter: &Reporter) -> Result<HashReport, E> {
    let mut hashers: Vec<Box<dyn Hasher>> = task.algorithms.iter().map(|a| a.hasher()).collect();
    match task.reading_strategy {
        ReadingStrategy::Buffer => worker::hash_file(
            Buffering::bind(&task.path),
            task.size,
            &mut hashers,
            breaker,
            reporter,
        )?,
        ReadingStrategy::MemoryMapped => worker::hash_file(
            Mapping::bind(&task.path),
            task.size,
            &mut hashers,
            breaker,
            reporter,
        )?,
    };
    let mut digests = Vec::new();
    for (algorithm, hasher) in task.algorithms.iter().zip(hashers.iter()) {
        digests.push(Digest {
            algorithm: *algorithm,
            bytes: hasher.hash()?.to_vec(),
        });
    }
    let database = task.database.fetch()?;
    let entry = digests
        .iter()
        .find_map(|digest| database.lookup(&digest.bytes))
        .cloned();
    let status = MatchStatus::from_flags(
        entry.is_none(),
        entry.as_ref().map(|e| e.supported).unwrap_or(false),
    );
    Ok(HashReport {
        status: status.as_str().to_owned(),
        file_name: task.name.clone(),
        size: task.size,
        digests,
        entry,
    })
}
