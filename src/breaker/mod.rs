use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// `Breaker` is used to ask a running hashing job to stop. The job polls it between chunks of
/// data, so the stop happens at the earliest possible time but not instantaneously.
///
/// Cloning: an instance of `Breaker` can be cloned; the cloned instance will be bound with the
/// parent instance. `Breaker` is safe to be shared between threads.
#[derive(Default, Debug, Clone)]
pub struct Breaker {
    state: Arc<AtomicBool>,
}

impl Breaker {
    /// Creates a new instance of `Breaker`.
    pub fn new() -> Self {
        Self {
            state: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checks if the job has been aborted.
    ///
    /// # Returns
    ///
    /// - `true` if the job has been aborted, `false` otherwise.
    pub fn is_aborted(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    /// Aborts the job by setting the internal state to `true`. Calling it more than once has
    /// no additional effect.
    pub fn abort(&self) {
        self.state.store(true, Ordering::SeqCst)
    }
}
