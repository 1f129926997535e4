use super::{Clock, Controller, SystemClock};
use crate::{engine::Engine, hasher::Algorithm, modal::DEFAULT_DELAY};
use std::{mem, time::Duration};

/// Settings of a `Controller`.
///
/// # Example
///
/// ```
/// use romhasher::{engine::local::EngineOptions, Algorithm, Options, RomDatabase};
/// use std::time::Duration;
///
/// let controller = Options::new()
///     .delay(Duration::from_millis(300))
///     .algorithms(&[Algorithm::Sha1, Algorithm::Blake3])
///     .controller(EngineOptions::new().memory(RomDatabase::new()).engine());
/// assert!(!controller.is_hashing());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) delay: Duration,
    pub(crate) algorithms: Vec<Algorithm>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            algorithms: vec![Algorithm::Sha1],
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay before the progress indicator shows up. Sessions ending sooner never show it.
    pub fn delay(&mut self, delay: Duration) -> &mut Self {
        self.delay = delay;
        self
    }

    /// Algorithms every session asks the engine for.
    pub fn algorithms(&mut self, algorithms: &[Algorithm]) -> &mut Self {
        self.algorithms = algorithms.to_vec();
        self
    }

    pub fn controller<G: Engine>(&mut self, engine: G) -> Controller<G, SystemClock> {
        self.controller_with_clock(engine, SystemClock)
    }

    pub fn controller_with_clock<G: Engine, C: Clock>(
        &mut self,
        engine: G,
        clock: C,
    ) -> Controller<G, C> {
        Controller::new(mem::take(self), engine, clock)
    }
}
