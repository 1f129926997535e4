mod clock;
mod events;
mod options;

use crate::{
    classify::classify,
    engine::{Engine, Envelope, Job, JobEvent, Reporter},
    file::RomFile,
    modal::Modal,
    session::{Session, SessionId},
    submission::{Picked, Submission},
    RomDatabase, E,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{Event, Outcome};
use events::Notifier;
use log::{debug, error};
pub use options::Options;
use std::{
    path::Path,
    sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender},
    time::Duration,
};

struct Active<J: Job> {
    session: Session,
    job: Option<J>,
    cancel_requested: bool,
}

/// `Controller` runs hashing sessions against an `Engine`, one at a time, and turns what the
/// engine reports into `Event`s for the presentation layer.
///
/// The controller is owned and driven by one thread. `start()` and `cancel()` return right away;
/// engine messages are queued on a channel and applied when the owner calls `pump()`, `tick()` or
/// `wait()`. Every message carries the identity of its session and is dropped unless that session
/// is the active one, so a superseded job can never touch the state of a newer session.
///
/// Starting a session while another one is hashing supersedes the old one: its job is asked to
/// stop, and nothing of it is reported anymore. The new session doesn't wait for the old job.
///
/// Events are delivered through a channel. Take its receiver once with `events()`.
///
/// # Example
///
/// ```no_run
/// use romhasher::{engine::local::EngineOptions, Event, Options, Outcome};
/// use std::time::Duration;
///
/// let mut controller = Options::new().controller(EngineOptions::new().engine());
/// let events = controller.events().unwrap();
/// controller.start("/roms/zelda.z64").unwrap();
/// while controller.is_hashing() {
///     controller.wait(Duration::from_millis(50));
/// }
/// for event in events.try_iter() {
///     if let Event::Finished(_, Outcome::Completed { status, .. }) = event {
///         println!("ROM is {status}");
///     }
/// }
/// ```
pub struct Controller<G: Engine, C: Clock = SystemClock> {
    engine: G,
    clock: C,
    opt: Options,
    sequence: u64,
    active: Option<Active<G::Job>>,
    last: Option<Session>,
    modal: Modal,
    tx_queue: Sender<Envelope>,
    rx_queue: Receiver<Envelope>,
    events: Notifier,
}

impl<G: Engine, C: Clock> Controller<G, C> {
    pub fn new(opt: Options, engine: G, clock: C) -> Self {
        let (tx_queue, rx_queue): (Sender<Envelope>, Receiver<Envelope>) = channel();
        Self {
            engine,
            clock,
            modal: Modal::new(opt.delay),
            opt,
            sequence: 0,
            active: None,
            last: None,
            tx_queue,
            rx_queue,
            events: Notifier::new(),
        }
    }

    /// Takes the receiver of the controller's events. Returns `None` if it has been taken already.
    ///
    /// Until the receiver is taken, events are queued inside the controller. Dropping the
    /// receiver stops delivery; events emitted after that are discarded.
    pub fn events(&mut self) -> Option<Receiver<Event>> {
        self.events.receiver()
    }

    /// Starts a new session hashing the file at `path`.
    ///
    /// # Returns
    ///
    /// - The identity of the new session.
    ///
    /// # Errors
    ///
    /// Returns `E::InvalidInput` if `path` doesn't name a readable file. In this case no session
    /// is created and the active one (if any) keeps running.
    pub fn start<P: AsRef<Path>>(&mut self, path: P) -> Result<SessionId, E> {
        let file = RomFile::open(path)?;
        self.supersede();
        self.sequence += 1;
        let id = SessionId(self.sequence);
        let mut session = Session::new(id, file, self.clock.now());
        session.begin();
        debug!("session {id}: started for {}", session.file().path().display());
        self.events
            .notify(Event::Started(id, session.file().name().to_owned()));
        self.modal.arm(id, session.started_at());
        let reporter = Reporter::new(id, self.tx_queue.clone());
        match self
            .engine
            .compute_hash(session.file(), &self.opt.algorithms, reporter)
        {
            Ok(job) => {
                self.active = Some(Active {
                    session,
                    job: Some(job),
                    cancel_requested: false,
                });
            }
            Err(err) => {
                self.active = Some(Active {
                    session,
                    job: None,
                    cancel_requested: false,
                });
                let err = match err {
                    E::EngineFailure(_) => err,
                    err => E::EngineFailure(err.to_string()),
                };
                self.finish(Outcome::Failed(err));
            }
        }
        Ok(id)
    }

    /// Starts a session for a submitted file.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` if nothing has been submitted.
    /// - `Ok(Some(id))` with the identity of the new session.
    ///
    /// # Errors
    ///
    /// Returns `E::InvalidInput` if the dropped item isn't a file or the file isn't readable.
    pub fn submit(&mut self, submission: &Submission) -> Result<Option<SessionId>, E> {
        match submission.pick() {
            Picked::Nothing => Ok(None),
            Picked::NotAFile => Err(E::InvalidInput(String::from(
                "dropped item isn't a file",
            ))),
            Picked::File(path) => self.start(path).map(Some),
        }
    }

    /// Asks the engine to stop the active session. The session turns `Cancelled` once the engine
    /// confirms. Does nothing if no session is hashing or cancellation has been requested already.
    pub fn cancel(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.cancel_requested {
            return;
        }
        active.cancel_requested = true;
        if let Some(job) = active.job.as_ref() {
            debug!("session {}: cancellation requested", active.session.id());
            job.request_cancel();
        }
    }

    /// Applies all queued engine messages, then fires the indicator timer if it is due.
    ///
    /// # Returns
    ///
    /// - The number of engine messages handled (including dropped stale ones).
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(envelope) = self.rx_queue.try_recv() {
            self.handle(envelope);
            handled += 1;
        }
        self.tick();
        handled
    }

    /// Fires the indicator timer if it is due.
    pub fn tick(&mut self) {
        let hashing = self.active.as_ref().map(|active| active.session.id());
        if self.modal.poll(self.clock.now(), hashing) {
            debug!("progress indicator shown");
            self.events.notify(Event::Indicator(true));
        }
    }

    /// Waits up to `timeout` for an engine message (less, if the indicator timer expires sooner)
    /// and then pumps.
    ///
    /// # Returns
    ///
    /// - The number of engine messages handled.
    pub fn wait(&mut self, timeout: Duration) -> usize {
        let limit = match self.modal.deadline() {
            Some(deadline) => timeout.min(deadline.saturating_duration_since(self.clock.now())),
            None => timeout,
        };
        let handled = match self.rx_queue.recv_timeout(limit) {
            Ok(envelope) => {
                self.handle(envelope);
                1
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => 0,
        };
        handled + self.pump()
    }

    /// Fetches the ROM database listing from the engine. Independent of any session.
    ///
    /// # Errors
    ///
    /// Returns `E::DatabaseFetchFailure` if the engine cannot provide the listing.
    pub fn list_rom_database(&self) -> Result<RomDatabase, E> {
        self.engine.list_rom_database().map_err(|err| match err {
            E::DatabaseFetchFailure(_) => err,
            err => E::DatabaseFetchFailure(err.to_string()),
        })
    }

    /// The active session, or the last one that ended if none is active.
    pub fn session(&self) -> Option<&Session> {
        self.active
            .as_ref()
            .map(|active| &active.session)
            .or(self.last.as_ref())
    }

    pub fn is_hashing(&self) -> bool {
        self.active.is_some()
    }

    pub fn indicator_visible(&self) -> bool {
        self.modal.is_visible()
    }

    /// Drops the active session without a terminal event and asks its job to stop. The
    /// indicator is hidden; the next session shows it only after its own delay.
    fn supersede(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        debug!(
            "session {}: superseded at {:.0}%",
            active.session.id(),
            active.session.progress() * 100.0
        );
        if let Some(job) = active.job.as_ref() {
            if !active.cancel_requested {
                job.request_cancel();
            }
        }
        if self.modal.reset() {
            debug!("progress indicator hidden");
            self.events.notify(Event::Indicator(false));
        }
    }

    fn handle(&mut self, envelope: Envelope) {
        let Envelope { session, event } = envelope;
        let Some(active) = self.active.as_mut() else {
            debug!("session {session}: no active session; message dropped");
            return;
        };
        if active.session.id() != session {
            debug!(
                "session {session}: stale message dropped; active session is {}",
                active.session.id()
            );
            return;
        }
        match event {
            JobEvent::Progress(fraction) => {
                if let Some(fraction) = active.session.advance(fraction) {
                    self.events.notify(Event::Progress(session, fraction));
                }
            }
            JobEvent::Completed(report) => match classify(&report.status) {
                Ok(status) => self.finish(Outcome::Completed { status, report }),
                Err(err) => self.finish(Outcome::Failed(err)),
            },
            JobEvent::Cancelled => self.finish(Outcome::Cancelled),
            JobEvent::Failed(reason) => self.finish(Outcome::Failed(E::EngineFailure(reason))),
        }
    }

    /// Moves the active session into its terminal state and reports it.
    fn finish(&mut self, outcome: Outcome) {
        let Some(Active { mut session, .. }) = self.active.take() else {
            return;
        };
        let id = session.id();
        let outcome = match outcome {
            Outcome::Completed { status, report } => {
                session.complete(status, report.clone());
                Outcome::Completed { status, report }
            }
            Outcome::Cancelled => {
                session.cancel();
                Outcome::Cancelled
            }
            Outcome::Failed(err) => {
                error!("session {id}: {err}");
                session.fail();
                Outcome::Failed(err)
            }
        };
        debug!("session {id}: {}", session.state());
        if self.modal.release(id) {
            debug!("progress indicator hidden");
            self.events.notify(Event::Indicator(false));
        }
        self.events.notify(Event::Finished(id, outcome));
        self.last = Some(session);
    }
}
