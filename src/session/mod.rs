use crate::{classify::MatchStatus, engine::HashReport, file::RomFile};
use log::warn;
use std::{fmt, time::Instant};

/// Identity of a session. Unique and increasing within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Hashing,
    Completed,
    Cancelled,
    Failed,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Failed)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Idle => "idle",
                Self::Hashing => "hashing",
                Self::Completed => "completed",
                Self::Cancelled => "cancelled",
                Self::Failed => "failed",
            }
        )
    }
}

/// One attempt to hash a single file. A session moves into exactly one terminal state and is
/// never reused afterwards.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    file: RomFile,
    state: State,
    progress: f64,
    started_at: Instant,
    result: Option<(MatchStatus, HashReport)>,
}

impl Session {
    pub(crate) fn new(id: SessionId, file: RomFile, started_at: Instant) -> Self {
        Self {
            id,
            file,
            state: State::Idle,
            progress: 0.0,
            started_at,
            result: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn file(&self) -> &RomFile {
        &self.file
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Classification of the completed result. `None` unless the session is `Completed`.
    pub fn status(&self) -> Option<MatchStatus> {
        self.result.as_ref().map(|(status, _)| *status)
    }

    /// Engine report. `None` unless the session is `Completed`.
    pub fn result(&self) -> Option<&HashReport> {
        self.result.as_ref().map(|(_, report)| report)
    }

    pub(crate) fn begin(&mut self) {
        if self.state == State::Idle {
            self.state = State::Hashing;
        }
    }

    /// Applies a progress fraction. The value is clamped to `[0, 1]`; non-finite values and
    /// values below the current progress are dropped.
    ///
    /// # Returns
    ///
    /// - `Some(fraction)` with the accepted value, or `None` if the update has been dropped.
    pub(crate) fn advance(&mut self, fraction: f64) -> Option<f64> {
        if self.state != State::Hashing || !fraction.is_finite() {
            return None;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction < self.progress {
            warn!(
                "session {}: progress went back from {} to {fraction}; ignored",
                self.id, self.progress
            );
            return None;
        }
        self.progress = fraction;
        Some(fraction)
    }

    pub(crate) fn complete(&mut self, status: MatchStatus, report: HashReport) {
        self.state = State::Completed;
        self.result = Some((status, report));
    }

    pub(crate) fn cancel(&mut self) {
        self.state = State::Cancelled;
    }

    pub(crate) fn fail(&mut self) {
        self.state = State::Failed;
    }
}
