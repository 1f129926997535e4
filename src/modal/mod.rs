use crate::session::SessionId;
use std::time::{Duration, Instant};

/// Default delay before the "hashing in progress" indicator shows up.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Whether the indicator is visible at `now` for a session started at `started_at` and ended at
/// `ended_at` (if it has ended).
///
/// The indicator is visible from `started_at + delay` until the end of the session. A session
/// ending at or before `started_at + delay` never shows it.
pub fn indicator_visible(
    started_at: Instant,
    ended_at: Option<Instant>,
    now: Instant,
    delay: Duration,
) -> bool {
    let shows_at = started_at + delay;
    match ended_at {
        Some(ended_at) => shows_at <= now && now < ended_at,
        None => shows_at <= now,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indicator {
    Hidden,
    Pending { session: SessionId, deadline: Instant },
    Visible { session: SessionId },
}

/// Debounced visibility of the "hashing in progress" indicator.
///
/// `Hidden -> Pending -> Visible -> Hidden`. The pending timer belongs to one session; when it
/// expires it shows the indicator only if that session is still the one hashing, otherwise it is
/// dropped. A terminal event of the owning session hides the indicator or drops the timer.
#[derive(Debug)]
pub struct Modal {
    delay: Duration,
    state: Indicator,
}

impl Modal {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Indicator::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, Indicator::Visible { .. })
    }

    /// Time at which the pending timer expires, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            Indicator::Pending { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// Arms the timer for a session started at `started_at`, replacing any pending one.
    pub fn arm(&mut self, session: SessionId, started_at: Instant) {
        self.state = Indicator::Pending {
            session,
            deadline: started_at + self.delay,
        };
    }

    /// Hides the indicator and drops the pending timer, whichever session owns them.
    ///
    /// # Returns
    ///
    /// - `true` if the indicator was visible.
    pub fn reset(&mut self) -> bool {
        let visible = self.is_visible();
        self.state = Indicator::Hidden;
        visible
    }

    /// Fires the timer if it is due.
    ///
    /// # Parameters
    ///
    /// - `now`: current time.
    /// - `hashing`: the session currently hashing, if any.
    ///
    /// # Returns
    ///
    /// - `true` if the indicator has just become visible.
    pub fn poll(&mut self, now: Instant, hashing: Option<SessionId>) -> bool {
        let Indicator::Pending { session, deadline } = self.state else {
            return false;
        };
        if now < deadline {
            return false;
        }
        if hashing == Some(session) {
            self.state = Indicator::Visible { session };
            true
        } else {
            self.state = Indicator::Hidden;
            false
        }
    }

    /// Handles the end of a session. Does nothing if the indicator belongs to another session.
    ///
    /// # Returns
    ///
    /// - `true` if the indicator has just been hidden.
    pub fn release(&mut self, ended: SessionId) -> bool {
        match self.state {
            Indicator::Visible { session } if session == ended => {
                self.state = Indicator::Hidden;
                true
            }
            Indicator::Pending { session, .. } if session == ended => {
                self.state = Indicator::Hidden;
                false
            }
            _ => false,
        }
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
