use super::HashReport;
use crate::session::SessionId;
use log::warn;
use std::sync::mpsc::Sender;

/// What a job tells the controller.
#[derive(Debug)]
pub enum JobEvent {
    Progress(f64),
    Completed(HashReport),
    Cancelled,
    Failed(String),
}

/// A `JobEvent` stamped with the identity of the session it belongs to.
#[derive(Debug)]
pub struct Envelope {
    pub session: SessionId,
    pub event: JobEvent,
}

/// Sending side given to a job. Every message it sends carries the session's identity, so the
/// controller can drop messages of superseded sessions.
#[derive(Debug, Clone)]
pub struct Reporter {
    session: SessionId,
    tx: Sender<Envelope>,
}

impl Reporter {
    pub(crate) fn new(session: SessionId, tx: Sender<Envelope>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn progress(&self, fraction: f64) {
        self.send(JobEvent::Progress(fraction));
    }

    pub fn completed(&self, report: HashReport) {
        self.send(JobEvent::Completed(report));
    }

    pub fn cancelled(&self) {
        self.send(JobEvent::Cancelled);
    }

    pub fn failed<S: Into<String>>(&self, reason: S) {
        self.send(JobEvent::Failed(reason.into()));
    }

    fn send(&self, event: JobEvent) {
        if self
            .tx
            .send(Envelope {
                session: self.session,
                event,
            })
            .is_err()
        {
            warn!(
                "Fail to report to session {} because channel is closed; controller is gone",
                self.session
            );
        }
    }
}
