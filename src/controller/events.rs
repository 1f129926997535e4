use crate::{classify::MatchStatus, engine::HashReport, session::SessionId, E};
use log::warn;
use std::sync::mpsc::{channel, Receiver, Sender};

/// How a session ended. Exactly one per session; never for a superseded one.
#[derive(Debug)]
pub enum Outcome {
    Completed {
        status: MatchStatus,
        report: HashReport,
    },
    Cancelled,
    Failed(E),
}

/// What the controller tells the presentation layer.
#[derive(Debug)]
pub enum Event {
    /// A session has started hashing the named file.
    Started(SessionId, String),
    /// Accepted progress of the active session, in `[0, 1]`.
    Progress(SessionId, f64),
    /// The progress indicator has been shown (`true`) or hidden (`false`).
    Indicator(bool),
    Finished(SessionId, Outcome),
}

/// Sending side of the events channel. Keeps the receiver until it is taken.
#[derive(Debug)]
pub(crate) struct Notifier {
    tx: Sender<Event>,
    rx: Option<Receiver<Event>>,
    closed: bool,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        let (tx, rx): (Sender<Event>, Receiver<Event>) = channel();
        Self {
            tx,
            rx: Some(rx),
            closed: false,
        }
    }

    pub(crate) fn receiver(&mut self) -> Option<Receiver<Event>> {
        self.rx.take()
    }

    /// Events sent before the receiver is taken are queued for it.
    pub(crate) fn notify(&mut self, event: Event) {
        if self.tx.send(event).is_err() && !self.closed {
            self.closed = true;
            warn!("Fail to send event because channel is closed. Events are not delivered anymore.");
        }
    }
}
