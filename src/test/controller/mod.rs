mod cancellation;
mod lifecycle;

use crate::{
    controller::{Controller, Event, ManualClock, Options, Outcome},
    session::SessionId,
    test::{mock::ScriptedEngine, usecase::RomCase},
    E,
};
use std::{sync::mpsc::Receiver, time::Duration};

pub(crate) fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Controller over a scripted engine and a manual clock.
pub(crate) struct Bench {
    pub clock: ManualClock,
    pub engine: ScriptedEngine,
    pub controller: Controller<ScriptedEngine, ManualClock>,
    pub events: Receiver<Event>,
    pub case: RomCase,
}

impl Bench {
    pub fn new(files: &[(&str, usize)]) -> Result<Self, E> {
        let clock = ManualClock::default();
        let engine = ScriptedEngine::default();
        let mut controller =
            Options::new().controller_with_clock(engine.clone(), clock.clone());
        let events = controller.events().expect("events receiver is available");
        Ok(Self {
            clock,
            engine,
            controller,
            events,
            case: RomCase::new(files)?,
        })
    }

    pub fn start(&mut self, n: usize) -> Result<SessionId, E> {
        self.controller.start(&self.case.files[n])
    }

    /// Moves the clock, pumps and returns the events emitted so far.
    pub fn advance(&mut self, by: Duration) -> Vec<Event> {
        self.clock.advance(by);
        self.controller.pump();
        self.drain()
    }

    pub fn pump(&mut self) -> Vec<Event> {
        self.controller.pump();
        self.drain()
    }

    pub fn drain(&self) -> Vec<Event> {
        self.events.try_iter().collect()
    }

    pub fn clean(&self) -> Result<(), E> {
        Ok(self.case.clean()?)
    }
}

pub(crate) fn indicators(events: &[Event]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Indicator(visible) => Some(*visible),
            _ => None,
        })
        .collect()
}

pub(crate) fn progress_of(events: &[Event], session: SessionId) -> Vec<f64> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Progress(id, fraction) if *id == session => Some(*fraction),
            _ => None,
        })
        .collect()
}

pub(crate) fn finished(events: &[Event]) -> Vec<(SessionId, &Outcome)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Finished(id, outcome) => Some((*id, outcome)),
            _ => None,
        })
        .collect()
}

/// Sessions any event is attributed to.
pub(crate) fn sessions(events: &[Event]) -> Vec<SessionId> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Started(id, _) | Event::Progress(id, _) | Event::Finished(id, _) => Some(*id),
            Event::Indicator(_) => None,
        })
        .collect()
}
