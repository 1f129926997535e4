#![doc = include_str!("../README.md")]

mod breaker;
pub mod classify;
pub mod controller;
pub mod database;
pub mod engine;
mod error;
pub mod file;
pub mod hasher;
pub mod modal;
pub mod presenter;
pub mod reader;
pub mod session;
pub mod submission;
#[cfg(test)]
pub(crate) mod test;

pub use breaker::Breaker;
pub use classify::{classify, MatchStatus};
pub use controller::{Clock, Controller, Event, ManualClock, Options, Outcome, SystemClock};
pub use database::{DbEntry, FormatTag, RomDatabase};
pub use engine::{Engine, HashReport, Job, Reporter};
pub use error::E;
pub use file::RomFile;
pub use hasher::{Algorithm, Hasher};
pub use presenter::{Listing, Screen, Status};
pub use reader::{Reader, ReadingStrategy};
pub use session::{Session, SessionId, State};
pub use submission::{DropZone, Submission};
