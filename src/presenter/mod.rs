mod listing;

use crate::{
    classify::MatchStatus,
    controller::{Event, Outcome},
    session::SessionId,
};
pub use listing::{Listing, ListingRow};

/// Number of ticks of the progress bar.
pub const PROGRESS_TICKS: u32 = 80;

/// Ticks of the progress bar filled for a fraction.
pub fn progress_ticks(fraction: f64) -> u32 {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * PROGRESS_TICKS as f64).floor() as u32
}

/// Status shown next to the file box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing has been identified yet.
    Idle,
    Unknown,
    Supported,
    Unsupported,
    /// Hashing failed; carries the message to show.
    Failed(String),
}

/// Status icon: CSS class, glyph and tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub class: &'static str,
    pub glyph: &'static str,
    pub title: &'static str,
}

impl Status {
    pub fn icon(&self) -> Option<Icon> {
        match self {
            Self::Idle => None,
            Self::Unknown => Some(Icon {
                class: "unknown",
                glyph: "fa-question-circle",
                title: "Unknown ROM",
            }),
            Self::Supported => Some(Icon {
                class: "supported",
                glyph: "fa-check-circle",
                title: "Supported ROM",
            }),
            Self::Unsupported => Some(Icon {
                class: "unsupported",
                glyph: "fa-times-circle",
                title: "Unsupported ROM",
            }),
            Self::Failed(_) => Some(Icon {
                class: "failed",
                glyph: "fa-exclamation-circle",
                title: "Hashing failed",
            }),
        }
    }
}

impl From<MatchStatus> for Status {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Unknown => Self::Unknown,
            MatchStatus::Supported => Self::Supported,
            MatchStatus::Unsupported => Self::Unsupported,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Shown {
    status: Status,
    game_name: Option<String>,
    file_loaded: bool,
}

impl Default for Shown {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            game_name: None,
            file_loaded: false,
        }
    }
}

/// View state of the page, folded from controller events.
#[derive(Debug, Default)]
pub struct Screen {
    shown: Shown,
    before: Option<Shown>,
    session: Option<SessionId>,
    busy: bool,
    indicator: bool,
    ticks: u32,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &Status {
        &self.shown.status
    }

    pub fn game_name(&self) -> Option<&str> {
        self.shown.game_name.as_deref()
    }

    /// `true` once a file has been identified.
    pub fn file_loaded(&self) -> bool {
        self.shown.file_loaded
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator
    }

    /// Filled ticks of the progress bar, out of `PROGRESS_TICKS`.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Started(session, _) => {
                // A superseded session never finishes, keep the snapshot taken before it
                if !self.busy {
                    self.before = Some(self.shown.clone());
                }
                self.session = Some(*session);
                self.busy = true;
                self.ticks = 0;
            }
            Event::Progress(session, fraction) => {
                if self.session == Some(*session) {
                    self.ticks = progress_ticks(*fraction);
                }
            }
            Event::Indicator(visible) => {
                self.indicator = *visible;
                if *visible {
                    self.ticks = 0;
                }
            }
            Event::Finished(session, outcome) => {
                if self.session != Some(*session) {
                    return;
                }
                self.busy = false;
                let before = self.before.take().unwrap_or_default();
                match outcome {
                    Outcome::Completed { status, report } => {
                        self.shown = Shown {
                            status: Status::from(*status),
                            game_name: Some(report.file_name.clone()),
                            file_loaded: true,
                        };
                    }
                    Outcome::Cancelled => {
                        self.shown = before;
                    }
                    Outcome::Failed(err) => {
                        self.shown = Shown {
                            status: Status::Failed(err.to_string()),
                            game_name: None,
                            file_loaded: false,
                        };
                    }
                }
            }
        }
    }
}
