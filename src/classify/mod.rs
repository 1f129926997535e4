use crate::E;
use std::{fmt, str::FromStr};

/// Classification of a completed ROM against the ROM database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    /// No database entry matches the ROM.
    Unknown,
    /// The ROM is in the database and supported.
    Supported,
    /// The ROM is in the database but not supported.
    Unsupported,
}

impl MatchStatus {
    /// Routes the database match flags the same way the status icon does: an unknown ROM wins
    /// over everything else, then a supported one; anything left is unsupported.
    pub fn from_flags(unknown: bool, supported: bool) -> Self {
        if unknown {
            Self::Unknown
        } else if supported {
            Self::Supported
        } else {
            Self::Unsupported
        }
    }

    /// Wire tag of the status as carried by an engine's report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Supported => "supported",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = E;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim();
        [Self::Unknown, Self::Supported, Self::Unsupported]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| E::UnrecognizedTag(tag.to_owned()))
    }
}

/// Maps the raw `matchStatus` tag of a completed report to its classification.
///
/// # Errors
///
/// Returns `E::UnrecognizedTag` for any tag outside of `unknown`, `supported` and `unsupported`.
pub fn classify(tag: &str) -> Result<MatchStatus, E> {
    tag.parse()
}
