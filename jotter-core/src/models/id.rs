use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier scheme used by a store for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Monotonically increasing integers starting at 1.
    #[default]
    Sequential,
    /// Randomly generated UUIDs.
    Random,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sequential" => Some(Self::Sequential),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Parse a path identifier under this scheme.
    ///
    /// Sequential ids must be positive integers; zero is never allocated
    /// and therefore never valid. Random ids must be textual UUIDs.
    pub fn parse_id(&self, raw: &str) -> Result<NoteId, ParseIdError> {
        match self {
            Self::Sequential => raw
                .parse::<u64>()
                .ok()
                .filter(|n| *n >= 1)
                .map(NoteId::Seq)
                .ok_or(ParseIdError::ExpectedInteger),
            Self::Random => Uuid::parse_str(raw)
                .map(NoteId::Random)
                .map_err(|_| ParseIdError::ExpectedUuid),
        }
    }
}

/// A note identifier; serializes as a JSON number under the sequential
/// scheme and as a string under the random scheme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum NoteId {
    Seq(u64),
    Random(Uuid),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(n) => write!(f, "{n}"),
            Self::Random(uuid) => write!(f, "{uuid}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("id must be a positive integer")]
    ExpectedInteger,
    #[error("id must be a valid UUID")]
    ExpectedUuid,
}
