use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Row, RowNumber},
    error::ParseEventError,
};

/// Interaction delivered from a presentation surface to the list model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ListEvent {
    RowTapped(RowNumber),
    ShuffleRequested,
}

impl fmt::Display for ListEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowTapped(number) => write!(f, "tap:{number}"),
            Self::ShuffleRequested => f.write_str("shuffle"),
        }
    }
}

/// Accepts `shuffle` or `tap:<n>` (case-insensitive, surrounding whitespace ignored).
impl FromStr for ListEvent {
    type Err = ParseEventError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseEventError::Empty);
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower == "shuffle" {
            return Ok(Self::ShuffleRequested);
        }
        let Some(number) = lower.strip_prefix("tap:") else {
            return Err(ParseEventError::UnknownEvent(trimmed.to_string()));
        };
        let number = number
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseEventError::InvalidRowNumber(number.trim().to_string()))?;
        Ok(Self::RowTapped(RowNumber(number)))
    }
}

/// What the model hands back to the renderer after an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUpdate {
    pub rows: Vec<Row>,
    /// Row positions changed; renderers may animate.
    pub reordered: bool,
    /// Anything changed at all. False for a tap on an unknown row.
    pub changed: bool,
}
