//! Animation labels shared by the behavior scheduler and the controller.
//!
//! The set is closed: renderers key clips off these exact strings.

use std::str::FromStr;

use crate::CoreError;

/// The clip the agent is currently playing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Animation {
    /// Standing at the counter (default state).
    #[default]
    Idle,
    /// Working the terminal.
    Typing,
    /// Glancing around the lobby.
    Looking,
    /// Shuffling documents.
    Paperwork,
    /// Moving across the floor.
    Walk,
    /// Addressing a customer.
    Talking,
}

impl Animation {
    /// Label used on the wire and in CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Animation::Idle      => "idle",
            Animation::Typing    => "typing",
            Animation::Looking   => "looking",
            Animation::Paperwork => "paperwork",
            Animation::Walk      => "walk",
            Animation::Talking   => "talking",
        }
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Animation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "idle"      => Ok(Animation::Idle),
            "typing"    => Ok(Animation::Typing),
            "looking"   => Ok(Animation::Looking),
            "paperwork" => Ok(Animation::Paperwork),
            "walk"      => Ok(Animation::Walk),
            "talking"   => Ok(Animation::Talking),
            other       => Err(CoreError::Parse(format!("unknown animation {other:?}"))),
        }
    }
}
