//! Client wire messages.
//!
//! One JSON object per line, tagged by `type`:
//!
//! ```text
//! {"type": "position_update", "position": {"x": 1.0, "y": 0.0, "z": 2.0}}
//! {"type": "dialogue", "text": "계좌 개설하고 싶어요"}
//! ```

use bt_agent::CustomerEvent;
use bt_core::Position;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireMessage {
    PositionUpdate { position: Position },
    Dialogue { text: String },
}

impl From<WireMessage> for CustomerEvent {
    fn from(msg: WireMessage) -> Self {
        match msg {
            WireMessage::PositionUpdate { position } => CustomerEvent::at(position),
            WireMessage::Dialogue { text }           => CustomerEvent::say(text),
        }
    }
}

/// Parse one line into an event.  Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> serde_json::Result<Option<CustomerEvent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let msg: WireMessage = serde_json::from_str(line)?;
    Ok(Some(msg.into()))
}
