//! Outbound view of the agent after one update.

use bt_core::{Animation, Position, Rotation};

use crate::AgentState;

/// What the shell serializes back to the client after every update.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub position:  Position,
    pub rotation:  Rotation,
    pub animation: Animation,
    /// Last line spoken.  Empty until the agent first speaks.
    pub dialogue:  String,
    pub state:     AgentState,
}
