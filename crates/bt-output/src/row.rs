//! Plain data row types written by output backends.

use bt_agent::{AgentState, ConversationTurn, Snapshot};
use bt_core::{Animation, Tick};
use bt_dialogue::Intent;

/// The agent's outbound view after one update.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub tick:      u64,
    pub x:         f64,
    pub y:         f64,
    pub z:         f64,
    pub yaw:       f64,
    pub animation: Animation,
    pub state:     AgentState,
    pub dialogue:  String,
}

impl SnapshotRow {
    pub fn from_snapshot(tick: Tick, snapshot: &Snapshot) -> Self {
        Self {
            tick:      tick.0,
            x:         snapshot.position.x,
            y:         snapshot.position.y,
            z:         snapshot.position.z,
            yaw:       snapshot.rotation.yaw,
            animation: snapshot.animation,
            state:     snapshot.state,
            dialogue:  snapshot.dialogue.clone(),
        }
    }
}

/// One query and its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRow {
    pub tick:          u64,
    pub intent:        Intent,
    pub customer_text: String,
    pub agent_text:    String,
}

impl From<&ConversationTurn> for TurnRow {
    fn from(turn: &ConversationTurn) -> Self {
        Self {
            tick:          turn.tick.0,
            intent:        turn.intent,
            customer_text: turn.customer_text.clone(),
            agent_text:    turn.agent_text.clone(),
        }
    }
}
