//! Conversation history entries.

use bt_core::Tick;
use bt_dialogue::Intent;

/// One customer query and the agent's reply.
///
/// History is append-only and unbounded for the lifetime of the controller.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversationTurn {
    /// Update on which the query arrived.
    pub tick:          Tick,
    pub customer_text: String,
    /// Label the classifier assigned (before catalog fallback).
    pub intent:        Intent,
    pub agent_text:    String,
}
