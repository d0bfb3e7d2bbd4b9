//! The agent's conversational state machine.
//!
//! | event \ state  | idle        | greeting    | interacting |
//! |----------------|-------------|-------------|-------------|
//! | CustomerNear   | greeting    | greeting    | interacting |
//! | CustomerFar    | idle        | greeting    | interacting |
//! | Query          | interacting | interacting | interacting |
//!
//! `CustomerFar` never changes the state, and nothing leaves `interacting`.

use std::fmt;

/// Where the agent is in a customer encounter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentState {
    #[default]
    Idle,
    Greeting,
    Interacting,
}

/// What the current update observed, as far as the state machine cares.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StateEvent {
    /// A customer position inside the proximity threshold.
    CustomerNear,
    /// A customer position at or beyond the threshold.
    CustomerFar,
    /// A nonempty query text.
    Query,
}

impl AgentState {
    /// The state after `event`.  Total over every `(state, event)` pair.
    pub fn transition(self, event: StateEvent) -> AgentState {
        use AgentState::*;
        use StateEvent::*;
        match (self, event) {
            (_,           Query)        => Interacting,
            (Interacting, CustomerNear) => Interacting,
            (_,           CustomerNear) => Greeting,
            (state,       CustomerFar)  => state,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Idle        => "idle",
            AgentState::Greeting    => "greeting",
            AgentState::Interacting => "interacting",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
