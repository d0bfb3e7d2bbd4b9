//! Observer trait for logging, recording, and test probes.

use bt_behavior::SchedulerStep;
use bt_core::Tick;

use crate::{AgentState, ConversationTurn, Snapshot};

/// Callbacks invoked by
/// [`AgentController::update_observed`][crate::AgentController::update_observed]
/// at key points in an update.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl AgentObserver for TransitionPrinter {
///     fn on_state_change(&mut self, tick: Tick, from: AgentState, to: AgentState) {
///         println!("{tick}: {from} -> {to}");
///     }
/// }
/// ```
pub trait AgentObserver {
    /// The state changed during this update.
    fn on_state_change(&mut self, _tick: Tick, _from: AgentState, _to: AgentState) {}

    /// The behavior scheduler ticked (idle mode only).
    fn on_behavior(&mut self, _tick: Tick, _step: &SchedulerStep) {}

    /// A query was answered and appended to history.
    fn on_turn(&mut self, _tick: Tick, _turn: &ConversationTurn) {}

    /// Called last in every update with the snapshot being returned.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}
}

/// An [`AgentObserver`] that does nothing.
pub struct NoopObserver;

impl AgentObserver for NoopObserver {}
