//! `bt-agent`: the branch-teller agent controller.
//!
//! # Update model
//!
//! ```text
//! update(event):
//!   ① Position : if event.position is set:
//!                   distance < threshold → face customer; greet unless
//!                                          already interacting
//!                   otherwise            → one BehaviorScheduler tick;
//!                                          apply animation / clamped step
//!   ② Query    : if event.text is set (and nonempty):
//!                   classify → select response → interacting, talking;
//!                   append a ConversationTurn
//!   ③ Snapshot : {position, rotation, animation, dialogue, state}
//! ```
//!
//! ② runs after ①, so when both fire the query's dialogue is what the
//! snapshot carries.  Every call advances the controller's [`Tick`] by one.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`state`]      | `AgentState`, `StateEvent`, the transition function       |
//! | [`event`]      | `CustomerEvent`: one inbound update                       |
//! | [`snapshot`]   | `Snapshot`: one outbound update                           |
//! | [`history`]    | `ConversationTurn`                                        |
//! | [`controller`] | `AgentController`                                         |
//! | [`builder`]    | `AgentBuilder`                                            |
//! | [`observer`]   | `AgentObserver`, `NoopObserver`                           |
//! | [`worker`]     | `AgentWorker`, `AgentHandle`: single-writer thread        |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bt_agent::{AgentBuilder, CustomerEvent};
//! use bt_core::{AgentConfig, Position};
//!
//! let mut agent = AgentBuilder::new(AgentConfig::default()).build()?;
//! let snap = agent.update(&CustomerEvent::at(Position::new(1.0, 0.0, 0.0)));
//! assert_eq!(snap.state, bt_agent::AgentState::Greeting);
//! ```
//!
//! [`Tick`]: bt_core::Tick

pub mod builder;
pub mod controller;
pub mod error;
pub mod event;
pub mod history;
pub mod observer;
pub mod snapshot;
pub mod state;
pub mod worker;


pub use builder::AgentBuilder;
pub use controller::AgentController;
pub use error::{AgentError, AgentResult};
pub use event::CustomerEvent;
pub use history::ConversationTurn;
pub use observer::{AgentObserver, NoopObserver};
pub use snapshot::Snapshot;
pub use state::{AgentState, StateEvent};
pub use worker::{AgentHandle, AgentWorker};
