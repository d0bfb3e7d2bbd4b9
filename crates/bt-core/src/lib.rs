//! `bt-core`: foundational types for the branch-teller agent.
//!
//! This crate is a dependency of every other `bt-*` crate.  It has no `bt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Position`, `Rotation`, `Displacement`, `SceneBounds` |
//! | [`animation`]   | `Animation` enum                                      |
//! | [`time`]        | `Tick` update counter                                 |
//! | [`rng`]         | `AgentRng` (seedable)                                 |
//! | [`config`]      | `AgentConfig`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod animation;
pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use animation::Animation;
pub use config::AgentConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Displacement, Position, Rotation, SceneBounds};
pub use rng::AgentRng;
pub use time::Tick;
