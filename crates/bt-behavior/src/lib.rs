//! `bt-behavior`: what the agent does when nobody is at the counter.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`pattern`]   | `BehaviorPattern`, `PatternCatalog`                       |
//! | [`scheduler`] | `SchedulerCursor`, `SchedulerStep`, `BehaviorScheduler`   |
//! | [`loader`]    | `load_patterns_csv`, `load_patterns_reader`               |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Cycle model (summary)
//!
//! The catalog is an ordered ring of timed patterns.  Each idle update is one
//! scheduler tick:
//!
//! ```text
//! elapsed += 1
//! if elapsed >= patterns[index].duration_ticks:
//!     elapsed = 0
//!     index   = (index + 1) % patterns.len()
//!     emit patterns[index].animation and its displacement (once)
//! ```
//!
//! Displacements fire only on the transition tick.  Applying them to a
//! position (and clamping) is the controller's job.

pub mod error;
pub mod loader;
pub mod pattern;
pub mod scheduler;


pub use error::{BehaviorError, BehaviorResult};
pub use loader::{load_patterns_csv, load_patterns_reader};
pub use pattern::{BehaviorPattern, PatternCatalog};
pub use scheduler::{BehaviorScheduler, SchedulerCursor, SchedulerStep};
