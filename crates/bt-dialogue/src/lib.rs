//! `bt-dialogue`: what the agent says.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`intent`]     | `Intent`: the closed set of query labels                  |
//! | [`classifier`] | `IntentClassifier`, `KeywordRule`                         |
//! | [`catalog`]    | `DialogueCatalog`: intent → nonempty response list        |
//! | [`selector`]   | `ResponseSelector`: uniform sampling with fallback        |
//! | [`loader`]     | `load_catalog_csv`, `load_rules_csv` and reader variants  |
//! | [`error`]      | `DialogueError`, `DialogueResult<T>`                      |
//!
//! # Response path
//!
//! ```text
//! text ──lowercase──▶ first matching KeywordRule ──▶ Intent
//! Intent ──catalog lookup (fallback: unknown)──▶ uniform pick ──▶ &str
//! ```
//!
//! Both the catalog and the rule list are validated when they are built, so
//! neither step can fail afterwards.

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod intent;
pub mod loader;
pub mod selector;

#[cfg(test)]
mod tests;

pub use catalog::DialogueCatalog;
pub use classifier::{IntentClassifier, KeywordRule};
pub use error::{DialogueError, DialogueResult};
pub use intent::Intent;
pub use loader::{load_catalog_csv, load_catalog_reader, load_rules_csv, load_rules_reader};
pub use selector::ResponseSelector;
