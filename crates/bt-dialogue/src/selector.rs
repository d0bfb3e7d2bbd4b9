//! Uniform response sampling over a shared catalog.

use std::sync::Arc;

use bt_core::AgentRng;

use crate::{DialogueCatalog, Intent};

/// Picks one response per call, uniformly and with replacement.
///
/// The catalog is shared read-only; the randomness comes from the caller's
/// [`AgentRng`] so a fixed seed gives a fixed sequence of picks.
#[derive(Clone, Debug)]
pub struct ResponseSelector {
    catalog: Arc<DialogueCatalog>,
}

impl ResponseSelector {
    pub fn new(catalog: Arc<DialogueCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &DialogueCatalog {
        &self.catalog
    }

    /// The intent whose list will actually be sampled for `intent`.
    pub fn resolve(&self, intent: Intent) -> Intent {
        if self.catalog.contains(intent) { intent } else { Intent::Unknown }
    }

    /// Sample a response for `intent`, falling back to the `unknown` list.
    ///
    /// Never empty: catalog construction rejects empty lists and blank lines.
    pub fn select(&self, intent: Intent, rng: &mut AgentRng) -> &str {
        rng.choose(self.catalog.responses(intent))
            .map(String::as_str)
            .unwrap_or_default()
    }
}
