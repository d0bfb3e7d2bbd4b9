//! Inbound update from the shell.

use bt_core::Position;

/// One update delivered to [`AgentController::update`][crate::AgentController::update].
///
/// Either field may be absent; an absent field skips that branch.  An empty
/// `text` counts as absent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CustomerEvent {
    /// Where the customer currently is.
    #[serde(default)]
    pub position: Option<Position>,

    /// What the customer just said.
    #[serde(default)]
    pub text: Option<String>,
}

impl CustomerEvent {
    /// A position-only update.
    pub fn at(position: Position) -> Self {
        Self { position: Some(position), text: None }
    }

    /// A query-only update.
    pub fn say(text: impl Into<String>) -> Self {
        Self { position: None, text: Some(text.into()) }
    }

    /// An update carrying neither field.  Still advances the tick counter.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a query to this update.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The query text, if present and nonempty.
    pub fn query(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}
