use thiserror::Error;

use crate::Intent;

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("catalog has no responses for intent {0}")]
    EmptyResponses(Intent),

    #[error("catalog entry for intent {0} contains a blank response")]
    BlankResponse(Intent),

    #[error("catalog is missing the `unknown` fallback list")]
    MissingFallback,

    #[error("keyword rule for intent {0} is invalid: {1}")]
    InvalidRule(Intent, String),

    #[error("dialogue parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DialogueResult<T> = Result<T, DialogueError>;
