use bt_behavior::BehaviorError;
use bt_core::CoreError;
use bt_dialogue::DialogueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Dialogue(#[from] DialogueError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("failed to spawn agent worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("agent worker has shut down")]
    WorkerGone,

    #[error("agent worker panicked")]
    WorkerPanicked,
}

pub type AgentResult<T> = Result<T, AgentError>;
