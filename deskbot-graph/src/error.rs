use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Graph has no entry point")]
    NoEntryPoint,

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node '{node}' failed: {source}")]
    NodeExecutionFailed {
        node: String,
        #[source]
        source: deskbot_core::BotError,
    },

    #[error("Node '{0}' timed out")]
    NodeTimeout(String),

    #[error("Step limit of {0} exceeded")]
    StepLimitExceeded(usize),
}

pub type Result<T> = std::result::Result<T, GraphError>;
