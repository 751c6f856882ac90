use thiserror::Error;

use pt_core::{CoreError, NodeId};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),

    #[error("cannot connect {0} to itself")]
    SelfLoop(NodeId),

    #[error("{0} and {1} are already connected")]
    DuplicateEdge(NodeId, NodeId),

    #[error("scenario has no {0} node selected")]
    MissingEndpoint(&'static str),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
