//! Shared error type.
//!
//! The search engine is infallible; these errors come from loaders, editors,
//! and configuration checks in the outer crates.

use thiserror::Error;

use crate::{EdgeId, NodeId};

/// The base error type for `pt-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `pt-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
