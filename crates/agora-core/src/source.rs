use crate::{DebateGraph, DebateId};
use thiserror::Error;

/// Failure modes when resolving a debate identifier to its graph.
///
/// Both are terminal for the view that triggered the load; there is no
/// transient/permanent distinction and no retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("debate {0} not found")]
    NotFound(DebateId),
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can resolve a debate identifier to a node/edge graph:
/// the seeded local store, or the REST backend.
///
/// `Send + Sync` because the loader resolves on a background thread while
/// the view keeps polling.
pub trait GraphSource: Send + Sync {
    fn load_graph(&self, id: &DebateId) -> Result<DebateGraph, SourceError>;
}
