//! Error types for the editor

use crate::state::DocumentId;
use pagetree_tree::TreeError;
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

/// Every variant is an invariant violation or caller bug; nothing here is
/// worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Document with ID {0} not found")]
    DocumentNotFound(DocumentId),

    #[error("No document at index {index} ({len} documents)")]
    DocumentIndexOutOfRange { index: usize, len: usize },

    #[error("No document is open")]
    NoCurrentDocument,

    #[error("Cannot move node when document {0} has no tree")]
    MissingTree(DocumentId),

    #[error("Unknown action {0}")]
    UnknownAction(String),

    #[error("Could not decode action: {0}")]
    Decode(String),
}
