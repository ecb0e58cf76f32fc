use crate::item::{ElementType, ItemId};
use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while building or walking a normalized tree.
///
/// All of these indicate a corrupted tree or a caller bug; none are
/// transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Could not find node with ID {0}")]
    NodeNotFound(ItemId),

    #[error("Node with ID {child} was expected to be a child of node with ID {parent}")]
    IntegrityError { parent: ItemId, child: ItemId },

    #[error("Item {id} is of type {actual:?}, expected {expected:?}")]
    InvariantViolation {
        id: ItemId,
        expected: ElementType,
        actual: ElementType,
    },

    #[error("Moving {node} under {parent} would create a cycle")]
    CycleDetected { node: ItemId, parent: ItemId },

    #[error("Child index {index} out of range for node {parent} with {len} children")]
    ChildIndexOutOfRange {
        parent: ItemId,
        index: usize,
        len: usize,
    },
}

impl TreeError {
    pub fn node_not_found(id: impl Into<ItemId>) -> Self {
        Self::NodeNotFound(id.into())
    }

    pub fn integrity(parent: impl Into<ItemId>, child: impl Into<ItemId>) -> Self {
        Self::IntegrityError {
            parent: parent.into(),
            child: child.into(),
        }
    }
}
