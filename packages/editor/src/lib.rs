//! # Page Tree Editor
//!
//! State engine for editing recognized pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ recognizer: image → Page result (external)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ tree: Page → flat Tree (normalize, walk)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: documents + structural edits        │
//! │  - reduce(state, action) → state            │
//! │  - move / delete / modify / reposition      │
//! │  - bounded linear undo/redo (snapshots)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **States are values**: a transition never modifies its input
//! 2. **Flat tree, ID links**: parent and children agree after every edit
//! 3. **Snapshot history**: every tracked transition records the state it produced
//! 4. **Fail loudly**: dangling IDs and broken links are errors, never skipped
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagetree_editor::{Action, AddDocumentPayload, EditSession};
//!
//! let mut session = EditSession::new();
//! session.dispatch(Action::AddDocument(AddDocumentPayload {
//!     filename: "scan.png".to_string(),
//!     page_image: None,
//! }))?;
//!
//! // Once the recognizer is done
//! session.dispatch(Action::RecognizeDocument(RecognizeDocumentPayload { id: 1, result: page }))?;
//!
//! session.dispatch(Action::DeleteNode("3".to_string()))?;
//! session.dispatch(Action::Undo)?;
//! ```

mod actions;
mod errors;
pub mod mutations;
mod options;
mod reducer;
pub mod selectors;
mod session;
mod state;
mod undo_stack;

pub use actions::{
    Action, AddDocumentPayload, ChangeIsProcessingPayload, ModifyNodeChanges, ModifyNodePayload,
    MoveNodePayload, RecognizeDocumentPayload, SetDocumentImagePayload, TreeDestinationPosition,
    TreeSourcePosition, UpdateTreeNodeRectPayload,
};
pub use errors::{EditorError, EditorResult};
pub use options::{EditorOptions, DEFAULT_HISTORY_LIMIT};
pub use reducer::reduce;
pub use session::EditSession;
pub use state::{AppState, DocumentId, EditorState, OcrDocument, PageImage, Rect};
pub use undo_stack::UndoStack;

// Re-export tree types for convenience
pub use pagetree_tree::{ItemId, Page, Tree, TreeError, TreeItem};
