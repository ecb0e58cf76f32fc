//! Read-only queries the presentation layer runs against the state

use crate::state::{AppState, EditorState, OcrDocument};
use pagetree_tree::{Tree, TreeItem};

pub fn current_document(app: &AppState) -> Option<&OcrDocument> {
    app.current_document()
}

pub fn current_tree(app: &AppState) -> Option<&Tree> {
    current_document(app).and_then(OcrDocument::tree)
}

pub fn has_undo(state: &EditorState) -> bool {
    state.history().can_undo()
}

pub fn has_redo(state: &EditorState) -> bool {
    state.history().can_redo()
}

pub fn is_any_document_processing(documents: &[OcrDocument]) -> bool {
    documents.iter().any(|doc| doc.is_processing)
}

pub fn selected_item(app: &AppState) -> Option<&TreeItem> {
    let id = app.selected_id.as_deref()?;
    current_tree(app)?.items.get(id)
}

pub fn hovered_item(app: &AppState) -> Option<&TreeItem> {
    let id = app.hovered_id.as_deref()?;
    current_tree(app)?.items.get(id)
}
