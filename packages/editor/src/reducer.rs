//! # Reducer
//!
//! Single entry point: `reduce(&state, action) -> state`.
//!
//! The input state is never modified. Each transition clones it into a
//! draft, edits the draft, and returns it. Tracked transitions then append
//! a snapshot of the draft's [`AppState`](crate::AppState) to history.

use crate::actions::Action;
use crate::errors::EditorResult;
use crate::mutations;
use crate::state::EditorState;
use pagetree_tree::Position;
use tracing::debug;

pub fn reduce(state: &EditorState, action: Action) -> EditorResult<EditorState> {
    debug!(action = action.name(), tracked = action.is_tracked(), "Reducing action");

    match action {
        Action::Undo => Ok(undo(state)),
        Action::Redo => Ok(redo(state)),

        Action::AddDocument(payload) => produce_with_undo(state, |draft| {
            mutations::add_document(draft, payload.filename, payload.page_image);
            Ok(())
        }),
        Action::RecognizeDocument(payload) => produce_with_undo(state, |draft| {
            mutations::recognize_document(draft, payload.id, &payload.result)
        }),
        Action::SelectDocument(index) => {
            produce_with_undo(state, |draft| mutations::select_document(&mut draft.app, index))
        }
        Action::SetDocumentImage(payload) => produce_with_undo(state, |draft| {
            mutations::set_document_image(&mut draft.app, payload.id, payload.page_image)
        }),
        Action::ModifyNode(payload) => produce_with_undo(state, |draft| {
            mutations::modify_current(&mut draft.app, &payload.item_id, &payload.changes)
        }),
        Action::DeleteNode(item_id) => {
            produce_with_undo(state, |draft| mutations::delete_current(&mut draft.app, &item_id))
        }
        Action::MoveNode(payload) => produce_with_undo(state, |draft| {
            mutations::move_current(&mut draft.app, &payload.source, &payload.destination)
        }),
        Action::UpdateTreeNodeRect(payload) => produce_with_undo(state, |draft| {
            mutations::update_rect_current(
                &mut draft.app,
                &payload.node_id,
                Position::new(payload.x, payload.y),
                payload.width,
                payload.height,
            )
        }),

        Action::ChangeSelected(id) => produce(state, |draft| {
            draft.app.selected_id = id;
            Ok(())
        }),
        Action::ChangeHovered(id) => produce(state, |draft| {
            draft.app.hovered_id = id;
            Ok(())
        }),
        Action::ChangeIsProcessing(payload) => produce(state, |draft| {
            mutations::change_is_processing(&mut draft.app, payload.id, payload.is_processing)
        }),
        Action::SetIsDrawing(is_drawing) => produce(state, |draft| {
            draft.app.is_drawing = is_drawing;
            Ok(())
        }),
        Action::SetDrawRect(rect) => produce(state, |draft| {
            draft.app.draw_rect = rect;
            Ok(())
        }),
        Action::LogUpdate(update) => produce(state, |draft| {
            draft.app.last_recognize_update = update;
            Ok(())
        }),
    }
}

/// Apply an untracked transition to a copy of `state`
fn produce<F>(state: &EditorState, recipe: F) -> EditorResult<EditorState>
where
    F: FnOnce(&mut EditorState) -> EditorResult<()>,
{
    let mut draft = state.clone();
    recipe(&mut draft)?;
    Ok(draft)
}

/// Apply a tracked transition and record the result in history
fn produce_with_undo<F>(state: &EditorState, recipe: F) -> EditorResult<EditorState>
where
    F: FnOnce(&mut EditorState) -> EditorResult<()>,
{
    let mut draft = produce(state, recipe)?;
    let snapshot = draft.app.clone();
    draft.history.record(snapshot);
    debug!(
        snapshots = draft.history.len(),
        current = ?draft.history.current_index(),
        "Recorded snapshot"
    );
    Ok(draft)
}

fn undo(state: &EditorState) -> EditorState {
    let mut next = state.clone();
    if let Some(snapshot) = next.history.undo() {
        next.app = snapshot.clone();
    }
    next
}

fn redo(state: &EditorState) -> EditorState {
    let mut next = state.clone();
    if let Some(snapshot) = next.history.redo() {
        next.app = snapshot.clone();
    }
    next
}
