//! # Tree and Document Mutations
//!
//! The transition bodies behind [`reduce`](crate::reduce). Each one edits a
//! draft that the reducer cloned from the current state; if it fails the
//! draft is dropped, so a failed transition never leaves a half-applied
//! change behind.
//!
//! ## Mutation Semantics
//!
//! ### Delete
//! - Removes the node and all descendants from the item map
//! - Unlinks the node from its parent's `children`
//! - Deleting the page root removes the whole tree
//!
//! ### Move
//! - Detaches the child at `source.index` and inserts it under the
//!   destination parent, at `destination.index` or appended
//! - Appending under a parent that cannot host children is rejected before
//!   anything changes
//! - Geometry is not recomputed; bounding boxes stay where they were
//!
//! ### UpdateTreeNodeRect
//! - Moves a node to a new parent-relative position and shifts every
//!   descendant's bounding box by the same delta, without resizing them
//! - No rounding, no clamping to the parent's bounds

use crate::actions::{ModifyNodeChanges, TreeDestinationPosition, TreeSourcePosition};
use crate::errors::{EditorError, EditorResult};
use crate::state::{AppState, DocumentId, EditorState, OcrDocument, PageImage};
use pagetree_tree::{
    build_tree, collect_ids, walk_mut, Bbox, ElementType, ItemId, Page, Position, Tree, TreeError,
    TreeResult,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub fn add_document(
    state: &mut EditorState,
    filename: String,
    page_image: Option<PageImage>,
) -> DocumentId {
    let id = state.ids.documents.next_id();
    info!(document_id = id, filename = %filename, "Adding document");
    state
        .app
        .documents
        .push(OcrDocument::new(id, filename, page_image));
    id
}

/// Normalize a recognition result and install it as the document's tree
pub fn recognize_document(state: &mut EditorState, id: DocumentId, result: &Page) -> EditorResult<()> {
    state.app.document_mut(id)?;

    let tree = build_tree(result, &mut state.ids.items)?;
    info!(document_id = id, items = tree.len(), "Installing recognized tree");

    state.app.document_mut(id)?.tree = Some(Arc::new(tree));
    Ok(())
}

pub fn select_document(app: &mut AppState, index: usize) -> EditorResult<()> {
    if index >= app.documents.len() {
        return Err(EditorError::DocumentIndexOutOfRange {
            index,
            len: app.documents.len(),
        });
    }
    app.current_document = index;
    Ok(())
}

pub fn change_is_processing(app: &mut AppState, id: DocumentId, is_processing: bool) -> EditorResult<()> {
    app.document_mut(id)?.is_processing = is_processing;
    Ok(())
}

pub fn set_document_image(app: &mut AppState, id: DocumentId, page_image: PageImage) -> EditorResult<()> {
    app.document_mut(id)?.page_image = Some(Arc::new(page_image));
    Ok(())
}

/// Tree of the current document; `None` when it has not been recognized yet
fn current_tree_mut(app: &mut AppState) -> EditorResult<Option<&mut Tree>> {
    Ok(app.current_document_mut()?.tree_mut())
}

pub fn modify_current(app: &mut AppState, item_id: &str, changes: &ModifyNodeChanges) -> EditorResult<()> {
    if let Some(tree) = current_tree_mut(app)? {
        modify_node(tree, item_id, changes)?;
    }
    Ok(())
}

pub fn delete_current(app: &mut AppState, item_id: &str) -> EditorResult<()> {
    let document = app.current_document_mut()?;
    let Some(tree) = document.tree_mut() else {
        return Ok(());
    };

    let removed = if tree.root_id == item_id {
        let removed: Vec<ItemId> = tree.items.keys().cloned().collect();
        debug!(document_id = document.id, "Deleting page root, dropping tree");
        document.tree = None;
        removed
    } else {
        delete_node(tree, item_id)?
    };

    // Selection must not point at a deleted node
    if app.selected_id.as_ref().is_some_and(|id| removed.contains(id)) {
        app.selected_id = None;
    }
    if app.hovered_id.as_ref().is_some_and(|id| removed.contains(id)) {
        app.hovered_id = None;
    }
    Ok(())
}

pub fn move_current(
    app: &mut AppState,
    source: &TreeSourcePosition,
    destination: &TreeDestinationPosition,
) -> EditorResult<()> {
    let document = app.current_document_mut()?;
    let document_id = document.id;
    let tree = document
        .tree_mut()
        .ok_or(EditorError::MissingTree(document_id))?;

    move_node(tree, source, destination)?;
    Ok(())
}

pub fn update_rect_current(
    app: &mut AppState,
    node_id: &str,
    position: Position,
    width: Option<f64>,
    height: Option<f64>,
) -> EditorResult<()> {
    if let Some(tree) = current_tree_mut(app)? {
        update_node_rect(tree, node_id, position, width, height)?;
    }
    Ok(())
}

/// Apply the `is_expanded` and/or `text` parts of `changes`
pub fn modify_node(tree: &mut Tree, item_id: &str, changes: &ModifyNodeChanges) -> TreeResult<()> {
    let node = tree.get_mut(item_id)?;

    if let Some(is_expanded) = changes.is_expanded {
        node.is_expanded = is_expanded;
    }

    if let Some(text) = &changes.text {
        if !node.data.set_text(text.clone()) {
            debug!(item_id, item_type = ?node.item_type, "Ignoring text change on item without text");
        }
    }

    Ok(())
}

/// Remove a non-root node and its subtree. Returns every removed ID.
pub fn delete_node(tree: &mut Tree, item_id: &str) -> TreeResult<Vec<ItemId>> {
    let node = tree.get(item_id)?;
    let mut removed = collect_ids(&node.children, &tree.items)?;

    if let Some(parent_id) = node.parent_id.clone() {
        let parent = tree.get_mut(&parent_id)?;
        let index = parent
            .children
            .iter()
            .position(|id| id == item_id)
            .ok_or_else(|| TreeError::integrity(parent_id.clone(), item_id))?;
        parent.children.remove(index);
    }

    for id in &removed {
        tree.items.remove(id);
    }
    tree.items.remove(item_id);
    removed.push(item_id.to_string());

    debug!(item_id, removed = removed.len(), "Deleted subtree");
    Ok(removed)
}

/// Relocate one child between parents. Returns false when the move was
/// rejected because an append target cannot host children.
pub fn move_node(
    tree: &mut Tree,
    source: &TreeSourcePosition,
    destination: &TreeDestinationPosition,
) -> TreeResult<bool> {
    let source_parent = tree.get(&source.parent_id)?;
    let moved_id = source_parent
        .children
        .get(source.index)
        .cloned()
        .ok_or_else(|| TreeError::ChildIndexOutOfRange {
            parent: source.parent_id.clone(),
            index: source.index,
            len: source_parent.children.len(),
        })?;
    tree.get(&moved_id)?;

    let destination_parent = tree.get(&destination.parent_id)?;
    if destination.index.is_none() && !destination_parent.item_type.can_host_children() {
        warn!(
            node = %moved_id,
            destination = %destination.parent_id,
            destination_type = ?destination_parent.item_type,
            "Rejecting move: destination cannot host children"
        );
        return Ok(false);
    }

    if is_same_or_descendant(tree, &destination.parent_id, &moved_id)? {
        return Err(TreeError::CycleDetected {
            node: moved_id,
            parent: destination.parent_id.clone(),
        });
    }

    let source_parent = tree.get_mut(&source.parent_id)?;
    source_parent.children.remove(source.index);
    source_parent.is_expanded = source_parent.is_expanded && !source_parent.children.is_empty();

    let destination_parent = tree.get_mut(&destination.parent_id)?;
    match destination.index {
        Some(index) => {
            let index = index.min(destination_parent.children.len());
            destination_parent.children.insert(index, moved_id.clone());
        }
        None => destination_parent.children.push(moved_id.clone()),
    }

    tree.get_mut(&moved_id)?.parent_id = Some(destination.parent_id.clone());

    debug!(node = %moved_id, from = %source.parent_id, to = %destination.parent_id, "Moved node");
    Ok(true)
}

/// Whether `id` is `ancestor` or lies somewhere below it
fn is_same_or_descendant(tree: &Tree, id: &str, ancestor: &str) -> TreeResult<bool> {
    let mut current = tree.get(id)?;
    let mut steps = 0;

    loop {
        if current.id == ancestor {
            return Ok(true);
        }
        match &current.parent_id {
            Some(parent_id) => current = tree.get(parent_id)?,
            None => return Ok(false),
        }

        steps += 1;
        if steps > tree.len() {
            return Err(TreeError::integrity(
                current.parent_id.clone().unwrap_or_default(),
                current.id.clone(),
            ));
        }
    }
}

/// Reposition a node and carry its descendants along
pub fn update_node_rect(
    tree: &mut Tree,
    node_id: &str,
    position: Position,
    width: Option<f64>,
    height: Option<f64>,
) -> TreeResult<()> {
    let node = tree.get_mut(node_id)?;

    let delta = node.parent_relative_offset.delta_to(position);
    let bbox = node.data.bbox;
    let x0 = bbox.x0 + delta.x;
    let y0 = bbox.y0 + delta.y;

    node.parent_relative_offset = position;
    node.data.bbox = Bbox {
        x0,
        y0,
        x1: width.map_or(bbox.x1 + delta.x, |width| x0 + width),
        y1: height.map_or(bbox.y1 + delta.y, |height| y0 + height),
    };

    let children = node.children.clone();
    walk_mut(&children, &mut tree.items, |item| {
        if item.item_type == ElementType::Page {
            return;
        }
        item.data.bbox = item.data.bbox.offset(delta);
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagetree_tree::{Block, IdGenerator, Line, PageChild, Paragraph, Word};

    /// page → block → paragraph → line → [word, word]
    fn sample_tree() -> Tree {
        let bbox = Bbox::new(10.0, 10.0, 110.0, 60.0);
        let page = Page {
            children: vec![PageChild::Block(Block {
                bbox,
                text: "two words".to_string(),
                children: vec![Paragraph {
                    bbox,
                    children: vec![Line {
                        bbox,
                        children: vec![
                            Word {
                                bbox: Bbox::new(10.0, 10.0, 50.0, 60.0),
                                text: "two".to_string(),
                                ..Default::default()
                            },
                            Word {
                                bbox: Bbox::new(60.0, 10.0, 110.0, 60.0),
                                text: "words".to_string(),
                                ..Default::default()
                            },
                        ],
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            })],
            ..Default::default()
        };
        build_tree(&page, &mut IdGenerator::new()).unwrap()
    }

    #[test]
    fn test_modify_expanded_and_text() {
        let mut tree = sample_tree();
        let changes = ModifyNodeChanges {
            is_expanded: Some(false),
            text: Some("edited".to_string()),
        };

        modify_node(&mut tree, "2", &changes).unwrap();

        let block = tree.get("2").unwrap();
        assert!(!block.is_expanded);
        assert_eq!(block.data.text.as_deref(), Some("edited"));
    }

    #[test]
    fn test_modify_missing_node() {
        let mut tree = sample_tree();
        let result = modify_node(&mut tree, "404", &ModifyNodeChanges::default());
        assert_eq!(result, Err(TreeError::NodeNotFound("404".to_string())));
    }

    #[test]
    fn test_delete_reports_removed_ids() {
        let mut tree = sample_tree();

        let mut removed = delete_node(&mut tree, "3").unwrap();
        removed.sort();

        assert_eq!(removed, vec!["3", "4", "5", "6"]);
        assert_eq!(tree.len(), 2);
        assert!(tree.get("2").unwrap().children.is_empty());
    }

    #[test]
    fn test_delete_detects_broken_parent_link() {
        let mut tree = sample_tree();
        tree.get_mut("4").unwrap().children.retain(|id| id != "5");

        let result = delete_node(&mut tree, "5");
        assert_eq!(
            result,
            Err(TreeError::IntegrityError {
                parent: "4".to_string(),
                child: "5".to_string(),
            })
        );
    }

    #[test]
    fn test_move_rejects_cycle() {
        let mut tree = sample_tree();
        let source = TreeSourcePosition {
            parent_id: "2".to_string(),
            index: 0,
        };
        let destination = TreeDestinationPosition {
            parent_id: "4".to_string(),
            index: Some(0),
        };

        let result = move_node(&mut tree, &source, &destination);
        assert!(matches!(result, Err(TreeError::CycleDetected { .. })));
        assert_eq!(tree.get("2").unwrap().children, vec!["3"]);
    }

    #[test]
    fn test_move_source_index_out_of_range() {
        let mut tree = sample_tree();
        let source = TreeSourcePosition {
            parent_id: "4".to_string(),
            index: 5,
        };
        let destination = TreeDestinationPosition {
            parent_id: "4".to_string(),
            index: None,
        };

        let result = move_node(&mut tree, &source, &destination);
        assert_eq!(
            result,
            Err(TreeError::ChildIndexOutOfRange {
                parent: "4".to_string(),
                index: 5,
                len: 2,
            })
        );
    }

    #[test]
    fn test_update_rect_with_size() {
        let mut tree = sample_tree();

        update_node_rect(&mut tree, "5", Position::new(0.0, 5.0), Some(20.0), None).unwrap();

        let word = tree.get("5").unwrap();
        assert_eq!(word.parent_relative_offset, Position::new(0.0, 5.0));
        assert_eq!(word.data.bbox, Bbox::new(10.0, 15.0, 30.0, 65.0));
    }
}
