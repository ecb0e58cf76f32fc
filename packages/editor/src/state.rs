//! # Application State
//!
//! [`AppState`] holds everything undo/redo tracks: the document store and
//! the UI selection fields. [`EditorState`] adds the bookkeeping that must
//! survive undo: the snapshot history and the ID generators.
//!
//! Trees and page images sit behind [`Arc`], so cloning a state (which every
//! transition and every snapshot does) shares them. A transition that edits
//! a tree goes through [`OcrDocument::tree_mut`], which copies only that
//! document's tree when it is shared.

use crate::errors::{EditorError, EditorResult};
use crate::options::EditorOptions;
use crate::undo_stack::UndoStack;
use pagetree_tree::{IdGenerator, ItemId, Tree};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type DocumentId = u64;

/// Decoded page image supplied by the image loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    /// Raw image bytes
    #[serde(default)]
    pub data: Vec<u8>,
}

/// One loaded page and, once recognized, its tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrDocument {
    pub id: DocumentId,
    pub filename: String,
    pub page_image: Option<Arc<PageImage>>,
    pub is_processing: bool,
    pub tree: Option<Arc<Tree>>,
}

impl OcrDocument {
    pub fn new(id: DocumentId, filename: impl Into<String>, page_image: Option<PageImage>) -> Self {
        Self {
            id,
            filename: filename.into(),
            page_image: page_image.map(Arc::new),
            is_processing: false,
            tree: None,
        }
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_deref()
    }

    /// Mutable tree access, un-sharing it from snapshots first
    pub fn tree_mut(&mut self) -> Option<&mut Tree> {
        self.tree.as_mut().map(Arc::make_mut)
    }
}

/// Region drawn on the canvas for partial recognition
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Undo-tracked application state; also the shape of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub documents: Vec<OcrDocument>,
    pub current_document: usize,
    pub selected_id: Option<ItemId>,
    pub hovered_id: Option<ItemId>,
    pub is_drawing: bool,
    pub draw_rect: Rect,
    /// Last progress payload from the recognizer, stored verbatim
    pub last_recognize_update: Option<serde_json::Value>,
}

impl AppState {
    pub fn current_document(&self) -> Option<&OcrDocument> {
        self.documents.get(self.current_document)
    }

    pub fn current_document_mut(&mut self) -> EditorResult<&mut OcrDocument> {
        self.documents
            .get_mut(self.current_document)
            .ok_or(EditorError::NoCurrentDocument)
    }

    pub fn document(&self, id: DocumentId) -> Option<&OcrDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn document_mut(&mut self, id: DocumentId) -> EditorResult<&mut OcrDocument> {
        self.documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or(EditorError::DocumentNotFound(id))
    }
}

/// Separate counters for documents and tree items. Never rewound by undo.
#[derive(Debug, Clone, Default)]
pub(crate) struct Identifiers {
    pub documents: IdGenerator,
    pub items: IdGenerator,
}

/// Complete editor state: tracked fields plus history bookkeeping
#[derive(Debug, Clone)]
pub struct EditorState {
    pub app: AppState,
    pub(crate) history: UndoStack,
    pub(crate) ids: Identifiers,
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_options(&EditorOptions::default())
    }

    pub fn with_options(options: &EditorOptions) -> Self {
        Self {
            app: AppState::default(),
            history: UndoStack::with_max_levels(options.history_limit),
            ids: Identifiers::default(),
        }
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
