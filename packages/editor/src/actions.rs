//! # Actions
//!
//! Closed set of state transitions accepted by [`reduce`](crate::reduce).
//! Serialized adjacently tagged: `{"type": "DeleteNode", "payload": "12"}`.

use crate::errors::{EditorError, EditorResult};
use crate::state::{DocumentId, PageImage, Rect};
use pagetree_tree::{ItemId, Page};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    AddDocument(AddDocumentPayload),
    RecognizeDocument(RecognizeDocumentPayload),
    SelectDocument(usize),
    ChangeSelected(Option<ItemId>),
    ChangeHovered(Option<ItemId>),
    ChangeIsProcessing(ChangeIsProcessingPayload),
    SetDocumentImage(SetDocumentImagePayload),
    ModifyNode(ModifyNodePayload),
    DeleteNode(ItemId),
    MoveNode(MoveNodePayload),
    UpdateTreeNodeRect(UpdateTreeNodeRectPayload),
    SetIsDrawing(bool),
    SetDrawRect(Rect),
    Undo,
    Redo,
    /// Recognizer progress, stored verbatim
    LogUpdate(Option<serde_json::Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDocumentPayload {
    pub filename: String,
    #[serde(default)]
    pub page_image: Option<PageImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeDocumentPayload {
    pub id: DocumentId,
    pub result: Page,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeIsProcessingPayload {
    pub id: DocumentId,
    pub is_processing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDocumentImagePayload {
    pub id: DocumentId,
    pub page_image: PageImage,
}

/// Partial node update; unknown fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyNodeChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyNodePayload {
    pub item_id: ItemId,
    pub changes: ModifyNodeChanges,
}

/// Where a dragged node comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSourcePosition {
    pub parent_id: ItemId,
    pub index: usize,
}

/// Where a dragged node lands; no index means "append"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDestinationPosition {
    pub parent_id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveNodePayload {
    pub source: TreeSourcePosition,
    pub destination: TreeDestinationPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTreeNodeRectPayload {
    pub node_id: ItemId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Action {
    /// Every tag accepted by [`Action::from_json`]
    pub const TAGS: &'static [&'static str] = &[
        "AddDocument",
        "RecognizeDocument",
        "SelectDocument",
        "ChangeSelected",
        "ChangeHovered",
        "ChangeIsProcessing",
        "SetDocumentImage",
        "ModifyNode",
        "DeleteNode",
        "MoveNode",
        "UpdateTreeNodeRect",
        "SetIsDrawing",
        "SetDrawRect",
        "Undo",
        "Redo",
        "LogUpdate",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::AddDocument(_) => "AddDocument",
            Action::RecognizeDocument(_) => "RecognizeDocument",
            Action::SelectDocument(_) => "SelectDocument",
            Action::ChangeSelected(_) => "ChangeSelected",
            Action::ChangeHovered(_) => "ChangeHovered",
            Action::ChangeIsProcessing(_) => "ChangeIsProcessing",
            Action::SetDocumentImage(_) => "SetDocumentImage",
            Action::ModifyNode(_) => "ModifyNode",
            Action::DeleteNode(_) => "DeleteNode",
            Action::MoveNode(_) => "MoveNode",
            Action::UpdateTreeNodeRect(_) => "UpdateTreeNodeRect",
            Action::SetIsDrawing(_) => "SetIsDrawing",
            Action::SetDrawRect(_) => "SetDrawRect",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::LogUpdate(_) => "LogUpdate",
        }
    }

    /// Whether applying this action records an undo snapshot.
    ///
    /// Hover, selection, processing flags, drawing state and recognizer
    /// progress are ephemeral UI state. Undo/redo move through history
    /// instead of adding to it.
    pub fn is_tracked(&self) -> bool {
        !matches!(
            self,
            Action::ChangeSelected(_)
                | Action::ChangeHovered(_)
                | Action::ChangeIsProcessing(_)
                | Action::SetIsDrawing(_)
                | Action::SetDrawRect(_)
                | Action::LogUpdate(_)
                | Action::Undo
                | Action::Redo
        )
    }

    /// Decode an action from its JSON form.
    ///
    /// A `type` outside [`Action::TAGS`] is [`EditorError::UnknownAction`];
    /// a bad payload for a known tag is [`EditorError::Decode`].
    pub fn from_json(source: &str) -> EditorResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|e| EditorError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> EditorResult<Self> {
        let tag = match value.get("type") {
            Some(serde_json::Value::String(tag)) => tag.clone(),
            Some(other) => return Err(EditorError::UnknownAction(other.to_string())),
            None => return Err(EditorError::UnknownAction(value.to_string())),
        };

        if !Self::TAGS.contains(&tag.as_str()) {
            return Err(EditorError::UnknownAction(tag));
        }

        serde_json::from_value(value).map_err(|e| EditorError::Decode(e.to_string()))
    }
}
