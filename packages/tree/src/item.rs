//! # Normalized Tree Model
//!
//! A recognized page stored as a flat map of [`TreeItem`]s keyed by ID.
//! Parent/child links are IDs in both directions and must always agree.

use crate::error::{TreeError, TreeResult};
use crate::geometry::{Bbox, Position};
use crate::ocr::{Baseline, Block, Graphic, Line, Page, Paragraph, Symbol, Word};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type ItemId = String;

pub type TreeItems = HashMap<ItemId, TreeItem>;

/// Closed set of node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Page,
    Block,
    Graphic,
    Paragraph,
    Line,
    Word,
    Symbol,
}

impl ElementType {
    /// Whether items of this type may carry children
    pub fn can_host_children(self) -> bool {
        matches!(
            self,
            ElementType::Page | ElementType::Block | ElementType::Paragraph | ElementType::Line
        )
    }

    /// Initial `is_expanded` for freshly built items
    pub fn expanded_by_default(self) -> bool {
        matches!(self, ElementType::Block | ElementType::Paragraph)
    }
}

/// Type-specific fields carried over from the recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementDetail {
    Page,
    Block {
        #[serde(rename = "blocktype")]
        block_type: String,
    },
    Graphic,
    Paragraph {
        is_ltr: bool,
    },
    Line {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        baseline: Option<Baseline>,
    },
    Word {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f32>,
        #[serde(default)]
        symbols: Vec<Symbol>,
    },
    Symbol,
}

/// OCR payload owned by a tree item (the element minus its children)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub bbox: Bbox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub confidence: f32,
    pub detail: ElementDetail,
}

impl ElementData {
    /// Replace the recognized text. Returns false for elements without text.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.text {
            Some(current) => {
                *current = text.into();
                true
            }
            None => false,
        }
    }
}

impl From<&Page> for ElementData {
    fn from(page: &Page) -> Self {
        Self {
            bbox: page.bbox,
            text: Some(page.text.clone()),
            confidence: page.confidence,
            detail: ElementDetail::Page,
        }
    }
}

impl From<&Block> for ElementData {
    fn from(block: &Block) -> Self {
        Self {
            bbox: block.bbox,
            text: Some(block.text.clone()),
            confidence: block.confidence,
            detail: ElementDetail::Block {
                block_type: block.block_type.clone(),
            },
        }
    }
}

impl From<&Graphic> for ElementData {
    fn from(graphic: &Graphic) -> Self {
        Self {
            bbox: graphic.bbox,
            text: None,
            confidence: graphic.confidence,
            detail: ElementDetail::Graphic,
        }
    }
}

impl From<&Paragraph> for ElementData {
    fn from(para: &Paragraph) -> Self {
        Self {
            bbox: para.bbox,
            text: Some(para.text.clone()),
            confidence: para.confidence,
            detail: ElementDetail::Paragraph { is_ltr: para.is_ltr },
        }
    }
}

impl From<&Line> for ElementData {
    fn from(line: &Line) -> Self {
        Self {
            bbox: line.bbox,
            text: Some(line.text.clone()),
            confidence: line.confidence,
            detail: ElementDetail::Line {
                baseline: line.baseline,
            },
        }
    }
}

impl From<&Word> for ElementData {
    fn from(word: &Word) -> Self {
        Self {
            bbox: word.bbox,
            text: Some(word.text.clone()),
            confidence: word.confidence,
            detail: ElementDetail::Word {
                font_size: word.font_size,
                symbols: word.symbols.clone(),
            },
        }
    }
}

/// One node of the normalized tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub id: ItemId,

    #[serde(rename = "type")]
    pub item_type: ElementType,

    /// Owning node; `None` only for the page root
    pub parent_id: Option<ItemId>,

    pub data: ElementData,

    /// Top-left relative to the parent's top-left (absolute for page children)
    pub parent_relative_offset: Position,

    /// Child IDs in visual order
    pub children: Vec<ItemId>,

    pub is_expanded: bool,
}

impl TreeItem {
    /// Fail unless this item has the expected type
    pub fn expect_type(&self, expected: ElementType) -> TreeResult<()> {
        if self.item_type == expected {
            Ok(())
        } else {
            Err(TreeError::InvariantViolation {
                id: self.id.clone(),
                expected,
                actual: self.item_type,
            })
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Flat tree: root reference plus ID → item map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub root_id: ItemId,
    pub items: TreeItems,
}

impl Tree {
    pub fn root(&self) -> TreeResult<&TreeItem> {
        self.get(&self.root_id)
    }

    pub fn get(&self, id: &str) -> TreeResult<&TreeItem> {
        self.items
            .get(id)
            .ok_or_else(|| TreeError::node_not_found(id))
    }

    pub fn get_mut(&mut self, id: &str) -> TreeResult<&mut TreeItem> {
        self.items
            .get_mut(id)
            .ok_or_else(|| TreeError::node_not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parent item of `id`, or `None` for the root
    pub fn parent_of(&self, id: &str) -> TreeResult<Option<&TreeItem>> {
        match &self.get(id)?.parent_id {
            Some(parent_id) => self.get(parent_id).map(Some),
            None => Ok(None),
        }
    }

    /// Verify that every item is reachable exactly once from the root and
    /// that parent/child links agree in both directions.
    pub fn check_integrity(&self) -> TreeResult<()> {
        let root = self.root()?;
        if let Some(parent_id) = &root.parent_id {
            return Err(TreeError::integrity(parent_id.clone(), root.id.clone()));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&TreeItem> = vec![root];
        seen.insert(root.id.as_str());

        while let Some(item) = stack.pop() {
            for child_id in &item.children {
                let child = self.get(child_id)?;
                if child.parent_id.as_deref() != Some(item.id.as_str()) {
                    return Err(TreeError::integrity(item.id.clone(), child.id.clone()));
                }
                if !seen.insert(child.id.as_str()) {
                    // Listed under two parents, or a cycle
                    return Err(TreeError::integrity(item.id.clone(), child.id.clone()));
                }
                stack.push(child);
            }
        }

        for (id, item) in &self.items {
            if !seen.contains(id.as_str()) {
                let parent = item.parent_id.clone().unwrap_or_else(|| self.root_id.clone());
                return Err(TreeError::integrity(parent, id.clone()));
            }
        }

        Ok(())
    }
}
