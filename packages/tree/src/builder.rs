//! # Tree Normalizer
//!
//! Converts a nested recognition result into a flat [`Tree`].
//!
//! Items are created depth-first, root first, so IDs increase in pre-order.
//! Each item's `parent_relative_offset` is its top-left minus the parent's
//! top-left, except for direct children of the page, whose offset is their
//! absolute top-left.

use crate::error::TreeResult;
use crate::geometry::{Bbox, Position};
use crate::id_generator::IdGenerator;
use crate::item::{ElementData, ElementType, ItemId, Tree, TreeItem, TreeItems};
use crate::ocr::{Block, Graphic, Line, Page, PageChild, Paragraph, Word};
use tracing::debug;

/// Build a normalized tree from one recognized page
pub fn build_tree(page: &Page, ids: &mut IdGenerator) -> TreeResult<Tree> {
    TreeBuilder::new(ids).build(page)
}

/// What a child needs to know about its parent while being created
struct ParentRef {
    id: ItemId,
    item_type: ElementType,
    bbox: Bbox,
}

impl ParentRef {
    fn of(item: &TreeItem) -> Self {
        Self {
            id: item.id.clone(),
            item_type: item.item_type,
            bbox: item.data.bbox,
        }
    }
}

pub struct TreeBuilder<'a> {
    ids: &'a mut IdGenerator,
    items: TreeItems,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(ids: &'a mut IdGenerator) -> Self {
        Self {
            ids,
            items: TreeItems::new(),
        }
    }

    pub fn build(mut self, page: &Page) -> TreeResult<Tree> {
        let mut root = self.create_item(ElementType::Page, ElementData::from(page), None);
        root.is_expanded = true;

        let parent = ParentRef::of(&root);
        root.children = page
            .children
            .iter()
            .map(|child| match child {
                PageChild::Block(block) => self.build_block(block, &parent),
                PageChild::Graphic(graphic) => Ok(self.build_graphic(graphic, &parent)),
            })
            .collect::<TreeResult<_>>()?;

        let root_id = self.insert(root);
        debug!(root_id = %root_id, items = self.items.len(), "Built tree");

        Ok(Tree {
            root_id,
            items: self.items,
        })
    }

    fn build_graphic(&mut self, graphic: &Graphic, page: &ParentRef) -> ItemId {
        let item = self.create_item(ElementType::Graphic, ElementData::from(graphic), Some(page));
        self.insert(item)
    }

    fn build_block(&mut self, block: &Block, page: &ParentRef) -> TreeResult<ItemId> {
        let mut item = self.create_item(ElementType::Block, ElementData::from(block), Some(page));
        item.expect_type(ElementType::Block)?;

        let parent = ParentRef::of(&item);
        item.children = block
            .children
            .iter()
            .map(|para| self.build_paragraph(para, &parent))
            .collect();

        Ok(self.insert(item))
    }

    fn build_paragraph(&mut self, para: &Paragraph, block: &ParentRef) -> ItemId {
        let mut item = self.create_item(ElementType::Paragraph, ElementData::from(para), Some(block));

        let parent = ParentRef::of(&item);
        item.children = para
            .children
            .iter()
            .map(|line| self.build_line(line, &parent))
            .collect();

        self.insert(item)
    }

    fn build_line(&mut self, line: &Line, para: &ParentRef) -> ItemId {
        let mut item = self.create_item(ElementType::Line, ElementData::from(line), Some(para));

        let parent = ParentRef::of(&item);
        item.children = line
            .children
            .iter()
            .map(|word| self.build_word(word, &parent))
            .collect();

        self.insert(item)
    }

    fn build_word(&mut self, word: &Word, line: &ParentRef) -> ItemId {
        let item = self.create_item(ElementType::Word, ElementData::from(word), Some(line));
        self.insert(item)
    }

    fn create_item(
        &mut self,
        item_type: ElementType,
        data: ElementData,
        parent: Option<&ParentRef>,
    ) -> TreeItem {
        let parent_relative_offset = match parent {
            None => Position::ORIGIN,
            Some(parent) if parent.item_type == ElementType::Page => data.bbox.top_left(),
            Some(parent) => parent.bbox.top_left().delta_to(data.bbox.top_left()),
        };

        TreeItem {
            id: self.ids.next_id().to_string(),
            item_type,
            parent_id: parent.map(|p| p.id.clone()),
            data,
            parent_relative_offset,
            children: Vec::new(),
            is_expanded: item_type.expanded_by_default(),
        }
    }

    fn insert(&mut self, item: TreeItem) -> ItemId {
        let id = item.id.clone();
        self.items.insert(id.clone(), item);
        id
    }
}
