//! Shared fixture: one recognized page with two text blocks and a graphic.
//!
//! IDs are assigned in pre-order:
//!
//! ```text
//! 1 page
//! ├── 2 block ── 3 paragraph ── 4 line ── 5 "hello", 6 "world"
//! ├── 7 block ── 8 paragraph ── 9 line ── 10 "again"
//! └── 11 graphic
//! ```

#![allow(dead_code)]

use pagetree_editor::{
    Action, AddDocumentPayload, EditSession, RecognizeDocumentPayload, Tree,
};
use pagetree_tree::{Bbox, Block, ElementType, Graphic, Line, Page, PageChild, Paragraph, Position, Word};

fn word(text: &str, bbox: Bbox) -> Word {
    Word {
        bbox,
        text: text.to_string(),
        confidence: 92.0,
        ..Default::default()
    }
}

fn text_block(block: Bbox, para: Bbox, line: Bbox, words: Vec<Word>) -> PageChild {
    PageChild::Block(Block {
        bbox: block,
        block_type: "flowing_text".to_string(),
        children: vec![Paragraph {
            bbox: para,
            is_ltr: true,
            children: vec![Line {
                bbox: line,
                children: words,
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    })
}

pub fn sample_page() -> Page {
    Page {
        text: "hello world again".to_string(),
        confidence: 90.0,
        bbox: Bbox::new(0.0, 0.0, 1000.0, 1000.0),
        children: vec![
            text_block(
                Bbox::new(100.0, 100.0, 500.0, 300.0),
                Bbox::new(110.0, 110.0, 490.0, 200.0),
                Bbox::new(120.0, 120.0, 480.0, 150.0),
                vec![
                    word("hello", Bbox::new(120.0, 120.0, 200.0, 150.0)),
                    word("world", Bbox::new(210.0, 120.0, 300.0, 150.0)),
                ],
            ),
            text_block(
                Bbox::new(100.0, 400.0, 500.0, 600.0),
                Bbox::new(110.0, 410.0, 490.0, 500.0),
                Bbox::new(120.0, 420.0, 480.0, 450.0),
                vec![word("again", Bbox::new(120.0, 420.0, 200.0, 450.0))],
            ),
            PageChild::Graphic(Graphic {
                bbox: Bbox::new(600.0, 100.0, 900.0, 300.0),
                confidence: 0.0,
            }),
        ],
    }
}

pub fn add_document(filename: &str) -> Action {
    Action::AddDocument(AddDocumentPayload {
        filename: filename.to_string(),
        page_image: None,
    })
}

pub fn recognize(id: u64) -> Action {
    Action::RecognizeDocument(RecognizeDocumentPayload {
        id,
        result: sample_page(),
    })
}

/// Session holding one document (ID 1) with the sample page recognized
pub fn recognized_session() -> EditSession {
    let mut session = EditSession::new();
    session.dispatch(add_document("scan.png")).unwrap();
    session.dispatch(recognize(1)).unwrap();
    session
}

pub fn current_tree(session: &EditSession) -> &Tree {
    session.state().app.documents[0]
        .tree()
        .expect("document should be recognized")
}

/// Every item's offset equals its top-left minus its parent's top-left
/// (absolute for direct children of the page)
pub fn assert_offsets_consistent(tree: &Tree) {
    for item in tree.items.values() {
        let expected = match &item.parent_id {
            None => Position::ORIGIN,
            Some(parent_id) => {
                let parent = tree.get(parent_id).unwrap();
                if parent.item_type == ElementType::Page {
                    item.data.bbox.top_left()
                } else {
                    parent.data.bbox.top_left().delta_to(item.data.bbox.top_left())
                }
            }
        };
        assert_eq!(
            item.parent_relative_offset, expected,
            "offset mismatch for item {}",
            item.id
        );
    }
}
