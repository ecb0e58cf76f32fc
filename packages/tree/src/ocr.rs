//! # Recognition Result Model
//!
//! Read-only input handed over by the recognizer once a page has been
//! processed. Nesting is fixed: page → block | graphic → paragraph → line →
//! word. Field names follow the recognizer's JSON output.

use crate::geometry::Bbox;
use serde::{Deserialize, Serialize};

/// One recognized page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub bbox: Bbox,
    #[serde(default)]
    pub children: Vec<PageChild>,
}

/// Direct child of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageChild {
    Block(Block),
    Graphic(Graphic),
}

impl PageChild {
    pub fn bbox(&self) -> Bbox {
        match self {
            PageChild::Block(block) => block.bbox,
            PageChild::Graphic(graphic) => graphic.bbox,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub bbox: Bbox,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    /// Layout classification ("flowing_text", "heading", "table", ...)
    #[serde(default, rename = "blocktype")]
    pub block_type: String,
    #[serde(default)]
    pub children: Vec<Paragraph>,
}

/// Non-text region (image, separator, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub bbox: Bbox,
    #[serde(default)]
    pub confidence: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub bbox: Bbox,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default = "default_is_ltr")]
    pub is_ltr: bool,
    #[serde(default)]
    pub children: Vec<Line>,
}

fn default_is_ltr() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub bbox: Bbox,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<Baseline>,
    #[serde(default)]
    pub children: Vec<Word>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub bbox: Bbox,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub bbox: Bbox,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizer_output() {
        let json = r#"{
            "text": "Hi",
            "confidence": 91.5,
            "children": [
                {
                    "type": "block",
                    "bbox": {"x0": 1, "y0": 2, "x1": 30, "y1": 12},
                    "text": "Hi",
                    "blocktype": "flowing_text",
                    "children": [{
                        "bbox": {"x0": 1, "y0": 2, "x1": 30, "y1": 12},
                        "text": "Hi",
                        "children": [{
                            "bbox": {"x0": 1, "y0": 2, "x1": 30, "y1": 12},
                            "text": "Hi",
                            "children": [{
                                "bbox": {"x0": 1, "y0": 2, "x1": 30, "y1": 12},
                                "text": "Hi"
                            }]
                        }]
                    }]
                },
                {
                    "type": "graphic",
                    "bbox": {"x0": 40, "y0": 40, "x1": 80, "y1": 90}
                }
            ]
        }"#;

        let page: Page = serde_json::from_str(json).unwrap();

        assert_eq!(page.children.len(), 2);
        match &page.children[0] {
            PageChild::Block(block) => {
                assert_eq!(block.block_type, "flowing_text");
                assert!(block.children[0].is_ltr);
                assert_eq!(block.children[0].children[0].children[0].text, "Hi");
            }
            other => panic!("Expected block, got {:?}", other),
        }
        assert_eq!(page.children[1].bbox(), Bbox::new(40.0, 40.0, 80.0, 90.0));
    }
}
