//! # Page Tree
//!
//! Normalized, flat representation of a recognized page.
//!
//! ```text
//! Page ─┬─ Block ── Paragraph ── Line ── Word
//!       └─ Graphic
//! ```
//!
//! The recognizer's nested [`Page`] result is turned into a [`Tree`]: one map
//! from item ID to [`TreeItem`], plus the root ID. Items reference their
//! parent and children by ID only.
//!
//! ```rust,ignore
//! use pagetree_tree::{build_tree, IdGenerator};
//!
//! let mut ids = IdGenerator::new();
//! let tree = build_tree(&page, &mut ids)?;
//! tree.check_integrity()?;
//! ```

pub mod builder;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod item;
pub mod ocr;
pub mod walker;

pub use builder::{build_tree, TreeBuilder};
pub use error::{TreeError, TreeResult};
pub use geometry::{Bbox, Position};
pub use id_generator::IdGenerator;
pub use item::{ElementData, ElementDetail, ElementType, ItemId, Tree, TreeItem, TreeItems};
pub use ocr::{Baseline, Block, Graphic, Line, Page, PageChild, Paragraph, Symbol, Word};
pub use walker::{collect_ids, walk, walk_mut};
