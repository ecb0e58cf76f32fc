//! Depth-first, pre-order traversal over the flat item map.
//!
//! Every walk starts from a list of IDs (usually some item's `children`)
//! and visits each reachable item exactly once, parents before children,
//! siblings in `children` order. A missing ID fails the walk with
//! [`TreeError::NodeNotFound`]; it is never skipped.

use crate::error::{TreeError, TreeResult};
use crate::item::{ItemId, TreeItem, TreeItems};
use std::collections::HashSet;

/// Visit every item reachable from `start`
pub fn walk<'a, F>(start: &'a [ItemId], items: &'a TreeItems, mut visit: F) -> TreeResult<()>
where
    F: FnMut(&'a TreeItem),
{
    let mut seen = HashSet::new();
    walk_children(start, items, &mut seen, &mut visit)
}

fn walk_children<'a, F>(
    children: &'a [ItemId],
    items: &'a TreeItems,
    seen: &mut HashSet<&'a str>,
    visit: &mut F,
) -> TreeResult<()>
where
    F: FnMut(&'a TreeItem),
{
    for child_id in children {
        let item = items
            .get(child_id)
            .ok_or_else(|| TreeError::node_not_found(child_id.clone()))?;

        if !seen.insert(item.id.as_str()) {
            return Err(cycle_error(item));
        }

        visit(item);
        walk_children(&item.children, items, seen, visit)?;
    }

    Ok(())
}

/// Like [`walk`], with mutable access to each visited item.
///
/// The visitor must not edit `children`; the walk reads them after the
/// visit returns.
pub fn walk_mut<F>(start: &[ItemId], items: &mut TreeItems, mut visit: F) -> TreeResult<()>
where
    F: FnMut(&mut TreeItem),
{
    let mut seen = HashSet::new();
    walk_children_mut(start, items, &mut seen, &mut visit)
}

fn walk_children_mut<F>(
    children: &[ItemId],
    items: &mut TreeItems,
    seen: &mut HashSet<ItemId>,
    visit: &mut F,
) -> TreeResult<()>
where
    F: FnMut(&mut TreeItem),
{
    for child_id in children {
        let item = items
            .get_mut(child_id)
            .ok_or_else(|| TreeError::node_not_found(child_id.clone()))?;

        if !seen.insert(item.id.clone()) {
            return Err(cycle_error(item));
        }

        visit(item);
        let grandchildren = item.children.clone();
        walk_children_mut(&grandchildren, items, seen, visit)?;
    }

    Ok(())
}

/// IDs of every item reachable from `start`, in visit order
pub fn collect_ids(start: &[ItemId], items: &TreeItems) -> TreeResult<Vec<ItemId>> {
    let mut ids = Vec::new();
    walk(start, items, |item| ids.push(item.id.clone()))?;
    Ok(ids)
}

fn cycle_error(item: &TreeItem) -> TreeError {
    TreeError::integrity(
        item.parent_id.clone().unwrap_or_default(),
        item.id.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bbox, Position};
    use crate::item::{ElementData, ElementDetail, ElementType};

    fn item(id: &str, parent: Option<&str>, children: &[&str]) -> TreeItem {
        TreeItem {
            id: id.to_string(),
            item_type: ElementType::Block,
            parent_id: parent.map(str::to_string),
            data: ElementData {
                bbox: Bbox::default(),
                text: Some(id.to_string()),
                confidence: 0.0,
                detail: ElementDetail::Graphic,
            },
            parent_relative_offset: Position::ORIGIN,
            children: children.iter().map(|c| c.to_string()).collect(),
            is_expanded: false,
        }
    }

    fn sample() -> TreeItems {
        // a → (b → d, c)
        [
            item("a", None, &["b", "c"]),
            item("b", Some("a"), &["d"]),
            item("c", Some("a"), &[]),
            item("d", Some("b"), &[]),
        ]
        .into_iter()
        .map(|i| (i.id.clone(), i))
        .collect()
    }

    #[test]
    fn test_walk_is_preorder() {
        let items = sample();
        let start = vec!["a".to_string()];

        let ids = collect_ids(&start, &items).unwrap();
        assert_eq!(ids, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_walk_from_children_skips_start_item() {
        let items = sample();
        let start = items["a"].children.clone();

        let ids = collect_ids(&start, &items).unwrap();
        assert_eq!(ids, vec!["b", "d", "c"]);
    }

    #[test]
    fn test_walk_missing_node_fails() {
        let mut items = sample();
        items.remove("d");
        let start = vec!["a".to_string()];

        let result = collect_ids(&start, &items);
        assert_eq!(result, Err(TreeError::NodeNotFound("d".to_string())));
    }

    #[test]
    fn test_walk_detects_cycle() {
        let mut items = sample();
        items.get_mut("d").unwrap().children.push("b".to_string());
        let start = vec!["a".to_string()];

        assert!(matches!(
            collect_ids(&start, &items),
            Err(TreeError::IntegrityError { .. })
        ));
    }

    #[test]
    fn test_walk_mut_updates_every_item() {
        let mut items = sample();
        let start = vec!["b".to_string(), "c".to_string()];

        walk_mut(&start, &mut items, |item| item.is_expanded = true).unwrap();

        assert!(!items["a"].is_expanded);
        assert!(items["b"].is_expanded);
        assert!(items["c"].is_expanded);
        assert!(items["d"].is_expanded);
    }
}
