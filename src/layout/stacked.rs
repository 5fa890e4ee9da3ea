use std::collections::{BTreeMap, HashMap};

use crate::config::StackedConfig;
use crate::document::NodeRecord;

use super::tree::{self, HierarchyView};
use super::types::{NodePosition, PositionMap};
use super::LayoutError;

/// Which way depth grows away from the root. Siblings stack on the
/// perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GrowthAxis {
    Right,
    Down,
}

/// One stacked layout policy: a growth axis plus its two gap constants.
/// The grow-right and grow-down modes are the same two-pass routine under
/// the two instances of this struct.
pub(super) struct StackedPolicy {
    axis: GrowthAxis,
    stacking_gap: f32,
    growth_gap: f32,
}

impl StackedPolicy {
    pub(super) fn grow_right(config: &StackedConfig) -> Self {
        Self {
            axis: GrowthAxis::Right,
            stacking_gap: config.stacking_gap,
            growth_gap: config.growth_gap,
        }
    }

    pub(super) fn grow_down(config: &StackedConfig) -> Self {
        Self {
            axis: GrowthAxis::Down,
            stacking_gap: config.stacking_gap,
            growth_gap: config.growth_gap,
        }
    }
}

fn stacking_size(record: &NodeRecord, axis: GrowthAxis) -> f32 {
    match axis {
        GrowthAxis::Right => record.height,
        GrowthAxis::Down => record.width,
    }
}

fn growth_size(record: &NodeRecord, axis: GrowthAxis) -> f32 {
    match axis {
        GrowthAxis::Right => record.width,
        GrowthAxis::Down => record.height,
    }
}

/// Post-order pass: the footprint a node's whole subtree occupies along the
/// stacking axis. An oversized parent wins over its children's combined
/// block, so adjacent subtrees never tuck under it.
fn subtree_extent(
    id: &str,
    view: &HierarchyView,
    nodes: &BTreeMap<String, NodeRecord>,
    memo: &mut HashMap<String, f32>,
    policy: &StackedPolicy,
) -> f32 {
    if let Some(value) = memo.get(id) {
        return *value;
    }
    let Some(record) = nodes.get(id) else {
        return 0.0;
    };
    let mut extent = stacking_size(record, policy.axis);
    let children = view.children(id);
    if !children.is_empty() {
        let mut total = 0.0;
        for child in children {
            total += subtree_extent(child, view, nodes, memo, policy);
        }
        if children.len() > 1 {
            total += policy.stacking_gap * (children.len() as f32 - 1.0);
        }
        extent = extent.max(total);
    }
    memo.insert(id.to_string(), extent);
    extent
}

/// Pre-order pass: centers each node, walking a cursor through the slots the
/// measurement pass reserved. The children's combined block is centered on
/// the parent's stacking coordinate; each child centers within its own slot.
fn assign_positions(
    id: &str,
    center: (f32, f32),
    view: &HierarchyView,
    nodes: &BTreeMap<String, NodeRecord>,
    extents: &HashMap<String, f32>,
    positions: &mut PositionMap,
    policy: &StackedPolicy,
) {
    let Some(record) = nodes.get(id) else {
        return;
    };
    positions.insert(
        id.to_string(),
        NodePosition {
            x: center.0,
            y: center.1,
        },
    );

    let children = view.children(id);
    if children.is_empty() {
        return;
    }
    let mut block = 0.0;
    for child in children {
        block += extents.get(child).copied().unwrap_or(0.0);
    }
    if children.len() > 1 {
        block += policy.stacking_gap * (children.len() as f32 - 1.0);
    }

    let (parent_stack, parent_growth) = match policy.axis {
        GrowthAxis::Right => (center.1, center.0),
        GrowthAxis::Down => (center.0, center.1),
    };
    let parent_size = growth_size(record, policy.axis);

    let mut cursor = parent_stack - block / 2.0;
    for child_id in children {
        let child_extent = extents.get(child_id).copied().unwrap_or(0.0);
        let child_size = nodes
            .get(child_id)
            .map(|child| growth_size(child, policy.axis))
            .unwrap_or(0.0);
        let child_stack = cursor + child_extent / 2.0;
        let child_growth =
            parent_growth + parent_size / 2.0 + policy.growth_gap + child_size / 2.0;
        let child_center = match policy.axis {
            GrowthAxis::Right => (child_growth, child_stack),
            GrowthAxis::Down => (child_stack, child_growth),
        };
        assign_positions(
            child_id,
            child_center,
            view,
            nodes,
            extents,
            positions,
            policy,
        );
        cursor += child_extent + policy.stacking_gap;
    }
}

pub(super) fn compute_stacked_layout(
    nodes: &BTreeMap<String, NodeRecord>,
    root_id: &str,
    policy: &StackedPolicy,
) -> Result<PositionMap, LayoutError> {
    let Some(view) = tree::build_hierarchy(nodes, root_id)? else {
        return Ok(PositionMap::new());
    };
    let mut extents: HashMap<String, f32> = HashMap::new();
    subtree_extent(root_id, &view, nodes, &mut extents, policy);
    let mut positions = PositionMap::new();
    assign_positions(
        root_id,
        (0.0, 0.0),
        &view,
        nodes,
        &extents,
        &mut positions,
        policy,
    );
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::document::{Document, LayoutMode};

    fn mindmap_pair() -> Document {
        let mut doc = Document::new("root", LayoutMode::GrowRight);
        doc.ensure_node("root", 180.0, 60.0);
        doc.ensure_node("a", 140.0, 50.0);
        doc.ensure_node("b", 140.0, 50.0);
        doc.attach_child("root", "a");
        doc.attach_child("root", "b");
        doc
    }

    #[test]
    fn grow_right_places_two_children() {
        let doc = mindmap_pair();
        let config = LayoutConfig::default();
        let positions = compute_stacked_layout(
            &doc.nodes,
            "root",
            &StackedPolicy::grow_right(&config.grow_right),
        )
        .unwrap();

        let root = positions["root"];
        let a = positions["a"];
        let b = positions["b"];
        assert_eq!((root.x, root.y), (0.0, 0.0));
        // children block = 50 + 50 + 20 = 120, centered on the root
        assert_eq!(a.y, -35.0);
        assert_eq!(b.y, 35.0);
        // growth offset = 180/2 + 80 + 140/2
        assert_eq!(a.x, 240.0);
        assert_eq!(b.x, 240.0);
    }

    #[test]
    fn grow_down_swaps_axes() {
        let doc = mindmap_pair();
        let config = LayoutConfig::default();
        let positions = compute_stacked_layout(
            &doc.nodes,
            "root",
            &StackedPolicy::grow_down(&config.grow_down),
        )
        .unwrap();

        let a = positions["a"];
        let b = positions["b"];
        // children block = 140 + 140 + 80 = 360, centered on the root
        assert_eq!(a.x, -110.0);
        assert_eq!(b.x, 110.0);
        // growth offset = 60/2 + 60 + 50/2
        assert_eq!(a.y, 115.0);
        assert_eq!(b.y, 115.0);
    }

    #[test]
    fn oversized_parent_widens_its_slot() {
        let mut doc = Document::new("root", LayoutMode::GrowRight);
        doc.ensure_node("root", 100.0, 40.0);
        // "wide" is taller than both of its children together
        doc.ensure_node("wide", 100.0, 300.0);
        doc.ensure_node("w1", 80.0, 30.0);
        doc.ensure_node("w2", 80.0, 30.0);
        doc.ensure_node("sibling", 80.0, 30.0);
        doc.attach_child("root", "wide");
        doc.attach_child("root", "sibling");
        doc.attach_child("wide", "w1");
        doc.attach_child("wide", "w2");

        let config = LayoutConfig::default();
        let mut extents: HashMap<String, f32> = HashMap::new();
        let view = tree::build_hierarchy(&doc.nodes, "root").unwrap().unwrap();
        let policy = StackedPolicy::grow_right(&config.grow_right);
        let extent = subtree_extent("wide", &view, &doc.nodes, &mut extents, &policy);
        assert_eq!(extent, 300.0);

        let positions =
            compute_stacked_layout(&doc.nodes, "root", &policy).unwrap();
        // sibling sits clear of the oversized subtree's slot
        let gap = positions["sibling"].y - positions["wide"].y;
        assert_eq!(gap, 300.0 / 2.0 + 20.0 + 30.0 / 2.0);
    }

    #[test]
    fn single_child_keeps_parent_line() {
        let mut doc = Document::new("root", LayoutMode::GrowRight);
        doc.ensure_node("root", 120.0, 40.0);
        doc.ensure_node("only", 90.0, 30.0);
        doc.attach_child("root", "only");
        let config = LayoutConfig::default();
        let positions = compute_stacked_layout(
            &doc.nodes,
            "root",
            &StackedPolicy::grow_right(&config.grow_right),
        )
        .unwrap();
        assert_eq!(positions["only"].y, 0.0);
        assert_eq!(positions["only"].x, 120.0 / 2.0 + 80.0 + 90.0 / 2.0);
    }

    #[test]
    fn zero_sized_nodes_contribute_nothing() {
        let mut doc = Document::new("root", LayoutMode::GrowRight);
        doc.ensure_node("root", 0.0, 0.0);
        doc.ensure_node("a", 0.0, 0.0);
        doc.ensure_node("b", 0.0, 0.0);
        doc.attach_child("root", "a");
        doc.attach_child("root", "b");
        let config = LayoutConfig::default();
        let positions = compute_stacked_layout(
            &doc.nodes,
            "root",
            &StackedPolicy::grow_right(&config.grow_right),
        )
        .unwrap();
        // block = 0 + 0 + 20; slots are the gap alone
        assert_eq!(positions["a"].y, -10.0);
        assert_eq!(positions["b"].y, 10.0);
        assert_eq!(positions["a"].x, 80.0);
    }
}
