mod error;
mod stacked;
mod tree;
pub(crate) mod types;

pub use error::LayoutError;
pub use types::{NodePosition, PositionMap};

use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::document::{LayoutMode, NodeRecord};

use stacked::StackedPolicy;

/// Computes a center position for every node reachable from `root_id`.
///
/// A missing root yields an empty map rather than an error; child ids that
/// resolve to no record are skipped. The only failure mode is child links
/// that do not form a tree.
pub fn compute_layout(
    nodes: &BTreeMap<String, NodeRecord>,
    root_id: &str,
    mode: LayoutMode,
    config: &LayoutConfig,
) -> Result<PositionMap, LayoutError> {
    match mode {
        LayoutMode::GrowRight => stacked::compute_stacked_layout(
            nodes,
            root_id,
            &StackedPolicy::grow_right(&config.grow_right),
        ),
        LayoutMode::GrowDown => stacked::compute_stacked_layout(
            nodes,
            root_id,
            &StackedPolicy::grow_down(&config.grow_down),
        ),
        LayoutMode::Manual => Ok(compute_manual_layout(nodes, root_id)),
    }
}

/// Concept maps are hand-placed and may carry non-tree links, so automatic
/// layout would be destructive: stored coordinates are echoed back for every
/// node, with no tree built at all.
fn compute_manual_layout(nodes: &BTreeMap<String, NodeRecord>, root_id: &str) -> PositionMap {
    let mut positions = PositionMap::new();
    if !nodes.contains_key(root_id) {
        return positions;
    }
    for (id, record) in nodes {
        positions.insert(
            id.clone(),
            NodePosition {
                x: record.x,
                y: record.y,
            },
        );
    }
    positions
}
