use std::collections::BTreeMap;

use serde::Serialize;

/// Center coordinates computed for one node, relative to the root at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodePosition {
    pub x: f32,
    pub y: f32,
}

/// Layout output: one entry per positioned node, keyed by node id.
pub type PositionMap = BTreeMap<String, NodePosition>;
