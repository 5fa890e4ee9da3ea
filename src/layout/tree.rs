use std::collections::{BTreeMap, HashMap, HashSet};

use crate::document::NodeRecord;

use super::LayoutError;

/// Resolved parent→children adjacency for the nodes reachable from the root.
///
/// Rebuilt on every layout call and discarded afterwards. Child ids that do
/// not resolve to a record are dropped here, so the traversal passes never
/// see them.
#[derive(Debug)]
pub(super) struct HierarchyView {
    children: HashMap<String, Vec<String>>,
}

impl HierarchyView {
    pub(super) fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builds the hierarchy view. Returns `Ok(None)` when the root id is absent
/// (the caller then reports an empty layout). A node id reached twice means
/// the child links do not form a tree, which would otherwise send the
/// traversal passes into unbounded recursion.
pub(super) fn build_hierarchy(
    nodes: &BTreeMap<String, NodeRecord>,
    root_id: &str,
) -> Result<Option<HierarchyView>, LayoutError> {
    if !nodes.contains_key(root_id) {
        return Ok(None);
    }

    let mut children: HashMap<String, Vec<String>> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root_id.to_string());
    let mut stack = vec![root_id.to_string()];

    while let Some(id) = stack.pop() {
        let Some(record) = nodes.get(&id) else {
            continue;
        };
        let mut resolved = Vec::with_capacity(record.children_ids.len());
        for child_id in &record.children_ids {
            if !nodes.contains_key(child_id) {
                continue;
            }
            if !visited.insert(child_id.clone()) {
                return Err(LayoutError::CyclicStructure {
                    id: child_id.clone(),
                });
            }
            resolved.push(child_id.clone());
            stack.push(child_id.clone());
        }
        children.insert(id, resolved);
    }

    Ok(Some(HierarchyView { children }))
}
