use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Layout policy for a document, stored under the document kind it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Mind map: siblings stack vertically, depth grows to the right.
    #[serde(rename = "mindmap")]
    GrowRight,
    /// Organigram: siblings stack horizontally, depth grows downward.
    #[serde(rename = "organigram")]
    GrowDown,
    /// Concept map: positions are hand-placed and echoed back untouched.
    #[serde(rename = "conceptmap")]
    Manual,
}

impl LayoutMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mindmap" | "mind-map" => Some(Self::GrowRight),
            "organigram" | "org-chart" => Some(Self::GrowDown),
            "conceptmap" | "concept-map" => Some(Self::Manual),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::GrowRight => "mindmap",
            Self::GrowDown => "organigram",
            Self::Manual => "conceptmap",
        }
    }
}

/// One node of a tree document, as stored by the editor.
///
/// `x`/`y` are the current center coordinates; `width`/`height` the rendered
/// box size. The layout engine reads these and never writes them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Ordered child ids; order is the sibling stacking order.
    #[serde(default)]
    pub children_ids: Vec<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A tree document: a flat id-keyed node store plus the designated root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub root_id: String,
    pub mode: LayoutMode,
    pub nodes: BTreeMap<String, NodeRecord>,
}

impl Document {
    pub fn new(root_id: &str, mode: LayoutMode) -> Self {
        Self {
            root_id: root_id.to_string(),
            mode,
            nodes: BTreeMap::new(),
        }
    }

    pub fn ensure_node(&mut self, id: &str, width: f32, height: f32) {
        let entry = self.nodes.entry(id.to_string()).or_insert(NodeRecord {
            id: id.to_string(),
            parent_id: None,
            children_ids: Vec::new(),
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        entry.width = width;
        entry.height = height;
    }

    /// Links `child_id` under `parent_id`, appending to the stacking order.
    /// Re-attaching an already linked child is a no-op.
    pub fn attach_child(&mut self, parent_id: &str, child_id: &str) {
        if let Some(parent) = self.nodes.get_mut(parent_id)
            && !parent.children_ids.iter().any(|id| id == child_id)
        {
            parent.children_ids.push(child_id.to_string());
        }
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent_id = Some(parent_id.to_string());
        }
    }
}
