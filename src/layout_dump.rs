use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::document::LayoutMode;
use crate::layout::PositionMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub mode: LayoutMode,
    pub root_id: String,
    pub nodes: Vec<NodePositionDump>,
}

#[derive(Debug, Serialize)]
pub struct NodePositionDump {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

impl LayoutDump {
    pub fn from_positions(positions: &PositionMap, root_id: &str, mode: LayoutMode) -> Self {
        let nodes = positions
            .iter()
            .map(|(id, position)| NodePositionDump {
                id: id.clone(),
                x: position.x,
                y: position.y,
            })
            .collect();
        LayoutDump {
            mode,
            root_id: root_id.to_string(),
            nodes,
        }
    }
}

/// Writes the dump as pretty JSON to `path`, or to stdout when `path` is
/// `None`.
pub fn write_layout_dump(path: Option<&Path>, dump: &LayoutDump) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, dump)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, dump)?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
