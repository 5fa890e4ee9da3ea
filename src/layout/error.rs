use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A node id was reached twice while walking the tree from the root,
    /// either through a cycle or through a child linked under two parents.
    #[error("cyclic structure: node `{id}` is reachable more than once")]
    CyclicStructure { id: String },
}
