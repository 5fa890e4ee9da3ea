#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod document;
pub mod layout;
pub mod layout_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, StackedConfig, load_config};
pub use document::{Document, LayoutMode, NodeRecord};
pub use layout::{LayoutError, NodePosition, PositionMap, compute_layout};
pub use layout_dump::{LayoutDump, write_layout_dump};
