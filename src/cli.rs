use crate::config::load_config;
use crate::document::{Document, LayoutMode};
use crate::layout::compute_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "ramify",
    version,
    about = "Tree layout for mind map, organigram and concept map documents"
)]
pub struct Args {
    /// Input document (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for computed positions. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Layout mode, overriding the mode stored in the document
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Config JSON/JSON5 file overriding the layout gap constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Mindmap,
    Organigram,
    Conceptmap,
}

impl From<ModeArg> for LayoutMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Mindmap => LayoutMode::GrowRight,
            ModeArg::Organigram => LayoutMode::GrowDown,
            ModeArg::Conceptmap => LayoutMode::Manual,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let document: Document =
        serde_json::from_str(&input).context("failed to parse document JSON")?;

    let mode = args.mode.map(LayoutMode::from).unwrap_or(document.mode);
    let positions = compute_layout(&document.nodes, &document.root_id, mode, &config.layout)?;

    let dump = LayoutDump::from_positions(&positions, &document.root_id, mode);
    write_layout_dump(args.output.as_deref(), &dump)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(content);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
