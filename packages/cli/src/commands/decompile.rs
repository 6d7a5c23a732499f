use super::{read_json, resolve, write_output};
use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use flexcraft_compiler::decompile_with;
use flexcraft_schema::{IdGenerator, SequentialIds, TimestampIds};
use flexcraft_tree::Node;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DecompileArgs {
    /// Document JSON: a bubble, a carousel or a flex message
    pub input: PathBuf,

    /// Write panels to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Deterministic ids `<seed>-1`, `<seed>-2`, ... instead of clock-based ones
    #[arg(long)]
    pub seed: Option<String>,
}

pub fn decompile(args: DecompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let document: Node = read_json(&input)?;

    let mut ids: Box<dyn IdGenerator> = match args.seed {
        Some(seed) => Box::new(SequentialIds::new(seed)),
        None => Box::new(TimestampIds),
    };
    let panels = decompile_with(&document, ids.as_mut());

    if panels.is_empty() {
        bail!("{} contains no bubble to decompile", input.display());
    }

    let blocks: usize = panels.iter().map(|panel| panel.blocks.len()).sum();
    eprintln!(
        "{} Decompiled {} panels, {} blocks",
        "✓".green(),
        panels.len(),
        blocks
    );

    let out = args.out.map(|out| resolve(cwd, &out));
    write_output(&panels, out.as_deref(), config.pretty)
}
