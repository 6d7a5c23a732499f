use super::{read_json, resolve, write_output};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flexcraft_compiler::compile as compile_panels;
use flexcraft_schema::{FlexDocument, Panel};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Panels JSON, as written by `decompile`
    pub input: PathBuf,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let panels: Vec<Panel> = read_json(&resolve(cwd, &args.input))?;

    if panels.is_empty() {
        eprintln!("{}", "⚠️  No panels - emitting an empty bubble".yellow());
    }

    let document = compile_panels(&panels);
    let shape = match document {
        FlexDocument::Bubble(_) => "bubble",
        FlexDocument::Carousel(_) => "carousel",
    };
    eprintln!(
        "{} Compiled {} panels into a {} of {} bubbles",
        "✓".green(),
        panels.len(),
        shape,
        document.bubbles().len()
    );

    let out = args.out.map(|out| resolve(cwd, &out));
    write_output(&document, out.as_deref(), config.pretty)
}
