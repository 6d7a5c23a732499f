use super::{resolve, write_output};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flexcraft_editor::EditSession;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RoundtripArgs {
    /// Document JSON to normalize
    pub input: PathBuf,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the decompiled panels instead of the recompiled document
    #[arg(long)]
    pub panels: bool,
}

pub fn roundtrip(args: RoundtripArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut session = EditSession::new(config.editor_options());
    session.load_file(resolve(cwd, &args.input))?;

    eprintln!(
        "{} Normalized {} panels",
        "✓".green(),
        session.panels().len()
    );

    let out = args.out.map(|out| resolve(cwd, &out));
    if args.panels {
        write_output(&session.panels(), out.as_deref(), config.pretty)
    } else {
        write_output(&session.to_document(), out.as_deref(), config.pretty)
    }
}
