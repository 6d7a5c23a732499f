use super::{read_json, resolve, write_output};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use flexcraft_editor::RawDocument;
use flexcraft_tree::Node;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Document JSON
    pub input: PathBuf,

    /// Dot-delimited path, e.g. `contents.0.body.contents.1.text`
    pub path: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Document JSON
    pub input: PathBuf,

    /// Dot-delimited path; missing containers are created
    pub path: String,

    /// New value as JSON; anything that is not valid JSON is taken as a string
    pub value: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Document JSON
    pub input: PathBuf,

    /// Dot-delimited path of the field or element to remove
    pub path: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Write the document to a file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    pub out: Option<PathBuf>,

    /// Overwrite the input file
    #[arg(short, long)]
    pub in_place: bool,
}

impl OutputArgs {
    fn target(&self, cwd: &str, input: &Path) -> Option<PathBuf> {
        if self.in_place {
            Some(input.to_path_buf())
        } else {
            self.out.as_ref().map(|out| resolve(cwd, out))
        }
    }
}

pub fn get(args: GetArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = RawDocument::new(read_json(&resolve(cwd, &args.input))?, 0);

    let value = document
        .get(&args.path)
        .ok_or_else(|| anyhow!("No value at `{}`", args.path))?;

    write_output(value, None, config.pretty)
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let mut document = RawDocument::new(read_json(&input)?, config.history_limit);

    let value = serde_json::from_str::<Value>(&args.value)
        .unwrap_or_else(|_| Value::String(args.value.clone()));

    report(document.set(&args.path, Node::from(value)), "Set", &args.path);
    write_output(document.root(), args.output.target(cwd, &input).as_deref(), config.pretty)
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let mut document = RawDocument::new(read_json(&input)?, config.history_limit);

    report(document.remove(&args.path), "Removed", &args.path);
    write_output(document.root(), args.output.target(cwd, &input).as_deref(), config.pretty)
}

fn report(changed: bool, verb: &str, path: &str) {
    if changed {
        eprintln!("{} {} `{}`", "✓".green(), verb, path);
    } else {
        eprintln!(
            "{} `{}` does not resolve - document unchanged",
            "⚠️".yellow(),
            path
        );
    }
}
