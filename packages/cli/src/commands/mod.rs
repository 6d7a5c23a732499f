pub mod compile;
pub mod decompile;
pub mod path;
pub mod roundtrip;

pub use compile::{compile, CompileArgs};
pub use decompile::{decompile, DecompileArgs};
pub use path::{get, remove, set, GetArgs, RemoveArgs, SetArgs};
pub use roundtrip::{roundtrip, RoundtripArgs};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `path` relative to the working directory unless already absolute
pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    PathBuf::from(cwd).join(path)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// JSON to `out`, or to stdout when no file is given
pub(crate) fn write_output<T: Serialize>(value: &T, out: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?;
            eprintln!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
