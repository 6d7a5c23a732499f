mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    compile, decompile, get, remove, roundtrip, set, CompileArgs, DecompileArgs, GetArgs,
    RemoveArgs, RoundtripArgs, SetArgs,
};

/// Flexcraft CLI - convert and edit clinic rich messages
#[derive(Parser, Debug)]
#[command(name = "flexcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a bubble/carousel document into editor panels
    Decompile(DecompileArgs),

    /// Convert editor panels into a bubble/carousel document
    Compile(CompileArgs),

    /// Decompile then compile a document, normalizing it
    Roundtrip(RoundtripArgs),

    /// Print the value at a path
    Get(GetArgs),

    /// Replace the value at a path
    Set(SetArgs),

    /// Remove the value at a path
    Remove(RemoveArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Decompile(args) => decompile(args, &cwd),
                Command::Compile(args) => compile(args, &cwd),
                Command::Roundtrip(args) => roundtrip(args, &cwd),
                Command::Get(args) => get(args, &cwd),
                Command::Set(args) => set(args, &cwd),
                Command::Remove(args) => remove(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
