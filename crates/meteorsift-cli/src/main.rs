//! Command-line front end for the block filter.
//!
//! Reads JavaScript source, resolves it for one architecture, and writes
//! the result to stdout, back in place, or into an output directory.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use meteorsift::{Arch, transform};

#[derive(Parser)]
#[command(
    name = "meteorsift",
    version,
    about = "Resolve Meteor client/server blocks for one architecture"
)]
struct Cli {
    /// Architecture to resolve for.
    #[arg(short, long, value_enum)]
    arch: ArchArg,

    /// Rewrite each input file in place.
    #[arg(long, conflicts_with = "out")]
    write: bool,

    /// Write each result into this directory by file name.
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Input files; stdin when none are given.
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ArchArg {
    /// Keep client blocks, drop server blocks.
    Client,
    /// Keep server blocks, drop client blocks.
    Server,
}

impl From<ArchArg> for Arch {
    fn from(arg: ArchArg) -> Self {
        match arg {
            ArchArg::Client => Arch::Client,
            ArchArg::Server => Arch::Server,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let arch = Arch::from(cli.arch);

    if cli.files.is_empty() {
        if cli.write {
            bail!("--write needs at least one input file");
        }
        if cli.out.is_some() {
            bail!("--out needs named input files");
        }
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("reading stdin")?;
        let resolved = transform(&source, arch);
        log::debug!(
            "stdin: {} chars in, {} chars out",
            source.chars().count(),
            resolved.chars().count()
        );
        return io::stdout()
            .write_all(resolved.as_bytes())
            .context("writing stdout");
    }

    if cli.files.len() > 1 && !cli.write && cli.out.is_none() {
        bail!("multiple input files need --write or --out");
    }

    if let Some(dir) = cli.out.as_deref() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for file in &cli.files {
        process_file(file, arch, cli.write, cli.out.as_deref())?;
    }
    Ok(())
}

fn process_file(path: &Path, arch: Arch, write: bool, out_dir: Option<&Path>) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let resolved = transform(&source, arch);
    log::debug!(
        "{}: {} chars in, {} chars out",
        path.display(),
        source.chars().count(),
        resolved.chars().count()
    );
    match destination(path, write, out_dir)? {
        Some(dest) => {
            fs::write(&dest, &resolved).with_context(|| format!("writing {}", dest.display()))
        }
        None => io::stdout()
            .write_all(resolved.as_bytes())
            .context("writing stdout"),
    }
}

/// Where a resolved file goes: back in place under `--write`, into the
/// `--out` directory by file name, otherwise to stdout (`None`).
fn destination(path: &Path, write: bool, out_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    if write {
        return Ok(Some(path.to_path_buf()));
    }
    match out_dir {
        Some(dir) => {
            let name = path
                .file_name()
                .with_context(|| format!("{} has no file name", path.display()))?;
            Ok(Some(dir.join(name)))
        }
        None => Ok(None),
    }
}
