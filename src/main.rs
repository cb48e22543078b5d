use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use claude_setup::cli::{self, Cli};

/// Installation root for this invocation: explicit `CLAUDE_CONFIG_DIR`
/// override, else the directory the binary runs from.
fn install_root() -> anyhow::Result<PathBuf> {
    if let Some(dir) = env::var_os("CLAUDE_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let exe = env::current_exe().context("cannot locate the running executable")?;
    let root = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(root.to_path_buf())
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let root = install_root()?;
    cli::run(&cli, root)?;
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
