//! Command-line surface and mode orchestration.
//!
//! Three modes share one pipeline (resolve → parse → extract → validate):
//!
//! - no flags: print the resolved settings to stdout
//! - `--validate`: report pass/fail, never write anything
//! - `--output FILE`: write the resolved settings to FILE
//!
//! Emit and write are gated on hook validation even when the caller did not
//! ask for it: settings that reference absent hook scripts must never leave
//! this tool. Unrecognized flags are rejected by clap with a usage message
//! before `run` is entered.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::hooks;
use crate::resolver::{Resolver, DEFAULT_TEMPLATE};

/// Resolve the Claude Code settings template and verify its hook paths.
#[derive(Debug, Parser)]
#[command(name = "claude-setup", version)]
pub struct Cli {
    /// Write the resolved settings to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Check hook paths and report, without writing anything
    #[arg(long)]
    pub validate: bool,

    /// Template to resolve (default: settings.template.json in the installation root)
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl Cli {
    /// Build the resolver from the flags plus the startup-derived root.
    pub fn resolver(&self, install_root: PathBuf) -> Resolver {
        let template_path = self
            .template
            .clone()
            .unwrap_or_else(|| install_root.join(DEFAULT_TEMPLATE));
        Resolver::new(template_path, install_root)
    }
}

/// Run one invocation to completion. Every error is terminal: no partial
/// output, no retries.
pub fn run(cli: &Cli, install_root: PathBuf) -> Result<()> {
    let resolver = cli.resolver(install_root);
    let doc = resolver.resolve()?;

    let commands = doc.hook_commands();
    hooks::validate_paths(&commands)?;

    if cli.validate {
        println!("All hook paths valid ({} checked).", commands.len());
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, doc.text.as_bytes())?;
            eprintln!("Wrote resolved settings to {}", path.display());
        }
        None => print!("{}", doc.text),
    }

    Ok(())
}
