//! Rewrites sampler ports in `test-plans/*.jmx` for the split REST/GraphQL services.

use anyhow::{Context, Result};
use clap::Parser;
use jmx_ports::logging;
use jmx_ports::prelude::*;
use std::io::{self, Write};

/// The tool always works on `test-plans/*.jmx` below the working directory;
/// anything passed on the command line is accepted and ignored.
#[derive(Parser, Debug)]
#[command(name = "fix-ports")]
#[command(
    about = "Point REST samplers at port 3034 and GraphQL samplers at port 3035",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    logging::init();

    // Parsed for the debug log only; the run is the same whatever was passed.
    match Cli::try_parse() {
        Ok(cli) if !cli.args.is_empty() => {
            tracing::debug!(args = ?cli.args, "ignoring command line arguments");
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "ignoring unparsable command line"),
    }

    let config = PortConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    PortFixer::in_dir(".")
        .config(config.clone())
        .run(&mut out)
        .context("Failed to update test plans")?;

    writeln!(out, "\nPort configuration updated:")?;
    for line in config.summary_lines() {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
