pub mod cli;
pub mod commands;
pub mod config;

use std::ffi::OsString;
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli =
    cli::GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting sivec CLI"
  );
  debug!(config = ?cli.config, "config override");

  let loaded = config::load(
    cli.config.as_deref()
  )
  .context(
    "failed to load title \
     configuration"
  )?;

  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  commands::dispatch(
    &loaded,
    cli.command,
    &mut out
  )?;
  out
    .flush()
    .context("failed to flush stdout")?;

  info!("done");
  Ok(())
}
