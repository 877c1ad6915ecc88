//! `impldex` binary.
//!
//! Reads the implementor tables embedded in `impldex-implementors`.

mod cli;
mod commands;

use std::io::Write;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	commands::run(&cli, impldex_implementors::get_db(), impldex_implementors::rendezvous(), &mut out)?;
	out.flush()?;

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("IMPLDEX_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("impldex_implementors=debug,impldex=debug,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
