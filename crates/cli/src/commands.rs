//! Subcommand execution.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use impldex_implementors::{ImplementorDb, ImplementorRegistry, Publication, Rendezvous, publish_trait, render_script};
use tracing::info;

use crate::cli::{Cli, Command, ExportFormat};


pub fn run(cli: &Cli, db: &ImplementorDb, rendezvous: &Rendezvous, out: &mut impl Write) -> anyhow::Result<()> {
	match &cli.command {
		Command::Traits => list_traits(db, out),
		Command::Libraries => {
			let registry = table(db, &cli.trait_path)?;
			list_libraries(&registry, out)
		}
		Command::Show { library } => {
			let registry = table(db, &cli.trait_path)?;
			show_library(&registry, library, out)
		}
		Command::Export { format } => {
			let registry = table(db, &cli.trait_path)?;
			export(&registry, *format, out)
		}
		Command::Publish { attach } => publish(db, rendezvous, &cli.trait_path, *attach, out),
	}
}

fn table(db: &ImplementorDb, trait_path: &str) -> anyhow::Result<Arc<ImplementorRegistry>> {
	db.require(trait_path)
		.with_context(|| format!("{} trait table(s) available", db.len()))
}

fn list_traits(db: &ImplementorDb, out: &mut impl Write) -> anyhow::Result<()> {
	for registry in db.iter() {
		writeln!(
			out,
			"{}\t{} libraries\t{} implementors",
			registry.trait_path(),
			registry.len(),
			registry.entry_count()
		)?;
	}
	Ok(())
}

fn list_libraries(registry: &ImplementorRegistry, out: &mut impl Write) -> anyhow::Result<()> {
	for (library, entries) in registry.iter() {
		writeln!(out, "{library}\t{}", entries.len())?;
	}
	Ok(())
}

fn show_library(registry: &ImplementorRegistry, library: &str, out: &mut impl Write) -> anyhow::Result<()> {
	let entries = registry
		.get(library)
		.with_context(|| format!("library '{library}' has no implementors of {}", registry.trait_path()))?;

	for entry in entries {
		let marker = if entry.is_synthetic() { " (synthetic)" } else { "" };
		writeln!(out, "{}{marker}", entry.types().join(", "))?;
		writeln!(out, "    {}", plain_text(entry.text()))?;
	}
	Ok(())
}

fn export(registry: &ImplementorRegistry, format: ExportFormat, out: &mut impl Write) -> anyhow::Result<()> {
	match format {
		ExportFormat::Json => writeln!(out, "{}", registry.to_json_pretty()?)?,
		ExportFormat::Script => out.write_all(render_script(registry)?.as_bytes())?,
	}
	Ok(())
}

fn publish(db: &ImplementorDb, rendezvous: &Rendezvous, trait_path: &str, attach: bool, out: &mut impl Write) -> anyhow::Result<()> {
	if attach && !rendezvous.has_hook() {
		rendezvous.install_hook(|registry: Arc<ImplementorRegistry>| {
			info!(
				trait_path = registry.trait_path(),
				libraries = registry.len(),
				implementors = registry.entry_count(),
				"registered implementors"
			);
		})?;
	}

	let outcome = publish_trait(db, rendezvous, trait_path)?;
	match outcome {
		Publication::Delivered => writeln!(out, "{trait_path}: delivered to registration hook")?,
		Publication::Pending => writeln!(out, "{trait_path}: pending (no registration hook)")?,
	}
	Ok(())
}

/// Strips markup from a rustdoc HTML fragment and decodes the entities it uses.
pub(crate) fn plain_text(html: &str) -> String {
	let mut out = String::with_capacity(html.len());
	let mut in_tag = false;
	for c in html.chars() {
		match c {
			'<' => in_tag = true,
			'>' if in_tag => in_tag = false,
			c if !in_tag => out.push(c),
			_ => {}
		}
	}
	out.replace("&nbsp;", " ")
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&amp;", "&")
}
