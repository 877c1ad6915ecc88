use clap::{Parser, Subcommand, ValueEnum};
use impldex_implementors::FROM_TRAIT;

#[derive(Parser, Debug)]
#[command(name = "impldex")]
#[command(about = "Inspect and export rustdoc implementor tables")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Trait whose implementor table to use
	#[arg(long = "trait", short = 't', value_name = "PATH", default_value = FROM_TRAIT, global = true)]
	pub trait_path: String,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List every compiled trait table
	Traits,
	/// List the libraries of a table with their entry counts
	Libraries,
	/// Print the implementors declared by one library
	Show {
		/// Library name, e.g. `bytes`
		library: String,
	},
	/// Write the table to stdout
	Export {
		/// Output format.
		#[arg(long, short, value_enum, default_value_t = ExportFormat::Json)]
		format: ExportFormat,
	},
	/// Publish the table through the registration rendezvous
	Publish {
		/// Attach a logging hook before publishing
		#[arg(long)]
		attach: bool,
	},
}

/// Export formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
	/// Pretty-printed JSON
	Json,
	/// Rustdoc `implementors/*.js` script
	Script,
}
