//! JSON → [`ImplementorsSpec`] compiler.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{ImplementorsSpec, TraitImplementorsSpec};
use crate::compile::*;

/// Blob file name written to `OUT_DIR`.
pub const BLOB_NAME: &str = "implementors.bin";

/// Asset tree holding one JSON table per trait.
pub const ASSET_ROOT: &str = "assets/implementors";

pub fn build(ctx: &BuildCtx) -> PathBuf {
	let root = ctx.asset(ASSET_ROOT);
	ctx.rerun_tree(&root);

	let spec = compile_tree(&root);

	let bin = postcard::to_stdvec(&spec).expect("failed to serialize implementors spec");
	ctx.write_blob(BLOB_NAME, &bin)
}

/// Reads and validates every `*.json` table under `root`.
pub fn compile_tree(root: &Path) -> ImplementorsSpec {
	let mut origins: HashMap<String, PathBuf> = HashMap::new();
	let mut traits = Vec::new();

	for path in collect_files_sorted(root, "json") {
		let table: TraitImplementorsSpec = read_json_spec(&path);
		validate_unique(
			table.libraries.iter().map(|l| l.name.as_str()),
			&format!("{} library", table.trait_path),
			&path,
		);
		if let Some(first) = origins.insert(table.trait_path.clone(), path.clone()) {
			panic!(
				"duplicate trait name: '{}' in {} (first declared in {})",
				table.trait_path,
				path.display(),
				first.display()
			);
		}
		traits.push(table);
	}

	ImplementorsSpec { traits }
}
