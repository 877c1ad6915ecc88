//! Build-time infrastructure for compiling JSON assets into binary blobs.
//!
//! Gated behind the `compile` feature. Provides shared utilities used by the
//! `implementors::compile` submodule to parse JSON tables and emit
//! postcard-serialized blob files consumed at runtime.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use crate::blob;

#[cfg(test)]
mod tests;

pub struct BuildCtx {
	pub manifest_dir: PathBuf,
	pub out_dir: PathBuf,
}

impl Default for BuildCtx {
	fn default() -> Self {
		Self::new()
	}
}

impl BuildCtx {
	/// Reads `CARGO_MANIFEST_DIR` and `OUT_DIR`; only meaningful inside a build script.
	pub fn new() -> Self {
		let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
		let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
		Self { manifest_dir, out_dir }
	}

	pub fn with_dirs(manifest_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
		Self {
			manifest_dir: manifest_dir.into(),
			out_dir: out_dir.into(),
		}
	}

	pub fn asset(&self, rel: &str) -> PathBuf {
		self.manifest_dir.join(rel)
	}

	pub fn rerun_if_changed(&self, path: &Path) {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	pub fn rerun_tree(&self, root: &Path) {
		println!("cargo:rerun-if-changed={}", root.display());
		for entry in WalkDir::new(root) {
			let entry = entry.unwrap_or_else(|e| panic!("failed to walk {}: {e}", root.display()));
			if entry.path().is_file() {
				self.rerun_if_changed(entry.path());
			}
		}
	}

	pub fn write_blob(&self, filename: &str, data: &[u8]) -> PathBuf {
		let path = self.out_dir.join(filename);
		let mut file = fs::File::create(&path).unwrap_or_else(|e| panic!("failed to create blob {}: {e}", path.display()));
		file.write_all(&blob::header()).expect("failed to write header");
		file.write_all(data).expect("failed to write data");
		path
	}
}

/// Reads a JSON file and deserializes it into `T`.
pub fn read_json_spec<T: DeserializeOwned>(path: &Path) -> T {
	let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
	serde_json::from_str(&content).unwrap_or_else(|e| panic!("failed to deserialize {}: {e}", path.display()))
}

/// Collects all files with the given extension under `root`, sorted by path for determinism.
pub fn collect_files_sorted(root: &Path, ext: &str) -> Vec<PathBuf> {
	let mut paths: Vec<PathBuf> = WalkDir::new(root)
		.into_iter()
		.filter_map(|e| e.ok())
		.filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|x| x == ext))
		.map(|e| e.into_path())
		.collect();
	paths.sort();
	paths
}

/// Validates no duplicate names among the items declared in `origin`.
pub fn validate_unique<'a>(names: impl IntoIterator<Item = &'a str>, domain: &str, origin: &Path) {
	let mut seen = HashSet::new();
	for name in names {
		if !seen.insert(name) {
			panic!("duplicate {domain} name: '{name}' in {}", origin.display());
		}
	}
}
