use std::fs;

use super::*;
use crate::implementors::compile::compile_tree;

const FROM_TABLE: &str = r#"{
	"trait_path": "core::convert::From",
	"libraries": [
		{
			"name": "either",
			"implementors": [
				{ "text": "impl From for Either", "synthetic": false, "types": ["either::Either"] }
			]
		}
	]
}"#;

const DEFAULT_TABLE: &str = r#"{
	"trait_path": "core::default::Default",
	"libraries": []
}"#;

fn write(root: &Path, rel: &str, content: &str) {
	let path = root.join(rel);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

#[test]
fn collect_files_sorted_filters_extension_and_sorts() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "core/default/trait.Default.json", DEFAULT_TABLE);
	write(dir.path(), "core/convert/trait.From.json", FROM_TABLE);
	write(dir.path(), "core/convert/README.md", "ignored");

	let files = collect_files_sorted(dir.path(), "json");
	let rel: Vec<_> = files.iter().map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf()).collect();
	assert_eq!(
		rel,
		vec![PathBuf::from("core/convert/trait.From.json"), PathBuf::from("core/default/trait.Default.json")]
	);
}

#[test]
fn compile_tree_reads_tables_in_path_order() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "core/default/trait.Default.json", DEFAULT_TABLE);
	write(dir.path(), "core/convert/trait.From.json", FROM_TABLE);

	let spec = compile_tree(dir.path());
	let paths: Vec<_> = spec.traits.iter().map(|t| t.trait_path.as_str()).collect();
	assert_eq!(paths, ["core::convert::From", "core::default::Default"]);
	assert_eq!(spec.traits[0].libraries[0].implementors[0].types, ["either::Either"]);
}

#[test]
fn write_blob_prefixes_header() {
	let dir = tempfile::tempdir().unwrap();
	let ctx = BuildCtx::with_dirs(dir.path(), dir.path());
	let path = ctx.write_blob("t.bin", b"payload");

	let bytes = fs::read(path).unwrap();
	assert_eq!(&bytes[..8], crate::blob::MAGIC);
	assert_eq!(&bytes[crate::blob::HEADER_SIZE..], b"payload");
}

#[test]
#[should_panic(expected = "duplicate core::convert::From library name: 'either'")]
fn compile_tree_rejects_duplicate_library() {
	let dir = tempfile::tempdir().unwrap();
	let table = r#"{
		"trait_path": "core::convert::From",
		"libraries": [
			{ "name": "either", "implementors": [] },
			{ "name": "either", "implementors": [] }
		]
	}"#;
	write(dir.path(), "trait.From.json", table);
	compile_tree(dir.path());
}

#[test]
#[should_panic(expected = "/core/convert/trait.From.json")]
fn duplicate_library_panic_names_asset() {
	let dir = tempfile::tempdir().unwrap();
	let table = r#"{
		"trait_path": "core::convert::From",
		"libraries": [
			{ "name": "either", "implementors": [] },
			{ "name": "either", "implementors": [] }
		]
	}"#;
	write(dir.path(), "core/convert/trait.From.json", table);
	compile_tree(dir.path());
}

#[test]
#[should_panic(expected = "b/trait.From.json (first declared in ")]
fn duplicate_trait_panic_names_both_assets() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "a/trait.From.json", FROM_TABLE);
	write(dir.path(), "b/trait.From.json", FROM_TABLE);
	compile_tree(dir.path());
}

#[test]
#[should_panic(expected = "duplicate trait name: 'core::convert::From'")]
fn compile_tree_rejects_duplicate_trait() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "a/trait.From.json", FROM_TABLE);
	write(dir.path(), "b/trait.From.json", FROM_TABLE);
	compile_tree(dir.path());
}

#[test]
#[should_panic(expected = "failed to deserialize")]
fn read_json_spec_requires_every_entry_field() {
	let dir = tempfile::tempdir().unwrap();
	let table = r#"{
		"trait_path": "core::convert::From",
		"libraries": [
			{ "name": "either", "implementors": [{ "text": "impl", "types": [] }] }
		]
	}"#;
	write(dir.path(), "trait.From.json", table);
	compile_tree(dir.path());
}
