use impldex_implementors_spec::blob::header;

use super::*;
use crate::FROM_TRAIT;

#[test]
fn global_db_holds_from_table() {
	let db = get_db();
	assert!(db.traits().any(|t| t == FROM_TRAIT));

	let from = db.require(FROM_TRAIT).unwrap();
	assert_eq!(from.trait_path(), FROM_TRAIT);
	assert!(!from.is_empty());
}

#[test]
fn global_db_hands_out_shared_tables() {
	let a = get_db().get(FROM_TRAIT).unwrap();
	let b = get_db().get(FROM_TRAIT).unwrap();
	assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn require_reports_unknown_trait() {
	let err = get_db().require("core::ops::Drop").unwrap_err();
	assert!(matches!(err, RegistryError::UnknownTrait(ref t) if t == "core::ops::Drop"));
}

#[test]
fn from_blob_round_trips_spec() {
	let spec: ImplementorsSpec = serde_json::from_str(
		r#"{
			"traits": [
				{ "trait_path": "core::default::Default", "libraries": [] },
				{
					"trait_path": "core::convert::From",
					"libraries": [{ "name": "either", "implementors": [] }]
				}
			]
		}"#,
	)
	.unwrap();

	let mut bytes = header().to_vec();
	bytes.extend(postcard::to_stdvec(&spec).unwrap());

	let db = ImplementorDb::from_blob(&bytes).unwrap();
	assert_eq!(db.traits().collect::<Vec<_>>(), ["core::default::Default", "core::convert::From"]);
	assert!(db.get("core::default::Default").unwrap().is_empty());
	assert_eq!(db.get("core::convert::From").unwrap().get("either"), Some(&[][..]));
}

#[test]
fn from_blob_propagates_header_errors() {
	assert!(matches!(ImplementorDb::from_blob(b"nope"), Err(RegistryError::BlobHeader { .. })));
}
