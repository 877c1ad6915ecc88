//! Implementor table specification schema.
//!
//! One asset file describes one trait: the path of the trait and, per
//! library, the ordered list of implementor descriptors rustdoc emitted.

#[cfg(feature = "compile")]
pub mod compile;

use serde::{Deserialize, Serialize};

/// A single implementor descriptor.
///
/// Every field is required; a record missing any of them is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImplementorSpec {
	/// Pre-rendered HTML describing the impl header.
	pub text: String,
	/// Opaque classifier consumed by the documentation viewer.
	pub synthetic: bool,
	/// Fully qualified paths of the implementing types.
	pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibrarySpec {
	pub name: String,
	pub implementors: Vec<ImplementorSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraitImplementorsSpec {
	/// Rust path of the documented trait, e.g. `core::convert::From`.
	pub trait_path: String,
	#[serde(default)]
	pub libraries: Vec<LibrarySpec>,
}

/// Blob payload: every compiled trait table, sorted by asset path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementorsSpec {
	#[serde(default)]
	pub traits: Vec<TraitImplementorsSpec>,
}
