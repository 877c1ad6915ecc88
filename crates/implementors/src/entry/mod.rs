//! Implementor descriptors and the per-trait registry.

use std::fmt;

use impldex_implementors_spec::{ImplementorSpec, TraitImplementorsSpec};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{RegistryError, Result};


/// One rustdoc implementor descriptor.
///
/// Immutable once constructed. `text` is escaped HTML, `types` are the fully
/// qualified implementing types. `synthetic` is passed through untouched for
/// the viewer to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImplementorEntry {
	text: String,
	synthetic: bool,
	types: Vec<String>,
}

impl ImplementorEntry {
	pub fn new(text: impl Into<String>, synthetic: bool, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			text: text.into(),
			synthetic,
			types: types.into_iter().map(Into::into).collect(),
		}
	}

	#[inline]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[inline]
	pub fn is_synthetic(&self) -> bool {
		self.synthetic
	}

	#[inline]
	pub fn types(&self) -> &[String] {
		&self.types
	}

	/// Returns `true` if `type_path` is one of the implementing types.
	pub fn implements_for(&self, type_path: &str) -> bool {
		self.types.iter().any(|t| t == type_path)
	}
}

impl From<ImplementorSpec> for ImplementorEntry {
	fn from(spec: ImplementorSpec) -> Self {
		Self {
			text: spec.text,
			synthetic: spec.synthetic,
			types: spec.types,
		}
	}
}

/// Library name to ordered implementor list, for a single trait.
///
/// Built once and never mutated. Equality compares the trait path, the key
/// set and each library's sequence; the order of libraries is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImplementorRegistry {
	trait_path: String,
	#[serde(deserialize_with = "unique_libraries")]
	libraries: IndexMap<String, Vec<ImplementorEntry>>,
}

impl ImplementorRegistry {
	/// Builds a registry from `(library, entries)` pairs.
	///
	/// Fails with [`RegistryError::DuplicateLibrary`] if a library name repeats.
	pub fn new<L, E>(trait_path: impl Into<String>, libraries: L) -> Result<Self>
	where
		L: IntoIterator<Item = (String, E)>,
		E: IntoIterator<Item = ImplementorEntry>,
	{
		let trait_path = trait_path.into();
		let mut map = IndexMap::new();
		for (name, entries) in libraries {
			match map.entry(name) {
				Entry::Occupied(slot) => {
					return Err(RegistryError::DuplicateLibrary {
						trait_path,
						library: slot.key().clone(),
					});
				}
				Entry::Vacant(slot) => {
					slot.insert(entries.into_iter().collect());
				}
			}
		}
		Ok(Self { trait_path, libraries: map })
	}

	pub fn trait_path(&self) -> &str {
		&self.trait_path
	}

	/// Implementors declared by `library`, in declaration order.
	pub fn get(&self, library: &str) -> Option<&[ImplementorEntry]> {
		self.libraries.get(library).map(Vec::as_slice)
	}

	pub fn contains(&self, library: &str) -> bool {
		self.libraries.contains_key(library)
	}

	/// Library names in asset order.
	pub fn libraries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
		self.libraries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &[ImplementorEntry])> + ExactSizeIterator {
		self.libraries.iter().map(|(name, entries)| (name.as_str(), entries.as_slice()))
	}

	/// Number of libraries.
	pub fn len(&self) -> usize {
		self.libraries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.libraries.is_empty()
	}

	/// Total number of entries across all libraries.
	pub fn entry_count(&self) -> usize {
		self.libraries.values().map(Vec::len).sum()
	}

	/// Every `(library, entry)` whose implementing types include `type_path`.
	pub fn implementors_of<'a>(&'a self, type_path: &'a str) -> impl Iterator<Item = (&'a str, &'a ImplementorEntry)> + 'a {
		self.iter()
			.flat_map(|(library, entries)| entries.iter().map(move |entry| (library, entry)))
			.filter(move |(_, entry)| entry.implements_for(type_path))
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn from_json(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}
}

impl TryFrom<TraitImplementorsSpec> for ImplementorRegistry {
	type Error = RegistryError;

	fn try_from(spec: TraitImplementorsSpec) -> Result<Self> {
		Self::new(
			spec.trait_path,
			spec.libraries
				.into_iter()
				.map(|lib| (lib.name, lib.implementors.into_iter().map(ImplementorEntry::from))),
		)
	}
}

/// Deserializes the library map, rejecting repeated keys instead of keeping the last.
fn unique_libraries<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, Vec<ImplementorEntry>>, D::Error>
where
	D: Deserializer<'de>,
{
	struct UniqueLibraries;

	impl<'de> Visitor<'de> for UniqueLibraries {
		type Value = IndexMap<String, Vec<ImplementorEntry>>;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a map of library names to implementor lists")
		}

		fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
			let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
			while let Some((name, entries)) = access.next_entry::<String, Vec<ImplementorEntry>>()? {
				match map.entry(name) {
					Entry::Occupied(slot) => {
						return Err(A::Error::custom(format_args!("duplicate library '{}'", slot.key())));
					}
					Entry::Vacant(slot) => {
						slot.insert(entries);
					}
				}
			}
			Ok(map)
		}
	}

	deserializer.deserialize_map(UniqueLibraries)
}
