//! Implementor database construction and global accessor.

use std::sync::{Arc, OnceLock};

use impldex_implementors_spec::ImplementorsSpec;
use indexmap::IndexMap;

use crate::blob::{IMPLEMENTORS_BLOB, load_blob};
use crate::{ImplementorRegistry, RegistryError, Result};

#[cfg(test)]
mod tests;

/// Every compiled implementor table, keyed by trait path.
#[derive(Debug, Default)]
pub struct ImplementorDb {
	tables: IndexMap<String, Arc<ImplementorRegistry>>,
}

impl ImplementorDb {
	pub fn from_spec(spec: ImplementorsSpec) -> Result<Self> {
		let tables = spec
			.traits
			.into_iter()
			.map(|table| Ok((table.trait_path.clone(), Arc::new(ImplementorRegistry::try_from(table)?))))
			.collect::<Result<_>>()?;
		Ok(Self { tables })
	}

	/// Decodes a blob produced by the asset compiler.
	pub fn from_blob(bytes: &[u8]) -> Result<Self> {
		let spec: ImplementorsSpec = load_blob(bytes, "implementors")?;
		Self::from_spec(spec)
	}

	pub fn get(&self, trait_path: &str) -> Option<Arc<ImplementorRegistry>> {
		self.tables.get(trait_path).cloned()
	}

	pub fn require(&self, trait_path: &str) -> Result<Arc<ImplementorRegistry>> {
		self.get(trait_path)
			.ok_or_else(|| RegistryError::UnknownTrait(trait_path.to_string()))
	}

	/// Trait paths in asset order.
	pub fn traits(&self) -> impl ExactSizeIterator<Item = &str> {
		self.tables.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<ImplementorRegistry>> {
		self.tables.values()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

static DB: OnceLock<ImplementorDb> = OnceLock::new();

pub fn get_db() -> &'static ImplementorDb {
	DB.get_or_init(|| match ImplementorDb::from_blob(IMPLEMENTORS_BLOB) {
		Ok(db) => {
			tracing::debug!(traits = db.len(), "implementor database loaded");
			db
		}
		Err(e) => {
			tracing::error!("Embedded implementor blob failed to load: {}", e);
			ImplementorDb::default()
		}
	})
}
