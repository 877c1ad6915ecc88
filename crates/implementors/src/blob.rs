//! Embedded asset blob handling.
//!
//! Validates the header written by the build script and decodes the postcard
//! payload that follows it.

use impldex_implementors_spec::blob::{HEADER_SIZE, MAGIC, SCHEMA_VERSION};
use serde::de::DeserializeOwned;

use crate::{RegistryError, Result};

/// Compiled implementor tables, produced by `build.rs`.
pub(crate) const IMPLEMENTORS_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/implementors.bin"));

/// Validates blob header and returns payload slice.
pub fn validate_blob<'a>(data: &'a [u8], domain: &'static str) -> Result<&'a [u8]> {
	let header_err = |reason| RegistryError::BlobHeader { domain, reason };

	if data.len() < HEADER_SIZE {
		return Err(header_err("truncated header"));
	}
	if &data[..MAGIC.len()] != MAGIC {
		return Err(header_err("bad magic"));
	}
	let mut version = [0u8; 4];
	version.copy_from_slice(&data[MAGIC.len()..HEADER_SIZE]);
	if u32::from_le_bytes(version) != SCHEMA_VERSION {
		return Err(header_err("schema version mismatch"));
	}
	Ok(&data[HEADER_SIZE..])
}

/// Validates and decodes a blob into `T`.
pub fn load_blob<T: DeserializeOwned>(data: &[u8], domain: &'static str) -> Result<T> {
	let payload = validate_blob(data, domain)?;
	postcard::from_bytes(payload).map_err(|source| RegistryError::Decode { domain, source })
}
