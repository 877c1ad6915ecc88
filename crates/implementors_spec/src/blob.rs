//! Precompiled asset blob header.

use std::mem::size_of;

/// Magic bytes identifying an impldex precompiled asset blob.
pub const MAGIC: &[u8; 8] = b"IMPLDEXB";

/// Schema version for blob format compatibility.
pub const SCHEMA_VERSION: u32 = 1;

/// Total header size in bytes (magic + version).
pub const HEADER_SIZE: usize = MAGIC.len() + size_of::<u32>();

/// Returns the header prefix every blob starts with.
pub fn header() -> [u8; HEADER_SIZE] {
	let mut out = [0u8; HEADER_SIZE];
	out[..MAGIC.len()].copy_from_slice(MAGIC);
	out[MAGIC.len()..].copy_from_slice(&SCHEMA_VERSION.to_le_bytes());
	out
}
