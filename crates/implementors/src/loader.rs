//! Publishes compiled implementor tables.

use crate::{ImplementorDb, Publication, Rendezvous, Result, get_db, rendezvous};

/// Looks up the table for `trait_path` and publishes it.
///
/// Fails only when no table was compiled for `trait_path`.
pub fn publish_trait(db: &ImplementorDb, rendezvous: &Rendezvous, trait_path: &str) -> Result<Publication> {
	let registry = db.require(trait_path)?;
	Ok(rendezvous.publish(registry))
}

/// Publishes the embedded table for `trait_path` through the process-wide rendezvous.
pub fn publish_global(trait_path: &str) -> Result<Publication> {
	publish_trait(get_db(), rendezvous(), trait_path)
}

/// Publishes every table in asset order.
///
/// Without a hook only the last table remains pending.
pub fn publish_all(db: &ImplementorDb, rendezvous: &Rendezvous) -> Vec<(String, Publication)> {
	db.iter()
		.map(|registry| (registry.trait_path().to_string(), rendezvous.publish(registry.clone())))
		.collect()
}
