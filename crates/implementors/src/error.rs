use thiserror::Error;

/// Errors from loading, querying and exporting implementor tables.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// Blob magic, version or length mismatch.
	#[error("invalid {domain} blob: {reason}")]
	BlobHeader { domain: &'static str, reason: &'static str },

	/// Blob payload failed to decode.
	#[error("failed to decode {domain} blob: {source}")]
	Decode {
		domain: &'static str,
		#[source]
		source: postcard::Error,
	},

	#[error("no implementor table for trait '{0}'")]
	UnknownTrait(String),

	#[error("duplicate library '{library}' in {trait_path} implementor table")]
	DuplicateLibrary { trait_path: String, library: String },

	#[error("registration hook already installed")]
	HookAlreadyInstalled,

	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
