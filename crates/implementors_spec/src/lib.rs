//! Declarative schema for rustdoc implementor tables.
//!
//! The types here describe the JSON assets under `assets/implementors/` and
//! the postcard payload embedded by `impldex-implementors`. The `compile`
//! feature adds the build-time compiler that turns the former into the latter.

pub mod blob;
#[cfg(feature = "compile")]
pub mod compile;
pub mod implementors;

#[cfg(all(test, not(feature = "compile")))]
use tempfile as _;

pub use implementors::{ImplementorSpec, ImplementorsSpec, LibrarySpec, TraitImplementorsSpec};
