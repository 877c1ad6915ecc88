//! Rustdoc implementor tables.
//!
//! Each table lists, per library, which types implement one trait (for
//! example `core::convert::From`) as pre-rendered HTML snippets. The tables
//! are authored as JSON assets, compiled into a postcard blob by the build
//! script and embedded here.
//!
//! # Modules
//!
//! - [`entry`] - [`ImplementorEntry`] and [`ImplementorRegistry`]
//! - [`db`] - process-wide catalog of every compiled table
//! - [`publish`] - hook-or-pending handoff to the documentation viewer
//! - [`loader`] - publishes compiled tables through a [`Rendezvous`]
//! - [`script`] - renders a table in rustdoc's `implementors/*.js` form

pub mod blob;
pub mod db;
pub mod entry;
mod error;
pub mod loader;
pub mod publish;
pub mod script;

pub use db::{ImplementorDb, get_db};
pub use entry::{ImplementorEntry, ImplementorRegistry};
pub use error::{RegistryError, Result};
pub use loader::{publish_all, publish_global, publish_trait};
pub use publish::{Publication, RegisterImplementors, Rendezvous, rendezvous};
pub use script::render_script;

/// Trait path of the table shipped with the crate.
pub const FROM_TRAIT: &str = "core::convert::From";
