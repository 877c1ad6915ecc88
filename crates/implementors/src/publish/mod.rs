//! Hook-or-pending handoff of implementor tables.
//!
//! The documentation viewer owns a registration hook that may be attached
//! before or after a table is published. [`Rendezvous`] is the single-slot
//! meeting point: publishing either calls the hook right away or parks the
//! table in the pending slot until the viewer collects it.

use std::fmt;
use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::Mutex;

use crate::{ImplementorRegistry, RegistryError, Result};


/// Consumer side of the handoff.
pub trait RegisterImplementors: Send + Sync {
	fn register_implementors(&self, registry: Arc<ImplementorRegistry>);
}

impl<F> RegisterImplementors for F
where
	F: Fn(Arc<ImplementorRegistry>) + Send + Sync,
{
	fn register_implementors(&self, registry: Arc<ImplementorRegistry>) {
		self(registry)
	}
}

/// Outcome of [`Rendezvous::publish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
	/// The registration hook was invoked with the table.
	Delivered,
	/// No hook was installed; the table now occupies the pending slot.
	Pending,
}

/// Single-slot rendezvous between a table producer and the viewer hook.
///
/// The hook slot is written at most once. The pending slot holds the last
/// table published while no hook was installed.
pub struct Rendezvous {
	hook: OnceLock<Box<dyn RegisterImplementors>>,
	pending: Mutex<Option<Arc<ImplementorRegistry>>>,
}

impl Default for Rendezvous {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Rendezvous {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Rendezvous")
			.field("has_hook", &self.has_hook())
			.field("pending", &self.pending.lock().as_ref().map(|r| r.trait_path().to_string()))
			.finish()
	}
}

impl Rendezvous {
	pub fn new() -> Self {
		Self {
			hook: OnceLock::new(),
			pending: Mutex::new(None),
		}
	}

	pub fn has_hook(&self) -> bool {
		self.hook.get().is_some()
	}

	/// Attaches the viewer hook.
	///
	/// A table already sitting in the pending slot is left there; feed it with
	/// [`Self::deliver_pending`] or collect it with [`Self::take_pending`].
	pub fn install_hook(&self, hook: impl RegisterImplementors + 'static) -> Result<()> {
		// Publishing decides under the same lock, so it observes either the
		// hook or leaves its table pending.
		let _pending = self.pending.lock();
		self.hook.set(Box::new(hook)).map_err(|_| {
			tracing::warn!("Rejected second implementor registration hook");
			RegistryError::HookAlreadyInstalled
		})
	}

	/// Hands `registry` to the hook, or stores it as pending.
	///
	/// Exactly one of the two happens. A pending table from an earlier
	/// publication is overwritten.
	pub fn publish(&self, registry: Arc<ImplementorRegistry>) -> Publication {
		let trait_path = registry.trait_path().to_string();
		let libraries = registry.len();

		let hook = {
			let mut pending = self.pending.lock();
			match self.hook.get() {
				Some(hook) => hook,
				None => {
					if let Some(prev) = pending.replace(registry) {
						tracing::debug!(replaced = prev.trait_path(), "overwrote pending implementor table");
					}
					tracing::debug!(trait_path = %trait_path, libraries, "implementor table pending");
					return Publication::Pending;
				}
			}
		};

		hook.register_implementors(registry);
		tracing::debug!(trait_path = %trait_path, libraries, "implementor table delivered");
		Publication::Delivered
	}

	/// Removes and returns the pending table.
	pub fn take_pending(&self) -> Option<Arc<ImplementorRegistry>> {
		self.pending.lock().take()
	}

	pub fn pending(&self) -> Option<Arc<ImplementorRegistry>> {
		self.pending.lock().clone()
	}

	/// Feeds the pending table to the installed hook.
	///
	/// Returns `false` if there is no hook or nothing is pending; the slot is
	/// left untouched when no hook is installed.
	pub fn deliver_pending(&self) -> bool {
		let Some(hook) = self.hook.get() else {
			return false;
		};
		let Some(registry) = self.take_pending() else {
			return false;
		};
		tracing::debug!(trait_path = registry.trait_path(), "delivering pending implementor table");
		hook.register_implementors(registry);
		true
	}
}

static RENDEZVOUS: LazyLock<Rendezvous> = LazyLock::new(Rendezvous::new);

/// Process-wide rendezvous shared by the loader and the viewer.
pub fn rendezvous() -> &'static Rendezvous {
	&RENDEZVOUS
}
