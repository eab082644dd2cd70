//! Typed resource catalogs over the authenticated dispatcher.
//!
//! Every method is a one-line delegation into [`Client::request`](crate::client::Client::request)
//! with a fixed path, verb, and body shape. Billing-affecting operations mark their options
//! accordingly and are rejected locally while billing is disallowed. Response payloads are
//! returned as raw JSON; interpreting resource-level error fields is left to callers.

pub mod colocation;
pub mod domains;
pub mod general;
pub mod haip;
pub mod vps;

pub use colocation::*;
pub use domains::*;
pub use general::*;
pub use haip::*;
pub use vps::*;

// self
use crate::_prelude::*;

/// Cancellation moment accepted by terminating endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CancellationTime {
	/// Terminate at the end of the running contract period.
	#[default]
	End,
	/// Terminate immediately.
	Immediately,
}
impl CancellationTime {
	/// Returns the wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			CancellationTime::End => "end",
			CancellationTime::Immediately => "immediately",
		}
	}
}
impl Display for CancellationTime {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
