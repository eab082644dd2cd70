//! Caller-facing authentication options and the signed wire payload.

// self
use crate::_prelude::*;

const DEFAULT_EXPIRATION_TIME: &str = "30 minutes";

/// Options for [`Client::authenticate`](crate::client::Client::authenticate).
///
/// Every field besides `login` carries the provider's documented default.
#[derive(Clone)]
pub struct AuthRequest {
	/// Account name the token is minted for.
	pub login: String,
	/// Restricts the token to read-only calls. Defaults to `false`.
	pub read_only: bool,
	/// Requested token lifetime in the provider's syntax, e.g. `"30 minutes"` or `"2 weeks"`;
	/// one month at most. Defaults to `"30 minutes"`.
	pub expiration_time: String,
	/// Custom name for the token; must be unique per account. Defaults to unlabeled.
	pub label: String,
	/// Allows use of the token from non-whitelisted IPs when `true`. Defaults to `false`.
	pub global_key: bool,
	/// Private key override for this call; falls back to the key configured on the client.
	pub private_key: Option<String>,
}
impl AuthRequest {
	/// Creates a request for the provided login with default options.
	pub fn new(login: impl Into<String>) -> Self {
		Self {
			login: login.into(),
			read_only: false,
			expiration_time: DEFAULT_EXPIRATION_TIME.into(),
			label: String::new(),
			global_key: false,
			private_key: None,
		}
	}

	/// Overrides the read-only flag.
	pub fn read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;

		self
	}

	/// Overrides the requested token lifetime.
	pub fn expiration_time(mut self, expiration_time: impl Into<String>) -> Self {
		self.expiration_time = expiration_time.into();

		self
	}

	/// Labels the token.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();

		self
	}

	/// Overrides the global-key flag.
	pub fn global_key(mut self, global_key: bool) -> Self {
		self.global_key = global_key;

		self
	}

	/// Supplies a private key for this call only.
	pub fn private_key(mut self, key: impl Into<String>) -> Self {
		self.private_key = Some(key.into());

		self
	}

	/// Builds the wire payload carrying the provided nonce.
	pub(crate) fn wire_payload<'a>(&'a self, nonce: &'a str) -> AuthPayload<'a> {
		AuthPayload {
			login: &self.login,
			nonce,
			read_only: self.read_only,
			expiration_time: &self.expiration_time,
			label: &self.label,
			global_key: self.global_key,
		}
	}
}
impl Debug for AuthRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthRequest")
			.field("login", &self.login)
			.field("read_only", &self.read_only)
			.field("expiration_time", &self.expiration_time)
			.field("label", &self.label)
			.field("global_key", &self.global_key)
			.field("private_key_set", &self.private_key.is_some())
			.finish()
	}
}

/// Wire payload for `POST /auth`.
///
/// Field declaration order fixes the serialized byte stream; the signature covers those exact
/// bytes, so reordering fields breaks verification on the provider side.
#[derive(Debug, Serialize)]
pub(crate) struct AuthPayload<'a> {
	pub login: &'a str,
	pub nonce: &'a str,
	pub read_only: bool,
	pub expiration_time: &'a str,
	pub label: &'a str,
	pub global_key: bool,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn payload_serializes_in_wire_order() {
		let request = AuthRequest::new("demo");
		let body = serde_json::to_string(&request.wire_payload("00ff"))
			.expect("Payload should serialize.");

		assert_eq!(
			body,
			"{\"login\":\"demo\",\"nonce\":\"00ff\",\"read_only\":false,\
			 \"expiration_time\":\"30 minutes\",\"label\":\"\",\"global_key\":false}",
		);
	}

	#[test]
	fn builder_overrides_defaults() {
		let request = AuthRequest::new("demo")
			.read_only(true)
			.expiration_time("2 weeks")
			.label("ci")
			.global_key(true);

		assert!(request.read_only);
		assert_eq!(request.expiration_time, "2 weeks");
		assert_eq!(request.label, "ci");
		assert!(request.global_key);
	}

	#[test]
	fn debug_hides_the_private_key() {
		let rendered = format!("{:?}", AuthRequest::new("demo").private_key("secret material"));

		assert!(!rendered.contains("secret material"));
		assert!(rendered.contains("private_key_set: true"));
	}
}
