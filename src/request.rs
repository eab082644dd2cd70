//! Per-call options consumed by the authenticated dispatcher.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Insertion-ordered query parameters with null-aware encoding.
///
/// Entries keep the order they were appended in. A `None` value marks the parameter as absent:
/// it is skipped during encoding but still occupies its slot, so optional facade parameters can
/// be threaded through unconditionally.
#[derive(Clone, Debug, Default)]
pub struct Query(Vec<(String, Option<String>)>);
impl Query {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.0.push((key.into(), Some(value.to_string())));

		self
	}

	/// Appends an optional parameter; `None` is omitted from the encoded string.
	pub fn param_opt(mut self, key: impl Into<String>, value: Option<impl Display>) -> Self {
		self.0.push((key.into(), value.map(|value| value.to_string())));

		self
	}

	/// Replaces every `key` entry with the provided value, appending when absent.
	pub(crate) fn set(&mut self, key: &str, value: impl Into<String>) {
		self.0.retain(|(existing, _)| existing != key);
		self.0.push((key.to_owned(), Some(value.into())));
	}

	/// Encodes the non-null parameters as `key=value` pairs joined by `&`, or `None` when every
	/// entry is null. The caller decides whether a `?` prefix is warranted.
	pub(crate) fn encode(&self) -> Option<String> {
		let mut serializer = form_urlencoded::Serializer::new(String::new());
		let mut any = false;

		for (key, value) in &self.0 {
			if let Some(value) = value {
				serializer.append_pair(key, value);

				any = true;
			}
		}

		any.then(|| serializer.finish())
	}
}

/// Per-call options for [`Client::request`](crate::client::Client::request).
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
	/// Marks the call as billing-affecting; rejected unless the client allows billing.
	/// Defaults to `false`.
	pub billing: bool,
	/// Query parameters, encoded in insertion order. Defaults to empty.
	pub query: Query,
	/// Extra headers; they override the client defaults on key collision. Defaults to empty.
	pub headers: HeaderMap,
	/// JSON body; null-valued object entries are pruned before sending. Defaults to no body.
	pub body: Option<Value>,
}
impl RequestOptions {
	/// Creates options with every default.
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks the call as billing-affecting.
	pub fn billing(mut self, billing: bool) -> Self {
		self.billing = billing;

		self
	}

	/// Replaces the query parameters.
	pub fn query(mut self, query: Query) -> Self {
		self.query = query;

		self
	}

	/// Adds a header, overriding the client default of the same name.
	pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Attaches a JSON body.
	pub fn body(mut self, body: Value) -> Self {
		self.body = Some(body);

		self
	}
}

/// Drops null-valued entries from JSON objects, recursing through object-valued fields.
///
/// Arrays and scalars pass through untouched.
pub(crate) fn prune_nulls(value: Value) -> Value {
	match value {
		Value::Object(map) => Value::Object(
			map.into_iter()
				.filter(|(_, value)| !value.is_null())
				.map(|(key, value)| (key, prune_nulls(value)))
				.collect(),
		),
		other => other,
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn encode_skips_null_entries() {
		let query = Query::new().param("tags", "a").param_opt("region", None::<&str>);

		assert_eq!(query.encode().as_deref(), Some("tags=a"));
	}

	#[test]
	fn encode_returns_none_without_live_entries() {
		assert_eq!(Query::new().encode(), None);
		assert_eq!(Query::new().param_opt("region", None::<&str>).encode(), None);
	}

	#[test]
	fn encode_preserves_insertion_order() {
		let query = Query::new().param("b", 2).param("a", 1).param("c", 3);

		assert_eq!(query.encode().as_deref(), Some("b=2&a=1&c=3"));
	}

	#[test]
	fn set_replaces_existing_entries() {
		let mut query = Query::new().param("test", 0).param("tags", "a");

		query.set("test", "1");

		assert_eq!(query.encode().as_deref(), Some("tags=a&test=1"));
	}

	#[test]
	fn prune_nulls_recurses_through_objects_only() {
		let pruned = prune_nulls(json!({
			"a": 1,
			"b": null,
			"c": { "d": null, "e": 2 },
			"f": [null, 3],
		}));

		assert_eq!(pruned, json!({ "a": 1, "c": { "e": 2 }, "f": [null, 3] }));
	}
}
