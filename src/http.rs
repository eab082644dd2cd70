//! Transport seam between the client and an HTTP stack.
//!
//! The client depends only on [`ApiHttpClient`]; [`ReqwestHttpClient`] is the default
//! implementation. Transports wrap their native failures in [`TransportError`] without
//! reinterpreting them, so callers always see the original source error. No retries, timeouts,
//! or redirect policies are applied here; callers wanting a deadline wrap the call themselves.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Boxed future returned by transport implementations.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Request handed to a transport, with all client policy already applied.
#[derive(Clone, Debug)]
pub struct HttpRequest {
	/// HTTP verb.
	pub method: Method,
	/// Fully assembled request URL, query string included.
	pub url: Url,
	/// Outgoing headers.
	pub headers: HeaderMap,
	/// Serialized JSON body, when present.
	pub body: Option<Vec<u8>>,
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP stacks capable of executing API calls.
///
/// Implementations must be `Send + Sync + 'static` so one client can be shared across tasks, and
/// the returned future must own whatever state it needs so it stays `Send` for the lifetime of
/// the in-flight call.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes the request, resolving to the raw response.
	fn execute(&self, request: HttpRequest) -> BoxFuture<Result<HttpResponse, TransportError>>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> BoxFuture<Result<HttpResponse, TransportError>> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder =
				client.request(request.method, request.url).headers(request.headers);

			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}
