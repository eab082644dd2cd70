//! Client construction, the token exchange, and the authenticated dispatcher.

// crates.io
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	auth::{self, AuthRequest, BearerToken},
	http::{ApiHttpClient, HttpRequest, HttpResponse, ReqwestHttpClient},
	obs::{self, CallKind, CallOutcome, CallSpan},
	request::{self, RequestOptions},
};

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.transip.nl/v6";
/// Environment variable read by [`ClientBuilder::env_private_key`].
pub const PRIVATE_KEY_ENV: &str = "TRANSIP_PRIVATE_KEY";

/// Builder for [`Client`] instances.
///
/// All configuration is explicit; nothing is read from the process environment unless
/// [`env_private_key`](ClientBuilder::env_private_key) is called.
pub struct ClientBuilder {
	base_url: String,
	allow_billing: bool,
	test_mode: bool,
	private_key: Option<String>,
}
impl ClientBuilder {
	/// Creates a builder seeded with the production API origin and conservative defaults:
	/// billing disallowed, test mode off, no private key.
	pub fn new() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			allow_billing: false,
			test_mode: false,
			private_key: None,
		}
	}

	/// Overrides the API origin, e.g. to point at a mock server.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Allows billing-affecting calls from the start.
	pub fn allow_billing(mut self, allow: bool) -> Self {
		self.allow_billing = allow;

		self
	}

	/// Enables test mode from the start; outgoing requests then carry `test=1`.
	pub fn test_mode(mut self, enabled: bool) -> Self {
		self.test_mode = enabled;

		self
	}

	/// Configures the default private key used by [`Client::authenticate`].
	pub fn private_key(mut self, key: impl Into<String>) -> Self {
		self.private_key = Some(key.into());

		self
	}

	/// Sources the default private key from the `TRANSIP_PRIVATE_KEY` environment variable.
	///
	/// The variable is read here, once; an absent variable leaves the key unset and surfaces as
	/// [`Error::MissingKey`] on the first keyless authenticate call.
	pub fn env_private_key(mut self) -> Self {
		if let Ok(key) = std::env::var(PRIVATE_KEY_ENV) {
			self.private_key = Some(key);
		}

		self
	}

	/// Builds a client backed by the default reqwest transport.
	pub fn build(self) -> Result<Client> {
		self.build_with_http_client(ReqwestHttpClient::default())
	}

	/// Builds a client backed by the caller-provided transport.
	pub fn build_with_http_client<C>(self, http_client: impl Into<Arc<C>>) -> Result<Client<C>>
	where
		C: ApiHttpClient,
	{
		let base_url =
			Url::parse(&self.base_url).map_err(|source| Error::InvalidEndpoint { source })?;

		Ok(Client {
			base_url,
			private_key: self.private_key,
			token: RwLock::new(None),
			allow_billing: RwLock::new(self.allow_billing),
			test_mode: RwLock::new(self.test_mode),
			http_client: http_client.into(),
		})
	}
}
impl Default for ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for ClientBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientBuilder")
			.field("base_url", &self.base_url)
			.field("allow_billing", &self.allow_billing)
			.field("test_mode", &self.test_mode)
			.field("private_key_set", &self.private_key.is_some())
			.finish()
	}
}

/// Asynchronous TransIP API client.
///
/// The token, billing-allowed flag, and test-mode flag are the only mutable state. Each is a
/// whole-value slot with last-write-wins semantics: a concurrent [`authenticate`](Client::authenticate)
/// racing in-flight requests replaces the token for later calls only, because every request reads
/// its token snapshot synchronously while building headers and never re-reads it after
/// suspension. No other locking exists, and no call is retried or timed out internally.
pub struct Client<C = ReqwestHttpClient>
where
	C: ?Sized + ApiHttpClient,
{
	base_url: Url,
	private_key: Option<String>,
	token: RwLock<Option<BearerToken>>,
	allow_billing: RwLock<bool>,
	test_mode: RwLock<bool>,
	http_client: Arc<C>,
}
impl Client {
	/// Creates a builder seeded with defaults.
	pub fn builder() -> ClientBuilder {
		ClientBuilder::new()
	}
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns the configured API origin.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Returns a snapshot of the current bearer token.
	pub fn token(&self) -> Option<BearerToken> {
		self.token.read().clone()
	}

	/// Replaces the bearer token with a pre-issued credential, bypassing the token exchange.
	pub fn set_token(&self, token: impl Into<BearerToken>) {
		*self.token.write() = Some(token.into());
	}

	/// Toggles the billing-allowed flag.
	pub fn allow_billing(&self, allow: bool) {
		*self.allow_billing.write() = allow;
	}

	/// Toggles test mode; outgoing requests then carry `test=1`.
	pub fn test_mode(&self, enabled: bool) {
		*self.test_mode.write() = enabled;
	}

	/// Exchanges the signed authentication request for a bearer token.
	///
	/// The token is stored on the client for subsequent requests and also returned. Each call
	/// mints an independent token under a fresh nonce, so callers that retry simply call again;
	/// a stale nonce is never reused.
	pub async fn authenticate(&self, request: AuthRequest) -> Result<BearerToken> {
		const KIND: CallKind = CallKind::Auth;

		let span = CallSpan::new(KIND, "authenticate");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				if request.login.is_empty() {
					return Err(Error::MissingLogin);
				}

				let raw_key = request
					.private_key
					.as_deref()
					.or_else(|| self.private_key.as_deref())
					.ok_or(Error::MissingKey)?;
				let key = auth::normalize_key(raw_key)?;
				let nonce = auth::generate_nonce();
				let signed = auth::sign_request(&request.wire_payload(&nonce), &key)?;
				let url = self.endpoint("auth", None)?;
				let mut headers = HeaderMap::new();

				headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
				headers.insert(
					HeaderName::from_static("signature"),
					HeaderValue::from_str(&signed.signature)
						.map_err(|source| Error::InvalidHeader { source })?,
				);

				let response = self
					.http_client
					.execute(HttpRequest {
						method: Method::POST,
						url,
						headers,
						body: Some(signed.body.into_bytes()),
					})
					.await?;
				let token = decode_auth_response(&response)?;

				*self.token.write() = Some(token.clone());

				Ok(token)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Dispatches an authenticated request against a resource path.
	///
	/// Policy applied before any network I/O: billing-affecting options are rejected while
	/// billing is disallowed, and test mode forces `test=1` into the query. The response body is
	/// decoded as JSON and returned verbatim; resource-level error fields are the caller's
	/// concern. An empty body decodes to JSON null.
	pub async fn request(
		&self,
		path: &str,
		method: Method,
		options: RequestOptions,
	) -> Result<Value> {
		const KIND: CallKind = CallKind::Request;

		let span = CallSpan::new(KIND, "request");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				if options.billing && !*self.allow_billing.read() {
					return Err(Error::BillingNotAllowed);
				}

				let mut query = options.query;

				if *self.test_mode.read() {
					query.set("test", "1");
				}

				let url = self.endpoint(path, query.encode().as_deref())?;
				let mut headers = HeaderMap::new();

				headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

				// Token snapshot; a concurrent authenticate must not swap credentials on a
				// request that already started building.
				if let Some(token) = self.token.read().as_ref() {
					headers.insert(
						AUTHORIZATION,
						HeaderValue::from_str(&format!("Bearer {}", token.expose()))
							.map_err(|source| Error::InvalidHeader { source })?,
					);
				}

				for (name, value) in &options.headers {
					headers.insert(name.clone(), value.clone());
				}

				let body = options
					.body
					.map(|body| serde_json::to_vec(&request::prune_nulls(body)))
					.transpose()
					.map_err(|source| Error::BodySerialize { source })?;
				let response =
					self.http_client.execute(HttpRequest { method, url, headers, body }).await?;

				decode_json_response(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Dispatches a bare GET against a resource path.
	pub async fn get(&self, path: &str) -> Result<Value> {
		self.request(path, Method::GET, RequestOptions::new()).await
	}

	/// Dispatches a GET against a full API URL, stripping the configured base origin when
	/// present. Useful for pagination links returned inside response payloads.
	pub async fn query_url(&self, url: &str) -> Result<Value> {
		let base = self.base_url.as_str().trim_end_matches('/');
		let path = url.strip_prefix(base).map(|rest| rest.trim_start_matches('/')).unwrap_or(url);

		self.get(path).await
	}

	fn endpoint(&self, path: &str, query: Option<&str>) -> Result<Url> {
		let base = self.base_url.as_str().trim_end_matches('/');
		let path = path.trim_start_matches('/');
		let mut raw = format!("{base}/{path}");

		if let Some(query) = query {
			raw.push('?');
			raw.push_str(query);
		}

		Url::parse(&raw).map_err(|source| Error::InvalidEndpoint { source })
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("allow_billing", &*self.allow_billing.read())
			.field("test_mode", &*self.test_mode.read())
			.field("token_set", &self.token.read().is_some())
			.field("private_key_set", &self.private_key.is_some())
			.finish()
	}
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
	token: Option<BearerToken>,
	error: Option<String>,
}

fn decode_auth_response(response: &HttpResponse) -> Result<BearerToken> {
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
	let decoded: AuthResponse = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source, status: Some(response.status) })?;

	if let Some(message) = decoded.error {
		return Err(Error::RemoteAuth { message });
	}

	decoded.token.ok_or(Error::MissingToken)
}

fn decode_json_response(response: &HttpResponse) -> Result<Value> {
	if response.body.is_empty() {
		return Ok(Value::Null);
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source, status: Some(response.status) })
}
